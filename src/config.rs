use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

pub const DEFAULT_TIMETABLE_URL: &str = "https://exams.unimelb.edu.au/timetable/personal.php?db=8";
pub const DEFAULT_OUTPUT_FILE: &str = "outfile.ics";
pub const DEFAULT_CALENDAR_CREATOR: &str = "UNIMELB EXAM TIMETABLE GENERATOR";

/// The env vars read for a run. All optional.
#[derive(Debug, Deserialize)]
pub struct ScrapingEnv {
    timetable_url: Option<String>,
    output_file: Option<PathBuf>,
    calendar_creator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapingConfig {
    /// Login and timetable endpoint, also stamped on every event.
    pub timetable_url: String,
    pub output_file: PathBuf,
    pub calendar_creator: String,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env()?;
        Ok(Self::from_env(scraping_env))
    }

    fn from_env(env: ScrapingEnv) -> Self {
        Self {
            timetable_url: env
                .timetable_url
                .unwrap_or_else(|| DEFAULT_TIMETABLE_URL.to_string()),
            output_file: env
                .output_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            calendar_creator: env
                .calendar_creator
                .unwrap_or_else(|| DEFAULT_CALENDAR_CREATOR.to_string()),
        }
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let env: ScrapingEnv = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        let config = ScrapingConfig::from_env(env);
        assert_eq!(config.timetable_url, DEFAULT_TIMETABLE_URL);
        assert_eq!(config.output_file, PathBuf::from("outfile.ics"));
        assert_eq!(config.calendar_creator, DEFAULT_CALENDAR_CREATOR);
    }

    #[test]
    fn env_overrides_defaults() {
        let env: ScrapingEnv = envy::from_iter(vec![
            (
                "TIMETABLE_URL".to_string(),
                "https://example.edu/timetable".to_string(),
            ),
            ("OUTPUT_FILE".to_string(), "exams.ics".to_string()),
            ("CALENDAR_CREATOR".to_string(), "Me".to_string()),
        ])
        .unwrap();
        let config = ScrapingConfig::from_env(env);
        assert_eq!(config.timetable_url, "https://example.edu/timetable");
        assert_eq!(config.output_file, PathBuf::from("exams.ics"));
        assert_eq!(config.calendar_creator, "Me");
    }
}
