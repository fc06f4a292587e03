//! Parsing of free-text duration phrases such as `3 hours` or
//! `1 hour and 30 minutes` into a number of seconds.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{TimetableError, TimetableResult};

static QUANTITY_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*([A-Za-z]+)").expect("valid regex"));
static CONNECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:\s|,|and|plus)*$").expect("valid regex"));
static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+):)?(\d+):(\d{2})$").expect("valid regex"));
static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?$").expect("valid regex"));

fn unit_seconds(unit: &str) -> Option<f64> {
    let seconds = match unit.to_lowercase().as_str() {
        "w" | "wk" | "wks" | "week" | "weeks" => 604_800,
        "d" | "dy" | "dys" | "day" | "days" => 86_400,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600,
        "m" | "min" | "mins" | "minute" | "minutes" => 60,
        "s" | "sec" | "secs" | "second" | "seconds" => 1,
        _ => return None,
    };
    Some(seconds as f64)
}

fn parse_error(phrase: &str) -> TimetableError {
    TimetableError::Parse(format!("unrecognised duration `{phrase}`"))
}

fn parse_number(text: &str, phrase: &str) -> TimetableResult<f64> {
    text.parse::<f64>().map_err(|_| parse_error(phrase))
}

/// Drops any fractional second.
fn whole_seconds(secs: f64, phrase: &str) -> TimetableResult<u64> {
    if !secs.is_finite() || secs >= u64::MAX as f64 {
        return Err(parse_error(phrase));
    }
    Ok(secs.trunc() as u64)
}

/// Total seconds described by `phrase`.
///
/// Accepts quantity/unit pairs joined by whitespace, commas, `and` or `plus`
/// (`3 hours`, `1h 30m`, `1.5 hours`), a bare number of seconds, or a clock
/// form `M:SS` / `H:MM:SS`.
pub fn parse_duration_secs(phrase: &str) -> TimetableResult<u64> {
    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return Err(parse_error(phrase));
    }

    if BARE_NUMBER.is_match(trimmed) {
        return whole_seconds(parse_number(trimmed, phrase)?, phrase);
    }

    if let Some(caps) = CLOCK.captures(trimmed) {
        let field = |i: usize| -> TimetableResult<u64> {
            caps.get(i)
                .map_or(Ok(0), |m| m.as_str().parse::<u64>())
                .map_err(|_| parse_error(phrase))
        };
        let (hours, minutes, seconds) = (field(1)?, field(2)?, field(3)?);
        return hours
            .checked_mul(3_600)
            .and_then(|secs| secs.checked_add(minutes.checked_mul(60)?))
            .and_then(|secs| secs.checked_add(seconds))
            .ok_or_else(|| parse_error(phrase));
    }

    let mut total = 0.0;
    let mut last_end = 0;
    let mut pairs = 0;
    for caps in QUANTITY_UNIT.captures_iter(trimmed) {
        let (Some(whole), Some(quantity), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            return Err(parse_error(phrase));
        };
        if !CONNECTOR.is_match(&trimmed[last_end..whole.start()]) {
            return Err(parse_error(phrase));
        }
        let multiplier = unit_seconds(unit.as_str()).ok_or_else(|| parse_error(phrase))?;
        total += parse_number(quantity.as_str(), phrase)? * multiplier;
        last_end = whole.end();
        pairs += 1;
    }

    if pairs == 0 || !CONNECTOR.is_match(&trimmed[last_end..]) {
        return Err(parse_error(phrase));
    }
    whole_seconds(total, phrase)
}
