use std::io::{self, BufRead, Write};

use anyhow::Context;
use examcal::{
    Credentials, ScrapingContext,
    login::{build_form_data, extract_token},
    parse_exams, project_events, write_ics_file,
};

extern crate env_logger;
extern crate log;

use log::LevelFilter;

use log::info;

fn prompt_credentials() -> anyhow::Result<Credentials> {
    print!("Username: ");
    io::stdout().flush()?;
    let mut username = String::new();
    io::stdin()
        .lock()
        .read_line(&mut username)
        .context("failed to read username")?;
    let username = username.trim_end_matches(['\r', '\n']).to_string();

    let password = rpassword::prompt_password("Password: ").context("failed to read password")?;
    Ok(Credentials { username, password })
}

async fn fetch_timetable(
    context: &ScrapingContext,
    credentials: &Credentials,
) -> anyhow::Result<String> {
    let url = &context.scraping_config.timetable_url;

    let login_page = context
        .request_client
        .fetch_url_body(url)
        .await
        .context("failed to fetch login page")?;
    let token = extract_token(&login_page)?;
    info!("Fetched login token");

    let form = build_form_data(token, credentials);
    let timetable = context
        .request_client
        .post_form_body(url, &form)
        .await
        .context("failed to post login form")?;
    info!("Logged in as {}", credentials.username);
    Ok(timetable)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads `.env`, which may set RUST_LOG.
    let context = ScrapingContext::new()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let credentials = prompt_credentials()?;

    let html = fetch_timetable(&context, &credentials).await?;
    let exams = parse_exams(&html).context("failed to read exam timetable")?;
    for exam in &exams {
        info!("{}", exam);
    }

    let config = &context.scraping_config;
    let events = project_events(&exams, &config.timetable_url);
    write_ics_file(&config.output_file, &events, &config.calendar_creator)?;
    info!(
        "Wrote {} exams to {}",
        events.len(),
        config.output_file.display()
    );
    Ok(())
}
