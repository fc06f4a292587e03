use std::fmt;

use scraper::Html;

use crate::{
    error::{TimetableError, TimetableResult},
    text_manipulators::selector,
};

pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Value of the first `input` of the first `form` on the login page.
pub fn extract_token(html: &str) -> TimetableResult<String> {
    let document = Html::parse_document(html);
    let form_selector = selector("form")?;
    let input_selector = selector("input")?;

    document
        .select(&form_selector)
        .next()
        .and_then(|form| form.select(&input_selector).next())
        .and_then(|input| input.value().attr("value"))
        .map(String::from)
        .ok_or_else(|| {
            TimetableError::Layout("login page has no form token input".to_string())
        })
}

pub fn build_form_data(token: String, credentials: &Credentials) -> Vec<(&'static str, String)> {
    vec![
        ("_token", token),
        ("tAccountName", credentials.username.clone()),
        ("tWebPassword", credentials.password.clone()),
        ("action", "login".to_string()),
    ]
}
