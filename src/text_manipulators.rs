use scraper::{ElementRef, Selector};

use crate::error::{TimetableError, TimetableResult};

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>()
}

pub fn selector(css: &str) -> TimetableResult<Selector> {
    Selector::parse(css)
        .map_err(|e| TimetableError::Layout(format!("invalid selector `{css}`: {e}")))
}
