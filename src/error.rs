use thiserror::Error;

/// Errors raised while turning a timetable page into exams.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimetableError {
    /// The page does not have the fixed table shape we expect.
    #[error("Layout error: {0}")]
    Layout(String),

    /// A field's text does not match its expected format.
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type TimetableResult<T> = Result<T, TimetableError>;
