pub mod calendar;
pub mod config;
pub mod duration_parser;
pub mod error;
pub mod exam;
pub mod login;
pub mod record_builder;
pub mod requests;
pub mod scraping_context;
pub mod table_scraper;
pub mod text_manipulators;
pub mod timetable;

pub use calendar::{CalendarEvent, generate_ics, write_ics_file};
pub use error::{TimetableError, TimetableResult};
pub use exam::Exam;
pub use login::Credentials;
pub use record_builder::{
    FieldRecord, PERSONAL_TIMETABLE_ROWS, RowPairShape, TIMETABLE_SHAPE, TableShape,
};
pub use scraping_context::ScrapingContext;
pub use timetable::{parse_exams, parse_exams_with_shape, project_events};
