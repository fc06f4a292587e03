use log::info;

use crate::{
    calendar::CalendarEvent,
    error::TimetableResult,
    exam::Exam,
    record_builder::{
        FieldRecord, PERSONAL_TIMETABLE_ROWS, TableShape, build_records, build_row_pair_records,
    },
    table_scraper::{extract_rows, flatten_rows},
};

/// Every exam on a personal timetable page, in table order. Each exam is a
/// heading row followed by `name | value` rows. Any malformed record fails
/// the whole page.
pub fn parse_exams(html: &str) -> TimetableResult<Vec<Exam>> {
    let rows = extract_rows(html)?;
    let records = build_row_pair_records(&rows, PERSONAL_TIMETABLE_ROWS)?;
    exams_from_records(&records)
}

/// Same as [`parse_exams`] for a table laid out as flat cell chunks.
pub fn parse_exams_with_shape(html: &str, shape: TableShape) -> TimetableResult<Vec<Exam>> {
    let rows = extract_rows(html)?;
    let cells = flatten_rows(rows);
    let records = build_records(&cells, shape)?;
    exams_from_records(&records)
}

fn exams_from_records(records: &[FieldRecord]) -> TimetableResult<Vec<Exam>> {
    let exams = records
        .iter()
        .map(Exam::from_record)
        .collect::<TimetableResult<Vec<_>>>()?;
    info!("Parsed {} exams from timetable", exams.len());
    Ok(exams)
}

pub fn project_events(exams: &[Exam], portal_url: &str) -> Vec<CalendarEvent> {
    exams
        .iter()
        .map(|exam| CalendarEvent::from_exam(exam, portal_url))
        .collect()
}
