use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, TimeZone};

use crate::{
    duration_parser::parse_duration_secs,
    error::{TimetableError, TimetableResult},
    record_builder::FieldRecord,
};

/// Timetable times are local to the portal, always UTC+10.
pub const PORTAL_UTC_OFFSET_SECS: i32 = 10 * 3600;

const DATE_TIME_FORMAT: &str = "%d/%m/%Y @ %I:%M%p";

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One scheduled exam from the personal timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exam {
    pub unit: String,
    pub subject: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    /// Writing plus reading time, truncated to whole minutes.
    pub duration_minutes: i64,
    pub venue: String,
    pub seat: String,
    pub conditions: String,
}

impl Exam {
    pub fn from_record(record: &FieldRecord) -> TimetableResult<Self> {
        let start = parse_start(field(record, "Date")?, field(record, "Time")?)?;
        let (unit, subject) = split_exam_title(field(record, "Exam")?)?;

        let writing_secs = parse_duration_secs(field(record, "Writing Time")?)?;
        let reading_secs = parse_duration_secs(field(record, "Reading Time")?)?;
        let total_secs = writing_secs
            .checked_add(reading_secs)
            .ok_or_else(|| TimetableError::Parse("exam duration overflows".to_string()))?;
        let duration_minutes = i64::try_from(total_secs / 60)
            .map_err(|_| TimetableError::Parse("exam duration overflows".to_string()))?;

        let end = TimeDelta::try_minutes(duration_minutes)
            .and_then(|delta| start.checked_add_signed(delta))
            .ok_or_else(|| {
                TimetableError::Parse(format!("exam end out of range for {unit} at {start}"))
            })?;

        Ok(Exam {
            unit,
            subject,
            start,
            end,
            duration_minutes,
            venue: field(record, "Venue")?.to_string(),
            seat: field(record, "Your Seat")?.to_string(),
            conditions: field(record, "Exam Conditions")?.to_string(),
        })
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} to {} for {} mins",
            self.unit, self.start, self.end, self.duration_minutes
        )
    }
}

fn field<'a>(record: &'a FieldRecord, name: &str) -> TimetableResult<&'a str> {
    record
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| TimetableError::Layout(format!("record is missing field `{name}`")))
}

/// `date` is `<Weekday> DD/MM/YYYY`, `time` is `H:MMam`/`H:MMpm`. The weekday
/// must be a full weekday name (any case) but is not checked against the date.
fn parse_start(date: &str, time: &str) -> TimetableResult<DateTime<FixedOffset>> {
    let bad_date = || TimetableError::Parse(format!("unrecognised exam date/time `{date} @ {time}`"));

    let mut tokens = date.split_whitespace();
    let (Some(weekday), Some(day), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(bad_date());
    };
    if !WEEKDAYS.iter().any(|name| name.eq_ignore_ascii_case(weekday)) {
        return Err(bad_date());
    }

    let naive = NaiveDateTime::parse_from_str(&format!("{day} @ {time}"), DATE_TIME_FORMAT)
        .map_err(|_| bad_date())?;
    let offset = FixedOffset::east_opt(PORTAL_UTC_OFFSET_SECS).ok_or_else(bad_date)?;
    offset.from_local_datetime(&naive).single().ok_or_else(bad_date)
}

/// `CHEM10009 Chemistry for BioSciences` -> (`CHEM10009`, `Chemistry for BioSciences`).
fn split_exam_title(title: &str) -> TimetableResult<(String, String)> {
    let mut tokens = title.split_whitespace();
    let unit = tokens.next();
    let subject = tokens.collect::<Vec<_>>().join(" ");
    match unit {
        Some(unit) if !subject.is_empty() => Ok((unit.to_string(), subject)),
        _ => Err(TimetableError::Parse(format!(
            "exam title `{title}` needs a unit code and a subject name"
        ))),
    }
}
