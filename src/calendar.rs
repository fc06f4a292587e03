//! Projection of exams into calendar events and `.ics` generation.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Utc};
use icalendar::{Calendar, Component, EventLike};

use crate::exam::Exam;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    pub title: String,
    pub begin: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub location: String,
    pub description: String,
    pub url: String,
}

impl CalendarEvent {
    pub fn from_exam(exam: &Exam, portal_url: &str) -> Self {
        CalendarEvent {
            uid: format!("{}-{}@examcal", exam.unit, exam.start.format("%Y%m%dT%H%M%z")),
            title: format!("{} {} Exam", exam.unit, exam.subject),
            begin: exam.start,
            end: exam.end,
            location: exam.venue.clone(),
            description: format!(
                "Seat: {} \r\nConditions: {} \r\nDuration: {} minutes \r\nVenue: {}",
                exam.seat, exam.conditions, exam.duration_minutes, exam.venue
            ),
            url: portal_url.to_string(),
        }
    }
}

/// Builds a calendar holding one VEVENT per event, in order.
pub fn generate_ics(events: &[CalendarEvent], creator: &str) -> String {
    let mut cal = Calendar::new();
    cal.name(creator);

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid);
        ics_event.summary(&event.title);
        // iCalendar has no fixed offsets without a VTIMEZONE; UTC keeps the instant.
        ics_event.starts(event.begin.with_timezone(&Utc));
        ics_event.ends(event.end.with_timezone(&Utc));
        ics_event.location(&event.location);
        ics_event.description(&event.description);
        ics_event.add_property("URL", &event.url);
        cal.push(ics_event.done());
    }

    cal.done().to_string()
}

/// Writes the whole calendar to `path` in one go, replacing any previous file.
pub fn write_ics_file(path: &Path, events: &[CalendarEvent], creator: &str) -> anyhow::Result<()> {
    let ics = generate_ics(events, creator);
    std::fs::write(path, ics)
        .with_context(|| format!("failed to write calendar to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const URL: &str = "https://exams.unimelb.edu.au/timetable/personal.php?db=8";

    fn make_test_exam() -> Exam {
        let aest = FixedOffset::east_opt(10 * 3600).unwrap();
        Exam {
            unit: "CHEM10009".to_string(),
            subject: "Chemistry for BioSciences".to_string(),
            start: aest.with_ymd_and_hms(2019, 6, 18, 13, 15, 0).unwrap(),
            end: aest.with_ymd_and_hms(2019, 6, 18, 16, 30, 0).unwrap(),
            duration_minutes: 195,
            venue: "Royal Exhibition Building West".to_string(),
            seat: "695".to_string(),
            conditions: "CLOSED book exam".to_string(),
        }
    }

    #[test]
    fn projects_exam_fields() {
        let exam = make_test_exam();
        let event = CalendarEvent::from_exam(&exam, URL);
        assert_eq!(event.title, "CHEM10009 Chemistry for BioSciences Exam");
        assert_eq!(event.location, "Royal Exhibition Building West");
        assert_eq!(event.url, URL);
        assert_eq!(
            event.description,
            "Seat: 695 \r\nConditions: CLOSED book exam \r\nDuration: 195 minutes \r\nVenue: Royal Exhibition Building West"
        );
    }

    #[test]
    fn times_pass_through_unchanged() {
        let exam = make_test_exam();
        let event = CalendarEvent::from_exam(&exam, URL);
        assert_eq!(event.begin, exam.start);
        assert_eq!(event.end, exam.end);
        assert_eq!(event.begin.offset(), exam.start.offset());
        assert_eq!(event.begin.to_rfc3339(), "2019-06-18T13:15:00+10:00");
    }

    #[test]
    fn uid_is_stable() {
        let exam = make_test_exam();
        let a = CalendarEvent::from_exam(&exam, URL);
        let b = CalendarEvent::from_exam(&exam, URL);
        assert_eq!(a.uid, b.uid);
        assert_eq!(a.uid, "CHEM10009-20190618T1315+1000@examcal");
    }

    #[test]
    fn ics_contains_one_event_per_exam() {
        let exam = make_test_exam();
        let mut other = make_test_exam();
        other.unit = "MAST10006".to_string();
        let events = vec![
            CalendarEvent::from_exam(&exam, URL),
            CalendarEvent::from_exam(&other, URL),
            CalendarEvent::from_exam(&exam, URL),
        ];
        let ics = generate_ics(&events, "UNIMELB EXAM TIMETABLE GENERATOR");
        let count = ics.lines().filter(|l| l.starts_with("BEGIN:VEVENT")).count();
        assert_eq!(count, 3, "ICS:\n{}", ics);
    }

    #[test]
    fn ics_uses_utc_instants() {
        let event = CalendarEvent::from_exam(&make_test_exam(), URL);
        let ics = generate_ics(&[event], "creator");
        assert!(ics.contains("DTSTART:20190618T031500Z"), "ICS:\n{}", ics);
        assert!(ics.contains("DTEND:20190618T063000Z"), "ICS:\n{}", ics);
        assert!(ics.contains("SUMMARY:CHEM10009 Chemistry for BioSciences Exam"));
        assert!(ics.contains("UID:CHEM10009-20190618T1315+1000@examcal"));
    }

    #[test]
    fn empty_calendar_has_no_events() {
        let ics = generate_ics(&[], "creator");
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }
}
