//! VEVENT record generation.

use std::fmt;

use crate::config::LineSeparator;
use crate::error::IcsResult;
use crate::event::NewEvent;
use crate::ics::escape::escape_text;
use crate::recurrence::Recurrence;

/// Position of the RRULE line, right after DESCRIPTION.
const RRULE_INDEX: usize = 3;

/// A finished VEVENT block. Lines are joined with the separator it was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedEvent(String);

impl FormattedEvent {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for FormattedEvent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormattedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate and format one event.
///
/// Nothing is produced unless every required field is present and the
/// recurrence rule, if any, is valid.
pub fn build_event(event: &NewEvent, separator: LineSeparator) -> IcsResult<FormattedEvent> {
    let fields = event.required()?;

    let rrule = event
        .recurrence
        .as_ref()
        .map(Recurrence::to_rrule_line)
        .transpose()?;

    // All-day end dates are exclusive, hence the extra day
    let (dtstart, dtend) = if event.all_day {
        (
            format!("DTSTART;VALUE=DATE:{}", fields.begin.format_date()),
            format!("DTEND;VALUE=DATE:{}", fields.stop.next_day().format_date()),
        )
    } else {
        (
            format!("DTSTART:{}", fields.begin.format_utc()),
            format!("DTEND:{}", fields.stop.format_utc()),
        )
    };

    let mut lines = vec![
        "BEGIN:VEVENT".to_string(),
        "CLASS:PUBLIC".to_string(),
        format!("DESCRIPTION:{}", escape_text(fields.description)),
        dtstart,
        dtend,
        format!("LOCATION:{}", escape_text(fields.location)),
        format!("SUMMARY;LANGUAGE=en-us:{}", escape_text(fields.subject)),
        "END:VEVENT".to_string(),
    ];

    if let Some(rrule) = rrule {
        lines.insert(RRULE_INDEX, rrule);
    }

    Ok(FormattedEvent(lines.join(separator.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Field, IcsError};
    use crate::recurrence::RecurrenceRule;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn make_test_event() -> NewEvent {
        NewEvent::new(
            "Standup",
            "Daily sync",
            "Room 4",
            Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 20, 15, 15, 0).unwrap(),
        )
    }

    fn christmas() -> NewEvent {
        let day = NaiveDate::from_ymd_opt(2013, 12, 25).unwrap();
        NewEvent::new(
            "Christmas",
            "Christian holiday celebrating the birth of Jesus Christ",
            "Bethlehem",
            day,
            day,
        )
        .all_day(true)
    }

    const TAGS: [&str; 8] = [
        "BEGIN:VEVENT",
        "CLASS:PUBLIC",
        "DESCRIPTION:",
        "DTSTART",
        "DTEND",
        "LOCATION:",
        "SUMMARY;LANGUAGE=en-us:",
        "END:VEVENT",
    ];

    #[test]
    fn test_timed_event_has_eight_lines_in_order() {
        let ics = build_event(&make_test_event(), LineSeparator::Lf).unwrap();
        let lines: Vec<&str> = ics.as_str().split('\n').collect();

        assert_eq!(lines.len(), 8, "Unexpected line count. ICS:\n{}", ics);
        for (line, tag) in lines.iter().zip(TAGS) {
            assert!(line.starts_with(tag), "Expected '{}' line, got '{}'", tag, line);
        }
    }

    #[test]
    fn test_timed_event_uses_utc_timestamps() {
        let ics = build_event(&make_test_event(), LineSeparator::Lf).unwrap();

        assert!(
            ics.as_str().contains("\nDTSTART:20250320150000Z\n"),
            "DTSTART should be a UTC timestamp. ICS:\n{}",
            ics
        );
        assert!(
            ics.as_str().contains("\nDTEND:20250320151500Z\n"),
            "DTEND should be a UTC timestamp. ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_all_day_event_adds_one_day_to_end() {
        let ics = build_event(&christmas(), LineSeparator::Lf).unwrap();

        assert_eq!(
            ics.as_str(),
            "BEGIN:VEVENT\n\
             CLASS:PUBLIC\n\
             DESCRIPTION:Christian holiday celebrating the birth of Jesus Christ\n\
             DTSTART;VALUE=DATE:20131225\n\
             DTEND;VALUE=DATE:20131226\n\
             LOCATION:Bethlehem\n\
             SUMMARY;LANGUAGE=en-us:Christmas\n\
             END:VEVENT"
        );
    }

    #[test]
    fn test_all_day_event_from_datetime_uses_utc_date() {
        let mut event = make_test_event().all_day(true);
        event.begin = Some("2025-03-20T23:30:00-02:00".parse().unwrap());
        event.stop = Some("2025-03-21T01:00:00Z".parse().unwrap());

        let ics = build_event(&event, LineSeparator::Lf).unwrap();

        assert!(ics.as_str().contains("DTSTART;VALUE=DATE:20250321"), "ICS:\n{}", ics);
        assert!(ics.as_str().contains("DTEND;VALUE=DATE:20250322"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_rrule_is_inserted_after_description() {
        let event = christmas().recurrence(RecurrenceRule::new("WEEKLY").interval(2).count(10));
        let ics = build_event(&event, LineSeparator::Lf).unwrap();
        let lines: Vec<&str> = ics.as_str().lines().collect();

        assert_eq!(lines.len(), 9, "Unexpected line count. ICS:\n{}", ics);
        assert!(lines[2].starts_with("DESCRIPTION:"));
        assert_eq!(lines[3], "RRULE:FREQ=WEEKLY;INTERVAL=2;COUNT=10");
        assert!(lines[4].starts_with("DTSTART"));
    }

    #[test]
    fn test_raw_rrule_line_is_verbatim() {
        let event = make_test_event().recurrence("RRULE:FREQ=DAILY;BYDAY=MO,TU");
        let ics = build_event(&event, LineSeparator::Lf).unwrap();

        assert_eq!(ics.as_str().lines().nth(3), Some("RRULE:FREQ=DAILY;BYDAY=MO,TU"));
    }

    #[test]
    fn test_crlf_separator() {
        let ics = build_event(&make_test_event(), LineSeparator::Crlf).unwrap();

        assert!(ics.as_str().starts_with("BEGIN:VEVENT\r\nCLASS:PUBLIC\r\n"));
        assert_eq!(ics.as_str().matches("\r\n").count(), 7);
        assert!(!ics.as_str().ends_with('\n'));
    }

    #[test]
    fn test_text_fields_are_escaped() {
        let mut event = make_test_event();
        event.description = Some("Bring snacks, drinks; and\nchairs".to_string());
        event.location = Some("Hall A, 2nd floor".to_string());
        event.subject = Some("Q&A; retro".to_string());

        let ics = build_event(&event, LineSeparator::Lf).unwrap();

        assert!(
            ics.as_str()
                .contains("DESCRIPTION:Bring snacks\\, drinks\\; and\\nchairs\n"),
            "ICS:\n{}",
            ics
        );
        assert!(ics.as_str().contains("LOCATION:Hall A\\, 2nd floor\n"));
        assert!(ics.as_str().contains("SUMMARY;LANGUAGE=en-us:Q&A\\; retro\n"));
        assert_eq!(ics.as_str().lines().count(), 8);
    }

    #[test]
    fn test_missing_field_fails() {
        let mut event = make_test_event();
        event.begin = None;

        assert!(matches!(
            build_event(&event, LineSeparator::Lf),
            Err(IcsError::MissingField(Field::Begin))
        ));
    }

    #[test]
    fn test_invalid_rule_fails_even_with_valid_fields() {
        let event = make_test_event().recurrence(RecurrenceRule::new("FORTNIGHTLY"));

        assert!(matches!(
            build_event(&event, LineSeparator::Lf),
            Err(IcsError::InvalidRecurrenceFrequency(_))
        ));
    }
}
