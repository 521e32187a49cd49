//! Event input types.
//!
//! A `NewEvent` is never stored: the builder turns it into a `FormattedEvent`
//! and only that text is kept by the calendar.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;

use crate::error::{Field, IcsError, IcsResult};
use crate::recurrence::Recurrence;

/// Naive date-time layouts, interpreted as UTC.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%SZ",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y"];

/// A point in time as given by the caller: either a bare date or a UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum EventTime {
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl EventTime {
    /// The calendar date in UTC.
    pub fn utc_date(&self) -> NaiveDate {
        match self {
            EventTime::Date(d) => *d,
            EventTime::DateTime(dt) => dt.date_naive(),
        }
    }

    /// The instant in UTC. Bare dates are taken as midnight.
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            EventTime::Date(d) => d.and_time(NaiveTime::MIN).and_utc(),
            EventTime::DateTime(dt) => *dt,
        }
    }

    /// Same kind of value, one calendar day later.
    pub fn next_day(&self) -> EventTime {
        match self {
            EventTime::Date(d) => EventTime::Date(*d + Duration::days(1)),
            EventTime::DateTime(dt) => EventTime::DateTime(*dt + Duration::days(1)),
        }
    }

    /// `YYYYMMDD`
    pub fn format_date(&self) -> String {
        self.utc_date().format("%Y%m%d").to_string()
    }

    /// `YYYYMMDDHHMMSSZ`
    pub fn format_utc(&self) -> String {
        self.to_utc().format("%Y%m%d%H%M%SZ").to_string()
    }
}

impl FromStr for EventTime {
    type Err = IcsError;

    fn from_str(s: &str) -> IcsResult<Self> {
        let input = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(EventTime::DateTime(dt.with_timezone(&Utc)));
        }

        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(EventTime::DateTime(dt.and_utc()));
            }
        }

        for format in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(input, format) {
                return Ok(EventTime::Date(d));
            }
        }

        Err(IcsError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for EventTime {
    type Error = IcsError;

    fn try_from(value: String) -> IcsResult<Self> {
        value.parse()
    }
}

impl From<NaiveDate> for EventTime {
    fn from(date: NaiveDate) -> Self {
        EventTime::Date(date)
    }
}

impl From<DateTime<Utc>> for EventTime {
    fn from(dt: DateTime<Utc>) -> Self {
        EventTime::DateTime(dt)
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EventTime::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

/// Fields describing one event to be added to a calendar.
///
/// Text fields and dates are optional so that an absent value can be
/// reported as `MissingField` instead of failing at construction time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEvent {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub begin: Option<EventTime>,
    pub stop: Option<EventTime>,
    #[serde(default, alias = "is_all_day")]
    pub all_day: bool,
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
}

impl NewEvent {
    pub fn new(
        subject: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        begin: impl Into<EventTime>,
        stop: impl Into<EventTime>,
    ) -> Self {
        NewEvent {
            subject: Some(subject.into()),
            description: Some(description.into()),
            location: Some(location.into()),
            begin: Some(begin.into()),
            stop: Some(stop.into()),
            all_day: false,
            recurrence: None,
        }
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    pub fn recurrence(mut self, recurrence: impl Into<Recurrence>) -> Self {
        self.recurrence = Some(recurrence.into());
        self
    }

    /// Check that every required field is present, reporting the first absent one.
    pub(crate) fn required(&self) -> IcsResult<RequiredFields<'_>> {
        Ok(RequiredFields {
            subject: self.subject.as_deref().ok_or(IcsError::MissingField(Field::Subject))?,
            description: self
                .description
                .as_deref()
                .ok_or(IcsError::MissingField(Field::Description))?,
            location: self.location.as_deref().ok_or(IcsError::MissingField(Field::Location))?,
            begin: self.begin.ok_or(IcsError::MissingField(Field::Begin))?,
            stop: self.stop.ok_or(IcsError::MissingField(Field::Stop))?,
        })
    }
}

/// Borrowed view of a `NewEvent` whose required fields are all present.
pub(crate) struct RequiredFields<'a> {
    pub subject: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub begin: EventTime,
    pub stop: EventTime,
}
