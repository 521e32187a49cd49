//! Error types for icsgen.

use std::fmt;

use thiserror::Error;

/// Required fields of a new event, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Subject,
    Description,
    Location,
    Begin,
    Stop,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Subject => "subject",
            Field::Description => "description",
            Field::Location => "location",
            Field::Begin => "begin",
            Field::Stop => "stop",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while building or delivering a calendar.
#[derive(Error, Debug)]
pub enum IcsError {
    #[error("Missing required event field: {0}")]
    MissingField(Field),

    #[error(
        "Recurrence rule frequency must be one of YEARLY, MONTHLY, WEEKLY or DAILY (got '{0}')"
    )]
    InvalidRecurrenceFrequency(String),

    #[error("Recurrence rule 'until' must be a valid date (got '{0}')")]
    InvalidRecurrenceUntil(String),

    #[error("Recurrence rule 'interval' must be an integer (got '{0}')")]
    InvalidRecurrenceInterval(String),

    #[error("Recurrence rule 'count' must be an integer (got '{0}')")]
    InvalidRecurrenceCount(String),

    #[error("Calendar has no events to deliver")]
    EmptyCalendar,

    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for icsgen operations.
pub type IcsResult<T> = Result<T, IcsError>;
