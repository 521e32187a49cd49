//! Building blocks for iCalendar (.ics) documents.
//!
//! - `NewEvent` describes one event; `build_event` turns it into a `VEVENT` record
//! - `Calendar` collects records in order and renders the `VCALENDAR` document
//! - `DocumentSink` is where a finished document is delivered

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod recurrence;
pub mod sink;

pub use calendar::Calendar;
pub use config::{CalendarConfig, GlobalConfig, LineSeparator};
pub use error::{Field, IcsError, IcsResult};
pub use event::{EventTime, NewEvent};
pub use ics::{FormattedEvent, build_event, escape_text};
pub use recurrence::{Frequency, Recurrence, RecurrenceRule, ValidRule};
pub use sink::{DocumentSink, FileSink, WriterSink};
