//! VEVENT generation.
//!
//! Records are written line by line in a fixed order rather than through a
//! general-purpose iCalendar serializer, so the output is byte-for-byte
//! predictable.

mod escape;
mod generate;

pub use escape::escape_text;
pub use generate::{FormattedEvent, build_event};
