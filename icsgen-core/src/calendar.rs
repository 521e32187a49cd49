//! Calendar assembly.

use tracing::{debug, warn};

use crate::config::CalendarConfig;
use crate::error::{IcsError, IcsResult};
use crate::event::NewEvent;
use crate::ics::{FormattedEvent, build_event};
use crate::sink::DocumentSink;

const HEADER: [&str; 2] = ["BEGIN:VCALENDAR", "VERSION:2.0"];
const FOOTER: &str = "END:VCALENDAR";

/// An ordered, append-only collection of formatted events.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    config: CalendarConfig,
    events: Vec<FormattedEvent>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CalendarConfig) -> Self {
        Calendar {
            config,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Events in the order they were added.
    pub fn events(&self) -> &[FormattedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn append(&mut self, event: FormattedEvent) {
        self.events.push(event);
        debug!(count = self.events.len(), "event appended");
    }

    /// Build an event with this calendar's separator and append it.
    ///
    /// On failure the calendar is left untouched.
    pub fn add_event(&mut self, event: &NewEvent) -> IcsResult<FormattedEvent> {
        let formatted = build_event(event, self.config.separator).inspect_err(|e| {
            warn!(error = %e, "event rejected");
        })?;

        self.append(formatted.clone());
        Ok(formatted)
    }

    /// The full VCALENDAR document. An empty calendar still renders header and footer.
    pub fn calendar(&self) -> String {
        let sep = self.config.separator.as_str();
        let body = self
            .events
            .iter()
            .map(FormattedEvent::as_str)
            .collect::<Vec<_>>()
            .join(sep);

        format!("{}{sep}{body}{sep}{FOOTER}", HEADER.join(sep))
    }

    /// Render the document and hand it to `sink`.
    ///
    /// `filename` and `extension` fall back to the calendar's config.
    /// Returns the delivered document.
    pub fn deliver(
        &self,
        sink: &mut dyn DocumentSink,
        filename: Option<&str>,
        extension: Option<&str>,
    ) -> IcsResult<String> {
        if self.is_empty() {
            return Err(IcsError::EmptyCalendar);
        }

        let filename = filename.unwrap_or(&self.config.filename);
        let extension = extension.unwrap_or(&self.config.extension);
        let document = self.calendar();

        sink.deliver(&document, filename, extension)?;
        debug!(filename, extension, events = self.len(), "calendar delivered");

        Ok(document)
    }
}
