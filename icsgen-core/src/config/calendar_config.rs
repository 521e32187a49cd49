//! Per-calendar output settings.

use serde::Deserialize;

static DEFAULT_FILENAME: &str = "calendar";
static DEFAULT_EXTENSION: &str = ".ics";

fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Line separator used inside records and between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    #[default]
    Lf,
    Crlf,
}

impl LineSeparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::Crlf => "\r\n",
        }
    }
}

/// How a calendar renders and names its document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub separator: LineSeparator,

    /// Suggested file name for delivery, without extension
    #[serde(default = "default_filename")]
    pub filename: String,

    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            separator: LineSeparator::default(),
            filename: default_filename(),
            extension: default_extension(),
        }
    }
}

impl CalendarConfig {
    pub fn with_separator(separator: LineSeparator) -> Self {
        CalendarConfig {
            separator,
            ..Default::default()
        }
    }
}
