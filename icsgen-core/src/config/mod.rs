//! Configuration types for icsgen.

mod calendar_config;
mod global_config;

pub use calendar_config::{CalendarConfig, LineSeparator};
pub use global_config::GlobalConfig;
