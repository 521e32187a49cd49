pub mod build;
pub mod event;

use std::path::Path;

use anyhow::{Context, Result};
use icsgen_core::{CalendarConfig, GlobalConfig, LineSeparator};

/// Load the global config, from `path` if given.
pub fn load_config(path: Option<&Path>) -> Result<GlobalConfig> {
    let cfg = match path {
        Some(path) => GlobalConfig::load_from(path),
        None => GlobalConfig::load(),
    };

    cfg.context("Failed to load icsgen config")
}

/// Calendar settings from the config, with `--crlf` applied.
pub fn calendar_config(cfg: &GlobalConfig, crlf: bool) -> CalendarConfig {
    let mut calendar = cfg.calendar.clone();
    if crlf {
        calendar.separator = LineSeparator::Crlf;
    }
    calendar
}
