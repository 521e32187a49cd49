//! Global icsgen configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::config::CalendarConfig;
use crate::error::{IcsError, IcsResult};

static DEFAULT_OUTPUT_DIR: &str = ".";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Global configuration at ~/.config/icsgen/config.toml
///
/// Every key can be overridden with an `ICSGEN_` environment variable,
/// e.g. `ICSGEN_SEPARATOR=crlf`.
#[derive(Debug, Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(flatten)]
    pub calendar: CalendarConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            output_dir: default_output_dir(),
            calendar: CalendarConfig::default(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> IcsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| IcsError::Config("Could not determine config directory".into()))?
            .join("icsgen");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file means defaults.
    pub fn load() -> IcsResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> IcsResult<Self> {
        tracing::debug!(path = %path.display(), "loading config");

        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("ICSGEN"))
            .build()
            .map_err(|e| IcsError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| IcsError::Config(e.to_string()))
    }

    /// Output directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }
}
