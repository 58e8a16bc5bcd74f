use log::LevelFilter;

use crate::args::InitBlock;
use crate::param::{DEFAULT_LOG_LEVEL, LOG_ENV};

/// Runtime settings, read from the process environment at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    /// Builds the configuration from the environment of `block`.
    ///
    /// Unset or unparsable values keep their defaults.
    pub fn from_env(block: &InitBlock) -> Self {
        let value = block.var(LOG_ENV).and_then(|v| v.to_str().ok());
        Self::from_log_value(value)
    }

    fn from_log_value(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(level) = value.and_then(|v| v.parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }
}
