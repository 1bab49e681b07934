//! Host configuration resolved from the environment.
//!
//! # Invariants
//! - A missing or blank variable falls back to its default; it is never an error.
//! - Level and path validation are left to `taskdeck_core::logging`.

use log::LevelFilter;
use taskdeck_core::{default_log_level, parse_level, LogTarget};

pub const LOG_LEVEL_ENV: &str = "TASKDECK_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TASKDECK_LOG_DIR";

/// Settings the binary needs before the board starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Requested level name. With no `log_dir` it is capped at `warn`.
    pub log_level: Option<String>,
    /// Absolute directory for rotating log files; `None` logs to stderr.
    pub log_dir: Option<String>,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            log_level: non_blank(LOG_LEVEL_ENV),
            log_dir: non_blank(LOG_DIR_ENV),
        }
    }

    /// Effective level and target for `init_logging`.
    pub fn log_setup(&self) -> Result<(LevelFilter, LogTarget), String> {
        let requested = match &self.log_level {
            Some(level) => parse_level(level)?,
            None => default_log_level(),
        };
        let target = match &self.log_dir {
            Some(dir) => LogTarget::dir(dir)?,
            None => LogTarget::Stderr,
        };
        Ok((target.effective_level(requested), target))
    }
}
