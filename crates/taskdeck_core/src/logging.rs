//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend exactly once per process.
//! - Route diagnostics either to size-rotated files or to stderr.
//! - Record panics as sanitized metadata-only log lines.
//!
//! # Invariants
//! - Initialization is idempotent for an identical level and target.
//! - A second call with a different level or target is rejected.
//! - Stderr never carries more than warnings, so it cannot drown board output.
//! - Initialization never panics.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "taskdeck";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;
const STDERR_MAX_LEVEL: LevelFilter = LevelFilter::Warn;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Rotating files under an absolute directory.
    Dir(PathBuf),
    /// Unbuffered stderr, for interactive hosts without a log directory.
    Stderr,
}

impl LogTarget {
    /// Builds a file target from user text; the path must be absolute.
    pub fn dir(log_dir: &str) -> Result<Self, String> {
        let trimmed = log_dir.trim();
        if trimmed.is_empty() {
            return Err("log directory cannot be blank".to_string());
        }
        let path = Path::new(trimmed);
        if !path.is_absolute() {
            return Err(format!(
                "log directory must be an absolute path, got `{trimmed}`"
            ));
        }
        Ok(Self::Dir(path.to_path_buf()))
    }

    /// Level actually written for a `requested` level.
    ///
    /// Files honor the request; stderr is capped at `warn`.
    pub fn effective_level(&self, requested: LevelFilter) -> LevelFilter {
        match self {
            Self::Dir(_) => requested,
            Self::Stderr => requested.min(STDERR_MAX_LEVEL),
        }
    }
}

impl Display for LogTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dir(path) => write!(f, "{}", path.display()),
            Self::Stderr => f.write_str("stderr"),
        }
    }
}

struct LoggingState {
    level: LevelFilter,
    target: LogTarget,
    _logger: LoggerHandle,
}

/// Parses a user-supplied level name (`trace|debug|info|warn|error`).
///
/// Case and surrounding whitespace are ignored; `warning` is accepted for `warn`.
pub fn parse_level(level: &str) -> Result<LevelFilter, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

/// Initializes logging at `level` (capped per target) and `target`.
///
/// # Errors
/// - The log directory cannot be created.
/// - The backend fails to start.
/// - Logging is already active with a different level or target.
pub fn init_logging(level: LevelFilter, target: LogTarget) -> Result<(), String> {
    let level = target.effective_level(level);

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, target.clone()))?;
    if state.target != target {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.target, target
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }

    Ok(())
}

/// Returns `(effective level, target)` when logging is active.
pub fn logging_status() -> Option<(LevelFilter, LogTarget)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.target.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn start_logger(level: LevelFilter, target: LogTarget) -> Result<LoggingState, String> {
    let logger = Logger::with(LogSpecification::builder().default(level).build());

    let logger = match &target {
        LogTarget::Dir(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                format!("failed to create log directory `{}`: {err}", dir.display())
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
        LogTarget::Stderr => logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format),
    };

    let handle = logger
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();

    info!(
        "event=app_start module=core status=ok platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    info!("event=logging_init module=core status=ok level={level} target={target}");

    Ok(LoggingState {
        level,
        target,
        _logger: handle,
    })
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let thread = std::thread::current()
            .name()
            .map(single_line)
            .unwrap_or_else(|| "unnamed".to_string());
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| {
                panic_info
                    .payload()
                    .downcast_ref::<String>()
                    .map(String::as_str)
            })
            .map(|message| truncate_chars(&single_line(message), MAX_PANIC_PAYLOAD_CHARS))
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic_captured module=core status=error thread={thread} location={location} payload={payload}"
        );
        previous_hook(panic_info);
    }));
}

/// Collapses control characters (newlines, tabs, escapes) into single spaces.
///
/// Panic payloads may quote task titles, which are user text.
fn single_line(value: &str) -> String {
    value
        .split(char::is_control)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &value[..cut]),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, parse_level, single_line, truncate_chars, LogTarget,
    };
    use log::LevelFilter;

    #[test]
    fn parse_level_accepts_aliases_and_rejects_unknown() {
        assert_eq!(parse_level(" WARNING ").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level("Trace").unwrap(), LevelFilter::Trace);
        assert!(parse_level("verbose")
            .unwrap_err()
            .contains("unsupported log level"));
        assert!(parse_level("off").is_err());
    }

    #[test]
    fn dir_target_rejects_blank_and_relative_paths() {
        assert!(LogTarget::dir("  ").unwrap_err().contains("blank"));
        assert!(LogTarget::dir("logs/dev").unwrap_err().contains("absolute"));
    }

    #[test]
    fn stderr_target_caps_level_at_warn() {
        let stderr = LogTarget::Stderr;
        assert_eq!(stderr.effective_level(LevelFilter::Debug), LevelFilter::Warn);
        assert_eq!(stderr.effective_level(LevelFilter::Error), LevelFilter::Error);

        let files = LogTarget::Dir("/var/log/taskdeck".into());
        assert_eq!(files.effective_level(LevelFilter::Trace), LevelFilter::Trace);
    }

    #[test]
    fn panic_payload_is_flattened_and_capped() {
        assert_eq!(single_line("Buy milk\n\tthen\rbread"), "Buy milk then bread");
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_reconfiguration() {
        let log_dir = tempfile::tempdir().unwrap().keep();
        let target = LogTarget::Dir(log_dir.clone());

        init_logging(LevelFilter::Info, target.clone()).unwrap();
        init_logging(LevelFilter::Info, target.clone()).unwrap();

        let level_err = init_logging(LevelFilter::Debug, target.clone()).unwrap_err();
        assert!(level_err.contains("refusing to switch"));
        let target_err = init_logging(LevelFilter::Info, LogTarget::Stderr).unwrap_err();
        assert!(target_err.contains("refusing to switch"));

        let (level, active) = logging_status().unwrap();
        assert_eq!(level, LevelFilter::Info);
        assert_eq!(active, LogTarget::Dir(log_dir));
    }
}
