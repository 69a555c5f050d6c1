//! Process logging bootstrap.
//!
//! # Responsibility
//! - Start the rolling file logger at most once per process.
//! - Record panics as metadata-only log lines.
//!
//! # Invariants
//! - Repeating init with the same level and directory is a no-op.
//! - Switching level or directory after init is rejected.
//! - Core log lines carry ids and counts only, never item titles or descriptions.
//!   Panic payloads are free text and may quote item fields, so only their
//!   shape is logged.

use crate::config::LogConfig;
use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "projboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: LevelFilter,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Starts file logging at `level` under `log_dir`.
///
/// Never panics. Calling again with identical arguments returns `Ok(())`.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` is empty, relative, or cannot be created.
/// - The logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let config = LogConfig {
        level: level.to_string(),
        log_dir: Some(log_dir.to_string()),
    };
    init_logging_from(&config).map(|_| ())
}

/// Starts logging from a `LogConfig`.
///
/// Returns `Ok(false)` without touching the logger when no `log_dir` is set.
///
/// # Errors
/// Same as `init_logging`.
pub fn init_logging_from(config: &LogConfig) -> Result<bool, String> {
    let level = config.level_filter().map_err(|err| err.to_string())?;
    let Some(log_dir) = config.log_dir_path().map_err(|err| err.to_string())? else {
        return Ok(false);
    };

    let state = match LOGGING_STATE.get() {
        Some(state) => state,
        None => LOGGING_STATE.get_or_try_init(|| start_file_logger(level, log_dir.clone()))?,
    };
    // Covers both a repeated call and a lost init race.
    state.ensure_matches(level, &log_dir)?;
    Ok(true)
}

/// Returns `(level, log_dir)` of the active logger, or `None` before init.
pub fn logging_status() -> Option<(LevelFilter, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

impl LoggingState {
    fn ensure_matches(&self, level: LevelFilter, log_dir: &Path) -> Result<(), String> {
        if self.log_dir != log_dir {
            return Err(format!(
                "logging already initialized at `{}`; refusing to switch to `{}`",
                self.log_dir.display(),
                log_dir.display()
            ));
        }
        if self.level != level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{level}`",
                self.level
            ));
        }
        Ok(())
    }
}

fn start_file_logger(level: LevelFilter, log_dir: PathBuf) -> Result<LoggingState, String> {
    std::fs::create_dir_all(&log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let logger = Logger::with(LogSpecification::builder().default(level).build())
        .log_to_file(
            FileSpec::default()
                .directory(log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        // [YYYY-MM-DD HH:MM:SS.ffffff TZ] LEVEL [module] file:line: message
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();
    info!(
        "event=logging_started module=logging status=ok platform={} debug_build={} \
         version={} level={}",
        std::env::consts::OS,
        cfg!(debug_assertions),
        env!("CARGO_PKG_VERSION"),
        level
    );

    Ok(LoggingState {
        level,
        log_dir,
        _logger: logger,
    })
}

fn install_panic_hook() {
    PANIC_HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let location = info.location().map_or_else(
                || "unknown".to_string(),
                |loc| format!("{}:{}", loc.file(), loc.line()),
            );
            error!(
                "event=panic_captured module=logging status=error location={location} {}",
                PanicSummary::of(info.payload())
            );
            previous(info);
        }));
    });
}

/// Shape of a panic payload; the text itself is never kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PanicSummary {
    kind: &'static str,
    chars: usize,
}

impl PanicSummary {
    fn of(payload: &(dyn Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&str>() {
            Self {
                kind: "str",
                chars: message.chars().count(),
            }
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self {
                kind: "string",
                chars: message.chars().count(),
            }
        } else {
            Self {
                kind: "opaque",
                chars: 0,
            }
        }
    }
}

impl Display for PanicSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "payload_kind={} payload_chars={}", self.kind, self.chars)
    }
}

#[cfg(test)]
mod tests {
    use super::{init_logging, init_logging_from, logging_status, PanicSummary};
    use crate::config::LogConfig;
    use log::LevelFilter;
    use std::any::Any;

    #[test]
    fn panic_summary_omits_payload_text() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("title: Build API"));
        let summary = PanicSummary::of(payload.as_ref()).to_string();
        assert_eq!(summary, "payload_kind=string payload_chars=16");
        assert!(!summary.contains("Build API"));

        let opaque: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(
            PanicSummary::of(opaque.as_ref()).to_string(),
            "payload_kind=opaque payload_chars=0"
        );
    }

    #[test]
    fn config_without_dir_leaves_logger_untouched() {
        let config = LogConfig {
            level: "info".to_string(),
            log_dir: None,
        };
        assert!(!init_logging_from(&config).unwrap());
    }

    #[test]
    fn invalid_settings_are_rejected_before_start() {
        assert!(init_logging("verbose", "/tmp/projboard")
            .unwrap_err()
            .contains("unsupported log level"));
        assert!(init_logging("info", "logs/dev")
            .unwrap_err()
            .contains("absolute"));
        assert!(init_logging("info", "   ").unwrap_err().contains("empty"));
    }

    #[test]
    fn init_is_idempotent_and_rejects_reconfiguration() {
        let log_dir = tempfile::tempdir().unwrap();
        let other_dir = tempfile::tempdir().unwrap();
        let dir = log_dir.path().to_str().unwrap().to_string();
        let other = other_dir.path().to_str().unwrap().to_string();

        let config = LogConfig {
            level: "info".to_string(),
            log_dir: Some(dir.clone()),
        };
        assert!(init_logging_from(&config).unwrap());
        init_logging("INFO", &dir).unwrap();

        let level_error = init_logging("debug", &dir).unwrap_err();
        assert!(level_error.contains("refusing to switch"));
        let dir_error = init_logging("info", &other).unwrap_err();
        assert!(dir_error.contains("refusing to switch"));

        let (level, active_dir) = logging_status().unwrap();
        assert_eq!(level, LevelFilter::Info);
        assert_eq!(active_dir, log_dir.path());
    }
}
