//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr so stdout stays clean for reports.
//! When a log file or directory is configured, events are also written as
//! JSON lines through a non-blocking appender.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Explicit log file path.
const LOG_PATH_ENV: &str = "READSTAT_LOG_PATH";

/// Log directory; the file name defaults to [`DEFAULT_LOG_FILE`].
const LOG_DIR_ENV: &str = "READSTAT_LOG_DIR";

const DEFAULT_LOG_FILE: &str = "readstat.jsonl";

/// Where JSONL logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Target file for JSONL events. `None` disables the file layer.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to the
    /// configured directory.
    ///
    /// `READSTAT_LOG_PATH` wins over `READSTAT_LOG_DIR`, which wins over
    /// `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV),
            std::env::var_os(LOG_DIR_ENV),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<OsString>,
        log_dir: Option<OsString>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        let non_empty = |value: OsString| (!value.is_empty()).then(|| PathBuf::from(value));
        let log_file = log_path.and_then(non_empty).or_else(|| {
            log_dir
                .and_then(non_empty)
                .or(config_log_dir)
                .map(|dir| dir.join(DEFAULT_LOG_FILE))
        });
        Self { log_file }
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` selects errors only, each `-v`
/// raises verbosity, and the configured level applies by default.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose, default_level)))
}

fn default_directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file appender on drop, so keep it alive
/// until the process exits.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let name = path
                .file_name()
                .map_or_else(|| OsString::from(DEFAULT_LOG_FILE), OsString::from);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}
