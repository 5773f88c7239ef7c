//! Logging and tracing setup for the binary.
//!
//! Logs always go to stderr so stdout stays free for command output and the
//! JSON protocols. A file layer is added when a log path or directory is
//! known.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Explicit log file path.
pub const LOG_PATH_ENV: &str = "COPY_LINT_LOG_PATH";
/// Directory for the default log file.
pub const LOG_DIR_ENV: &str = "COPY_LINT_LOG_DIR";

const LOG_FILE_NAME: &str = "copy-lint.log";

/// Where, if anywhere, log files are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Full path of the log file.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, then the configured
    /// directory.
    ///
    /// `COPY_LINT_LOG_PATH` wins over `COPY_LINT_LOG_DIR`, which wins over
    /// `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = log_path
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| {
                log_dir
                    .filter(|d| !d.as_os_str().is_empty())
                    .or(config_log_dir)
                    .map(|dir| dir.join(LOG_FILE_NAME))
            });
        Self { log_file }
    }
}

/// Build the filter: `RUST_LOG` when set, otherwise from the flags.
///
/// `-q` forces `error`; each `-v` steps up from the configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_for(quiet, verbose, default_level))
}

fn level_for(quiet: bool, verbose: u8, default_level: &str) -> &str {
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
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes the file writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(ref path) = config.log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(Some(guard))
}
