use std::path::{Path, PathBuf};

use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::model::config::LogConfig;

/// Default filter when neither RUST_LOG nor the config sets one
const DEFAULT_LEVEL: &str = "info";

/// Why the log subscriber could not be installed
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("cannot create log dir {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot open log file {path}: {source}")]
    OpenFile { path: PathBuf, source: InitError },
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
}

/// Log file used when the config doesn't name one
pub fn log_file_path(config: &LogConfig, storage_dir: &Path) -> PathBuf {
    config
        .file
        .clone()
        .unwrap_or_else(|| storage_dir.join("tick.log"))
}

/// Install a tracing subscriber that appends to the log file.
///
/// The terminal belongs to the UI, so nothing is written to stdout/stderr.
/// Failures are reported back; callers are free to carry on without logs.
pub fn init_logging(config: &LogConfig, storage_dir: &Path) -> Result<(), LoggingError> {
    let path = log_file_path(config, storage_dir);
    let dir = path.parent().unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("tick.log");

    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|source| LoggingError::OpenFile {
            path: path.clone(),
            source,
        })?;

    let level = config.level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}
