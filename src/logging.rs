//! Tracing setup for the experiment binary.
//!
//! stdout carries the neighbour table, so log lines go to stderr. A daily
//! rolling file is added when `ExperimentConfig::log_dir` is set.

use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ExperimentConfig;
use crate::error::{PhoneticError, Result};

const LOG_FILE_NAME: &str = "phonetic-similarity.log";

/// Keeps the background log writer alive; drop it last
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

fn file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir).map_err(|e| PhoneticError::io(dir, e))?;
    let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber for one run
pub fn init_tracing(config: &ExperimentConfig) -> Option<FileLogGuard> {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match config.log_dir.as_deref().map(file_writer) {
        Some(Ok((writer, guard))) => (
            Some(fmt::layer().with_writer(writer).with_ansi(false)),
            Some(FileLogGuard { _guard: guard }),
        ),
        Some(Err(err)) => {
            eprintln!("file logging disabled: {err}");
            (None, None)
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}
