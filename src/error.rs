use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhoneticError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("inconsistent model: {0}")]
    InconsistentModel(String),
}

impl PhoneticError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error comes from reading or writing a stored model
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Serialization(_) | Self::InconsistentModel(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PhoneticError>;
