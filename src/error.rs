use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("board dimension must be positive, got {0}")]
    InvalidDimension(usize),

    #[error("invalid interval {0:?} (expected e.g. 500ms, 1s, 1.5s, 2m)")]
    InvalidInterval(String),

    #[error("settings file {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
