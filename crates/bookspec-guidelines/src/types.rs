use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset not found: {0}")]
    NotFound(PathBuf),
    #[error("CSV error: {0}")]
    Malformed(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T, E = DatasetError> = std::result::Result<T, E>;

/// Selection problems caught before any guideline is produced
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select at least one format (eBook, Paperback, Hardcover).")]
    NoFormatSelected,
    #[error("Please select at least one publishing platform.")]
    NoPlatformSelected,
    #[error("Please enter page count for print formats.")]
    PageCountRequired,
}

#[cfg(feature = "serde")]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
