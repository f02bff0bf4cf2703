//! Logger error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(String),
}

impl LoggerError {
    pub fn open_file(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::OpenFile {
            path: path.display().to_string(),
            source,
        }
    }
}
