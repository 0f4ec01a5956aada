use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to format {path}: {source}")]
    Engine {
        path: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to format {path}: timed out after {}s", .after.as_secs_f32())]
    TimedOut { path: String, after: Duration },
    #[error("failed to format {path}: engine panicked: {message}")]
    Panicked { path: String, message: String },
}

impl FormatError {
    pub fn path(&self) -> &str {
        match self {
            FormatError::Engine { path, .. }
            | FormatError::TimedOut { path, .. }
            | FormatError::Panicked { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{0}")]
    Argument(String),
    #[error("no files matched: {}", .0.join(", "))]
    NoMatches(Vec<String>),
    #[error("error reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
