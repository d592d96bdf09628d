use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed with status: {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot resolve install root from executable path {0:?}")]
    InstallLocation(PathBuf),

    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("invalid fetch target: {0}")]
    InvalidTarget(String),
}

impl FetchError {
    /// True for failures where the remote request itself did not succeed.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::HttpStatus(_))
    }
}
