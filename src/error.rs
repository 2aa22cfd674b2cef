use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TsvGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid skip filter: {pattern}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown check code: {0}")]
    UnknownCheck(String),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Failed to decode {path} as {encoding}")]
    Decode { path: PathBuf, encoding: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TsvGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
