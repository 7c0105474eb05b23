//! Error types for ddl2changelog

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during changelog generation
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read SQL file: {path}")]
    SqlFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQL parse error: {message}")]
    SqlParse { message: String },

    #[error("Unknown SQL dialect: {dialect}")]
    UnknownDialect { dialect: String },

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file already exists: {path}")]
    ConfigExists { path: PathBuf },

    #[error("Failed to create output directory: {path}")]
    OutputDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write changelog file: {path}")]
    ChangelogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChangelogError {
    /// Shorthand for the lenient parser's few hard failures.
    pub fn parse(message: impl Into<String>) -> Self {
        ChangelogError::SqlParse {
            message: message.into(),
        }
    }
}
