//! JSON configuration loading.
//!
//! The config file fills in whatever the CLI flags leave blank: project
//! metadata (author, version, dialect) and the database section with its
//! include/exclude/prefix table filters. The generation core only reads
//! this structure.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChangelogError;

/// Default changeset version when neither flag nor config supplies one.
pub const DEFAULT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub author: String,
    pub email: String,
    pub version: String,
    pub dialect: String,
    pub sql: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub dialect: String,
    pub driver: String,
    pub database: String,
    pub username: String,
    pub password: String,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub prefixes: Vec<String>,
}

impl Config {
    /// Load a config file; a missing path yields the default config so a
    /// bare CLI invocation still works.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ChangelogError> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ChangelogError> {
        let raw = fs::read_to_string(path).map_err(|source| ChangelogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ChangelogError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// A starter config for `init`, with the fields a user most likely
    /// wants to edit filled in.
    pub fn starter() -> Self {
        Self {
            project: ProjectConfig {
                version: DEFAULT_VERSION.to_string(),
                dialect: crate::parser::MYSQL.to_string(),
                ..ProjectConfig::default()
            },
            database: DatabaseConfig {
                host: "127.0.0.1".to_string(),
                port: 3306,
                dialect: crate::parser::MYSQL.to_string(),
                ..DatabaseConfig::default()
            },
        }
    }

    /// Write the starter config; refuses to overwrite an existing file.
    pub fn write_starter(path: &Path) -> Result<(), ChangelogError> {
        if path.exists() {
            return Err(ChangelogError::ConfigExists {
                path: path.to_path_buf(),
            });
        }

        let rendered = serde_json::to_string_pretty(&Self::starter())
            .expect("starter config serializes");
        fs::write(path, rendered).map_err(|source| ChangelogError::ChangelogWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
