//! ddl2changelog: generate Liquibase changelog sets from SQL DDL files
//!
//! This library parses CREATE/ALTER/DROP TABLE statements with a lenient
//! hand-written tokenizer, builds a database -> tables -> columns model,
//! and renders one versioned changelog XML file per table from an embedded
//! template set.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod util;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

pub use config::Config;
pub use error::ChangelogError;
pub use render::{AssetSet, RenderArgs};

/// Options for a changelog generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Path to the SQL DDL file
    pub sql_path: PathBuf,
    /// Output directory (defaults to the current working directory)
    pub output_dir: Option<PathBuf>,
    /// Optional JSON config file supplying defaults and table filters
    pub config_path: Option<PathBuf>,
    /// Changeset author; falls back to the config, then "unknown"
    pub author: Option<String>,
    /// Changeset version; falls back to the config, then "1.0.0"
    pub version: Option<String>,
    /// SQL dialect; falls back to the config, then "mysql"
    pub dialect: Option<String>,
    /// Enable verbose output
    pub verbose: bool,
}

/// Generate a changelog set from a SQL DDL file.
///
/// Returns the paths of every file written.
pub fn generate_changelogs(options: GenerateOptions) -> Result<Vec<PathBuf>> {
    let config = Config::load_or_default(options.config_path.as_deref())?;

    let author = resolve(options.author, &config.project.author, "unknown");
    let version = resolve(
        options.version,
        &config.project.version,
        config::DEFAULT_VERSION,
    );
    let dialect = resolve(options.dialect, &config.project.dialect, parser::MYSQL);

    let registry = parser::Registry::with_defaults();
    let dialect_parser = registry
        .acquire(&dialect)
        .ok_or(ChangelogError::UnknownDialect {
            dialect: dialect.clone(),
        })?;

    let sql = fs::read_to_string(&options.sql_path).map_err(|source| {
        ChangelogError::SqlFileRead {
            path: options.sql_path.clone(),
            source,
        }
    })?;

    let ast = dialect_parser.parse(&sql)?;

    if options.verbose {
        println!(
            "Parsed {} statements into {} tables (database: {})",
            ast.statements.len(),
            ast.database.tables.len(),
            ast.database.name
        );
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let output_dir = options.output_dir.unwrap_or_else(|| cwd.clone());

    let args = RenderArgs {
        author,
        version,
        dialect,
        cwd,
        output_dir,
        includes: config.database.includes.clone(),
        excludes: config.database.excludes.clone(),
        prefixes: config.database.prefixes.clone(),
    };

    let written = render::generate(&ast.database, &AssetSet::embedded(), &args)?;

    if options.verbose {
        for path in &written {
            println!("Generated: {}", path.display());
        }
    }

    Ok(written)
}

fn resolve(flag: Option<String>, config_value: &str, fallback: &str) -> String {
    flag.filter(|v| !v.is_empty())
        .unwrap_or_else(|| {
            if config_value.is_empty() {
                fallback.to_string()
            } else {
                config_value.to_string()
            }
        })
}
