//! Postgres dialect parser.
//!
//! Shares the tokenizer and statement parser with the MySQL pipeline; only
//! the type-name vocabulary differs. Multi-word type names (`double
//! precision`, `character varying`) are not recognized — use their
//! single-word synonyms.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::error::ChangelogError;
use crate::model::Ast;

use super::registry::DialectParser;
use super::statement::parse_database;

/// Dialect name the Postgres parser registers under.
pub const POSTGRES: &str = "postgres";

static POSTGRES_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "bigint",
        "bigserial",
        "smallint",
        "smallserial",
        "int",
        "integer",
        "serial",
        "real",
        "float4",
        "float8",
        "decimal",
        "numeric",
        "money",
        "boolean",
        "bool",
        "char",
        "varchar",
        "text",
        "bytea",
        "uuid",
        "json",
        "jsonb",
        "date",
        "time",
        "timestamp",
        "timestamptz",
        "interval",
    ])
});

/// Membership test against the Postgres type-name vocabulary.
pub fn is_postgres_type(word: &str) -> bool {
    POSTGRES_TYPES.contains(word.to_ascii_lowercase().as_str())
}

pub struct PostgresParser;

impl DialectParser for PostgresParser {
    fn dialect(&self) -> &'static str {
        POSTGRES
    }

    fn parse(&self, sql: &str) -> Result<Ast, ChangelogError> {
        let (database, statements) = parse_database(sql, is_postgres_type)?;
        Ok(Ast {
            sql: sql.to_string(),
            statements,
            database,
        })
    }
}
