//! MySQL dialect parser.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::error::ChangelogError;
use crate::model::Ast;

use super::registry::DialectParser;
use super::statement::parse_database;

/// Dialect name the MySQL parser registers under.
pub const MYSQL: &str = "mysql";

static MYSQL_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "bigint",
        "tinyint",
        "smallint",
        "mediumint",
        "int",
        "integer",
        "float",
        "double",
        "decimal",
        "numeric",
        "bit",
        "char",
        "varchar",
        "binary",
        "varbinary",
        "tinytext",
        "text",
        "mediumtext",
        "longtext",
        "tinyblob",
        "blob",
        "mediumblob",
        "longblob",
        "json",
        "date",
        "time",
        "datetime",
        "timestamp",
        "year",
    ])
});

/// Membership test against the MySQL type-name vocabulary.
pub fn is_mysql_type(word: &str) -> bool {
    MYSQL_TYPES.contains(word.to_ascii_lowercase().as_str())
}

pub struct MySqlParser;

impl DialectParser for MySqlParser {
    fn dialect(&self) -> &'static str {
        MYSQL
    }

    fn parse(&self, sql: &str) -> Result<Ast, ChangelogError> {
        let (database, statements) = parse_database(sql, is_mysql_type)?;
        Ok(Ast {
            sql: sql.to_string(),
            statements,
            database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mysql_type() {
        assert!(is_mysql_type("bigint"));
        assert!(is_mysql_type("VARCHAR"));
        assert!(!is_mysql_type("uuid"));
    }

    #[test]
    fn test_parse_reports_dialect() {
        assert_eq!(MySqlParser.dialect(), MYSQL);
    }
}
