//! DDL preprocessing and statement parsing.
//!
//! The pipeline over raw input is: strip comments, collapse to a single
//! line, split into statements on unquoted `;`, then parse each statement
//! into a [`Table`]. Only two constructs fail hard: a statement with
//! neither a CREATE nor an ALTER TABLE prefix, and a token stream that
//! runs out while searching for CREATE or TABLE. Everything else degrades
//! silently so that vendor-specific noise (storage options, charset
//! clauses, unknown modifiers) never aborts a run.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ChangelogError;
use crate::model::{Column, ColumnTypeKind, Database, Table, UNKNOWN_DATABASE};
use crate::util::starts_with_ci;

use super::lexer::{strip_quotes, tokenize};
use super::token::{TokenKind, Tokenizer};

static BLOCK_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static LINE_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"--.*").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const DROP_TABLE_PREFIX: &str = "DROP TABLE";
const ALTER_TABLE_PREFIX: &str = "ALTER TABLE";
const CREATE_PREFIX: &str = "CREATE";

/// Remove block (`/* ... */`) and line (`-- ...`) comments and collapse the
/// input to single-line whitespace. Idempotent.
pub fn strip_comments(sql: &str) -> String {
    let sql = BLOCK_COMMENT_RE.replace_all(sql, "");
    let sql = LINE_COMMENT_RE.replace_all(&sql, "");
    let sql = sql.replace('\n', " ");
    let sql = WHITESPACE_RE.replace_all(&sql, " ");
    sql.trim().to_string()
}

/// Split on `;` occurring outside quoted literals. Quote state toggles on
/// `'` and `"`. The trailing buffer is kept when non-blank.
pub fn split_statements(sql: &str) -> Vec<String> {
    let mut statements: Vec<String> = Vec::new();
    let mut buf = String::new();
    let mut in_string = false;

    for ch in sql.chars() {
        if ch == '\'' || ch == '"' {
            in_string = !in_string;
        }
        if ch == ';' && !in_string {
            statements.push(std::mem::take(&mut buf));
        } else {
            buf.push(ch);
        }
    }

    if !buf.trim().is_empty() {
        statements.push(buf);
    }

    statements
}

/// Parse a whole DDL input into a [`Database`] for one dialect.
///
/// `is_type_name` is the dialect's type vocabulary, fed to the lexer.
/// Returns the database plus the split statements for diagnostics.
pub fn parse_database(
    sql: &str,
    is_type_name: fn(&str) -> bool,
) -> Result<(Database, Vec<String>), ChangelogError> {
    let cleaned = strip_comments(sql);
    let statements = split_statements(&cleaned);

    let mut tables: Vec<Table> = Vec::new();

    for statement in &statements {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }

        // DROP TABLE is always a no-op.
        if starts_with_ci(statement, DROP_TABLE_PREFIX) {
            continue;
        }

        if !starts_with_ci(statement, ALTER_TABLE_PREFIX)
            && !starts_with_ci(statement, CREATE_PREFIX)
        {
            return Err(ChangelogError::parse("bad create table SQL statements"));
        }

        let mut tokenizer = Tokenizer::new(tokenize(statement, is_type_name));
        let table = parse_table(&mut tokenizer)?;

        if table.alter_statement {
            // Merge by exact name into the first prior table; an unmatched
            // ALTER is dropped. Later ALTERs overwrite earlier ones.
            if let Some(existing) = tables.iter_mut().find(|t| t.name == table.name) {
                existing.comment = table.comment;
            }
            continue;
        }

        tables.push(table);
    }

    let name = tables
        .first()
        .map(|t| strip_quotes(&t.database))
        .filter(|db| !db.is_empty())
        .unwrap_or(UNKNOWN_DATABASE)
        .to_string();

    Ok((Database { name, tables }, statements))
}

/// Parse one tokenized statement into a table.
fn parse_table(tokenizer: &mut Tokenizer) -> Result<Table, ChangelogError> {
    let mut table = Table {
        create_statement: true,
        ..Table::default()
    };

    // ALTER TABLE table_name COMMENT = 'comment'
    if tokenizer.peek().kind == TokenKind::Alter {
        tokenizer.advance(); // ALTER
        if tokenizer.peek().kind == TokenKind::Table {
            tokenizer.advance(); // TABLE
            table.name = tokenizer.advance().literal;

            tokenizer.advance(); // COMMENT
            if tokenizer.peek().literal == "=" {
                tokenizer.advance();
            }
            table.comment = strip_quotes(&tokenizer.advance().literal).to_string();

            table.alter_statement = true;
            table.create_statement = false;

            return Ok(table);
        }
    }

    // Tolerate leading noise before CREATE and between CREATE and TABLE;
    // exhaustion while searching is one of the two hard failures.
    if !tokenizer.skip_until(|t| t.kind == TokenKind::Create) {
        return Err(ChangelogError::parse("bad SQL statements"));
    }
    tokenizer.advance(); // CREATE

    if !tokenizer.skip_until(|t| t.kind == TokenKind::Table) {
        return Err(ChangelogError::parse("bad SQL statements"));
    }
    tokenizer.advance(); // TABLE

    // IF NOT EXISTS
    if tokenizer.peek().kind == TokenKind::If {
        tokenizer.advance(); // IF
        tokenizer.advance(); // NOT
        tokenizer.advance(); // EXISTS
    }

    let raw_name = tokenizer.advance().literal;
    match raw_name.split_once('.') {
        Some((database, name)) => {
            table.database = strip_quotes(database).to_string();
            table.name = strip_quotes(name).to_string();
        }
        None => table.name = strip_quotes(&raw_name).to_string(),
    }

    tokenizer.advance(); // '('

    while tokenizer.has_next() {
        if tokenizer.peek().kind == TokenKind::RParen {
            break;
        }
        table.columns.push(parse_column(tokenizer));

        if tokenizer.peek().kind == TokenKind::Comma {
            tokenizer.advance();
        }
    }

    tokenizer.advance(); // ')'

    // Table options: COMMENT = '...' is captured, everything else
    // (ENGINE, CHARSET, COLLATE, ...) is consumed and ignored.
    while tokenizer.has_next() {
        match tokenizer.peek().kind {
            TokenKind::Comment => {
                tokenizer.advance(); // COMMENT
                if tokenizer.peek().literal == "=" {
                    tokenizer.advance();
                }
                table.comment = strip_quotes(&tokenizer.advance().literal).to_string();
            }
            TokenKind::Semicolon => {
                tokenizer.advance();
                break;
            }
            _ => {
                tokenizer.advance();
            }
        }
    }

    Ok(table)
}

/// Parse one column definition: name and data type are positionally fixed,
/// the optional size clause follows, then modifiers in arbitrary order
/// until `,` or `)`.
fn parse_column(tokenizer: &mut Tokenizer) -> Column {
    let name = strip_quotes(&tokenizer.advance().literal).to_string();
    let data_type = tokenizer.advance().literal;

    let mut column = Column {
        name,
        type_kind: ColumnTypeKind::from_type_name(&data_type),
        data_type,
        ..Column::default()
    };

    // (length[, precision[, scale]])
    if tokenizer.peek().kind == TokenKind::LParen {
        tokenizer.advance(); // '('
        column.length = parse_size(tokenizer);

        if tokenizer.peek().kind == TokenKind::Comma {
            tokenizer.advance(); // ','
            column.precision = parse_size(tokenizer);

            if tokenizer.peek().kind == TokenKind::Comma {
                tokenizer.advance(); // ','
                column.scale = parse_size(tokenizer);
            }
        }
        tokenizer.advance(); // ')'
    }

    while tokenizer.has_next()
        && tokenizer.peek().kind != TokenKind::Comma
        && tokenizer.peek().kind != TokenKind::RParen
    {
        match tokenizer.peek().kind {
            TokenKind::Not => {
                tokenizer.advance(); // NOT
                if tokenizer.peek().kind == TokenKind::Null {
                    tokenizer.advance(); // NULL
                    column.not_null = true;
                }
            }
            TokenKind::Primary => {
                tokenizer.advance(); // PRIMARY
                if tokenizer.peek().kind == TokenKind::Key {
                    tokenizer.advance(); // KEY
                    column.primary_key = true;
                    column.not_null = true;
                }
            }
            TokenKind::Unique => {
                tokenizer.advance(); // UNIQUE
                column.unique = true;
                if tokenizer.peek().kind == TokenKind::Key {
                    tokenizer.advance(); // KEY
                }
            }
            TokenKind::AutoIncrement => {
                tokenizer.advance(); // AUTO_INCREMENT
                column.auto_increment = true;
            }
            TokenKind::Default => {
                tokenizer.advance(); // DEFAULT
                column.default = strip_quotes(&tokenizer.advance().literal).to_string();
            }
            TokenKind::On => {
                tokenizer.advance(); // ON
                if tokenizer.peek().kind == TokenKind::Update {
                    tokenizer.advance(); // UPDATE
                    if tokenizer.peek().kind == TokenKind::CurrentTimestamp {
                        column.default = tokenizer.advance().literal;
                        column.update_timestamp = true;
                    }
                }
            }
            TokenKind::Comment => {
                tokenizer.advance(); // COMMENT
                column.comment = strip_quotes(&tokenizer.advance().literal).to_string();
            }
            // Lenient skip: UNSIGNED, ZEROFILL, COLLATE values, anything
            // unrecognized.
            _ => {
                tokenizer.advance();
            }
        }
    }

    column
}

fn parse_size(tokenizer: &mut Tokenizer) -> Option<u32> {
    tokenizer.advance().literal.parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mysql_types(word: &str) -> bool {
        crate::parser::mysql::is_mysql_type(word)
    }

    #[test]
    fn test_strip_comments_is_idempotent() {
        let sql = "/* head */\ncreate table t (\n  id bigint -- trailing\n);\n-- tail";
        let once = strip_comments(sql);
        let twice = strip_comments(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "create table t ( id bigint );");
    }

    #[test]
    fn test_strip_comments_multiline_block() {
        let sql = "/* spans\nseveral\nlines */ create table t (id int);";
        assert_eq!(strip_comments(sql), "create table t (id int);");
    }

    #[test]
    fn test_split_statements_quoted_semicolon() {
        let stmts = split_statements("insert 'a;b'; next");
        assert_eq!(stmts, vec!["insert 'a;b'", " next"]);
    }

    #[test]
    fn test_split_statements_discards_blank_tail() {
        let stmts = split_statements("create table t (id int);  ");
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn test_parse_create_with_size_and_modifiers() {
        let sql = "create table if not exists shop.orders (
            id bigint not null primary key,
            total decimal(16,2) default 0 not null comment 'Order total',
            note varchar(64) null
        ) COMMENT = 'ORDERS' ENGINE = Innodb;";
        let (db, _) = parse_database(sql, mysql_types).unwrap();

        assert_eq!(db.name, "shop");
        assert_eq!(db.tables.len(), 1);

        let table = &db.tables[0];
        assert_eq!(table.name, "orders");
        assert_eq!(table.comment, "ORDERS");
        assert!(table.create_statement);

        let id = &table.columns[0];
        assert!(id.primary_key);
        assert!(id.not_null);
        assert!(!id.auto_increment);
        assert_eq!(id.type_kind, ColumnTypeKind::BigInt);

        let total = &table.columns[1];
        assert_eq!(total.length, Some(16));
        assert_eq!(total.precision, Some(2));
        assert_eq!(total.scale, None);
        assert_eq!(total.default, "0");
        assert_eq!(total.comment, "Order total");

        let note = &table.columns[2];
        assert!(!note.not_null);
        assert_eq!(note.length, Some(64));
    }

    #[test]
    fn test_parse_quoted_default_with_punctuation() {
        let sql = "create table t (tags varchar(32) default 'a, b' not null);";
        let (db, _) = parse_database(sql, mysql_types).unwrap();
        assert_eq!(db.tables[0].columns[0].default, "a, b");
    }

    #[test]
    fn test_parse_on_update_current_timestamp() {
        let sql =
            "create table t (update_time timestamp default CURRENT_TIMESTAMP not null on update CURRENT_TIMESTAMP);";
        let (db, _) = parse_database(sql, mysql_types).unwrap();
        let col = &db.tables[0].columns[0];
        assert!(col.update_timestamp);
        assert_eq!(col.default, "CURRENT_TIMESTAMP");
    }

    #[test]
    fn test_drop_table_is_a_noop() {
        let sql = "drop table legacy; create table t (id int);";
        let (db, _) = parse_database(sql, mysql_types).unwrap();
        assert_eq!(db.tables.len(), 1);
        assert_eq!(db.tables[0].name, "t");
    }

    #[test]
    fn test_alter_merges_last_comment() {
        let sql = "create table t (id int) COMMENT = 'first';
            alter table t COMMENT = 'second';
            alter table t COMMENT = 'third';";
        let (db, _) = parse_database(sql, mysql_types).unwrap();
        assert_eq!(db.tables.len(), 1);
        assert_eq!(db.tables[0].comment, "third");
    }

    #[test]
    fn test_alter_unknown_table_is_dropped() {
        let sql = "create table t (id int); alter table missing COMMENT = 'x';";
        let (db, _) = parse_database(sql, mysql_types).unwrap();
        assert_eq!(db.tables.len(), 1);
        assert_eq!(db.tables[0].comment, "");
    }

    #[test]
    fn test_missing_table_keyword_is_structural_error() {
        let sql = "create company.employee (id bigint not null);";
        let err = parse_database(sql, mysql_types).unwrap_err();
        assert!(matches!(err, ChangelogError::SqlParse { .. }));
    }

    #[test]
    fn test_unrecognized_prefix_is_structural_error() {
        let sql = "truncate table t;";
        let err = parse_database(sql, mysql_types).unwrap_err();
        assert!(matches!(err, ChangelogError::SqlParse { .. }));
    }

    #[test]
    fn test_unknown_modifiers_are_skipped() {
        let sql = "create table t (n int unsigned zerofill collate utf8mb4_bin not null);";
        let (db, _) = parse_database(sql, mysql_types).unwrap();
        let col = &db.tables[0].columns[0];
        assert!(col.not_null);
        assert_eq!(col.type_kind, ColumnTypeKind::Int);
    }

    #[test]
    fn test_backtick_quoted_names_are_unquoted() {
        let sql = "create table `orders` (`order no` varchar(32) not null);";
        let (db, _) = parse_database(sql, mysql_types).unwrap();
        assert_eq!(db.tables[0].name, "orders");
        assert_eq!(db.tables[0].columns[0].name, "order no");
    }

    #[test]
    fn test_unqualified_table_defaults_database_name() {
        let sql = "create table t (id int);";
        let (db, _) = parse_database(sql, mysql_types).unwrap();
        assert_eq!(db.name, UNKNOWN_DATABASE);
    }
}
