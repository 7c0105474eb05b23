//! SQL DDL parsing: tokenizer, statement parser and dialect registry.

pub mod lexer;
pub mod mysql;
pub mod postgres;
pub mod registry;
pub mod statement;
pub mod token;

pub use mysql::{MySqlParser, MYSQL};
pub use postgres::{PostgresParser, POSTGRES};
pub use registry::{DialectParser, Registry};
pub use statement::{split_statements, strip_comments};
pub use token::{Token, TokenKind, Tokenizer};
