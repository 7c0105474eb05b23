//! Dialect parser registry.
//!
//! The registry is an explicit value constructed once at startup and passed
//! by reference to every consumer, so tests can build isolated registries
//! with whatever parsers they need.

use std::collections::HashMap;

use crate::error::ChangelogError;
use crate::model::Ast;

/// A dialect-specific DDL parser pipeline.
pub trait DialectParser {
    /// The dialect name this parser registers under.
    fn dialect(&self) -> &'static str;

    /// Parse raw DDL text into a structural model.
    fn parse(&self, sql: &str) -> Result<Ast, ChangelogError>;
}

/// Mapping from dialect name to its parser. Keys are unique dialect names;
/// the last registration for a name wins. There is no removal.
#[derive(Default)]
pub struct Registry {
    parsers: HashMap<&'static str, Box<dyn DialectParser>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in dialect registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(super::mysql::MySqlParser));
        registry.register(Box::new(super::postgres::PostgresParser));
        registry
    }

    pub fn register(&mut self, parser: Box<dyn DialectParser>) {
        self.parsers.insert(parser.dialect(), parser);
    }

    pub fn acquire(&self, dialect: &str) -> Option<&dyn DialectParser> {
        self.parsers.get(dialect).map(|p| p.as_ref())
    }

    pub fn contains(&self, dialect: &str) -> bool {
        self.parsers.contains_key(dialect)
    }
}
