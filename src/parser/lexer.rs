//! Field splitting and token classification for a single DDL statement.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::token::{Token, TokenKind};

/// Fixed keyword table shared by all dialects. Punctuation that the field
/// splitter emits as standalone fields is classified here too.
static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("CREATE", TokenKind::Create),
        ("TABLE", TokenKind::Table),
        ("IF", TokenKind::If),
        ("NOT", TokenKind::Not),
        ("EXISTS", TokenKind::Exists),
        ("PRIMARY", TokenKind::Primary),
        ("UNIQUE", TokenKind::Unique),
        ("FOREIGN", TokenKind::Foreign),
        ("REFERENCES", TokenKind::References),
        ("KEY", TokenKind::Key),
        ("UNSIGNED", TokenKind::Unsigned),
        ("ZEROFILL", TokenKind::Zerofill),
        ("NULL", TokenKind::Null),
        ("AUTO_INCREMENT", TokenKind::AutoIncrement),
        ("DEFAULT", TokenKind::Default),
        ("ON", TokenKind::On),
        ("UPDATE", TokenKind::Update),
        ("CURRENT_TIMESTAMP", TokenKind::CurrentTimestamp),
        ("CHARSET", TokenKind::Charset),
        ("CHARACTER", TokenKind::Character),
        ("COLLATE", TokenKind::Collate),
        ("COMMENT", TokenKind::Comment),
        ("PARTITION", TokenKind::Partition),
        ("BY", TokenKind::By),
        ("INDEX", TokenKind::Index),
        ("CONSTRAINT", TokenKind::Constraint),
        ("SET", TokenKind::Set),
        ("CHECK", TokenKind::Check),
        ("ENGINE", TokenKind::Engine),
        ("ALTER", TokenKind::Alter),
        (",", TokenKind::Comma),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        (";", TokenKind::Semicolon),
    ])
});

/// Split a statement into raw fields on whitespace and the punctuation set
/// `( ) , ; =`. A quoted run (`'`, `"` or backtick) is one opaque field even
/// if it contains whitespace or punctuation; quote balance is a toggle keyed
/// on the opening quote character.
pub fn split_fields(source: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();

    let mut inside_quotes = false;
    let mut quote_char = '\0';

    for ch in source.chars() {
        if inside_quotes {
            current.push(ch);
            if ch == quote_char {
                inside_quotes = false;
                fields.push(std::mem::take(&mut current));
            }
            continue;
        }

        match ch {
            ' ' | '\t' | '\n' | '\r' => {
                if !current.is_empty() {
                    fields.push(std::mem::take(&mut current));
                }
            }
            '(' | ')' | ',' | ';' | '=' => {
                if !current.is_empty() {
                    fields.push(std::mem::take(&mut current));
                }
                fields.push(ch.to_string());
            }
            '\'' | '"' | '`' => {
                if !current.is_empty() {
                    fields.push(std::mem::take(&mut current));
                }
                inside_quotes = true;
                quote_char = ch;
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        fields.push(current);
    }

    fields
}

/// Tokenize one statement for a dialect. `is_type_name` supplies the
/// dialect's SQL type vocabulary. The sequence is terminated with one EOF
/// token; classification never fails.
pub fn tokenize(statement: &str, is_type_name: fn(&str) -> bool) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for field in split_fields(statement.trim()) {
        let kind = match KEYWORDS.get(field.to_ascii_uppercase().as_str()) {
            Some(kind) => *kind,
            None if is_type_name(&field) => TokenKind::DataType,
            None => TokenKind::Identifier,
        };
        tokens.push(Token::new(kind, field));
    }

    tokens.push(Token::eof());
    tokens
}

/// Strip exactly one matching outer pair of `'`, `"` or backticks.
/// Anything else is returned unchanged.
pub fn strip_quotes(source: &str) -> &str {
    if source.len() < 2 {
        return source;
    }
    for quote in ['\'', '"', '`'] {
        if source.starts_with(quote) && source.ends_with(quote) {
            return &source[1..source.len() - 1];
        }
    }
    source
}
