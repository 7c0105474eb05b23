//! Token types and the forward-only token cursor.

/// Classification of a single DDL token.
///
/// Classification is total: anything that is neither a keyword, punctuation,
/// nor a dialect type name becomes `Identifier`, deferring error detection
/// to the statement parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Create,
    Table,
    If,
    Not,
    Exists,
    Primary,
    Unique,
    Foreign,
    References,
    Key,
    Unsigned,
    Zerofill,
    Null,
    AutoIncrement,
    Default,
    On,
    Update,
    CurrentTimestamp,
    Charset,
    Character,
    Collate,
    Comment,
    Partition,
    By,
    Index,
    Constraint,
    Set,
    Check,
    Engine,
    Alter,
    Comma,
    LParen,
    RParen,
    Semicolon,
    DataType,
    Identifier,
    Eof,
}

/// A classified token with its exact source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: String::new(),
        }
    }
}

/// An ordered token sequence with a mutable, forward-only read cursor.
///
/// Past the end of the sequence both `advance` and `peek` yield a synthetic
/// EOF token, so callers never have to bounds-check.
pub struct Tokenizer {
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
}

impl Tokenizer {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            eof: Token::eof(),
        }
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Token {
        if self.pos >= self.tokens.len() {
            return Token::eof();
        }
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    /// Inspect the current token without consuming it.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Advance until the predicate holds for the current token, leaving the
    /// cursor on the matching token. Returns whether a match was found
    /// before the stream ran out.
    ///
    /// This is the lenient-skip primitive: tolerating vendor noise before
    /// CREATE/TABLE is a `skip_until` that must succeed, and discarding
    /// unknown tokens is one that may not.
    pub fn skip_until<F>(&mut self, predicate: F) -> bool
    where
        F: Fn(&Token) -> bool,
    {
        while self.has_next() {
            if predicate(self.peek()) {
                return true;
            }
            self.advance();
        }
        false
    }
}
