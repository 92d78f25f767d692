use std::fmt::Display;

/// The closed set of token classes the grammar table can recognise.
///
/// `Whitespace` and `Comment` are trivia: the scanner matches and consumes
/// them, but they never appear in a token sequence.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Float,
    Identifier,
    Assign, // :=

    Add,
    Sub,
    Mul,
    Div,

    LParen,
    RParen,
    Semicolon,

    // Consumed but never emitted
    Whitespace,
    Comment,
}

impl TokenKind {
    /// Trivia kinds are matched during scanning only to be discarded.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexical unit: a kind plus the exact substring it was
/// matched from. Tokens carry no position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)
    }
}
