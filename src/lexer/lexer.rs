use log::debug;
use regex::Regex;

use crate::errors::errors::LexError;

use super::tokens::{Token, TokenKind};

/// One entry of the grammar table: a token class and the pattern that
/// recognises it.
#[derive(Debug, Clone)]
pub struct GrammarRule {
    kind: TokenKind,
    regex: Regex,
}

impl GrammarRule {
    fn new(kind: TokenKind, pattern: &str) -> GrammarRule {
        GrammarRule {
            kind,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

/// The ordered token grammar.
///
/// During scanning the rules are tried in listed order at each position and
/// the first one that matches wins. The order is part of the grammar:
/// `Float` is listed before `Identifier` deliberately, and reordering the
/// table changes what the scanner produces.
#[derive(Debug, Clone)]
pub struct GrammarTable {
    rules: Vec<GrammarRule>,
}

impl GrammarTable {
    pub fn new() -> GrammarTable {
        GrammarTable {
            rules: vec![
                GrammarRule::new(TokenKind::Float, r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?"),
                GrammarRule::new(TokenKind::Identifier, "[A-Za-z_][A-Za-z0-9_]*"),
                GrammarRule::new(TokenKind::Assign, ":="),
                GrammarRule::new(TokenKind::Add, r"\+"),
                GrammarRule::new(TokenKind::Sub, "-"),
                GrammarRule::new(TokenKind::Mul, r"\*"),
                GrammarRule::new(TokenKind::Div, "/"),
                GrammarRule::new(TokenKind::LParen, r"\("),
                GrammarRule::new(TokenKind::RParen, r"\)"),
                GrammarRule::new(TokenKind::Semicolon, ";"),
                GrammarRule::new(TokenKind::Whitespace, r"\s+"),
                GrammarRule::new(TokenKind::Comment, "#[A-Za-z_][A-Za-z0-9_]*"),
            ],
        }
    }
}

impl Default for GrammarTable {
    fn default() -> Self {
        GrammarTable::new()
    }
}

/// What the scanner does with a character no grammar rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnmatchedPolicy {
    /// Advance one character and keep going. The historical behaviour.
    Skip,
    /// Stop and report the offending character.
    Error,
}

struct Lexer<'src> {
    grammar: &'src GrammarTable,
    source: &'src str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str, grammar: &'src GrammarTable) -> Lexer<'src> {
        Lexer {
            grammar,
            source,
            pos: 0,
            tokens: vec![],
        }
    }

    fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The first grammar rule whose pattern matches at the current
    /// position, together with the length of the matched span.
    fn match_here(&self) -> Option<(TokenKind, usize)> {
        let rest = self.remainder();
        for rule in &self.grammar.rules {
            if let Some(found) = rule.regex.find(rest) {
                if found.start() == 0 {
                    return Some((rule.kind, found.end()));
                }
            }
        }
        None
    }

    fn run(&mut self, policy: UnmatchedPolicy) -> Result<(), LexError> {
        while !self.at_eof() {
            match self.match_here() {
                Some((kind, len)) => {
                    if !kind.is_trivia() {
                        let lexeme = &self.remainder()[..len];
                        self.tokens.push(Token::new(kind, lexeme));
                    }
                    self.pos += len;
                }
                None => {
                    // remainder() is non-empty while not at_eof
                    let character = self.remainder().chars().next().unwrap();
                    if policy == UnmatchedPolicy::Error {
                        return Err(LexError {
                            position: self.pos,
                            character,
                        });
                    }
                    debug!(
                        "skipping unrecognised character {:?} at byte {}",
                        character, self.pos
                    );
                    self.pos += character.len_utf8();
                }
            }
        }
        Ok(())
    }
}

/// Scans `source` into a token sequence, in document order, with trivia
/// (whitespace, comments) discarded.
///
/// Characters that no grammar rule matches are skipped without producing a
/// token or an error; use [`tokenize_strict`] to reject them instead.
pub fn tokenize(source: &str, grammar: &GrammarTable) -> Vec<Token> {
    let mut lexer = Lexer::new(source, grammar);
    // Skip policy never errors
    let _ = lexer.run(UnmatchedPolicy::Skip);
    lexer.tokens
}

/// Like [`tokenize`], but the first character no grammar rule matches
/// aborts the scan with a [`LexError`] naming the byte offset and the
/// character.
pub fn tokenize_strict(source: &str, grammar: &GrammarTable) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source, grammar);
    lexer.run(UnmatchedPolicy::Error)?;
    Ok(lexer.tokens)
}
