#![allow(clippy::module_inception)]

//! A lexical front-end for short arithmetic/assignment statements of the
//! shape `identifier := expression;`.
//!
//! Two components run in strict sequence: a validator that rejects a fixed
//! set of malformed patterns, and a tokenizer that classifies the surviving
//! text into tokens. Both are pure functions over the input string and an
//! immutable rule table, so any front-end can drive them directly.

use lazy_static::lazy_static;

pub mod errors;
pub mod lexer;
pub mod validator;

use errors::errors::{LexError, ValidationError};
use lexer::lexer::GrammarTable;
use lexer::tokens::Token;
use validator::validator::RuleTable;

lazy_static! {
    static ref GRAMMAR: GrammarTable = GrammarTable::new();
    static ref RULES: RuleTable = RuleTable::new();
}

/// Checks `text` against the default rule table. See
/// [`validator::validator::validate`].
pub fn validate(text: &str) -> Result<(), ValidationError> {
    validator::validator::validate(text, &RULES)
}

/// Scans `text` with the default grammar table. See
/// [`lexer::lexer::tokenize`].
pub fn tokenize(text: &str) -> Vec<Token> {
    lexer::lexer::tokenize(text, &GRAMMAR)
}

/// Scans `text` with the default grammar table, rejecting characters no
/// rule matches. See [`lexer::lexer::tokenize_strict`].
pub fn tokenize_strict(text: &str) -> Result<Vec<Token>, LexError> {
    lexer::lexer::tokenize_strict(text, &GRAMMAR)
}

/// The full pipeline: validation gates tokenization. On a validation
/// failure no tokens are produced.
pub fn analyze(text: &str) -> Result<Vec<Token>, ValidationError> {
    validate(text)?;
    Ok(tokenize(text))
}
