//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts validated statement text
//! into a stream of classified tokens. It handles:
//!
//! - Tokenization using an ordered regex grammar table
//! - First-listed-pattern-wins alternation at each scan position
//! - Whitespace and comment trivia, consumed but never emitted
//! - An optional strict mode that rejects unmatched characters

pub mod lexer;
pub mod tokens;
