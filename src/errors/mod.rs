//! Error types for validation and tokenization.
//!
//! This module defines the error values returned by the analysis pipeline:
//!
//! - `ValidationError` for malformed input caught before tokenization
//! - `LexError` for unmatched characters in strict tokenization
//! - `AnalysisError` as the umbrella for pipeline callers

pub mod errors;

#[cfg(test)]
mod tests;
