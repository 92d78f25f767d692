use thiserror::Error;

/// A malformed-input violation: the offending substring plus the fixed
/// description of the rule that matched it. Always recoverable; the caller
/// is expected to correct the input and retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid expression {matched_text:?}: {description}")]
pub struct ValidationError {
    pub matched_text: String,
    pub description: &'static str,
}

/// A character no grammar rule matched, reported only by the strict
/// tokenizer. `position` is a byte offset into the source text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unrecognised character {character:?} at byte {position}")]
pub struct LexError {
    pub position: usize,
    pub character: char,
}

/// Umbrella error for callers driving the full validate-then-tokenize
/// pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Lex(#[from] LexError),
}
