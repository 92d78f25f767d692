//! Unit tests for error types and their display formatting.

use super::errors::{AnalysisError, LexError, ValidationError};

#[test]
fn test_validation_error_display() {
    let error = ValidationError {
        matched_text: "..".to_string(),
        description: "two dots in a number",
    };

    assert_eq!(
        error.to_string(),
        "invalid expression \"..\": two dots in a number"
    );
}

#[test]
fn test_lex_error_display() {
    let error = LexError {
        position: 5,
        character: '@',
    };

    assert_eq!(error.to_string(), "unrecognised character '@' at byte 5");
}

#[test]
fn test_analysis_error_from_validation() {
    let inner = ValidationError {
        matched_text: "**".to_string(),
        description: "two multiplications in a row",
    };
    let error = AnalysisError::from(inner.clone());

    assert!(matches!(error, AnalysisError::Validation(_)));
    assert_eq!(error.to_string(), inner.to_string());
}

#[test]
fn test_analysis_error_from_lex() {
    let inner = LexError {
        position: 0,
        character: '~',
    };
    let error = AnalysisError::from(inner);

    assert!(matches!(error, AnalysisError::Lex(_)));
    assert_eq!(error.to_string(), inner.to_string());
}
