//! Malformed-input validation module.
//!
//! This module checks raw statement text against an ordered table of
//! malformed-pattern rules before any tokenization happens. It handles:
//!
//! - The eleven-rule table with a fixed description per rule
//! - First-rule-wins-anywhere reporting (table priority, not text position)
//! - Guarded patterns standing in for lookbehind

pub mod validator;
