use regex::{Match, Regex};

use crate::errors::errors::ValidationError;

/// Extra acceptance check applied to a candidate match: receives the full
/// text and the match's start offset, returns false to reject the candidate
/// and continue searching from the next character.
pub type RuleGuard = fn(&str, usize) -> bool;

/// One entry of the malformed-input table: a pattern, the fixed description
/// reported when it fires, and an optional guard.
pub struct ValidationRule {
    regex: Regex,
    description: &'static str,
    guard: Option<RuleGuard>,
}

impl ValidationRule {
    fn new(pattern: &str, description: &'static str) -> ValidationRule {
        ValidationRule {
            regex: Regex::new(pattern).unwrap(),
            description,
            guard: None,
        }
    }

    fn with_guard(pattern: &str, description: &'static str, guard: RuleGuard) -> ValidationRule {
        ValidationRule {
            regex: Regex::new(pattern).unwrap(),
            description,
            guard: Some(guard),
        }
    }

    /// First match of this rule anywhere in `text` that also passes the
    /// guard. A guard-rejected candidate resumes the search one character
    /// further on, so a later occurrence can still be found.
    fn first_match<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        let mut from = 0;
        while let Some(found) = self.regex.find_at(text, from) {
            match self.guard {
                Some(guard) if !guard(text, found.start()) => {
                    from = next_char_boundary(text, found.start());
                }
                _ => return Some(found),
            }
        }
        None
    }
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    match text[pos..].chars().next() {
        Some(c) => pos + c.len_utf8(),
        None => text.len(),
    }
}

/// Guard for the malformed-exponential-float rule: the rule wants a
/// negative lookbehind for `e`/`E`, which the regex crate does not support,
/// so the exclusion is checked here instead.
fn not_preceded_by_exponent(text: &str, start: usize) -> bool {
    !text[..start].ends_with(['e', 'E'])
}

/// The ordered table of malformed-input rules.
///
/// Order is the reporting priority: the first rule in the table with a
/// match anywhere in the text wins, even when a later rule's match occurs
/// earlier in the text.
pub struct RuleTable {
    rules: Vec<ValidationRule>,
}

impl RuleTable {
    pub fn new() -> RuleTable {
        RuleTable {
            rules: vec![
                ValidationRule::new(r"\*\*", "two multiplications in a row"),
                ValidationRule::new(r"\.\.", "two dots in a number"),
                ValidationRule::new("//", "two divisions in a row"),
                ValidationRule::new("--", "two minuses in a row"),
                ValidationRule::new(r"\+\+", "two pluses in a row"),
                ValidationRule::new(r"\(\s*\)", "empty parentheses"),
                ValidationRule::new(r";\s*;", "two semicolons in a row"),
                ValidationRule::new(
                    "[eE]{2,}",
                    "malformed exponential number (double e/E)",
                ),
                ValidationRule::with_guard(
                    r"\d+\.\d+[eE][-+]?\d*\.\d+",
                    "malformed exponential float",
                    not_preceded_by_exponent,
                ),
                ValidationRule::new(
                    r"[eE][-+]{2,}\d+",
                    "malformed number with double sign in exponent part",
                ),
                // Heuristic: also fires on blank lines and stray whitespace
                // before a newline
                ValidationRule::new(r"[^;]\s*\n", "missing semicolon"),
            ],
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::new()
    }
}

/// Checks `text` against the rule table and reports the first violation by
/// table priority, or `Ok(())` if no rule matches.
///
/// The input is never consumed or mutated, and at most one violation is
/// reported per call.
pub fn validate(text: &str, rules: &RuleTable) -> Result<(), ValidationError> {
    for rule in &rules.rules {
        if let Some(found) = rule.first_match(text) {
            return Err(ValidationError {
                matched_text: found.as_str().to_string(),
                description: rule.description,
            });
        }
    }
    Ok(())
}
