//! Title validation for hosts
//!
//! Reducers accept any title, including an empty one. Hosts that take
//! titles from a person run them through [`validate_title`] first.

use crate::config::ValidationConfig;

pub const EMPTY_TITLE: &str = "Please write proper task title";
pub const TITLE_TOO_LONG: &str = "Title too long";
pub const TITLE_SHOULD_BE_SHORTER: &str = "Title should be shorter";

/// Result of validating one title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleValidation {
    /// The trimmed title
    pub title: String,
    pub valid: bool,
    /// Blocking problems
    pub errors: Vec<String>,
    /// Non-blocking hints
    pub warnings: Vec<String>,
}

/// Check `raw` against the configured limits and trim it
///
/// Lengths are counted in characters, not bytes, on the title as typed:
/// surrounding whitespace counts towards the limits even though it is
/// trimmed from the accepted title.
pub fn validate_title(raw: &str, config: &ValidationConfig) -> TitleValidation {
    let title = raw.trim().to_string();
    let length = raw.chars().count();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if title.is_empty() {
        errors.push(EMPTY_TITLE.to_string());
    } else if length >= config.max_title_length {
        errors.push(TITLE_TOO_LONG.to_string());
    } else if length > config.recommended_title_length {
        warnings.push(TITLE_SHOULD_BE_SHORTER.to_string());
    }

    TitleValidation {
        title,
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}
