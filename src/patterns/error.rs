use thiserror::Error;

/// Errors produced while constructing a classification pattern
#[derive(Debug, Error)]
pub enum PatternError {
    /// Empty pattern is invalid
    #[error("Empty classification pattern provided")]
    InvalidEmpty,
    /// Regex failed to compile
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },
    /// Pattern does not expose exactly the two required named captures
    #[error("Pattern '{pattern}' must define exactly the named capture groups 'group' and 'member'")]
    MissingCaptures { pattern: String },
}

impl PatternError {
    #[must_use]
    pub fn regex_compile(pattern: &str, reason: &str) -> Self {
        Self::InvalidRegex {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors produced while classifying a single folder name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Name carries no group marker at all
    #[error("malformed name: '{name}' has no [group] marker")]
    MalformedName { name: String },
    /// Name carries markers but the pattern cannot extract a group/member pair
    #[error("unparsable name: '{name}' does not match the classification pattern")]
    UnparsableName { name: String },
}
