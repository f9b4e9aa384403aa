//! Classification patterns - extracting a group/member pair from folder names.

pub mod error;

pub use error::{ClassifyError, PatternError};

use regex::Regex;

/// Named capture every classification pattern must define for the group
const GROUP_CAPTURE: &str = "group";
/// Named capture every classification pattern must define for the member
const MEMBER_CAPTURE: &str = "member";

/// Compatibility convention: group is the text between the first `[` and the
/// next `]`, member is the remaining text after the closing bracket.
const DEFAULT_PATTERN: &str = r"^[^\[]*\[(?P<group>[^\]]+)\](?P<member>.+)$";

/// Group/member pair extracted from a folder name
///
/// The group is lower-cased so that `[Rock]` and `[rock]` land in the same
/// destination folder; the member keeps its casing and is only trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub group: String,
    pub member: String,
}

/// Compiled classification pattern with `group` and `member` captures
///
/// Validation happens once at construction; a pattern that does not expose
/// exactly the two named captures is a configuration error, never a
/// per-entry runtime error.
#[derive(Debug, Clone)]
pub struct NamePattern {
    original: String,
    compiled: Regex,
    /// Fast-reject names lacking the `[`/`]` markers before matching.
    /// Only set for the default bracket convention.
    bracket_markers: bool,
}

impl NamePattern {
    /// Compile a classification pattern.
    ///
    /// # Errors
    /// * Returns `PatternError::InvalidEmpty` if `pattern` is empty.
    /// * Returns `PatternError::InvalidRegex` if the pattern fails to compile.
    /// * Returns `PatternError::MissingCaptures` unless the named captures
    ///   are exactly `group` and `member`.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::InvalidEmpty);
        }
        let compiled =
            Regex::new(pattern).map_err(|e| PatternError::regex_compile(pattern, &e.to_string()))?;
        let mut names: Vec<&str> = compiled.capture_names().flatten().collect();
        names.sort_unstable();
        if names != [GROUP_CAPTURE, MEMBER_CAPTURE] {
            return Err(PatternError::MissingCaptures {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self {
            original: pattern.to_string(),
            compiled,
            bracket_markers: false,
        })
    }

    /// Pattern implementing the default `[group] member` bracket convention.
    #[must_use]
    pub fn default_convention() -> Self {
        let mut pattern =
            Self::new(DEFAULT_PATTERN).expect("default pattern defines group/member captures");
        pattern.bracket_markers = true;
        pattern
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Extract the group/member pair from a folder name.
    ///
    /// The name is trimmed before matching. Under the default convention,
    /// names without both bracket markers are rejected up front, skipping
    /// the regex entirely.
    ///
    /// # Errors
    /// * Returns `ClassifyError::MalformedName` when the trimmed name lacks
    ///   the `[`/`]` markers the default convention expects.
    /// * Returns `ClassifyError::UnparsableName` when the pattern does not
    ///   match or yields an empty group or member.
    pub fn classify(&self, name: &str) -> Result<Classification, ClassifyError> {
        let trimmed = name.trim();
        if self.bracket_markers && !(trimmed.contains('[') && trimmed.contains(']')) {
            return Err(ClassifyError::MalformedName {
                name: trimmed.to_string(),
            });
        }

        let unparsable = || ClassifyError::UnparsableName {
            name: trimmed.to_string(),
        };
        let caps = self.compiled.captures(trimmed).ok_or_else(unparsable)?;

        let group = caps
            .name(GROUP_CAPTURE)
            .map(|m| m.as_str().to_lowercase())
            .ok_or_else(unparsable)?;
        let member = caps
            .name(MEMBER_CAPTURE)
            .map(|m| m.as_str().trim().to_string())
            .ok_or_else(unparsable)?;

        if group.is_empty() || member.is_empty() {
            return Err(unparsable());
        }

        Ok(Classification { group, member })
    }
}
