//! Ignore rules - excluding classified entries by substring.
//!
//! Rules are evaluated after classification succeeds and before any
//! filesystem mutation. A skipped entry is not an error.

/// Substring ignore lists for groups and members
///
/// Matching is plain substring containment, not equality: an ignore string
/// of `"a"` skips every group containing the letter `a`. Empty strings are
/// inert so an accidental `""` rule can never skip everything. Group rules
/// are matched against the already lower-cased group value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreRules {
    groups: Vec<String>,
    members: Vec<String>,
}

impl IgnoreRules {
    #[must_use]
    pub const fn new(groups: Vec<String>, members: Vec<String>) -> Self {
        Self { groups, members }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.members.is_empty()
    }

    /// Extend these rules with another set, dropping duplicates.
    ///
    /// CLI-supplied rules take precedence in ordering; config-file defaults
    /// are appended.
    pub fn merge(&mut self, other: &Self) {
        for rule in &other.groups {
            if !self.groups.contains(rule) {
                self.groups.push(rule.clone());
            }
        }
        for rule in &other.members {
            if !self.members.contains(rule) {
                self.members.push(rule.clone());
            }
        }
    }

    /// Whether a classified entry should be skipped.
    #[must_use]
    pub fn should_ignore(&self, group: &str, member: &str) -> bool {
        self.ignore_reason(group, member).is_some()
    }

    /// The matching rule rendered as a skip reason, if any rule matches.
    #[must_use]
    pub fn ignore_reason(&self, group: &str, member: &str) -> Option<String> {
        if let Some(rule) = Self::first_match(&self.groups, group) {
            return Some(format!("group matches ignore rule '{rule}'"));
        }
        if let Some(rule) = Self::first_match(&self.members, member) {
            return Some(format!("member matches ignore rule '{rule}'"));
        }
        None
    }

    fn first_match<'a>(rules: &'a [String], value: &str) -> Option<&'a str> {
        rules
            .iter()
            .find(|rule| !rule.is_empty() && value.contains(rule.as_str()))
            .map(String::as_str)
    }
}
