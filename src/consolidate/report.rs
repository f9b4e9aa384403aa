use std::path::PathBuf;

use serde::Serialize;

/// Terminal outcome of one entry, reached exactly once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Symlink placed (or planned, on a dry run) at `dest`
    Linked { dest: PathBuf },
    /// Entry intentionally excluded by an ignore rule
    Skipped { reason: String },
    /// Classification or linking failed for this entry alone
    Failed { reason: String },
}

/// Entry name paired with its terminal outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl EntryOutcome {
    #[must_use]
    pub const fn linked(name: String, dest: PathBuf) -> Self {
        Self {
            name,
            outcome: Outcome::Linked { dest },
        }
    }

    #[must_use]
    pub const fn skipped(name: String, reason: String) -> Self {
        Self {
            name,
            outcome: Outcome::Skipped { reason },
        }
    }

    #[must_use]
    pub const fn failed(name: String, reason: String) -> Self {
        Self {
            name,
            outcome: Outcome::Failed { reason },
        }
    }
}

/// Aggregated results of one consolidation run
///
/// Holds every entry's outcome in listing order, so a caller can log or
/// re-drive failures individually. Counts always sum to the number of
/// listed entries.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub linked: usize,
    pub skipped: usize,
    pub failed: usize,
    pub entries: Vec<EntryOutcome>,
}

impl Report {
    /// Fold per-unit outcomes into counts.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<EntryOutcome>) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            report.record(outcome);
        }
        report
    }

    pub fn record(&mut self, outcome: EntryOutcome) {
        match outcome.outcome {
            Outcome::Linked { .. } => self.linked += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
        self.entries.push(outcome);
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.linked + self.skipped + self.failed
    }

    /// Entries that did not end up linked, with their reasons.
    pub fn problems(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|entry| match &entry.outcome {
            Outcome::Linked { .. } => None,
            Outcome::Skipped { reason } | Outcome::Failed { reason } => {
                Some((entry.name.as_str(), reason.as_str()))
            }
        })
    }
}
