//! Consolidation - concurrent fan-out of classify, filter and link per entry.
//!
//! The input directory is listed exactly once; every immediate child then
//! becomes an independent unit of work. Units share nothing but the output
//! tree, whose mutations (recursive directory creation, single-slot symlink
//! replacement) are idempotent, so no ordering between units is required.

pub mod error;
mod report;

pub use error::ConsolidateError;
pub use report::{EntryOutcome, Outcome, Report};

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::filters::IgnoreRules;
use crate::linker;
use crate::patterns::NamePattern;

/// One immediate child of the input directory, captured at listing time
///
/// Handed by value to its unit of work; no unit sees another's entry.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Folder name as stored on disk
    pub name: OsString,
    /// Unix permission bits of the source, when obtainable
    pub mode: Option<u32>,
}

/// Orchestrates classification, filtering and linking over a directory
///
/// ```no_run
/// use sortr::consolidate::Consolidator;
/// use sortr::filters::IgnoreRules;
/// use sortr::patterns::NamePattern;
/// use std::path::Path;
///
/// let report = Consolidator::new(NamePattern::default_convention(), IgnoreRules::default())
///     .run(Path::new("albums"), Path::new("by-genre"))
///     .unwrap();
/// println!("linked {}", report.linked);
/// ```
#[derive(Debug)]
pub struct Consolidator {
    pattern: NamePattern,
    rules: IgnoreRules,
    dry_run: bool,
}

impl Consolidator {
    #[must_use]
    pub const fn new(pattern: NamePattern, rules: IgnoreRules) -> Self {
        Self {
            pattern,
            rules,
            dry_run: false,
        }
    }

    /// Compute destinations without touching the output tree.
    #[must_use]
    pub const fn dry_run(mut self, v: bool) -> Self {
        self.dry_run = v;
        self
    }

    /// Link every classifiable child of `in_dir` under
    /// `out_dir/<group>/<member>`.
    ///
    /// Entries run concurrently and fail independently; the report accounts
    /// for every listed entry exactly once. Only the initial listing aborts
    /// the run.
    ///
    /// # Errors
    /// Returns `ConsolidateError::ReadDir` if `in_dir` cannot be listed.
    pub fn run(&self, in_dir: &Path, out_dir: &Path) -> Result<Report, ConsolidateError> {
        let entries = list_entries(in_dir)?;
        let outcomes: Vec<EntryOutcome> = entries
            .into_par_iter()
            .map(|entry| self.process(entry, in_dir, out_dir))
            .collect();
        Ok(Report::from_outcomes(outcomes))
    }

    /// Run one entry to its terminal outcome. Infallible by design: every
    /// failure becomes a `Failed` outcome for this entry alone.
    fn process(&self, entry: Entry, in_dir: &Path, out_dir: &Path) -> EntryOutcome {
        let display = entry.name.to_string_lossy().into_owned();

        let classified = match self.pattern.classify(&display) {
            Ok(c) => c,
            Err(e) => return EntryOutcome::failed(display, e.to_string()),
        };

        if let Some(reason) = self
            .rules
            .ignore_reason(&classified.group, &classified.member)
        {
            return EntryOutcome::skipped(display, reason);
        }

        if self.dry_run {
            let dest = out_dir.join(&classified.group).join(&classified.member);
            return EntryOutcome::linked(display, dest);
        }

        match linker::place_link(
            in_dir,
            out_dir,
            &classified.group,
            &classified.member,
            &entry.name,
            entry.mode,
        ) {
            Ok(dest) => EntryOutcome::linked(display, dest),
            Err(e) => EntryOutcome::failed(display, e.to_string()),
        }
    }
}

fn list_entries(in_dir: &Path) -> Result<Vec<Entry>, ConsolidateError> {
    let read_dir = fs::read_dir(in_dir).map_err(|e| ConsolidateError::ReadDir {
        path: in_dir.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for dirent in read_dir {
        let dirent = dirent.map_err(|e| ConsolidateError::ReadDir {
            path: in_dir.to_path_buf(),
            source: e,
        })?;
        entries.push(Entry {
            mode: entry_mode(&dirent),
            name: dirent.file_name(),
        });
    }
    Ok(entries)
}

#[cfg(unix)]
fn entry_mode(dirent: &fs::DirEntry) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    dirent.metadata().ok().map(|m| m.permissions().mode())
}

#[cfg(not(unix))]
fn entry_mode(_dirent: &fs::DirEntry) -> Option<u32> {
    None
}
