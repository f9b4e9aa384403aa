use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a run before any per-entry work is dispatched
///
/// Everything that can go wrong after listing is contained to a single
/// entry and reported through the run's [`Report`](super::Report) instead.
#[derive(Debug, Error)]
pub enum ConsolidateError {
    /// Input directory could not be listed
    #[error("failed to read input directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
