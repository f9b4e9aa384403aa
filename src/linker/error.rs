use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while placing a symlink, one variant per step
///
/// Every variant is contained to the entry that hit it; linker failures
/// never abort the surrounding run.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Absolute path resolution failed
    #[error("path resolution failed for '{path}': {source}")]
    PathResolution {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Destination parent directory could not be created
    #[error("destination parent creation failed for '{path}': {source}")]
    ParentCreation {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Destination slot could not be inspected
    #[error("destination inspection failed for '{path}': {source}")]
    Inspection {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Stale symlink at the destination could not be removed
    #[error("stale link removal failed for '{path}': {source}")]
    StaleRemoval {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Destination holds a real file or directory, which is never deleted
    #[error("destination occupied by non-link: '{path}'")]
    Occupied { path: PathBuf },
    /// Symlink creation failed
    #[error("symlink creation failed at '{dest}' -> '{src}': {source}")]
    Creation {
        src: PathBuf,
        dest: PathBuf,
        source: std::io::Error,
    },
}
