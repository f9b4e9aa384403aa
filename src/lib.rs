//! Sortr - a pattern-based directory consolidator
//!
//! This library reorganizes a flat directory of tagged subfolders into a
//! two-level hierarchy: a bracketed group marker is parsed out of each
//! folder name and the folder is linked under `<out>/<group>/<member>` as a
//! symbolic link. Entries are processed concurrently and fail independently.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod consolidate;
pub mod filters;
pub mod linker;
pub mod output;
pub mod patterns;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SortrError {
    /// Pattern construction error
    #[error("Pattern error: {0}")]
    Pattern(#[from] patterns::PatternError),
    /// Fatal consolidation error
    #[error("Consolidation error: {0}")]
    Consolidate(#[from] consolidate::ConsolidateError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Report serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
