//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for sortr using the `clap` crate.
//! It is a thin layer: it validates nothing beyond argument shape and hands
//! a compiled pattern, paths and ignore lists to the consolidation core.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "sortr")]
#[command(about = "Consolidate tagged folders into a grouped symlink tree", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print the summary counts)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Link tagged folders from IN_DIR under OUT_DIR/<group>/<member>
    #[command(visible_alias = "c")]
    Consolidate {
        /// Directory whose immediate children carry [group] markers
        #[arg(value_name = "IN_DIR")]
        in_dir: PathBuf,

        /// Root of the symlink tree to build
        #[arg(value_name = "OUT_DIR")]
        out_dir: PathBuf,

        /// Classification pattern with 'group' and 'member' named captures
        #[arg(short = 'p', long = "pattern", value_name = "PATTERN")]
        pattern: Option<String>,

        /// Skip entries whose group contains this substring (repeatable)
        #[arg(short = 'g', long = "ignore-group", value_name = "SUBSTR")]
        ignore_groups: Vec<String>,

        /// Skip entries whose member contains this substring (repeatable)
        #[arg(short = 'm', long = "ignore-member", value_name = "SUBSTR")]
        ignore_members: Vec<String>,

        /// Preview destinations without creating links
        #[arg(short = 'n', long = "dry-run")]
        dry_run: bool,

        /// Print the report as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Write completions for `shell` to stdout.
    pub fn print_completions(shell: Shell) {
        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    }
}
