//! Sortr CLI application entry point
//!
//! This is the main executable for the sortr directory consolidator. It
//! turns a flat directory of tagged folders into a grouped symlink tree.
//!
//! # Usage
//!
//! ```bash
//! # Link every child of ./albums under ./by-genre/<group>/<member>
//! sortr consolidate albums by-genre
//! sortr c albums by-genre
//!
//! # Skip groups or members by substring
//! sortr consolidate albums by-genre -g sampler -m demo
//!
//! # Use a custom classification pattern
//! sortr consolidate albums by-genre -p '^(?P<group>\w+) - (?P<member>.+)$'
//!
//! # Preview without touching the filesystem
//! sortr consolidate albums by-genre --dry-run
//!
//! # Machine-readable report
//! sortr consolidate albums by-genre --json
//! ```
//!
//! # Configuration
//!
//! Default ignore rules and a pattern override can be stored in the user's
//! config directory (`~/.config/sortr/config.toml` on Linux).

use sortr::{
    SortrError,
    cli::{Cli, Commands},
    config::SortrConfig,
    consolidate::Consolidator,
    filters::IgnoreRules,
    output,
    patterns::NamePattern,
};
use std::path::Path;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, SortrError>;

/// Arguments collected for one consolidation run
struct RunArgs {
    pattern: Option<String>,
    ignore_groups: Vec<String>,
    ignore_members: Vec<String>,
    dry_run: bool,
    json: bool,
    quiet: bool,
}

/// Execute a consolidation run and render its report
///
/// The pattern is compiled and validated here, once, before any entry is
/// processed; an invalid pattern is a configuration error rather than a
/// per-entry failure.
///
/// # Errors
///
/// Returns `SortrError` if the pattern is invalid, the input directory
/// cannot be listed, or the report cannot be rendered.
fn handle_consolidate(
    config: &SortrConfig,
    in_dir: &Path,
    out_dir: &Path,
    args: RunArgs,
) -> Result<ExitCode> {
    let pattern = match args.pattern.as_deref().or(config.pattern.as_deref()) {
        Some(p) => NamePattern::new(p)?,
        None => NamePattern::default_convention(),
    };

    let mut rules = IgnoreRules::new(args.ignore_groups, args.ignore_members);
    rules.merge(&IgnoreRules::new(
        config.ignore_groups.clone(),
        config.ignore_members.clone(),
    ));

    let report = Consolidator::new(pattern, rules)
        .dry_run(args.dry_run)
        .run(in_dir, out_dir)?;

    if args.json {
        output::print_json(&report)?;
    } else {
        if args.dry_run && !args.quiet {
            output::print_plan(&report);
        }
        output::print_report(&report, args.quiet);
    }

    Ok(if report.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Load configuration, parse arguments, dispatch.
fn run() -> Result<ExitCode> {
    let config = SortrConfig::load()?;
    let cli = Cli::parse_args();
    let quiet = cli.quiet || config.quiet;

    match cli.command {
        Commands::Completions { shell } => {
            Cli::print_completions(shell);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Consolidate {
            in_dir,
            out_dir,
            pattern,
            ignore_groups,
            ignore_members,
            dry_run,
            json,
        } => handle_consolidate(
            &config,
            &in_dir,
            &out_dir,
            RunArgs {
                pattern,
                ignore_groups,
                ignore_members,
                dry_run,
                json,
                quiet,
            },
        ),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
