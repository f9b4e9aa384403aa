//! Summary rendering for consolidation reports.
//!
//! One diagnostic line per non-linked entry, then a colored summary block.
//! Quiet mode collapses everything to a single counts line for scripting.

use colored::Colorize;

use crate::consolidate::{Outcome, Report};

/// Print per-entry diagnostics and the summary block.
pub fn print_report(report: &Report, quiet: bool) {
    if quiet {
        println!(
            "linked {} skipped {} failed {}",
            report.linked, report.skipped, report.failed
        );
        return;
    }

    for entry in &report.entries {
        match &entry.outcome {
            Outcome::Linked { .. } => {}
            Outcome::Skipped { reason } => {
                println!("  {} {}: {reason}", "⊘".yellow(), entry.name);
            }
            Outcome::Failed { reason } => {
                println!("  {} {}: {reason}", "✗".red(), entry.name);
            }
        }
    }

    println!("\n{}", "=== Consolidation Summary ===".bold());
    println!("  {} {}", "✓ Linked:".green(), report.linked);
    if report.skipped > 0 {
        println!("  {} {}", "⊘ Skipped:".yellow(), report.skipped);
    }
    if report.failed > 0 {
        println!("  {} {}", "✗ Failed:".red(), report.failed);
    }
}

/// Print the destinations a dry run would create.
pub fn print_plan(report: &Report) {
    println!("{}", "=== Dry Run Mode ===".yellow().bold());
    for entry in &report.entries {
        if let Outcome::Linked { dest } = &entry.outcome {
            println!("  {} -> {}", entry.name, dest.display());
        }
    }
    println!("{}", "Run without --dry-run to create the links.".yellow());
}

/// Print the report as pretty JSON.
///
/// # Errors
/// Returns an error if the report cannot be serialized.
pub fn print_json(report: &Report) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
