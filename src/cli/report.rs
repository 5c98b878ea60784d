//! Report formatting and printing utilities.
//!
//! Keeps user-facing output out of the core pipeline so xgen can be used
//! as a library.

use std::collections::BTreeSet;
use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, GenerateSummary, InitSummary, ListSummary, RunnerSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, verbose, writer),
        CommandSummary::List(summary) => print_list(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_generate<W: Write>(summary: &GenerateSummary, verbose: bool, writer: &mut W) {
    for runner in &summary.runners {
        if summary.is_check {
            print_check_line(runner, writer);
        } else {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Generated {} ({} from {})",
                    runner.file_name,
                    count(runner.pools.len(), "pool"),
                    count(runner.candidate_count, "test file"),
                )
                .green()
            );
        }
        if verbose {
            print_pools(&runner.pools, writer);
        }
    }

    if summary.is_check && summary.runners.iter().any(|r| r.stale) {
        let _ = writeln!(
            writer,
            "Run {} to refresh the stale runners.",
            "xgen generate".cyan()
        );
    }
}

fn print_check_line<W: Write>(runner: &RunnerSummary, writer: &mut W) {
    if runner.stale {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} is out of date", runner.file_name).red()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} is up to date", runner.file_name).green()
        );
    }
}

fn print_list<W: Write>(summary: &ListSummary, writer: &mut W) {
    for entry in &summary.dialects {
        if entry.pools.is_empty() {
            let _ = writeln!(
                writer,
                "{}: no test pools found",
                entry.dialect.to_string().bold()
            );
            continue;
        }

        let _ = writeln!(
            writer,
            "{} ({} from {}):",
            entry.dialect.to_string().bold(),
            count(entry.pools.len(), "pool"),
            count(entry.candidate_count, "test file"),
        );
        print_pools(&entry.pools, writer);
    }
}

fn print_pools<W: Write>(pools: &BTreeSet<String>, writer: &mut W) {
    for pool in pools {
        let _ = writeln!(writer, "  {}", pool);
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn count(n: usize, noun: &str) -> String {
    format!("{} {}{}", n, noun, if n == 1 { "" } else { "s" })
}

// ============================================================
// Tests
// ============================================================
