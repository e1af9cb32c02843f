//! Report formatting and printing utilities.
//!
//! Results go to stdout; verbose notes go to stderr. Every printer has a
//! `*_to` variant taking a writer so the output can be tested.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CheckSummary, CommandResult, CommandSummary, DedupeSummary, FileReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, &mut io::stdout().lock());
    if verbose {
        print_notes_to(result.summary.files(), &mut io::stderr().lock());
    }
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Dedupe(summary) => print_dedupe(summary, writer),
        CommandSummary::Check(summary) => print_check(summary, result.duplicate_count, writer),
        CommandSummary::Init(summary) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.path.display()).green()
            );
        }
    }
}

/// Removals for files that were rewritten before a later file failed.
///
/// No completion message: the run is about to end with an error.
pub fn print_partial_dedupe(files: &[FileReport], show_paths: bool, verbose: bool) {
    print_removals_to(files, show_paths, &mut io::stdout().lock());
    if verbose {
        print_notes_to(files, &mut io::stderr().lock());
    }
}

pub fn print_removals_to<W: Write>(files: &[FileReport], show_paths: bool, writer: &mut W) {
    for file in files {
        if file.removed.is_empty() {
            continue;
        }
        if show_paths {
            print_path_heading(file, writer);
        }
        for duplicate in &file.removed {
            let _ = writeln!(
                writer,
                "Removing duplicate key '{}' from {}",
                duplicate.key.yellow(),
                duplicate.block
            );
        }
    }
}

/// Per-file details shown with `--verbose`.
pub fn print_notes_to<W: Write>(files: &[FileReport], writer: &mut W) {
    for file in files {
        let _ = writeln!(
            writer,
            "Note: {}: {} language block(s), {} duplicate key(s)",
            file.path.display(),
            file.blocks,
            file.removed.len()
        );
        if file.unterminated {
            let _ = writeln!(
                writer,
                "{} {}: language block is still open at end of file",
                "warning:".bold().yellow(),
                file.path.display()
            );
        }
        if let Some(backup) = &file.backup {
            let _ = writeln!(writer, "Note: Backup written to {}", backup.display());
        }
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_dedupe<W: Write>(summary: &DedupeSummary, writer: &mut W) {
    print_removals_to(&summary.files, summary.files.len() > 1, writer);

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        "Translation deduplication completed successfully!".green()
    );
}

fn print_check<W: Write>(summary: &CheckSummary, total: usize, writer: &mut W) {
    for file in &summary.files {
        for duplicate in &file.removed {
            let _ = writeln!(
                writer,
                "{}: duplicate key '{}' in {}",
                "warning".bold().yellow(),
                duplicate.key,
                duplicate.block
            );
            let _ = writeln!(
                writer,
                "  {} {}:{}",
                "-->".blue(),
                file.path.display(),
                duplicate.line
            );
        }
    }

    let file_count = summary.files.len();
    if total > 0 {
        let affected = summary
            .files
            .iter()
            .filter(|f| !f.removed.is_empty())
            .count();
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Found {} duplicate key(s) in {} file(s)",
                total, affected
            )
            .red()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} - no duplicate keys found",
                file_count,
                if file_count == 1 { "file" } else { "files" }
            )
            .green()
        );
    }
}

fn print_path_heading<W: Write>(file: &FileReport, writer: &mut W) {
    let _ = writeln!(writer, "{}", file.path.display().to_string().bold());
}

// ============================================================
// Tests
// ============================================================
