use std::path::PathBuf;

use crate::dedup::{DedupOutcome, DuplicateKey};

/// What happened to a single translation file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub removed: Vec<DuplicateKey>,
    pub blocks: usize,
    pub unterminated: bool,
    /// Backup written before the file was rewritten, if any.
    pub backup: Option<PathBuf>,
}

impl FileReport {
    pub fn new(path: PathBuf, outcome: DedupOutcome, backup: Option<PathBuf>) -> Self {
        Self {
            path,
            removed: outcome.removed,
            blocks: outcome.blocks,
            unterminated: outcome.unterminated,
            backup,
        }
    }
}

#[derive(Debug)]
pub struct DedupeSummary {
    pub files: Vec<FileReport>,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub files: Vec<FileReport>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

#[derive(Debug)]
pub enum CommandSummary {
    Dedupe(DedupeSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

impl CommandSummary {
    pub fn files(&self) -> &[FileReport] {
        match self {
            CommandSummary::Dedupe(summary) => &summary.files,
            CommandSummary::Check(summary) => &summary.files,
            CommandSummary::Init(_) => &[],
        }
    }
}

/// Result of running keydedup commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Total number of duplicate keys found across all files.
    pub duplicate_count: usize,
    /// If true, exit code 1 should be returned when duplicate_count > 0.
    /// If false, always exit 0 (the duplicates were already removed).
    pub exit_on_duplicates: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, exit_on_duplicates: bool) -> Self {
        let duplicate_count = summary.files().iter().map(|f| f.removed.len()).sum();
        Self {
            summary,
            duplicate_count,
            exit_on_duplicates,
        }
    }
}
