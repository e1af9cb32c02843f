use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;

use super::super::{args::DedupeArgs, report};
use super::{CommandResult, CommandSummary, DedupeSummary, FileReport, RunContext};
use crate::{dedup::BlockMarkers, source_file::SourceFile};

pub fn dedupe(args: DedupeArgs) -> Result<CommandResult> {
    let ctx = RunContext::new(&args.common)?;
    let backup_extension = (args.backup || ctx.config.backup)
        .then_some(ctx.config.backup_extension.as_str());

    // Files are independent of each other; collect keeps input order.
    let results: Vec<Result<FileReport>> = ctx
        .files
        .par_iter()
        .map(|path| dedupe_file(path, &ctx.markers, backup_extension))
        .collect();

    let show_paths = results.len() > 1;
    let mut files = Vec::with_capacity(results.len());
    let mut first_error = None;
    for result in results {
        match result {
            Ok(report) => files.push(report),
            Err(err) if first_error.is_none() => first_error = Some(err),
            Err(_) => {}
        }
    }

    // Other files are already rewritten on disk; their removals still get reported.
    if let Some(err) = first_error {
        report::print_partial_dedupe(&files, show_paths, args.common.verbose);
        return Err(err);
    }

    Ok(CommandResult::new(
        CommandSummary::Dedupe(DedupeSummary { files }),
        false,
    ))
}

/// Deduplicate one file and write it back, always, even when nothing changed.
pub fn dedupe_file(
    path: &Path,
    markers: &BlockMarkers,
    backup_extension: Option<&str>,
) -> Result<FileReport> {
    let mut file = SourceFile::open(path)?;
    let outcome = file.dedupe(markers);

    let backup: Option<PathBuf> = match backup_extension {
        Some(extension) => Some(file.backup(extension)?),
        None => None,
    };
    file.save()?;

    Ok(FileReport::new(path.to_path_buf(), outcome, backup))
}
