use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;

use super::super::args::CheckArgs;
use super::{CheckSummary, CommandResult, CommandSummary, FileReport, RunContext};
use crate::{dedup::BlockMarkers, source_file::SourceFile};

pub fn check(args: CheckArgs) -> Result<CommandResult> {
    let ctx = RunContext::new(&args.common)?;

    let files = ctx
        .files
        .par_iter()
        .map(|path| check_file(path, &ctx.markers))
        .collect::<Result<Vec<_>>>()?;

    Ok(CommandResult::new(
        CommandSummary::Check(CheckSummary { files }),
        true,
    ))
}

/// Find duplicate keys in one file without writing anything.
pub fn check_file(path: &Path, markers: &BlockMarkers) -> Result<FileReport> {
    let mut file = SourceFile::open(path)?;
    let outcome = file.dedupe(markers);
    Ok(FileReport::new(file.path().to_path_buf(), outcome, None))
}
