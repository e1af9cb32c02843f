//! Resolution of command-line targets into file paths.

use std::{collections::HashSet, path::PathBuf};

use anyhow::{Context, Result, bail};

/// Returns true if the target should be expanded as a glob pattern.
///
/// Targets without wildcards are taken literally, so a missing file is
/// reported by the read that follows rather than as an empty match.
pub fn is_glob_pattern(target: &str) -> bool {
    target.contains(['*', '?', '['])
}

/// Expand targets into an ordered, duplicate-free list of file paths.
///
/// An existing file is always taken literally, even if its name contains
/// wildcard characters (`src/[locale]/translations.ts`).
pub fn resolve_targets(targets: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for target in targets {
        let text = target.to_string_lossy();
        if !is_glob_pattern(&text) || target.is_file() {
            if seen.insert(target.clone()) {
                resolved.push(target.clone());
            }
            continue;
        }

        let entries =
            glob::glob(&text).with_context(|| format!("Invalid glob pattern: \"{}\"", text))?;

        let mut matched = 0;
        for entry in entries {
            let path =
                entry.with_context(|| format!("Cannot access path matched by \"{}\"", text))?;
            if !path.is_file() {
                continue;
            }
            matched += 1;
            if seen.insert(path.clone()) {
                resolved.push(path);
            }
        }

        if matched == 0 {
            bail!("No files match pattern \"{}\"", text);
        }
    }

    Ok(resolved)
}
