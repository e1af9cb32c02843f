use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::dedup::{BlockMarkers, DedupOutcome, dedupe_text};

/// A translation source file held in memory for in-place deduplication.
///
/// The file is read fully on `open`, rewritten by `dedupe`, and only
/// touched on disk again by `backup` and `save`.
pub struct SourceFile {
    file_path: PathBuf,
    original: String,
    content: String,
}

impl SourceFile {
    /// Open a UTF-8 text file for editing.
    pub fn open(path: &Path) -> Result<Self> {
        let original = fs::read_to_string(path).map_err(|err| {
            let reason = if err.kind() == io::ErrorKind::InvalidData {
                "File is not valid UTF-8"
            } else {
                "Failed to read file"
            };
            anyhow::Error::new(err).context(format!("{}: {}", reason, path.display()))
        })?;
        Ok(Self {
            file_path: path.to_path_buf(),
            content: original.clone(),
            original,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Remove duplicate keys from the in-memory content.
    pub fn dedupe(&mut self, markers: &BlockMarkers) -> DedupOutcome {
        let outcome = dedupe_text(&self.content, markers);
        self.content = outcome.content.clone();
        outcome
    }

    /// Copy the content as it was read to `<file>.<extension>`.
    ///
    /// Returns the path of the backup.
    pub fn backup(&self, extension: &str) -> Result<PathBuf> {
        let backup_path = backup_path(&self.file_path, extension);
        fs::write(&backup_path, &self.original)
            .with_context(|| format!("Failed to write backup: {}", backup_path.display()))?;
        Ok(backup_path)
    }

    /// Overwrite the file with the current content.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.file_path, &self.content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }

    /// Get the current content as a string (for testing).
    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// `translations.ts` + `bak` -> `translations.ts.bak`
pub fn backup_path(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
