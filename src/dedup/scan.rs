use regex::Regex;
use std::{collections::HashSet, sync::LazyLock};

use super::markers::BlockMarkers;

// Everything before the first colon, at least one character long.
static KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*([^:]+):").unwrap());

/// Extract the key of a `key: value` line.
///
/// Returns `None` when the line has no colon or the colon is the first
/// non-whitespace character.
pub fn extract_key(line: &str) -> Option<&str> {
    KEY_REGEX
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim())
}

/// What the scanner decided for a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineVerdict {
    Keep,
    /// The line repeats `key` inside the block opened by `block`.
    Drop { key: String, block: String },
}

/// Per-file scan state: the currently open block, its brace depth and the
/// keys seen in it so far.
#[derive(Debug, Default)]
pub struct ScanState {
    block: Option<String>,
    depth: i64,
    seen: HashSet<String>,
    blocks_opened: usize,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.block.is_some()
    }

    pub fn blocks_opened(&self) -> usize {
        self.blocks_opened
    }

    /// Feed the next line and decide whether it survives.
    pub fn process_line(&mut self, line: &str, markers: &BlockMarkers) -> LineVerdict {
        if markers.is_header(line) {
            self.open_block(line);
            return LineVerdict::Keep;
        }

        let Some(block) = &self.block else {
            return LineVerdict::Keep;
        };

        self.depth += brace_delta(line);
        if self.depth == 0 {
            self.close_block();
            return LineVerdict::Keep;
        }

        let trimmed = line.trim();
        if !trimmed.contains(':') || markers.is_comment(trimmed) {
            return LineVerdict::Keep;
        }

        let Some(key) = extract_key(line) else {
            return LineVerdict::Keep;
        };

        if self.seen.contains(key) {
            LineVerdict::Drop {
                key: key.to_string(),
                block: block.trim().to_string(),
            }
        } else {
            self.seen.insert(key.to_string());
            LineVerdict::Keep
        }
    }

    fn open_block(&mut self, header: &str) {
        self.block = Some(header.to_string());
        self.depth = 1;
        self.seen.clear();
        self.blocks_opened += 1;
    }

    fn close_block(&mut self) {
        self.block = None;
        self.seen.clear();
    }
}

fn brace_delta(line: &str) -> i64 {
    line.chars().fold(0, |delta, c| match c {
        '{' => delta + 1,
        '}' => delta - 1,
        _ => delta,
    })
}
