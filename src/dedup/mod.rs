//! Duplicate key removal for generated translation sources.
//!
//! The input is treated as plain text. Language blocks are found by a
//! header marker and closed by brace counting; inside a block, any
//! `key: value` line whose key was already seen in the same block is
//! dropped. Nothing else is changed: line order, line endings (`\n`,
//! `\r\n` or a lone `\r`, kept per line) and the trailing newline all
//! survive untouched.
//!
//! ```
//! use keydedup::dedup::{BlockMarkers, dedupe_text};
//!
//! let input = "[Language.EN]: {\n  hi: 'a',\n  hi: 'b',\n},\n";
//! let outcome = dedupe_text(input, &BlockMarkers::default());
//!
//! assert_eq!(outcome.content, "[Language.EN]: {\n  hi: 'a',\n},\n");
//! assert_eq!(outcome.removed.len(), 1);
//! ```

mod markers;
mod scan;

pub use markers::{
    BlockMarkers, DEFAULT_COMMENT_PREFIX, DEFAULT_HEADER_PREFIX, DEFAULT_HEADER_SUFFIX,
};
pub use scan::{LineVerdict, ScanState, extract_key};

/// A key definition that was dropped because its block already had it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub key: String,
    /// Header line of the enclosing block, trimmed.
    pub block: String,
    /// 1-based line number in the original input.
    pub line: usize,
}

/// Result of deduplicating one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupOutcome {
    pub content: String,
    /// Removed lines, in input order.
    pub removed: Vec<DuplicateKey>,
    /// Number of language blocks that were opened.
    pub blocks: usize,
    /// True if the input ended while a block was still open.
    pub unterminated: bool,
}

impl DedupOutcome {
    pub fn has_duplicates(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Remove duplicate keys from every language block in `content`.
pub fn dedupe_text(content: &str, markers: &BlockMarkers) -> DedupOutcome {
    let mut state = ScanState::new();
    let mut kept: Vec<(&str, &str)> = Vec::new();
    let mut removed = Vec::new();

    for (idx, (line, ending)) in split_lines(content).into_iter().enumerate() {
        match state.process_line(line, markers) {
            LineVerdict::Keep => kept.push((line, ending)),
            LineVerdict::Drop { key, block } => removed.push(DuplicateKey {
                key,
                block,
                line: idx + 1,
            }),
        }
    }

    // Kept lines are joined by their own endings; the last one gets none.
    let mut output = String::with_capacity(content.len());
    let last = kept.len().saturating_sub(1);
    for (idx, (line, ending)) in kept.into_iter().enumerate() {
        output.push_str(line);
        if idx < last {
            output.push_str(ending);
        }
    }

    DedupOutcome {
        content: output,
        removed,
        blocks: state.blocks_opened(),
        unterminated: state.is_active(),
    }
}

/// Split `content` into `(line, ending)` pairs.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The final segment has an
/// empty ending and is always present, so `"a\n"` yields `a` and `""`.
fn split_lines(content: &str) -> Vec<(&str, &str)> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        let ending_len = match bytes[idx] {
            b'\n' => 1,
            b'\r' if bytes.get(idx + 1) == Some(&b'\n') => 2,
            b'\r' => 1,
            _ => {
                idx += 1;
                continue;
            }
        };
        lines.push((&content[start..idx], &content[idx..idx + ending_len]));
        idx += ending_len;
        start = idx;
    }
    lines.push((&content[start..], ""));

    lines
}
