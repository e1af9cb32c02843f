/// Default marker that opens a language tag, e.g. `[Language.EN]: {`.
pub const DEFAULT_HEADER_PREFIX: &str = "[Language.";

/// Default marker that closes the language tag and opens the block.
pub const DEFAULT_HEADER_SUFFIX: &str = "]: {";

/// Default line comment marker.
pub const DEFAULT_COMMENT_PREFIX: &str = "//";

/// Textual markers used to recognize language blocks and comment lines.
///
/// A line is a block header when it contains both `header_prefix` and
/// `header_suffix`. A line is a comment when its trimmed form starts
/// with `comment_prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMarkers {
    pub header_prefix: String,
    pub header_suffix: String,
    pub comment_prefix: String,
}

impl Default for BlockMarkers {
    fn default() -> Self {
        Self {
            header_prefix: DEFAULT_HEADER_PREFIX.to_string(),
            header_suffix: DEFAULT_HEADER_SUFFIX.to_string(),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
        }
    }
}

impl BlockMarkers {
    pub fn is_header(&self, line: &str) -> bool {
        line.contains(&self.header_prefix) && line.contains(&self.header_suffix)
    }

    /// `trimmed` must already be stripped of surrounding whitespace.
    pub fn is_comment(&self, trimmed: &str) -> bool {
        trimmed.starts_with(&self.comment_prefix)
    }
}
