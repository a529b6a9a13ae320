//! Language definitions
//!
//! A LanguageDefinition bundles everything needed to highlight one
//! language: its rule table, its block-comment markers, and the MIME
//! types and file extensions used to detect it. Definitions are built
//! once at registry construction and are read-only afterwards.

use crate::highlighter::{self, BlockState, CommentMarkers, HighlightResult};
use crate::rules::RuleTable;

/// A complete language definition for syntax highlighting
pub struct LanguageDefinition {
    /// Language name (e.g. "C/C++")
    pub name: String,
    /// MIME types this language claims (e.g. "text/x-csrc")
    pub mime_types: Vec<String>,
    /// File extensions including the dot (e.g. ".cpp"), matched as
    /// suffixes of the lowercased path
    pub extensions: Vec<String>,
    /// Ordered rule table
    pub rules: RuleTable,
    /// Block-comment open/close markers
    pub comment_markers: CommentMarkers,
}

impl LanguageDefinition {
    /// Create a definition with no detection data yet
    pub fn new(name: &str, rules: RuleTable, comment_markers: CommentMarkers) -> Self {
        Self {
            name: name.to_string(),
            mime_types: Vec::new(),
            extensions: Vec::new(),
            rules,
            comment_markers,
        }
    }

    /// Add a MIME type
    pub fn add_mime_type(&mut self, mime: &str) {
        self.mime_types.push(mime.to_string());
    }

    /// Add a file extension (with leading dot)
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_lowercase());
    }

    /// Highlight one block of this language
    ///
    /// Convenience wrapper over [`crate::highlight_block`] with this
    /// language's rule table and comment markers.
    pub fn highlight_block(&self, text: &str, incoming: BlockState) -> HighlightResult {
        highlighter::highlight_block(text, incoming, &self.rules, &self.comment_markers)
    }
}
