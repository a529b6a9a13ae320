//! Block highlighter
//!
//! Highlights one block (line/paragraph) of text at a time. Block-comment
//! state is threaded from each block to the next by the caller; everything
//! else is recomputed per block from the rule table. The scan itself holds
//! no state between calls, so re-highlighting the same input is always
//! bit-identical.

use crate::rules::RuleTable;
use crate::style::Span;

/// Lexical state carried from one block to the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    /// Not inside any multi-line construct
    #[default]
    Normal,
    /// The block ends inside an unterminated block comment
    InBlockComment,
}

impl BlockState {
    /// Check if this state is inside a block comment
    pub fn in_block_comment(&self) -> bool {
        *self == BlockState::InBlockComment
    }
}

/// Literal open/close markers for a language's block comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentMarkers {
    /// Marker that opens a block comment (e.g. `/*`)
    pub open: String,
    /// Marker that closes a block comment (e.g. `*/`)
    pub close: String,
}

impl CommentMarkers {
    /// Create a marker pair
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }
}

/// Result of highlighting a single block
#[derive(Debug)]
pub struct HighlightResult {
    /// Styled spans in application order (later spans render on top)
    pub spans: Vec<Span>,
    /// State at end of block, input for the next block
    pub end_state: BlockState,
}

/// Highlight one block of text
///
/// Runs the multi-line comment scan first, then applies every rule in
/// table order over the full block text. Rule matches are independent
/// of the comment spans; an overlapping later span simply paints over
/// an earlier one at render time.
pub fn highlight_block(
    text: &str,
    incoming: BlockState,
    table: &RuleTable,
    markers: &CommentMarkers,
) -> HighlightResult {
    let mut spans = Vec::new();
    let mut end_state = BlockState::Normal;

    // Multi-line comment scan. A block that begins inside a comment is
    // scanned from offset 0; otherwise from the first open marker.
    // The close marker is searched from the comment start itself, so a
    // marker overlapping the opener (as in "/*/") closes it, matching
    // the behavior documents were highlighted with historically.
    let mut start = match incoming {
        BlockState::InBlockComment => Some(0),
        BlockState::Normal => text.find(&markers.open),
    };
    while let Some(open_at) = start {
        match text[open_at..].find(&markers.close) {
            None => {
                if open_at < text.len() {
                    spans.push(Span::new(open_at, text.len(), table.block_comment_style));
                }
                end_state = BlockState::InBlockComment;
                break;
            }
            Some(rel) => {
                let close_end = open_at + rel + markers.close.len();
                spans.push(Span::new(open_at, close_end, table.block_comment_style));
                start = text[close_end..]
                    .find(&markers.open)
                    .map(|i| close_end + i);
            }
        }
    }

    // Rule pass over the whole block, in registration order.
    for rule in table.rules() {
        rule.apply(text, &mut spans);
    }

    HighlightResult { spans, end_state }
}
