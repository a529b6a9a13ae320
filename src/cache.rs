//! Per-document highlighting cache
//!
//! The highlighter itself is stateless; this cache is what makes it
//! incremental. It records each block's outgoing state and cached
//! spans, and tells the host whether a block's outgoing state changed
//! relative to the previous run. When it did, every following block
//! needs re-highlighting until the state stabilizes again (e.g. an
//! unterminated `/*` typed in an early block invalidates the rest of
//! the document).
//!
//! One cache per open document; independent documents share nothing.

use crate::highlighter::BlockState;
use crate::style::Span;

/// Cached highlighting data for one document
pub struct HighlightCache {
    /// Outgoing state per block
    states: Vec<BlockState>,
    /// Cached spans per block (None = not computed)
    spans: Vec<Option<Vec<Span>>>,
}

impl HighlightCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            spans: Vec::new(),
        }
    }

    /// Ensure cache vectors cover `block_count` blocks
    pub fn ensure_size(&mut self, block_count: usize) {
        if self.states.len() < block_count {
            self.states.resize(block_count, BlockState::Normal);
        }
        if self.spans.len() < block_count {
            self.spans.resize(block_count, None);
        }
    }

    /// Incoming state for a block (the previous block's outgoing state)
    ///
    /// Block 0 always starts in `Normal`. Valid only once all preceding
    /// blocks have been recorded since the last edit.
    pub fn state_before(&self, block: usize) -> BlockState {
        if block == 0 {
            return BlockState::Normal;
        }
        self.states.get(block - 1).copied().unwrap_or_default()
    }

    /// Record a block's outgoing state and spans
    ///
    /// Returns true when the outgoing state differs from what was
    /// previously recorded for this block, meaning the host must
    /// re-highlight the following blocks too.
    pub fn record(&mut self, block: usize, state: BlockState, spans: Vec<Span>) -> bool {
        self.ensure_size(block + 1);
        let changed = self.states[block] != state;
        self.states[block] = state;
        self.spans[block] = Some(spans);
        changed
    }

    /// Cached spans for a block, if still valid
    pub fn spans(&self, block: usize) -> Option<&[Span]> {
        self.spans.get(block).and_then(|s| s.as_deref())
    }

    /// Drop cached spans from a block onwards (states are kept so that
    /// `record` can still report whether they changed)
    pub fn invalidate_from(&mut self, block: usize) {
        for entry in self.spans.iter_mut().skip(block) {
            *entry = None;
        }
    }

    /// Drop everything (language change, document reload)
    pub fn invalidate_all(&mut self) {
        self.states.clear();
        self.spans.clear();
    }

    /// Number of blocks with recorded data
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for HighlightCache {
    fn default() -> Self {
        Self::new()
    }
}
