//! Pattern rules for syntax highlighting
//!
//! A rule pairs a single-line regex with the style applied to its
//! matches. Rules are stateless and reentrant; evaluating one never
//! affects another. A rule table is the ordered rule list for one
//! language; registration order is significant because overlapping
//! matches from later rules paint over earlier ones.

use regex::Regex;

use crate::style::{Span, Style};

/// A single-line pattern rule
pub struct HighlightRule {
    /// Name for debugging and determinism checks
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Style to assign to matches
    pub style: Style,
}

impl HighlightRule {
    /// Create a new rule; returns None if the pattern fails to compile
    pub fn new(name: &str, pattern: &str, style: Style) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            style,
        })
    }

    /// Emit a span for every non-overlapping match in the block text
    pub fn apply(&self, text: &str, spans: &mut Vec<Span>) {
        for m in self.pattern.find_iter(text) {
            spans.push(Span::new(m.start(), m.end(), self.style));
        }
    }
}

/// The complete ordered rule list for one language
///
/// Immutable once built; safe to share read-only across documents.
pub struct RuleTable {
    rules: Vec<HighlightRule>,
    /// Style for block-comment spans found by the multi-line scan
    pub block_comment_style: Style,
}

impl RuleTable {
    /// Create an empty table with the given block-comment style
    pub fn new(block_comment_style: Style) -> Self {
        Self {
            rules: Vec::new(),
            block_comment_style,
        }
    }

    /// Append a rule; order of calls fixes application order
    pub fn add(&mut self, rule: HighlightRule) {
        self.rules.push(rule);
    }

    /// Rules in application order
    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    /// Number of rules in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
