//! blocklight - block-scoped incremental syntax highlighting
//!
//! A highlighting engine for editors that store text as a sequence of
//! blocks (lines/paragraphs). Each block is highlighted independently
//! given the lexical state carried over from the previous block, so a
//! host editor only re-highlights the blocks an edit actually affects.
//!
//! The three entry points:
//! - [`builtin::cxx::rule_table`] builds a language's ordered rule
//!   table once (pure, deterministic, shareable across documents),
//! - [`highlight_block`] turns one block plus its incoming
//!   [`BlockState`] into styled spans and the outgoing state,
//! - [`LanguageRegistry::resolve`] maps a MIME type or file-path
//!   suffix to a registered language, or `None` for plain text.
//!
//! [`HighlightCache`] tracks per-block states for one document and
//! reports when an edit's effects ripple into the following blocks.

mod cache;
mod error;
mod highlighter;
mod language;
mod registry;
mod rules;
mod style;
mod theme;
mod tokens;

pub mod builtin;

pub use cache::HighlightCache;
pub use error::{HighlightError, Result};
pub use highlighter::{highlight_block, BlockState, CommentMarkers, HighlightResult};
pub use language::LanguageDefinition;
pub use registry::LanguageRegistry;
pub use rules::{HighlightRule, RuleTable};
pub use style::{Color, Span, Style};
pub use theme::Theme;
pub use tokens::TokenType;
