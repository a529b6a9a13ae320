//! Token types for syntax highlighting
//!
//! This module defines the semantic token types that can be
//! recognized in source code and their default visual styles.

use crate::style::{Color, Style};

/// Semantic token types for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Language keywords (if, else, return, namespace, etc.)
    Keyword,
    /// Built-in and primitive type names, qualifiers, `[[attr]]` forms
    Type,
    /// Preprocessor directives (#include, #define)
    Preprocessor,
    /// Plain comments (// and /* */)
    Comment,
    /// Documentation comments (/// and /**)
    DocComment,
    /// TODO/FIXME attention markers
    Todo,
    /// String literals ("...")
    String,
    /// Character literals ('...')
    Char,
    /// Raw string literals (R"(...)")
    RawString,
    /// Numeric literals (integers, floats, hex, binary)
    Number,
    /// Operators (+, -, <<, ->, etc.)
    Operator,
}

impl TokenType {
    /// All token types, in rule-category order
    pub const ALL: [TokenType; 11] = [
        TokenType::Keyword,
        TokenType::Type,
        TokenType::Preprocessor,
        TokenType::Comment,
        TokenType::DocComment,
        TokenType::Todo,
        TokenType::String,
        TokenType::Char,
        TokenType::RawString,
        TokenType::Number,
        TokenType::Operator,
    ];

    /// Get the default style for this token type
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Keyword => Style::fg(Color::new(0xC5, 0x86, 0xC0)).with_bold(),
            TokenType::Type => Style::fg(Color::new(0x4F, 0xC1, 0xFF)),
            TokenType::Preprocessor => Style::fg(Color::new(0x56, 0x9C, 0xD6)).with_bold(),
            TokenType::Comment => Style::fg(Color::new(0x6A, 0x99, 0x55)),
            TokenType::DocComment => Style::fg(Color::new(0xB5, 0xCE, 0xA8)).with_bold(),
            TokenType::Todo => Style::fg(Color::new(0xFF, 0x9C, 0x00)).with_bold(),
            TokenType::String => Style::fg(Color::new(0xCE, 0x91, 0x78)),
            TokenType::Char => Style::fg(Color::new(0xCE, 0x91, 0x78)),
            TokenType::RawString => Style::fg(Color::new(0xCE, 0x91, 0x78)),
            TokenType::Number => Style::fg(Color::new(0x4E, 0xC9, 0xB0)),
            TokenType::Operator => Style::fg(Color::new(0xD7, 0xBA, 0x7D)),
        }
    }

    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "Keyword",
            TokenType::Type => "Type",
            TokenType::Preprocessor => "Preprocessor",
            TokenType::Comment => "Comment",
            TokenType::DocComment => "DocComment",
            TokenType::Todo => "Todo",
            TokenType::String => "String",
            TokenType::Char => "Char",
            TokenType::RawString => "RawString",
            TokenType::Number => "Number",
            TokenType::Operator => "Operator",
        }
    }

    /// Parse a token type from a string name (for theme loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }
}
