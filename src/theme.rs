//! Color theme support
//!
//! Loads per-token style overrides from a TOML file. Each top-level
//! table is keyed by a token type name and may set `color`, `bold`
//! and `italic`:
//!
//! ```toml
//! [Keyword]
//! color = "#C586C0"
//! bold = true
//!
//! [Comment]
//! color = "#6A9955"
//! italic = true
//! ```
//!
//! Token types not mentioned keep their built-in defaults. Rule tables
//! are built against a theme, so two tables built from the same theme
//! are identical.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{HighlightError, Result};
use crate::style::{Color, Style};
use crate::tokens::TokenType;

/// A palette of per-token styles
#[derive(Debug, Clone, Default)]
pub struct Theme {
    overrides: HashMap<TokenType, Style>,
}

impl Theme {
    /// Create a theme with no overrides (built-in defaults apply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the style for a token type
    pub fn style_for(&self, token_type: TokenType) -> Style {
        self.overrides
            .get(&token_type)
            .copied()
            .unwrap_or_else(|| token_type.default_style())
    }

    /// Set an explicit style for a token type
    pub fn set_style(&mut self, token_type: TokenType, style: Style) {
        self.overrides.insert(token_type, style);
    }

    /// Load a theme from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse theme TOML contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: toml::Table = contents.parse()?;
        let mut theme = Self::new();

        for (key, value) in &table {
            let token_type = TokenType::from_name(key)
                .ok_or_else(|| HighlightError::UnknownToken(key.clone()))?;
            let mut style = token_type.default_style();

            if let Some(entry) = value.as_table() {
                if let Some(hex) = entry.get("color").and_then(|v| v.as_str()) {
                    style.fg = Some(Color::from_hex(hex)?);
                }
                if let Some(bold) = entry.get("bold").and_then(|v| v.as_bool()) {
                    style.bold = bold;
                }
                if let Some(italic) = entry.get("italic").and_then(|v| v.as_bool()) {
                    style.italic = italic;
                }
            }

            theme.set_style(token_type, style);
        }

        Ok(theme)
    }
}
