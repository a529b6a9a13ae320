//! Style types for text rendering
//!
//! This module provides the value types the rendering layer consumes:
//! colors, text attributes, and styled spans within a single block.

use crate::error::HighlightError;

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string
    pub fn from_hex(hex: &str) -> Result<Self, HighlightError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| HighlightError::BadColor(hex.to_string()))?;
        let parse = |s: &str| u8::from_str_radix(s, 16);
        Ok(Self {
            r: parse(&digits[0..2]).map_err(|_| HighlightError::BadColor(hex.to_string()))?,
            g: parse(&digits[2..4]).map_err(|_| HighlightError::BadColor(hex.to_string()))?,
            b: parse(&digits[4..6]).map_err(|_| HighlightError::BadColor(hex.to_string()))?,
        })
    }
}

/// Text style attributes
///
/// Immutable once constructed; rules share styles by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color (None = inherit the surface default)
    pub fg: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just a foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A styled span of text within a block
///
/// Offsets are byte positions in the block's own coordinate space.
/// Spans from different rules may overlap; the renderer applies them
/// in order, so a later span paints over an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Style to apply to this span
    pub style: Style,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#C586C0").unwrap(), Color::new(0xC5, 0x86, 0xC0));
        assert_eq!(Color::from_hex("#000000").unwrap(), Color::new(0, 0, 0));
        assert!(Color::from_hex("C586C0").is_err());
        assert!(Color::from_hex("#C586").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::new(255, 0, 0)).with_bold();
        assert_eq!(style.fg, Some(Color::new(255, 0, 0)));
        assert!(style.bold);
        assert!(!style.italic);
        assert!(!style.is_default());
        assert!(Style::default().is_default());
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10, Style::default());
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }
}
