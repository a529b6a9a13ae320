//! Language registry
//!
//! Maps a detected MIME type or a file-path suffix to a registered
//! LanguageDefinition. The registry is an explicitly constructed
//! instance owned by the editor session; there is no ambient global
//! table. "No match" is a normal outcome meaning plain text.

use crate::builtin;
use crate::language::LanguageDefinition;
use crate::theme::Theme;

/// Parent MIME types a given type inherits from, freedesktop style.
/// Every text/* type ultimately inherits text/plain.
fn mime_parents(mime: &str) -> &'static [&'static str] {
    match mime {
        "text/x-c++src" => &["text/x-csrc"],
        "text/x-c++hdr" => &["text/x-chdr"],
        "text/x-chdr" => &["text/x-csrc"],
        "text/x-csrc" => &["text/plain"],
        m if m.starts_with("text/") && m != "text/plain" => &["text/plain"],
        _ => &[],
    }
}

/// Check whether `mime` is `ancestor` or inherits from it
fn mime_inherits(mime: &str, ancestor: &str) -> bool {
    if mime == ancestor {
        return true;
    }
    mime_parents(mime)
        .iter()
        .any(|parent| mime_inherits(parent, ancestor))
}

/// Registry of supported languages
///
/// Languages are tried in registration order for both lookup passes.
pub struct LanguageRegistry {
    languages: Vec<LanguageDefinition>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
        }
    }

    /// Create a registry populated with the built-in languages
    pub fn with_builtins(theme: &Theme) -> Self {
        let mut registry = Self::new();
        for lang in builtin::all_languages(theme) {
            registry.register(lang);
        }
        registry
    }

    /// Register a language definition
    pub fn register(&mut self, lang: LanguageDefinition) {
        self.languages.push(lang);
    }

    /// Registered languages in registration order
    pub fn languages(&self) -> &[LanguageDefinition] {
        &self.languages
    }

    /// Resolve a language from a MIME type and a lowercased file path
    ///
    /// The MIME pass runs first, honoring inherits relationships, so a
    /// specific subtype matches a language that declared its parent.
    /// If nothing matches by MIME, the extension-suffix fallback runs.
    /// `None` means "plain text, no highlighting", not an error.
    pub fn resolve(&self, mime: &str, lower_path: &str) -> Option<&LanguageDefinition> {
        for lang in &self.languages {
            if lang.mime_types.iter().any(|mt| mime_inherits(mime, mt)) {
                return Some(lang);
            }
        }

        for lang in &self.languages {
            if lang.extensions.iter().any(|ext| lower_path.ends_with(ext.as_str())) {
                return Some(lang);
            }
        }

        None
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
