//! Built-in language definitions
//!
//! The registry is designed for N languages; C/C++ is the one shipped
//! today. Adding a language means adding a module here and listing its
//! factory in `all_languages`.

pub mod cxx;

use crate::language::LanguageDefinition;
use crate::theme::Theme;

/// Get all built-in language definitions, in registration order
pub fn all_languages(theme: &Theme) -> Vec<LanguageDefinition> {
    vec![cxx::language(theme)]
}
