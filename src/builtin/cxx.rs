//! C/C++ language definition
//!
//! Builds the ordered rule table for C and C++. Category order is
//! fixed: keywords, types, preprocessor, comments, strings, numbers,
//! operators. Later rules paint over earlier ones on overlap, so the
//! order here is part of the language's visual contract.

use crate::highlighter::CommentMarkers;
use crate::language::LanguageDefinition;
use crate::rules::{HighlightRule, RuleTable};
use crate::theme::Theme;
use crate::tokens::TokenType;

const KEYWORDS: &str = r"\b(?:asm|break|case|catch|co_await|co_return|co_yield|concept|consteval|constinit|continue|decltype|default|delete|do|else|export|for|friend|goto|if|import|module|namespace|new|operator|requires|return|switch|this|throw|try|using|while)\b";

const TYPES: &str = r"\b(?:auto|bool|char|char16_t|char32_t|char8_t|class|const|constexpr|consteval|constinit|double|enum|explicit|extern|FALSE|false|float|inline|int|int16_t|int32_t|int64_t|int8_t|intptr_t|long|mutable|NULL|nullptr|nullptr_t|ptrdiff_t|register|restrict|short|signed|size_t|static|struct|template|thread_local|TRUE|true|typename|uint16_t|uint32_t|uint64_t|uint8_t|uintptr_t|union|unsigned|virtual|void|volatile|wchar_t)\b|\bstd::\w+\b|\[\[\w+\]\]";

const PREPROCESSOR: &str =
    r"^[ \t]*(?:#|%:)\s*(?:ifdef|ifndef|if|elif|else|endif|include|define|undef|pragma|error|warning)\b";

const LINE_COMMENT: &str = r"//[^\n]*";

const DOC_COMMENT: &str = r"///[^\n]*|/\*\*[^\n]*";

const TODO: &str = r"\b(?:TODO|FIXME)\b";

const STRING: &str = r#""(?:[^"\\]|\\.)*""#;

const CHAR: &str = r"'(?:[^'\\]|\\.)*'";

// Best effort: the regex crate has no backreferences, so the closing
// delimiter is not checked against the opening one. Custom delimiters
// may be mismatched; typical R"(...)" forms scan correctly.
const RAW_STRING: &str = r#"\b(?:u8|[uUL])?R"[^"(\\]*\([^)]*\)[^"]*""#;

// Digit separators accept both C++14 ' and _ forms.
const NUMBER: &str = r"\b(?:0[xX][0-9A-Fa-f_']+|0[bB][01_']+|\d[\d_']*(?:\.[\d_']+)?(?:[eE][+-]?\d+)?[fFlL]?)\b";

const OPERATOR: &str = r"[+\-*/%&|^!=<>]=?|\|\||&&|<<=?|>>=?|\+\+|--|\?:|~|->|=>";

/// Build the C/C++ rule table against a theme
pub fn rule_table(theme: &Theme) -> RuleTable {
    let mut table = RuleTable::new(theme.style_for(TokenType::Comment));

    let categories: [(&str, &str, TokenType); 11] = [
        ("keyword", KEYWORDS, TokenType::Keyword),
        ("type", TYPES, TokenType::Type),
        ("preprocessor", PREPROCESSOR, TokenType::Preprocessor),
        ("line_comment", LINE_COMMENT, TokenType::Comment),
        ("doc_comment", DOC_COMMENT, TokenType::DocComment),
        ("todo", TODO, TokenType::Todo),
        ("string", STRING, TokenType::String),
        ("char", CHAR, TokenType::Char),
        ("raw_string", RAW_STRING, TokenType::RawString),
        ("number", NUMBER, TokenType::Number),
        ("operator", OPERATOR, TokenType::Operator),
    ];

    for (name, pattern, token_type) in categories {
        if let Some(rule) = HighlightRule::new(name, pattern, theme.style_for(token_type)) {
            table.add(rule);
        }
    }

    table
}

/// Create the C/C++ language definition
pub fn language(theme: &Theme) -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(
        "C/C++",
        rule_table(theme),
        CommentMarkers::new("/*", "*/"),
    );

    lang.add_mime_type("text/x-csrc");
    lang.add_mime_type("text/x-c++src");
    lang.add_mime_type("text/x-chdr");

    lang.add_extension(".c");
    lang.add_extension(".cpp");
    lang.add_extension(".cxx");
    lang.add_extension(".h");
    lang.add_extension(".hpp");

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlighter::BlockState;
    use crate::style::Span;

    fn lang() -> LanguageDefinition {
        language(&Theme::new())
    }

    fn spans_of<'a>(spans: &'a [Span], token_type: TokenType) -> Vec<&'a Span> {
        let style = token_type.default_style();
        spans.iter().filter(|s| s.style == style).collect()
    }

    #[test]
    fn test_table_is_deterministic() {
        let theme = Theme::new();
        let a = rule_table(&theme);
        let b = rule_table(&theme);
        assert_eq!(a.len(), b.len());
        for (ra, rb) in a.rules().iter().zip(b.rules()) {
            assert_eq!(ra.name, rb.name);
            assert_eq!(ra.pattern.as_str(), rb.pattern.as_str());
            assert_eq!(ra.style, rb.style);
        }
    }

    #[test]
    fn test_category_order() {
        let table = rule_table(&Theme::new());
        let names: Vec<_> = table.rules().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "keyword",
                "type",
                "preprocessor",
                "line_comment",
                "doc_comment",
                "todo",
                "string",
                "char",
                "raw_string",
                "number",
                "operator"
            ]
        );
    }

    #[test]
    fn test_keywords_word_bounded() {
        let result = lang().highlight_block("if (x) return; ifdef", BlockState::Normal);
        let kw = spans_of(&result.spans, TokenType::Keyword);
        let ranges: Vec<_> = kw.iter().map(|s| (s.start, s.end)).collect();
        // "if" and "return" match; "ifdef" does not
        assert_eq!(ranges, [(0, 2), (7, 13)]);
    }

    #[test]
    fn test_types_and_attributes() {
        let result = lang().highlight_block("uint32_t n; [[nodiscard]] std::vector v;", BlockState::Normal);
        let ty = spans_of(&result.spans, TokenType::Type);
        assert!(ty.iter().any(|s| (s.start, s.end) == (0, 8)));
        assert!(ty.iter().any(|s| (s.start, s.end) == (12, 25)));
        assert!(ty.iter().any(|s| (s.start, s.end) == (26, 37)));
    }

    #[test]
    fn test_preprocessor_anchored_to_line_start() {
        let result = lang().highlight_block("  #include <stdio.h>", BlockState::Normal);
        let pre = spans_of(&result.spans, TokenType::Preprocessor);
        assert_eq!(pre.len(), 1);
        assert_eq!((pre[0].start, pre[0].end), (0, 10));

        // A directive keyword mid-line is not a directive
        let result = lang().highlight_block("int x; #define Y", BlockState::Normal);
        assert!(spans_of(&result.spans, TokenType::Preprocessor).is_empty());
    }

    #[test]
    fn test_digraph_preprocessor() {
        let result = lang().highlight_block("%: define X", BlockState::Normal);
        let pre = spans_of(&result.spans, TokenType::Preprocessor);
        assert_eq!(pre.len(), 1);
        assert_eq!(pre[0].start, 0);
    }

    #[test]
    fn test_doc_comment_applied_after_line_comment() {
        let table = rule_table(&Theme::new());
        let names: Vec<_> = table.rules().iter().map(|r| r.name.as_str()).collect();
        let line = names.iter().position(|n| *n == "line_comment").unwrap();
        let doc = names.iter().position(|n| *n == "doc_comment").unwrap();
        assert!(doc > line);

        let result = lang().highlight_block("/// docs", BlockState::Normal);
        assert_eq!(spans_of(&result.spans, TokenType::Comment).len(), 1);
        assert_eq!(spans_of(&result.spans, TokenType::DocComment).len(), 1);
    }

    #[test]
    fn test_string_escapes() {
        let result = lang().highlight_block(r#"s = "a \" b"; t = "x\\";"#, BlockState::Normal);
        let strings = spans_of(&result.spans, TokenType::String);
        let ranges: Vec<_> = strings.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(ranges, [(4, 12), (18, 23)]);
    }

    #[test]
    fn test_char_literal() {
        let result = lang().highlight_block(r"c = '\n';", BlockState::Normal);
        let chars = spans_of(&result.spans, TokenType::Char);
        assert_eq!(chars.len(), 1);
        assert_eq!((chars[0].start, chars[0].end), (4, 8));
    }

    #[test]
    fn test_raw_string_best_effort() {
        let result = lang().highlight_block(r#"auto s = R"(hi "there")";"#, BlockState::Normal);
        let raw = spans_of(&result.spans, TokenType::RawString);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].start, 9);

        let result = lang().highlight_block(r#"auto s = LR"(wide)";"#, BlockState::Normal);
        assert_eq!(spans_of(&result.spans, TokenType::RawString).len(), 1);
    }

    #[test]
    fn test_numeric_literals_single_tokens() {
        let result = lang().highlight_block("0x1A_FF 3.14e-10f 0b1010 1'000'000", BlockState::Normal);
        let nums = spans_of(&result.spans, TokenType::Number);
        let ranges: Vec<_> = nums.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(ranges, [(0, 7), (8, 17), (18, 24), (25, 34)]);
    }

    #[test]
    fn test_operators() {
        // The leading character class wins on alternation, so compound
        // tokens split into char-or-char= pieces; the styled region is
        // the same either way.
        let result = lang().highlight_block("a <<= b && c", BlockState::Normal);
        let ops = spans_of(&result.spans, TokenType::Operator);
        let ranges: Vec<_> = ops.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(ranges, [(2, 3), (3, 5), (8, 9), (9, 10)]);
    }

    #[test]
    fn test_todo_matches_anywhere() {
        // Deliberately unscoped: TODO matches outside comments too
        let result = lang().highlight_block("int TODO = 1; // FIXME later", BlockState::Normal);
        let todos = spans_of(&result.spans, TokenType::Todo);
        let ranges: Vec<_> = todos.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(ranges, [(4, 8), (17, 22)]);
    }

    #[test]
    fn test_themed_table_uses_override() {
        let mut theme = Theme::new();
        let custom = crate::style::Style::fg(crate::style::Color::new(1, 2, 3));
        theme.set_style(TokenType::Keyword, custom);
        let table = rule_table(&theme);
        assert_eq!(table.rules()[0].style, custom);
    }
}
