//! Base tokenization of a single line
//!
//! This module provides the raw tokenization using the logos lexer library. A line becomes a
//! flat sequence of whitespace runs, `::` separators, bullet marker characters and text runs,
//! each paired with its byte span. Line classification works on this sequence, never on the
//! raw string.

use logos::Logos;

/// Raw tokens inside one line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTok {
    /// A run of whitespace (any Unicode whitespace, tabs included and not expanded)
    #[regex(r"\s+")]
    Whitespace,

    /// The definition separator
    #[token("::")]
    DefinitionMarker,

    /// A lone colon
    #[token(":")]
    Colon,

    /// One of the bullet marker characters
    #[regex(r"[-*+]")]
    BulletMarker,

    /// Any run of other characters
    #[regex(r"[^\s:*+\-]+")]
    Text,
}

/// Tokenize a line, pairing each token with its byte span.
pub fn tokenize(line: &str) -> Vec<(LineTok, logos::Span)> {
    let mut lexer = LineTok::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<LineTok> {
        tokenize(line).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_tokenizes_words() {
        assert_eq!(
            kinds("hello world"),
            vec![LineTok::Text, LineTok::Whitespace, LineTok::Text]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_double_colon_wins_over_colon() {
        assert_eq!(
            kinds("a:::b"),
            vec![
                LineTok::Text,
                LineTok::DefinitionMarker,
                LineTok::Colon,
                LineTok::Text
            ]
        );
    }

    #[test]
    fn test_bullet_markers_and_spans() {
        let tokens = tokenize("  - item");
        assert_eq!(tokens[0], (LineTok::Whitespace, 0..2));
        assert_eq!(tokens[1], (LineTok::BulletMarker, 2..3));
        assert_eq!(tokens[2], (LineTok::Whitespace, 3..4));
        assert_eq!(tokens[3], (LineTok::Text, 4..8));
    }

    #[test]
    fn test_tab_is_whitespace() {
        assert_eq!(kinds("\tcode"), vec![LineTok::Whitespace, LineTok::Text]);
    }
}
