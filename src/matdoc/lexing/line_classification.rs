//! Line Classification
//!
//! Core classification logic for determining line types based on token patterns.
//!
//! The order of the checks is the grammar's precedence:
//!     1. blank (only whitespace)
//!     2. definition (any `::` separator, split at the first one)
//!     3. bullet (`*`, `-` or `+`, then whitespace, then content)
//!     4. plain
//!
//! So a line such as `* Option:: value` is a definition line with the term `* Option`.
use super::base_tokenization::{tokenize, LineTok};
use crate::matdoc::token::{BulletLine, DefinitionLine, PlainLine, Terminal};

/// Classify one input line into a terminal. Total: every string maps to some terminal.
///
/// A trailing line terminator (`\n` or `\r\n`) is ignored.
pub fn classify(line: &str) -> Terminal {
    let line = strip_line_terminator(line);
    let tokens = tokenize(line);

    if is_blank_line(&tokens) {
        return Terminal::Blank;
    }

    let (indent, content_start, first) = leading_indentation(line, &tokens);

    if let Some(definition) = definition_line(line, &tokens, indent, content_start) {
        return Terminal::Definition(definition);
    }
    if let Some(bullet) = bullet_line(line, &tokens[first..], indent) {
        return Terminal::Bullet(bullet);
    }
    Terminal::Plain(PlainLine::new(indent, &line[content_start..]))
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Check if line is blank (only whitespace, or nothing at all)
fn is_blank_line(tokens: &[(LineTok, logos::Span)]) -> bool {
    tokens.iter().all(|(t, _)| matches!(t, LineTok::Whitespace))
}

/// Returns the indentation in characters, the byte offset where content starts, and the index
/// of the first content token.
fn leading_indentation(line: &str, tokens: &[(LineTok, logos::Span)]) -> (usize, usize, usize) {
    match tokens.first() {
        Some((LineTok::Whitespace, span)) => (line[span.clone()].chars().count(), span.end, 1),
        _ => (0, 0, 0),
    }
}

fn definition_line(
    line: &str,
    tokens: &[(LineTok, logos::Span)],
    indent: usize,
    content_start: usize,
) -> Option<DefinitionLine> {
    let (_, separator) = tokens
        .iter()
        .find(|(t, _)| matches!(t, LineTok::DefinitionMarker))?;
    Some(DefinitionLine {
        indent,
        term: line[content_start..separator.start].to_string(),
        inner_text: line[separator.end..].to_string(),
    })
}

/// `tokens` starts at the first content token.
fn bullet_line(
    line: &str,
    tokens: &[(LineTok, logos::Span)],
    indent: usize,
) -> Option<BulletLine> {
    match tokens {
        [(LineTok::BulletMarker, marker), (LineTok::Whitespace, gap), (_, content), ..] => {
            let marker = line[marker.start..gap.end].to_string();
            Some(BulletLine {
                indent,
                inner_indent: indent + marker.chars().count(),
                marker,
                inner_text: line[content.start..].to_string(),
            })
        }
        _ => None,
    }
}
