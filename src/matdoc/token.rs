//! Terminal symbols
//!
//!     Every input line is classified into exactly one terminal, and the stream is closed by an
//!     `EndOfInput` sentinel. Terminals are the only thing the parser looks at: it never sees
//!     raw text.
//!
//!     The line types are:
//!
//!         - Blank: empty or whitespace only
//!         - Definition: a line containing the `::` separator (term :: description)
//!         - Bullet: a line starting with `*`, `-` or `+` followed by whitespace
//!         - Plain: any other line
//!
//!     Classification order matters: a line that has both a bullet marker and a `::` separator
//!     is a definition. See [classify](crate::matdoc::lexing::classify).

use serde::Serialize;
use std::fmt;

/// A non-blank line without bullet or definition markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainLine {
    pub indent: usize,
    pub text: String,
}

impl PlainLine {
    pub fn new(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            text: text.into(),
        }
    }
}

/// A bullet line: `<indent><marker><inner_text>`.
///
/// `marker` holds the marker character plus the whitespace that follows it, so that
/// `inner_indent == indent + marker.chars().count()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletLine {
    pub indent: usize,
    pub marker: String,
    pub inner_indent: usize,
    pub inner_text: String,
}

impl BulletLine {
    /// The synthetic plain line that opens the item body.
    pub fn to_inner_line(&self) -> PlainLine {
        PlainLine::new(self.inner_indent, self.inner_text.clone())
    }
}

/// A definition line: `<indent><term>::<inner_text>`, split at the first `::`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionLine {
    pub indent: usize,
    pub term: String,
    pub inner_text: String,
}

/// One classified input line, or the end of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Terminal {
    EndOfInput,
    Blank,
    Plain(PlainLine),
    Bullet(BulletLine),
    Definition(DefinitionLine),
}

impl Terminal {
    /// Indentation of a line terminal. `Blank` and `EndOfInput` have none.
    pub fn indent(&self) -> Option<usize> {
        match self {
            Terminal::Plain(line) => Some(line.indent),
            Terminal::Bullet(line) => Some(line.indent),
            Terminal::Definition(line) => Some(line.indent),
            Terminal::Blank | Terminal::EndOfInput => None,
        }
    }

    /// The line content after its indentation.
    pub fn text(&self) -> Option<String> {
        match self {
            Terminal::Plain(line) => Some(line.text.clone()),
            Terminal::Bullet(line) => Some(format!("{}{}", line.marker, line.inner_text)),
            Terminal::Definition(line) => Some(format!("{}::{}", line.term, line.inner_text)),
            Terminal::Blank | Terminal::EndOfInput => None,
        }
    }

    /// True for any non-blank line terminal.
    pub fn is_line(&self) -> bool {
        self.indent().is_some()
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Terminal::Blank)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Terminal::EndOfInput)
    }

    /// A line terminal strictly more indented than `baseline`.
    pub fn is_indented_past(&self, baseline: usize) -> bool {
        self.indent().is_some_and(|indent| indent > baseline)
    }

    pub fn is_plain_at(&self, indent: usize) -> bool {
        matches!(self, Terminal::Plain(line) if line.indent == indent)
    }

    pub fn is_bullet_at(&self, indent: usize) -> bool {
        matches!(self, Terminal::Bullet(line) if line.indent == indent)
    }

    pub fn is_definition_at(&self, indent: usize) -> bool {
        matches!(self, Terminal::Definition(line) if line.indent == indent)
    }

    /// Reduce a line terminal to its literal content, as verbatim blocks keep it.
    pub fn into_plain(self) -> Option<PlainLine> {
        let indent = self.indent()?;
        let text = self.text()?;
        Some(PlainLine::new(indent, text))
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::EndOfInput => write!(f, "EOF"),
            Terminal::Blank => write!(f, "BLANK"),
            Terminal::Plain(line) => write!(f, "PLAIN({}): {}", line.indent, line.text),
            Terminal::Bullet(line) => write!(
                f,
                "BULLET({}->{}): {}{}",
                line.indent, line.inner_indent, line.marker, line.inner_text
            ),
            Terminal::Definition(line) => write!(
                f,
                "DEFINITION({}): {}::{}",
                line.indent, line.term, line.inner_text
            ),
        }
    }
}
