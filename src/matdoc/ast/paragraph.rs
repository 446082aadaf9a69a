//! Paragraph and verbatim elements
//!
//! A paragraph is a run of plain lines at exactly the block baseline. A verbatim block is a
//! run of lines indented strictly past the baseline; it keeps its interior blank lines, and
//! its lines are kept literally whatever markers they carry.

use crate::matdoc::token::PlainLine;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub indent: usize,
    pub lines: Vec<PlainLine>,
}

impl Paragraph {
    pub fn new(indent: usize, lines: Vec<PlainLine>) -> Self {
        Self { indent, lines }
    }

    /// The paragraph text, one input line per output line.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One entry of a verbatim block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum VerbatimLine {
    Blank,
    Line(PlainLine),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verbatim {
    pub indent: usize,
    pub lines: Vec<VerbatimLine>,
}

impl Verbatim {
    pub fn new(indent: usize, lines: Vec<VerbatimLine>) -> Self {
        Self { indent, lines }
    }

    /// Number of entries that are blank lines.
    pub fn blank_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, VerbatimLine::Blank))
            .count()
    }
}
