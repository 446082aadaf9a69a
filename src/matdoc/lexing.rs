//! Lexer
//!
//!     Lexing turns each input line into one terminal symbol. It runs in two steps:
//!         1. Base tokenization of the line with logos. See [base_tokenization](base_tokenization).
//!         2. Classification of the token sequence into a terminal. See
//!            [line_classification](line_classification).
//!
//!     The [LineLexer] drives both over a finite slice of lines and closes the stream with an
//!     `EndOfInput` terminal, which it keeps returning once the lines run out. Terminals are
//!     produced one at a time, as the parser asks for them.
//!
//! Indentation Handling
//!
//!     Indentation is the count of leading whitespace characters. Tabs count as one character
//!     and are not expanded: callers that mix tabs and spaces must normalize first.

pub mod base_tokenization;
pub mod line_classification;

pub use base_tokenization::{tokenize, LineTok};
pub use line_classification::classify;

use crate::matdoc::token::Terminal;

/// Streams terminals out of a slice of lines.
#[derive(Debug, Clone)]
pub struct LineLexer<'a, S> {
    lines: std::slice::Iter<'a, S>,
    line_number: usize,
}

impl<'a, S: AsRef<str>> LineLexer<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self {
            lines: lines.iter(),
            line_number: 0,
        }
    }

    /// Classify the next line. Returns `EndOfInput` once the lines are exhausted.
    pub fn next_terminal(&mut self) -> Terminal {
        match self.lines.next() {
            Some(line) => {
                self.line_number += 1;
                classify(line.as_ref())
            }
            None => Terminal::EndOfInput,
        }
    }

    /// 1-based number of the last line classified (0 before the first call).
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// Classify every line, closing the sequence with `EndOfInput`.
pub fn lex<S: AsRef<str>>(lines: &[S]) -> Vec<Terminal> {
    let mut lexer = LineLexer::new(lines);
    let mut terminals = Vec::with_capacity(lines.len() + 1);
    loop {
        let terminal = lexer.next_terminal();
        let done = terminal.is_end();
        terminals.push(terminal);
        if done {
            return terminals;
        }
    }
}
