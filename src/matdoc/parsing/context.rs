//! Parse context
//!
//! The state shared by all productions: the line lexer and the single lookahead terminal.
//! It is passed by `&mut` through every production instead of living in a parser object,
//! so each production can be driven in isolation.

use crate::matdoc::lexing::LineLexer;
use crate::matdoc::token::Terminal;

#[derive(Debug)]
pub struct ParseContext<'a, S> {
    lexer: LineLexer<'a, S>,
    lookahead: Terminal,
    lookahead_line: usize,
}

impl<'a, S: AsRef<str>> ParseContext<'a, S> {
    /// Start a context over `lines`, with the first terminal already in the lookahead.
    pub fn new(lines: &'a [S]) -> Self {
        let mut lexer = LineLexer::new(lines);
        let lookahead = lexer.next_terminal();
        let lookahead_line = lexer.line_number();
        Self {
            lexer,
            lookahead,
            lookahead_line,
        }
    }

    pub fn lookahead(&self) -> &Terminal {
        &self.lookahead
    }

    /// 1-based input line of the lookahead (the last line once input is exhausted).
    pub fn line(&self) -> usize {
        self.lookahead_line
    }

    /// Consume the lookahead, returning it, and classify the next line into its place.
    pub fn shift(&mut self) -> Terminal {
        let next = self.lexer.next_terminal();
        self.lookahead_line = self.lexer.line_number();
        std::mem::replace(&mut self.lookahead, next)
    }

    /// Put a new terminal in the lookahead without reading input, returning the old one.
    pub fn replace_lookahead(&mut self, terminal: Terminal) -> Terminal {
        std::mem::replace(&mut self.lookahead, terminal)
    }

    /// Drop blank lines until the lookahead is a line or the end of input.
    pub fn skip_blanks(&mut self) {
        while self.lookahead.is_blank() {
            self.shift();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matdoc::token::PlainLine;

    #[test]
    fn test_shift_tracks_lines() {
        let lines = ["", "", "text"];
        let mut ctx = ParseContext::new(&lines);
        assert_eq!(ctx.line(), 1);
        ctx.skip_blanks();
        assert_eq!(ctx.line(), 3);
        assert_eq!(ctx.shift(), Terminal::Plain(PlainLine::new(0, "text")));
        assert!(ctx.lookahead().is_end());
    }

    #[test]
    fn test_replace_lookahead_does_not_read_input() {
        let lines = ["* item", "next"];
        let mut ctx = ParseContext::new(&lines);
        let old = ctx.replace_lookahead(Terminal::Plain(PlainLine::new(2, "item")));
        assert!(matches!(old, Terminal::Bullet(_)));
        assert_eq!(ctx.shift(), Terminal::Plain(PlainLine::new(2, "item")));
        assert_eq!(ctx.shift(), Terminal::Plain(PlainLine::new(0, "next")));
    }
}
