//! Parsing module for the matdoc format
//!
//!     Parsing runs the lexer and the grammar productions together: the parse context pulls one
//!     terminal at a time from the line lexer and productions consume it by shifting the
//!     lookahead. See [productions](productions) for the grammar.
//!
//!     The result is a single root [Block]. Parsing either returns the complete tree or fails;
//!     there is no partial result.
//!
//! Testing
//!
//!     Element-level tests live under `tests/`, one file per element kind, and use the fluent
//!     assertions in the [testing module](crate::matdoc::testing).

pub mod context;
pub mod error;
pub mod productions;

pub use context::ParseContext;
pub use error::ParseError;
pub use productions::{
    parse_block, parse_bullet_list, parse_definition_list, parse_document, parse_paragraph,
    parse_verbatim,
};

use crate::matdoc::ast::Block;
use log::debug;

/// Parse a sequence of comment lines into a root block.
///
/// The first non-blank line fixes the document baseline. A later line indented less than that
/// baseline cannot belong to any block, and the whole parse fails with
/// [`ParseError::UnexpectedDedent`] instead of dropping the rest of the input.
///
/// # Example
///
/// ```rust,ignore
/// use matdoc::matdoc::parsing::parse;
///
/// let tree = parse(&["A term:: value", "  continuation line"])?;
/// ```
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Block, ParseError> {
    debug!("parsing {} lines", lines.len());
    let mut ctx = ParseContext::new(lines);
    let root = parse_document(&mut ctx)?;
    debug!(
        "parsed root block at indent {} with {} children",
        root.indent,
        root.children.len()
    );
    Ok(root)
}
