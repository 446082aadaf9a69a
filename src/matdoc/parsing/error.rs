//! Parse errors

use crate::matdoc::ast::NodeKind;
use thiserror::Error;

/// Errors that can occur while reducing terminals into a tree.
///
/// A list or node error means a production was entered without a matching lookahead. The
/// block dispatcher never does that, so these point at a driver bug, not at bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A list production matched zero items
    #[error("line {line}: expected a {kind} item at indent {indent}, found none")]
    EmptyList {
        kind: NodeKind,
        indent: usize,
        line: usize,
    },

    /// A paragraph or verbatim production consumed no lines
    #[error("line {line}: expected a {kind} at indent {indent}, found none")]
    EmptyNode {
        kind: NodeKind,
        indent: usize,
        line: usize,
    },

    /// Input left over after the root block: a line dedented below the first line
    #[error("line {line}: indent {indent} is below the document baseline {baseline}")]
    UnexpectedDedent {
        line: usize,
        indent: usize,
        baseline: usize,
    },
}
