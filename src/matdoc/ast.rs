//! Abstract syntax tree
//!
//!     The non-terminal symbols produced by the parser. Nodes are pure data: every one carries
//!     its baseline `indent` and owns its children. Nothing here knows how to parse or render.
//!
//!         Block          -> (Blank | Paragraph | Verbatim | BulletList | DefinitionList)*
//!         Paragraph      -> PlainLine+                      (all at the block baseline)
//!         Verbatim       -> (Blank | Line)+                 (lines strictly above the baseline)
//!         BulletList     -> Block+                          (one block per item)
//!         DefinitionList -> DefinitionItem+
//!         DefinitionItem -> DefinitionLine Block?
//!
//!     Only the root block of an empty document may have no children. Every other node holds
//!     at least one child.

mod block;
mod list;
mod paragraph;

pub use block::{Block, BlockChild};
pub use list::{BulletList, DefinitionItem, DefinitionList};
pub use paragraph::{Paragraph, Verbatim, VerbatimLine};

use serde::Serialize;
use std::fmt;

/// The kinds of non-terminal nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Block,
    Paragraph,
    Verbatim,
    BulletList,
    DefinitionList,
    DefinitionItem,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Block => "Block",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Verbatim => "Verbatim",
            NodeKind::BulletList => "BulletList",
            NodeKind::DefinitionList => "DefinitionList",
            NodeKind::DefinitionItem => "DefinitionItem",
        };
        write!(f, "{}", name)
    }
}
