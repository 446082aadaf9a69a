//! Block element
//!
//! A block is a vertical run of sibling elements that share one baseline indentation. It is
//! the root of every parse, and also what a bullet item or a definition body holds.

use super::list::{BulletList, DefinitionList};
use super::paragraph::{Paragraph, Verbatim};
use super::NodeKind;
use serde::Serialize;

/// A sibling element inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockChild {
    /// A structural blank line between elements
    Blank,
    Paragraph(Paragraph),
    Verbatim(Verbatim),
    BulletList(BulletList),
    DefinitionList(DefinitionList),
}

impl BlockChild {
    /// Node kind of this child, or `None` for a structural blank.
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            BlockChild::Blank => None,
            BlockChild::Paragraph(_) => Some(NodeKind::Paragraph),
            BlockChild::Verbatim(_) => Some(NodeKind::Verbatim),
            BlockChild::BulletList(_) => Some(NodeKind::BulletList),
            BlockChild::DefinitionList(_) => Some(NodeKind::DefinitionList),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, BlockChild::Blank)
    }
}

/// A block of siblings at one baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub indent: usize,
    pub children: Vec<BlockChild>,
}

impl Block {
    pub fn new(indent: usize, children: Vec<BlockChild>) -> Self {
        Self { indent, children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children that are actual elements, skipping structural blanks.
    pub fn elements(&self) -> impl Iterator<Item = &BlockChild> {
        self.children.iter().filter(|child| !child.is_blank())
    }
}
