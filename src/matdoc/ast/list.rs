//! List elements
//!
//! Bullet lists and definition lists. Both hold one or more items at the same indentation.
//!
//! A bullet item is a full block parsed at the item's inner indentation, so it can hold
//! several paragraphs, verbatim blocks or nested lists. Marker characters may be mixed within
//! one list: only the indentation has to match.
//!
//! Examples:
//!     * First item
//!       continued here
//!     - Second item
//!
//!     Term1:: Short description
//!        Longer explanation.
//!     Term2:: Short description

use super::block::Block;
use crate::matdoc::token::DefinitionLine;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletList {
    pub indent: usize,
    pub items: Vec<Block>,
}

impl BulletList {
    pub fn new(indent: usize, items: Vec<Block>) -> Self {
        Self { indent, items }
    }
}

/// A definition head with its optional indented body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionItem {
    pub indent: usize,
    pub head: DefinitionLine,
    pub body: Option<Block>,
}

impl DefinitionItem {
    pub fn new(indent: usize, head: DefinitionLine, body: Option<Block>) -> Self {
        Self { indent, head, body }
    }

    pub fn term(&self) -> &str {
        self.head.term.trim()
    }

    pub fn description(&self) -> &str {
        self.head.inner_text.trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionList {
    pub indent: usize,
    pub items: Vec<DefinitionItem>,
}

impl DefinitionList {
    pub fn new(indent: usize, items: Vec<DefinitionItem>) -> Self {
        Self { indent, items }
    }
}
