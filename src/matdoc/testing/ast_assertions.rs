//! Fluent assertion API for AST nodes

use crate::matdoc::ast::{
    Block, BlockChild, BulletList, DefinitionItem, DefinitionList, Paragraph, Verbatim,
    VerbatimLine,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a block
pub fn assert_block(block: &Block) -> BlockAssertion<'_> {
    BlockAssertion {
        block,
        context: "Block".to_string(),
    }
}

fn child_name(child: &BlockChild) -> String {
    child
        .kind()
        .map(|kind| kind.to_string())
        .unwrap_or_else(|| "Blank".to_string())
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn indent(self, expected: usize) -> Self {
        assert_eq!(
            self.block.indent, expected,
            "{}: Expected indent {}, found {}",
            self.context, expected, self.block.indent
        );
        self
    }

    /// Count of all children, structural blanks included
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.block.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            self.summary()
        );
        self
    }

    /// Count of children that are not structural blanks
    pub fn element_count(self, expected: usize) -> Self {
        let actual = self.block.elements().count();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} elements, found {}: [{}]",
            self.context,
            expected,
            actual,
            self.summary()
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ChildAssertion<'a>),
    {
        let child = self.block.children.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds (block has {} children)",
                self.context,
                index,
                self.block.children.len()
            )
        });
        assertion(ChildAssertion {
            child,
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }

    pub fn element<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ChildAssertion<'a>),
    {
        let block: &'a Block = self.block;
        let child = block.elements().nth(index).unwrap_or_else(|| {
            panic!(
                "{}: Element index {} out of bounds (block has {} elements)",
                self.context,
                index,
                block.elements().count()
            )
        });
        assertion(ChildAssertion {
            child,
            context: format!("{}:elements[{}]", self.context, index),
        });
        self
    }

    fn summary(&self) -> String {
        self.block
            .children
            .iter()
            .map(child_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ============================================================================
// Child Assertions
// ============================================================================

pub struct ChildAssertion<'a> {
    child: &'a BlockChild,
    context: String,
}

impl<'a> ChildAssertion<'a> {
    fn unexpected(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            child_name(self.child)
        )
    }

    pub fn assert_blank(self) {
        if !self.child.is_blank() {
            self.unexpected("Blank");
        }
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.child {
            BlockChild::Paragraph(paragraph) => ParagraphAssertion {
                paragraph,
                context: self.context,
            },
            _ => self.unexpected("Paragraph"),
        }
    }

    pub fn assert_verbatim(self) -> VerbatimAssertion<'a> {
        match self.child {
            BlockChild::Verbatim(verbatim) => VerbatimAssertion {
                verbatim,
                context: self.context,
            },
            _ => self.unexpected("Verbatim"),
        }
    }

    pub fn assert_bullet_list(self) -> BulletListAssertion<'a> {
        match self.child {
            BlockChild::BulletList(list) => BulletListAssertion {
                list,
                context: self.context,
            },
            _ => self.unexpected("BulletList"),
        }
    }

    pub fn assert_definition_list(self) -> DefinitionListAssertion<'a> {
        match self.child {
            BlockChild::DefinitionList(list) => DefinitionListAssertion {
                list,
                context: self.context,
            },
            _ => self.unexpected("DefinitionList"),
        }
    }
}

// ============================================================================
// Paragraph / Verbatim
// ============================================================================

pub struct ParagraphAssertion<'a> {
    paragraph: &'a Paragraph,
    context: String,
}

impl ParagraphAssertion<'_> {
    pub fn indent(self, expected: usize) -> Self {
        assert_eq!(
            self.paragraph.indent, expected,
            "{}: Expected paragraph indent {}, found {}",
            self.context, expected, self.paragraph.indent
        );
        self
    }

    pub fn lines(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .paragraph
            .lines
            .iter()
            .map(|line| line.text.as_str())
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Paragraph lines differ",
            self.context
        );
        self
    }
}

pub struct VerbatimAssertion<'a> {
    verbatim: &'a Verbatim,
    context: String,
}

impl VerbatimAssertion<'_> {
    pub fn indent(self, expected: usize) -> Self {
        assert_eq!(
            self.verbatim.indent, expected,
            "{}: Expected verbatim baseline {}, found {}",
            self.context, expected, self.verbatim.indent
        );
        self
    }

    /// Expected entries in order; an empty string stands for a blank line.
    pub fn lines(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .verbatim
            .lines
            .iter()
            .map(|line| match line {
                VerbatimLine::Line(line) => line.text.as_str(),
                VerbatimLine::Blank => "",
            })
            .collect();
        assert_eq!(actual, expected, "{}: Verbatim lines differ", self.context);
        self
    }

    pub fn blank_count(self, expected: usize) -> Self {
        let actual = self.verbatim.blank_count();
        assert_eq!(
            actual, expected,
            "{}: Expected {} blank verbatim lines, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Expected original indentation of each non-blank line.
    pub fn line_indents(self, expected: &[usize]) -> Self {
        let actual: Vec<usize> = self
            .verbatim
            .lines
            .iter()
            .filter_map(|line| match line {
                VerbatimLine::Line(line) => Some(line.indent),
                VerbatimLine::Blank => None,
            })
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Verbatim line indents differ",
            self.context
        );
        self
    }
}

// ============================================================================
// Lists
// ============================================================================

pub struct BulletListAssertion<'a> {
    list: &'a BulletList,
    context: String,
}

impl<'a> BulletListAssertion<'a> {
    pub fn indent(self, expected: usize) -> Self {
        assert_eq!(
            self.list.indent, expected,
            "{}: Expected list indent {}, found {}",
            self.context, expected, self.list.indent
        );
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.list.items.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} list items, found {} list items",
            self.context, expected, actual
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let list: &'a BulletList = self.list;
        let item = list.items.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Item index {} out of bounds (list has {} items)",
                self.context,
                index,
                list.items.len()
            )
        });
        assertion(BlockAssertion {
            block: item,
            context: format!("{}:items[{}]", self.context, index),
        });
        self
    }
}

pub struct DefinitionListAssertion<'a> {
    list: &'a DefinitionList,
    context: String,
}

impl<'a> DefinitionListAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.list.items.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} definition items, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(DefinitionItemAssertion<'a>),
    {
        let list: &'a DefinitionList = self.list;
        let item = list.items.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Item index {} out of bounds (list has {} items)",
                self.context,
                index,
                list.items.len()
            )
        });
        assertion(DefinitionItemAssertion {
            item,
            context: format!("{}:items[{}]", self.context, index),
        });
        self
    }
}

pub struct DefinitionItemAssertion<'a> {
    item: &'a DefinitionItem,
    context: String,
}

impl<'a> DefinitionItemAssertion<'a> {
    /// Term, whitespace-trimmed
    pub fn term(self, expected: &str) -> Self {
        assert_eq!(
            self.item.term(),
            expected,
            "{}: Definition term differs",
            self.context
        );
        self
    }

    /// Inline description, whitespace-trimmed
    pub fn description(self, expected: &str) -> Self {
        assert_eq!(
            self.item.description(),
            expected,
            "{}: Definition description differs",
            self.context
        );
        self
    }

    pub fn no_body(self) -> Self {
        assert!(
            self.item.body.is_none(),
            "{}: Expected no definition body",
            self.context
        );
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let item: &'a DefinitionItem = self.item;
        let body = item
            .body
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a definition body", self.context));
        assertion(BlockAssertion {
            block: body,
            context: format!("{}:body", self.context),
        });
        self
    }
}
