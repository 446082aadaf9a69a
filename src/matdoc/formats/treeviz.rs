//! Treeviz formatter for AST nodes
//!
//! Treeviz is a one line per node view of the tree, handy for eyeballing what the parser did
//! with an indentation-heavy comment. Nesting is drawn with tree connectors, two columns per
//! level.
//!
//! So the format is :
//! <connectors> <icon><space><label> (truncated to 30 characters)
//!
//! Example:
//!
//!   ⧉ Block(0)
//!   ├─ ¶ A paragraph
//!   │ └─ ↵ A paragraph
//!   └─ ☰ 1 items
//!     └─ • Block(2)
//!       └─ ¶ item
//!         └─ ↵ item
//!
//! Icons
//!     Block: ⧉
//!     Blank: ⎵
//!     Paragraph: ¶
//!     Line: ↵
//!     Verbatim: 𝒱
//!     BulletList: ☰
//!     BulletItem: •
//!     DefinitionList: ≡
//!     DefinitionItem: ≔

use crate::matdoc::ast::{Block, BlockChild, VerbatimLine};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Display shape of one node, built before formatting.
struct TreeNode {
    icon: &'static str,
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(icon: &'static str, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            children: Vec::new(),
        }
    }
}

fn block_children(block: &Block) -> Vec<TreeNode> {
    block.children.iter().map(child_node).collect()
}

fn child_node(child: &BlockChild) -> TreeNode {
    match child {
        BlockChild::Blank => TreeNode::leaf("⎵", "blank"),
        BlockChild::Paragraph(paragraph) => TreeNode {
            icon: "¶",
            label: paragraph
                .lines
                .first()
                .map(|line| line.text.clone())
                .unwrap_or_default(),
            children: paragraph
                .lines
                .iter()
                .map(|line| TreeNode::leaf("↵", line.text.as_str()))
                .collect(),
        },
        BlockChild::Verbatim(verbatim) => TreeNode {
            icon: "𝒱",
            label: format!("{} lines", verbatim.lines.len()),
            children: verbatim
                .lines
                .iter()
                .map(|line| match line {
                    VerbatimLine::Line(line) => TreeNode::leaf("↵", line.text.as_str()),
                    VerbatimLine::Blank => TreeNode::leaf("⎵", "blank"),
                })
                .collect(),
        },
        BlockChild::BulletList(list) => TreeNode {
            icon: "☰",
            label: format!("{} items", list.items.len()),
            children: list
                .items
                .iter()
                .map(|item| TreeNode {
                    icon: "•",
                    label: format!("Block({})", item.indent),
                    children: block_children(item),
                })
                .collect(),
        },
        BlockChild::DefinitionList(list) => TreeNode {
            icon: "≡",
            label: format!("{} items", list.items.len()),
            children: list
                .items
                .iter()
                .map(|item| TreeNode {
                    icon: "≔",
                    label: format!("{} :: {}", item.term(), item.description()),
                    children: item.body.as_ref().map(block_children).unwrap_or_default(),
                })
                .collect(),
        },
    }
}

fn format_node(node: &TreeNode, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        node.icon,
        truncate(&node.label, LABEL_WIDTH)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        format_node(child, &child_prefix, i + 1 == child_count, output);
    }
}

/// Render a tree as treeviz text, one node per line.
pub fn to_treeviz_str(tree: &Block) -> String {
    let mut output = format!("⧉ Block({})\n", tree.indent);
    let children = block_children(tree);
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(child, "", i + 1 == child_count, &mut output);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matdoc::parsing::parse;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn test_treeviz_shape() {
        let tree = parse(&["A paragraph", "* item"]).unwrap();
        let expected = "⧉ Block(0)\n├─ ¶ A paragraph\n│ └─ ↵ A paragraph\n└─ ☰ 1 items\n  └─ • Block(2)\n    └─ ¶ item\n      └─ ↵ item\n";
        assert_eq!(to_treeviz_str(&tree), expected);
    }
}
