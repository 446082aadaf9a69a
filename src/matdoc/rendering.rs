//! Rendering
//!
//!     Turns a parsed [Block] into Markdown lines. Output starts with two heading lines built
//!     from the function name and its brief description, then the body. Lines carry no line
//!     terminators; joining them is left to the caller.
//!
//!     See [markdown](markdown) for the per-node rules and [frames](frames) for the prefix
//!     stack.

pub mod frames;
pub mod markdown;

pub use frames::{Frame, FrameStack};
pub use markdown::Renderer;

use crate::matdoc::ast::Block;
use serde::{Deserialize, Serialize};

/// The strings the renderer decorates output with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prefix of the first heading line, followed by the function name
    pub heading_prefix: String,
    /// Prefix of the second heading line, followed by the brief description
    pub subheading_prefix: String,
    /// Steady prefix of every nesting level
    pub indent: String,
    /// First-line prefix of a bullet item
    pub bullet_marker: String,
    /// First-line prefix of a definition item
    pub definition_marker: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_prefix: "## Function ".to_string(),
            subheading_prefix: "### ".to_string(),
            indent: "    ".to_string(),
            bullet_marker: "+   ".to_string(),
            definition_marker: "*   ".to_string(),
        }
    }
}

/// Render with the default options.
pub fn render(tree: &Block, heading: &str, subheading: &str) -> Vec<String> {
    Renderer::default().render(tree, heading, subheading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matdoc::parsing::parse;

    #[test]
    fn test_render_empty_tree_has_only_headings() {
        let tree = parse::<&str>(&[]).unwrap();
        assert_eq!(render(&tree, "f", "does f"), vec!["## Function f", "### does f"]);
    }
}
