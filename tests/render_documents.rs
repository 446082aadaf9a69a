//! Rendering tests over whole documents
//!
//! Each test parses a comment body and checks the exact Markdown lines, blank separators
//! included.

use matdoc::matdoc::parsing::parse;
use matdoc::matdoc::rendering::{render, RenderOptions, Renderer};
use pretty_assertions::assert_eq;

fn render_body(lines: &[&str]) -> Vec<String> {
    Renderer::default().render_body(&parse(lines).unwrap())
}

#[test]
fn test_definition_with_continuation_document() {
    let tree = parse(&["A term:: value", "  continuation line"]).unwrap();

    assert_eq!(
        render(&tree, "Foo", "does stuff"),
        vec![
            "## Function Foo",
            "### does stuff",
            "*   **A term** [*value*]",
            "",
            "    continuation line",
            "",
        ]
    );
}

#[test]
fn test_full_document() {
    let lines = [
        "A paragraph starts on a new line.",
        "And continues on following lines.",
        "",
        "Indenting with whitespace introduces a verbatim code section:",
        "",
        "   Like this",
        "    This continues it",
        "",
        "* The *, -, + symbols at the beginning of a line introduce a list.",
        "  Which can be continued on following paragraphs by proper indentation.",
        "",
        "* This is the second item of the same list.",
        "",
        "Term1:: Short description",
        "   Longer explanation.",
        "Term2:: Short description",
    ];

    assert_eq!(
        render_body(&lines),
        vec![
            "A paragraph starts on a new line.",
            "And continues on following lines.",
            "",
            "Indenting with whitespace introduces a verbatim code section:",
            "",
            "    Like this",
            "    This continues it",
            "",
            "+   The *, -, + symbols at the beginning of a line introduce a list.",
            "    Which can be continued on following paragraphs by proper indentation.",
            "",
            "+   This is the second item of the same list.",
            "",
            "*   **Term1** [*Short description*]",
            "",
            "    Longer explanation.",
            "",
            "*   **Term2** [*Short description*]",
            "",
        ]
    );
}

#[test]
fn test_flat_list_renders_one_block_per_item() {
    assert_eq!(
        render_body(&["* one", "* two", "* three"]),
        vec!["+   one", "", "+   two", "", "+   three", ""]
    );
}

#[test]
fn test_verbatim_reindented_regardless_of_depth() {
    assert_eq!(
        render_body(&["Usage:", "      deep", "   shallow", "", "   after blank"]),
        vec!["Usage:", "", "    deep", "    shallow", "", "    after blank"]
    );
}

#[test]
fn test_nested_list_prefixes() {
    assert_eq!(
        render_body(&["* outer", "  - inner"]),
        vec!["+   outer", "", "    +   inner", ""]
    );
}

#[test]
fn test_definition_inside_list_item() {
    assert_eq!(
        render_body(&["* Args:", "  x:: the input"]),
        vec!["+   Args:", "", "    *   **x** [*the input*]", ""]
    );
}

#[test]
fn test_verbatim_inside_list_item() {
    assert_eq!(
        render_body(&["* Example:", "", "      code"]),
        vec!["+   Example:", "", "        code"]
    );
}

#[test]
fn test_structural_blanks_render_nothing() {
    assert_eq!(render_body(&["A", "", "", "B"]), vec!["A", "", "B", ""]);
}

#[test]
fn test_empty_body_renders_only_headings() {
    let tree = parse::<&str>(&[]).unwrap();
    assert_eq!(render(&tree, "foo", ""), vec!["## Function foo", "### "]);
}

#[test]
fn test_one_shot_marker_does_not_leak_to_siblings() {
    // The second paragraph of the item must not get the bullet marker again
    assert_eq!(
        render_body(&["* first paragraph", "", "  second paragraph"]),
        vec!["+   first paragraph", "", "    second paragraph", ""]
    );
}

#[test]
fn test_custom_markers() {
    let options = RenderOptions {
        heading_prefix: "# ".to_string(),
        subheading_prefix: "> ".to_string(),
        indent: "  ".to_string(),
        bullet_marker: "- ".to_string(),
        definition_marker: "- ".to_string(),
    };
    let tree = parse(&["* item", "  Key:: value"]).unwrap();

    assert_eq!(
        Renderer::new(options).render(&tree, "name", "brief"),
        vec!["# name", "> brief", "- item", "", "  - **Key** [*value*]", ""]
    );
}
