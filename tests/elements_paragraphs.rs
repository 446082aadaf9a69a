//! Unit tests for isolated paragraph elements
//!
//! Paragraphs are runs of plain lines at the block baseline. Tests check both the structure
//! (children, blanks) and the line content.

use matdoc::matdoc::parsing::parse;
use matdoc::matdoc::testing::assert_block;

#[test]
fn test_paragraph_single_line() {
    let tree = parse(&["Hello world"]).unwrap();

    assert_block(&tree)
        .indent(0)
        .child_count(1)
        .child(0, |child| {
            child.assert_paragraph().indent(0).lines(&["Hello world"]);
        });
}

#[test]
fn test_paragraph_multiple_lines() {
    let tree = parse(&["A paragraph starts on a new line.", "And continues on following lines."])
        .unwrap();

    assert_block(&tree).child_count(1).child(0, |child| {
        child.assert_paragraph().lines(&[
            "A paragraph starts on a new line.",
            "And continues on following lines.",
        ]);
    });
}

#[test]
fn test_paragraphs_separated_by_blank() {
    let tree = parse(&["First one", "still first", "", "Second"]).unwrap();

    // Paragraph + Blank + Paragraph
    assert_block(&tree)
        .child_count(3)
        .element_count(2)
        .child(0, |child| {
            child
                .assert_paragraph()
                .lines(&["First one", "still first"]);
        })
        .child(1, |child| child.assert_blank())
        .child(2, |child| {
            child.assert_paragraph().lines(&["Second"]);
        });
}

#[test]
fn test_leading_blanks_are_dropped() {
    let tree = parse(&["", "   ", "Text"]).unwrap();

    assert_block(&tree).child_count(1).child(0, |child| {
        child.assert_paragraph().lines(&["Text"]);
    });
}

#[test]
fn test_trailing_blanks_are_kept_as_children() {
    let tree = parse(&["Text", "", ""]).unwrap();

    assert_block(&tree)
        .child_count(3)
        .element_count(1)
        .child(1, |child| child.assert_blank())
        .child(2, |child| child.assert_blank());
}

#[test]
fn test_indented_document_sets_root_baseline() {
    let tree = parse(&["   Computes things.", "   On two lines."]).unwrap();

    assert_block(&tree).indent(3).child(0, |child| {
        child
            .assert_paragraph()
            .indent(3)
            .lines(&["Computes things.", "On two lines."]);
    });
}

#[test]
fn test_line_terminators_are_ignored() {
    let tree = parse(&["line one\r\n", "line two\n"]).unwrap();

    assert_block(&tree).child_count(1).child(0, |child| {
        child.assert_paragraph().lines(&["line one", "line two"]);
    });
}

#[test]
fn test_marker_without_gap_stays_in_paragraph() {
    let tree = parse(&["Temperature drops", "-5 degrees at night"]).unwrap();

    assert_block(&tree).child_count(1).child(0, |child| {
        child
            .assert_paragraph()
            .lines(&["Temperature drops", "-5 degrees at night"]);
    });
}

#[test]
fn test_single_colon_stays_in_paragraph() {
    let tree = parse(&["Note: this is plain"]).unwrap();

    assert_block(&tree).child(0, |child| {
        child.assert_paragraph().lines(&["Note: this is plain"]);
    });
}
