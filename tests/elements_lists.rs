//! Unit tests for isolated bullet list elements
//!
//! Every bullet item is a block at the item's inner indent, so items can hold paragraphs,
//! verbatim sections and nested lists.

use matdoc::matdoc::parsing::{parse, ParseError};
use matdoc::matdoc::testing::assert_block;

#[test]
fn test_list_flat_items() {
    let tree = parse(&["* first", "* second", "* third"]).unwrap();

    assert_block(&tree).child_count(1).child(0, |child| {
        child
            .assert_bullet_list()
            .indent(0)
            .item_count(3)
            .item(0, |item| {
                item.indent(2).child_count(1).child(0, |child| {
                    child.assert_paragraph().indent(2).lines(&["first"]);
                });
            })
            .item(1, |item| {
                item.child(0, |child| {
                    child.assert_paragraph().lines(&["second"]);
                });
            })
            .item(2, |item| {
                item.child(0, |child| {
                    child.assert_paragraph().lines(&["third"]);
                });
            });
    });
}

#[test]
fn test_list_mixed_markers_form_one_list() {
    let tree = parse(&["- dash", "+ plus", "* star"]).unwrap();

    assert_block(&tree).child_count(1).child(0, |child| {
        child.assert_bullet_list().item_count(3);
    });
}

#[test]
fn test_list_item_indent_follows_marker_width() {
    let tree = parse(&["*   wide", "    continued"]).unwrap();

    assert_block(&tree).child(0, |child| {
        child.assert_bullet_list().item(0, |item| {
            item.indent(4).child(0, |child| {
                child.assert_paragraph().lines(&["wide", "continued"]);
            });
        });
    });
}

#[test]
fn test_list_item_continuation_lines() {
    let tree = parse(&["* first", "  more", "* second"]).unwrap();

    assert_block(&tree).child(0, |child| {
        child
            .assert_bullet_list()
            .item_count(2)
            .item(0, |item| {
                item.child(0, |child| {
                    child.assert_paragraph().lines(&["first", "more"]);
                });
            });
    });
}

#[test]
fn test_list_blank_between_items_stays_in_item() {
    let tree = parse(&["* a", "", "* b"]).unwrap();

    assert_block(&tree).child_count(1).child(0, |child| {
        child
            .assert_bullet_list()
            .item_count(2)
            .item(0, |item| {
                item.child_count(2)
                    .element_count(1)
                    .child(1, |child| child.assert_blank());
            });
    });
}

#[test]
fn test_list_nested() {
    let tree = parse(&["* outer", "  - inner one", "  - inner two", "* next"]).unwrap();

    assert_block(&tree).child(0, |child| {
        child
            .assert_bullet_list()
            .item_count(2)
            .item(0, |item| {
                item.child_count(2)
                    .child(0, |child| {
                        child.assert_paragraph().lines(&["outer"]);
                    })
                    .child(1, |child| {
                        child
                            .assert_bullet_list()
                            .indent(2)
                            .item_count(2)
                            .item(1, |inner| {
                                inner.indent(4).child(0, |child| {
                                    child.assert_paragraph().lines(&["inner two"]);
                                });
                            });
                    });
            })
            .item(1, |item| {
                item.child(0, |child| {
                    child.assert_paragraph().lines(&["next"]);
                });
            });
    });
}

#[test]
fn test_list_item_with_verbatim() {
    let tree = parse(&["* Example:", "", "      code"]).unwrap();

    assert_block(&tree).child(0, |child| {
        child.assert_bullet_list().item(0, |item| {
            item.child_count(3)
                .child(1, |child| child.assert_blank())
                .child(2, |child| {
                    child.assert_verbatim().indent(2).lines(&["code"]);
                });
        });
    });
}

#[test]
fn test_list_after_paragraph() {
    let tree = parse(&["Intro:", "- a", "- b"]).unwrap();

    assert_block(&tree)
        .child_count(2)
        .child(0, |child| {
            child.assert_paragraph().lines(&["Intro:"]);
        })
        .child(1, |child| {
            child.assert_bullet_list().item_count(2);
        });
}

#[test]
fn test_list_dedent_below_root_fails() {
    let err = parse(&["  * indented item", "flush text"]).unwrap_err();

    assert!(matches!(
        err,
        ParseError::UnexpectedDedent {
            line: 2,
            indent: 0,
            baseline: 2,
        }
    ));
}
