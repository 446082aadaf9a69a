//! Testing utilities
//!
//!     Parser tests should check structure and content together, not just counts. The fluent
//!     assertions here walk a parsed tree and report the path to the failing node:
//!
//!         let tree = parse(&["* first", "* second"]).unwrap();
//!         assert_block(&tree)
//!             .element_count(1)
//!             .element(0, |child| {
//!                 child.assert_bullet_list()
//!                     .item_count(2)
//!                     .item(0, |item| {
//!                         item.element(0, |child| {
//!                             child.assert_paragraph().lines(&["first"]);
//!                         });
//!                     });
//!             });
//!
//!     `element` indexes skip structural blanks, `child` indexes do not.

pub mod ast_assertions;

pub use ast_assertions::{
    assert_block, BlockAssertion, BulletListAssertion, ChildAssertion, DefinitionItemAssertion,
    DefinitionListAssertion, ParagraphAssertion, VerbatimAssertion,
};
