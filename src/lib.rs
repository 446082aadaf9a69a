//! # matdoc
//!
//! A parser and Markdown renderer for MatDoc, the indentation-sensitive markup used in MATLAB
//! function-header comments.
//!
//! File Layout
//!
//!     src/matdoc
//!       ├── token        Terminal symbols (one per classified line)
//!       ├── lexing       Line tokenization and classification
//!       ├── parsing      Indentation-parameterized productions over a lookahead context
//!       ├── ast          Non-terminal node types
//!       ├── rendering    Prefix-frame renderer producing Markdown lines
//!       ├── extraction   Comment block extraction from MATLAB sources
//!       ├── autodoc      Documentation skeletons for undocumented functions
//!       ├── formats      Treeviz / JSON / YAML dumps of the AST
//!       └── config       Layered TOML configuration
//!
//! For testing helpers, see the [testing module](matdoc::testing).

pub mod matdoc;

pub use matdoc::{parse, process_source, render, MatdocError};
