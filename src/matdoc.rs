//! Main module for matdoc library functionality
//!
//! MatDoc is a small, strict cousin of Markdown for commenting MATLAB functions:
//!
//!     A paragraph starts on a new line.
//!     And continues on following lines.
//!
//!     Indenting with whitespace introduces a verbatim code section:
//!
//!        Like this
//!         This continues it
//!
//!     * The *, -, + symbols at the beginning of a line introduce a list.
//!       Which can be continued on following paragraphs by proper indentation.
//!
//!     * This is the second item of the same list.
//!
//!     Term1:: Short description
//!        Longer explanation.
//!     Term2:: Short description
//!
//! The pipeline is lines → [lexing] → terminals → [parsing] → [ast] → [rendering] → lines.
//! [extraction] and [autodoc] deal with MATLAB sources around it.

pub mod ast;
pub mod autodoc;
pub mod config;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod rendering;
pub mod testing;
pub mod token;

pub use self::config::MatdocConfig;
pub use error::MatdocError;
pub use parsing::parse;
pub use rendering::render;

use extraction::extract_comment_block;
use rendering::Renderer;

/// Extract the documentation comment of a MATLAB source, parse it and render it.
///
/// Fails with [`MatdocError::Parse`] when a comment line is dedented below the first body line.
pub fn process_source(source: &str, config: &MatdocConfig) -> Result<Vec<String>, MatdocError> {
    let block = extract_comment_block(source, config.extraction.comment_leader);
    let tree = parse(&block.body)?;
    let renderer = Renderer::new(config.render.clone());
    Ok(renderer.render(&tree, &block.name, &block.brief))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_source_end_to_end() {
        let source = "function y = foo(x)\n% FOO Does foo\n%   Computes things.\ny = x;\n";
        let lines = process_source(source, &MatdocConfig::default()).unwrap();
        assert_eq!(
            lines,
            vec!["## Function FOO", "### Does foo", "Computes things.", ""]
        );
    }

    #[test]
    fn test_process_source_reports_dedent() {
        let source = "%FOO brief\n%   indented\n% dedented\n";
        let err = process_source(source, &MatdocConfig::default()).unwrap_err();
        assert!(matches!(err, MatdocError::Parse(_)));
    }
}
