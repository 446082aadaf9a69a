//! Comment block extraction
//!
//! Pulls the documentation comment out of a MATLAB source file. The block is the first run of
//! comment lines, either at the top of a script or right after the `function` line of a
//! function file:
//!
//!     function y = foo(x)
//!     % FOO Does foo things
//!     %   Longer description, in matdoc markup.
//!
//! The comment leader is removed from every line, keeping whatever indentation follows it.
//! The first comment line is the header: its first word is the function name and the rest
//! is the brief description.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+)\s*(\S.*)?$").expect("header regex is valid"));

/// Knobs for comment extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionOptions {
    /// The character that starts a comment line
    pub comment_leader: char,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            comment_leader: '%',
        }
    }
}

/// The documentation comment of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentBlock {
    /// First word of the header line (empty if there is no usable header)
    pub name: String,
    /// Rest of the header line
    pub brief: String,
    /// The remaining comment lines, leader removed
    pub body: Vec<String>,
}

/// Extract the documentation comment block from `source`.
pub fn extract_comment_block(source: &str, leader: char) -> CommentBlock {
    let mut lines = Vec::new();
    let mut seen_function = false;
    let mut seen_comment = false;

    for raw in source.lines() {
        let line = raw.trim();
        if line.starts_with(leader) {
            seen_comment = true;
        }
        if line.starts_with("function") {
            seen_function = true;
            continue;
        }
        let Some(content) = line.strip_prefix(leader) else {
            if (seen_function && seen_comment) || !seen_function {
                break;
            }
            continue;
        };
        lines.push(content.to_string());
    }

    let mut lines = lines.into_iter();
    let Some(header) = lines.next() else {
        debug!("no comment block found");
        return CommentBlock::default();
    };
    let body: Vec<String> = lines.collect();
    let (name, brief) = split_header(&header);
    debug!(
        "extracted comment block for '{}' with {} body lines",
        name,
        body.len()
    );
    CommentBlock { name, brief, body }
}

/// Split a header line into name and brief description. Both are empty if the line has no
/// leading word.
pub fn split_header(header: &str) -> (String, String) {
    match HEADER_REGEX.captures(header) {
        Some(caps) => (
            caps[1].to_string(),
            caps.get(2)
                .map(|brief| brief.as_str().to_string())
                .unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_header() {
        assert_eq!(
            split_header(" FOO Does foo things"),
            ("FOO".to_string(), "Does foo things".to_string())
        );
        assert_eq!(split_header("FOO"), ("FOO".to_string(), String::new()));
        assert_eq!(split_header("  "), (String::new(), String::new()));
        assert_eq!(split_header("-- no word"), (String::new(), String::new()));
    }

    #[test]
    fn test_extracts_after_function_line() {
        let source = "function y = foo(x)\n% FOO Does foo\n%   Details here.\n%\n%   More.\ny = x;\n% trailing comment\n";
        let block = extract_comment_block(source, '%');
        assert_eq!(block.name, "FOO");
        assert_eq!(block.brief, "Does foo");
        assert_eq!(block.body, vec!["   Details here.", "", "   More."]);
    }

    #[test]
    fn test_script_header_stops_at_first_code_line() {
        let source = "% BAR A script\n% body\nx = 1;\n% not part of it\n";
        let block = extract_comment_block(source, '%');
        assert_eq!(block.name, "BAR");
        assert_eq!(block.body, vec![" body"]);
    }

    #[test]
    fn test_lines_between_function_and_comment_are_skipped() {
        let source = "function foo\n\n% FOO Brief\n% text\n";
        let block = extract_comment_block(source, '%');
        assert_eq!(block.name, "FOO");
        assert_eq!(block.body, vec![" text"]);
    }

    #[test]
    fn test_no_comment_gives_empty_block() {
        let block = extract_comment_block("x = 1;\n", '%');
        assert_eq!(block, CommentBlock::default());
    }

    #[test]
    fn test_custom_leader() {
        let block = extract_comment_block("# NAME brief\n# body\n", '#');
        assert_eq!(block.name, "NAME");
        assert_eq!(block.body, vec![" body"]);
    }
}
