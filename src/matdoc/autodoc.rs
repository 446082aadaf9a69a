//! Documentation skeletons
//!
//! Finds `function` lines that are not followed by a comment and inserts a matdoc comment
//! skeleton after them, ready to be filled in:
//!
//!     function [a, b] = foo(x, y)
//!     % foo <short description>
//!     %
//!     % <long description>
//!     %
//!     % Input:
//!     % - x (<type>): <description>
//!     % - y (<type>): <description>
//!     %
//!     % Output:
//!     % - a (<type>): <description>
//!     % - b (<type>): <description>
//!     %
//!
//! Three signature forms are recognized: `function name(args)`, `function out = name(args)`
//! and `function [outs] = name(args)`, each optionally followed by a `%` comment.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

static METHOD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ *function +(?P<name>[a-zA-Z0-9_]+) *(\((?P<argin>[^)]*)\))? *(%.*)?$")
        .expect("method regex is valid")
});

static FUNCTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^ *function +(?P<argout>[a-zA-Z0-9_]+) *=? *(?P<name>[a-zA-Z0-9_]+) *(\((?P<argin>[^)]*)\))? *(%.*)?$",
    )
    .expect("function regex is valid")
});

static MULTI_OUTPUT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^ *function +\[(?P<argout>[^\]]*)\] *=? *(?P<name>[a-zA-Z0-9_]+) *(\((?P<argin>[^)]*)\))? *(%.*)?$",
    )
    .expect("multi-output regex is valid")
});

/// A parsed `function` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

/// What a source line is, as far as skeleton insertion cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HeaderLine {
    Empty,
    Comment,
    Function(FunctionSignature),
    Instruction,
}

fn split_args(caps: &Captures<'_>, group: &str) -> Vec<String> {
    match caps.name(group) {
        Some(args) if !args.as_str().is_empty() => args
            .as_str()
            .split(',')
            .map(|arg| arg.trim().to_string())
            .collect(),
        _ => Vec::new(),
    }
}

/// Classify one source line.
pub fn classify_header_line(line: &str) -> HeaderLine {
    let line = line.trim_start();

    if line.is_empty() {
        return HeaderLine::Empty;
    }
    if line.starts_with('%') {
        return HeaderLine::Comment;
    }
    if let Some(caps) = METHOD_REGEX.captures(line) {
        return HeaderLine::Function(FunctionSignature {
            name: caps["name"].to_string(),
            inputs: split_args(&caps, "argin"),
            outputs: Vec::new(),
        });
    }
    for regex in [&*FUNCTION_REGEX, &*MULTI_OUTPUT_REGEX] {
        if let Some(caps) = regex.captures(line) {
            return HeaderLine::Function(FunctionSignature {
                name: caps["name"].to_string(),
                inputs: split_args(&caps, "argin"),
                outputs: split_args(&caps, "argout"),
            });
        }
    }
    HeaderLine::Instruction
}

/// The comment lines documenting `signature`, closed by an empty line.
pub fn doc_skeleton(signature: &FunctionSignature) -> Vec<String> {
    let mut doc = vec![
        format!("% {} <short description>", signature.name),
        "%".to_string(),
        "% <long description>".to_string(),
        "%".to_string(),
    ];
    for (title, args) in [("Input", &signature.inputs), ("Output", &signature.outputs)] {
        if args.is_empty() {
            continue;
        }
        doc.push(format!("% {}:", title));
        doc.extend(
            args.iter()
                .map(|arg| format!("% - {} (<type>): <description>", arg)),
        );
        doc.push("%".to_string());
    }
    doc.push(String::new());
    doc
}

/// Insert a skeleton after every function line whose next line is empty or an instruction.
///
/// A function followed by a comment, by another function line or by the end of the source is
/// left alone. A trailing newline is kept.
pub fn insert_doc_skeletons(source: &str) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut pending: Option<FunctionSignature> = None;
    let mut inserted = 0;

    for line in source.lines() {
        match classify_header_line(line) {
            HeaderLine::Function(signature) => pending = Some(signature),
            HeaderLine::Comment => pending = None,
            HeaderLine::Empty | HeaderLine::Instruction => {
                if let Some(signature) = pending.take() {
                    output.extend(doc_skeleton(&signature));
                    inserted += 1;
                }
            }
        }
        output.push(line.to_string());
    }

    if source.ends_with('\n') {
        output.push(String::new());
    }
    debug!("inserted {} documentation skeletons", inserted);
    output.join("\n")
}
