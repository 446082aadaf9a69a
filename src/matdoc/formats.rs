//! Output formats for inspecting parses
//!
//!     - treeviz: one line per node, see [treeviz](treeviz)
//!     - json / yaml: the serde serialization of the tree
//!     - terminals: the classified input lines, one per line

pub mod treeviz;

pub use treeviz::to_treeviz_str;

use crate::matdoc::ast::Block;
use crate::matdoc::error::MatdocError;
use crate::matdoc::lexing::lex;
use std::fmt;
use std::str::FromStr;

/// The formats `inspect` can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectFormat {
    Treeviz,
    Json,
    Yaml,
    Terminals,
}

impl InspectFormat {
    pub const ALL: [InspectFormat; 4] = [
        InspectFormat::Treeviz,
        InspectFormat::Json,
        InspectFormat::Yaml,
        InspectFormat::Terminals,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InspectFormat::Treeviz => "treeviz",
            InspectFormat::Json => "json",
            InspectFormat::Yaml => "yaml",
            InspectFormat::Terminals => "terminals",
        }
    }
}

impl fmt::Display for InspectFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for InspectFormat {
    type Err = MatdocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InspectFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| MatdocError::UnknownFormat(s.to_string()))
    }
}

pub fn to_json(tree: &Block) -> Result<String, MatdocError> {
    serde_json::to_string_pretty(tree).map_err(|e| MatdocError::Serialize(e.to_string()))
}

pub fn to_yaml(tree: &Block) -> Result<String, MatdocError> {
    serde_yaml::to_string(tree).map_err(|e| MatdocError::Serialize(e.to_string()))
}

/// One terminal per input line, closed by the end-of-input sentinel.
pub fn to_terminals_str<S: AsRef<str>>(lines: &[S]) -> String {
    lex(lines)
        .iter()
        .map(|terminal| format!("{}\n", terminal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matdoc::parsing::parse;

    #[test]
    fn test_format_names_round_trip() {
        for format in InspectFormat::ALL {
            assert_eq!(format.name().parse::<InspectFormat>().unwrap(), format);
        }
        assert!("xml".parse::<InspectFormat>().is_err());
    }

    #[test]
    fn test_json_names_node_kinds() {
        let tree = parse(&["Term:: desc"]).unwrap();
        let json = to_json(&tree).unwrap();
        assert!(json.contains("\"DefinitionList\""));
        assert!(json.contains("\"term\": \"Term\""));
    }

    #[test]
    fn test_terminals_dump() {
        assert_eq!(
            to_terminals_str(&["a", "", "- b"]),
            "PLAIN(0): a\nBLANK\nBULLET(0->2): - b\nEOF\n"
        );
    }
}
