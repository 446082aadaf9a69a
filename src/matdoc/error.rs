//! Crate-level error type

use crate::matdoc::parsing::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatdocError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("IO error with {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("unknown format '{0}'")]
    UnknownFormat(String),
}

impl MatdocError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MatdocError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatdocError>;
