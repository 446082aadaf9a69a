//! Configuration loading
//!
//! Settings come from three layers, later ones winning:
//!
//!     1. `defaults/matdoc.default.toml`, compiled into the crate
//!     2. a TOML file named by the user (`matdoc render -c my.toml`)
//!     3. single `section.key` overrides
//!
//! The merged tree is deserialized into [`MatdocConfig`]. Keys missing from every layer fall back
//! to the `Default` impls of [`RenderOptions`] and [`ExtractionOptions`].

use crate::matdoc::extraction::ExtractionOptions;
use crate::matdoc::rendering::RenderOptions;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/matdoc.default.toml");

/// Everything the render pipeline can be tuned with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatdocConfig {
    /// `[render]`: heading prefixes, indent unit and markers
    pub render: RenderOptions,
    /// `[extraction]`: how comment lines are recognized in MATLAB sources
    pub extraction: ExtractionOptions,
}

/// Builds a [`MatdocConfig`] out of the layers above.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

fn toml_file(path: &Path, required: bool) -> File<::config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml).required(required)
}

impl Loader {
    /// A loader holding only the compiled-in defaults.
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Add a TOML file on top. Building fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add(toml_file(path.as_ref(), true))
    }

    /// Add a TOML file on top if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add(toml_file(path.as_ref(), false))
    }

    /// Add the file given on the command line, if any.
    pub fn with_user_file<P: AsRef<Path>>(self, path: Option<P>) -> Self {
        match path {
            Some(path) => self.with_file(path),
            None => self,
        }
    }

    /// Force one value, e.g. `("extraction.comment_leader", "#")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize them.
    pub fn build(self) -> Result<MatdocConfig, ConfigError> {
        let merged = self.builder.build()?;
        merged.try_deserialize()
    }

    fn add(mut self, source: File<::config::FileSourceFile, FileFormat>) -> Self {
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled-in defaults alone.
pub fn load_defaults() -> Result<MatdocConfig, ConfigError> {
    Loader::new().build()
}
