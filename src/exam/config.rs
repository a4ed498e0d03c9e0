//! Configuration loading
//!
//! `defaults/exam.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user-specific files on top of
//! those defaults via [`Loader`] before deserializing into [`ExamConfig`].

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/exam.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExamConfig {
    pub output: OutputConfig,
    pub treeviz: TreevizConfig,
    pub json: JsonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of the format used when none is requested explicitly.
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub label_width: usize,
    pub show_header: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ExamConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ExamConfig, ConfigError> {
    Loader::new().build()
}
