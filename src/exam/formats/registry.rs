//! Format registry for document serialization
//!
//! Each format implements the [`Formatter`] trait and is looked up by name in
//! a [`FormatRegistry`].

use crate::exam::ast::Document;
use crate::exam::config::ExamConfig;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The document cannot be expressed in this format.
    #[error("Unsupported document: {0}")]
    Unsupported(String),
}

/// Trait for document formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "json")
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of document formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a document using the specified format
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(doc)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters in their default settings
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TreevizFormatter::default());
        registry.register(super::JsonFormatter::default());
        registry.register(super::YamlFormatter);
        registry.register(super::LatexFormatter);

        registry
    }

    /// Create a registry with the built-in formatters configured from `config`
    pub fn from_config(config: &ExamConfig) -> Self {
        let mut registry = Self::with_defaults();

        registry.register(super::TreevizFormatter::new(
            config.treeviz.label_width,
            config.treeviz.show_header,
        ));
        registry.register(super::JsonFormatter::new(config.json.pretty));

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.list_formats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::ast::Topic;
    use crate::exam::config::load_defaults;

    struct CountFormatter;
    impl Formatter for CountFormatter {
        fn name(&self) -> &str {
            "count"
        }

        fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
            Ok(doc.question_count().to_string())
        }
    }

    fn sample() -> Document {
        Document::new(
            "",
            Topic::root(vec!["\\question A\n".into(), "\\question B\n".into()], vec![]),
        )
    }

    #[test]
    fn test_register_and_serialize() {
        let mut registry = FormatRegistry::new();
        assert!(!registry.has("count"));

        registry.register(CountFormatter);
        assert!(registry.has("count"));
        assert_eq!(registry.serialize(&sample(), "count").unwrap(), "2");
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::new();
        assert_eq!(
            registry.serialize(&sample(), "nope"),
            Err(FormatError::FormatNotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_defaults_are_sorted() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.list_formats(),
            vec!["json", "latex", "treeviz", "yaml"]
        );
    }

    #[test]
    fn test_from_config_applies_settings() {
        let mut config = load_defaults().unwrap();
        config.json.pretty = false;

        let registry = FormatRegistry::from_config(&config);
        let json = registry.serialize(&sample(), "json").unwrap();
        assert!(!json.contains('\n'));
    }
}
