//! YAML formatter

use super::registry::{FormatError, Formatter};
use crate::exam::ast::Document;

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Document as YAML"
    }
}
