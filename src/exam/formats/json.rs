//! JSON formatter

use super::registry::{FormatError, Formatter};
use crate::exam::ast::Document;

#[derive(Debug, Clone)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(doc)
        } else {
            serde_json::to_string(doc)
        };
        result.map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Document as JSON"
    }
}
