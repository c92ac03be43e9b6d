//! JSON rendering of the parse tree (not of the original document)

use super::registry::{FormatError, Formatter};
use crate::rough::node::Node;

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

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(node)
        } else {
            serde_json::to_string(node)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tagged tree as JSON ({\"type\": ..., \"text\"/\"items\": ...})"
    }
}
