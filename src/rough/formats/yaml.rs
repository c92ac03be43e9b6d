//! YAML rendering of the parse tree

use super::registry::{FormatError, Formatter};
use crate::rough::node::Node;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        serde_yaml::to_string(node).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tagged tree as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rough::parse;

    #[test]
    fn test_yaml_matches_serde_value() {
        let node = parse(r#"{"a": [1, null]}"#).unwrap();
        let output = YamlFormatter.serialize(&node).unwrap();

        let reparsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(reparsed, serde_yaml::to_value(&node).unwrap());
        assert!(output.starts_with("type: object\n"));
    }
}
