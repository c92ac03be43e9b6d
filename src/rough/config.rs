//! Configuration for the `rough` command-line tool
//!
//! Settings are loaded from YAML. Every key is optional and falls back to its
//! default:
//!
//! ```yaml
//! format: treeviz
//! treeviz:
//!   max_label_chars: 30
//! json:
//!   pretty: true
//! ```
//!
//! Use [`RoughConfig::from_yaml`] to load from a string or
//! [`RoughConfig::from_yaml_file`] to load from disk.

use super::formats::treeviz::DEFAULT_MAX_LABEL_CHARS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_FORMAT: &str = "treeviz";

/// Errors that can occur while loading configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Yaml(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {msg}"),
            ConfigError::Yaml(msg) => write!(f, "Invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoughConfig {
    /// Output format used when none is given on the command line
    pub format: String,
    pub treeviz: TreevizConfig,
    pub json: JsonConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreevizConfig {
    /// Labels and keys longer than this are cut and suffixed with "..."
    pub max_label_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonConfig {
    pub pretty: bool,
}

impl Default for RoughConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            treeviz: TreevizConfig::default(),
            json: JsonConfig::default(),
        }
    }
}

impl Default for TreevizConfig {
    fn default() -> Self {
        Self {
            max_label_chars: DEFAULT_MAX_LABEL_CHARS,
        }
    }
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl RoughConfig {
    /// Load configuration from a YAML string
    pub fn from_yaml(yaml_str: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml_str.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        assert_eq!(RoughConfig::from_yaml("").unwrap(), RoughConfig::default());
        assert_eq!(RoughConfig::from_yaml("\n  \n").unwrap(), RoughConfig::default());
    }

    #[test]
    fn test_defaults() {
        let config = RoughConfig::default();
        assert_eq!(config.format, "treeviz");
        assert_eq!(config.treeviz.max_label_chars, 30);
        assert!(config.json.pretty);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = RoughConfig::from_yaml("json:\n  pretty: false\n").unwrap();
        assert!(!config.json.pretty);
        assert_eq!(config.format, "treeviz");
        assert_eq!(config.treeviz.max_label_chars, 30);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "format: yaml\ntreeviz:\n  max_label_chars: 12\njson:\n  pretty: false\n";
        let config = RoughConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.format, "yaml");
        assert_eq!(config.treeviz.max_label_chars, 12);
        assert!(!config.json.pretty);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = RoughConfig::from_yaml("colour: red\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format: json").unwrap();
        let config = RoughConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.format, "json");
    }

    #[test]
    fn test_missing_file() {
        let err = RoughConfig::from_yaml_file("/nonexistent/rough.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
