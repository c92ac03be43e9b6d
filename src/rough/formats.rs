//! Output formats for parse trees
//!
//! - treeviz: one line per node, nesting drawn with box connectors
//! - json: the serde representation of the tree
//! - yaml: the same representation as YAML

pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
