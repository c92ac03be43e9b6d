//! Treeviz formatter for parse trees
//!
//! One line per node, nesting drawn with box connectors and two columns of
//! indentation per level:
//!
//! ```text
//! └─ object: 2 members
//!   ├─ "name" = string: "Ada"
//!   └─ "tags" = array: 2 items
//!     ├─ number: 1
//!     └─ null
//! ```
//!
//! Object members are prefixed with their key as written. Labels longer than
//! the configured limit are cut and suffixed with `...`.

use super::registry::{FormatError, Formatter};
use crate::rough::node::Node;

pub const DEFAULT_MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}

fn display_label(node: &Node) -> Option<String> {
    match node {
        Node::Null => None,
        Node::Boolean { value } => Some(value.to_string()),
        Node::Number(number) => Some(number.text().to_string()),
        Node::String(string) => Some(string.text().to_string()),
        Node::Array { items } => Some(plural(items.len(), "item", "items")),
        Node::Object { items } => Some(plural(items.len(), "member", "members")),
    }
}

/// Render `node` with the default label limit
pub fn to_treeviz_str(node: &Node) -> String {
    render(node, DEFAULT_MAX_LABEL_CHARS)
}

fn render(node: &Node, max_label_chars: usize) -> String {
    let mut result = String::new();
    append_node(&mut result, node, None, "", true, max_label_chars);
    result
}

fn append_node(
    result: &mut String,
    node: &Node,
    key: Option<&str>,
    prefix: &str,
    is_last: bool,
    max_label_chars: usize,
) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(prefix);
    result.push_str(connector);
    result.push(' ');
    if let Some(key) = key {
        result.push_str(&truncate(key, max_label_chars));
        result.push_str(" = ");
    }
    result.push_str(node.type_name());
    if let Some(label) = display_label(node) {
        result.push_str(": ");
        result.push_str(&truncate(&label, max_label_chars));
    }
    result.push('\n');

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });

    match node {
        Node::Array { items } => {
            for (i, item) in items.iter().enumerate() {
                let is_last = i == items.len() - 1;
                append_node(result, item, None, &new_prefix, is_last, max_label_chars);
            }
        }
        Node::Object { items } => {
            for (i, member) in items.iter().enumerate() {
                let is_last = i == items.len() - 1;
                append_node(
                    result,
                    &member.value,
                    Some(member.key.text()),
                    &new_prefix,
                    is_last,
                    max_label_chars,
                );
            }
        }
        _ => {}
    }
}

pub struct TreevizFormatter {
    max_label_chars: usize,
}

impl TreevizFormatter {
    pub fn new(max_label_chars: usize) -> Self {
        Self { max_label_chars }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LABEL_CHARS)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(render(node, self.max_label_chars))
    }

    fn description(&self) -> &str {
        "One line per node, nesting shown with box connectors"
    }
}
