//! Parse tree produced by the rough parser
//!
//! A [`Node`] mirrors the shape of the JSON input. Booleans and `null` are
//! decoded, but numbers and strings keep the exact text they had in the source:
//! a number is never turned into a float, and a string keeps its surrounding
//! quotes and its escapes untouched. Arrays and objects keep their children in
//! source order, and objects keep duplicate keys.
//!
//! The tree serializes (via serde) as an internally tagged structure:
//!
//! ```text
//! {"type":"object","items":[
//!     {"key":{"type":"string","text":"\"name\""},
//!      "value":{"type":"string","text":"\"Ada\""}}
//! ]}
//! ```

use super::error::InvalidJsonError;
use super::parser;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// One parsed JSON value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Null,
    Boolean { value: bool },
    Number(NumberToken),
    String(StringToken),
    Array { items: Vec<Node> },
    Object { items: Vec<Member> },
}

impl Node {
    /// Build a number node from its source text
    pub fn number(text: impl Into<String>) -> Result<Self, InvalidJsonError> {
        NumberToken::new(text).map(Node::Number)
    }

    /// Build a string node from its source text, quotes included
    pub fn string(text: impl Into<String>) -> Result<Self, InvalidJsonError> {
        StringToken::new(text).map(Node::String)
    }

    /// Lowercase name of the variant, as used in the serialized `type` tag
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Boolean { .. } => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Array { .. } => "array",
            Node::Object { .. } => "object",
        }
    }

    /// Raw source text of a number or string node
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Number(number) => Some(number.text()),
            Node::String(string) => Some(string.text()),
            _ => None,
        }
    }
}

/// Source text of a number token, exactly as matched
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NumberToken {
    text: String,
}

impl NumberToken {
    /// Wrap `text` if the whole of it is one number token.
    pub fn new(text: impl Into<String>) -> Result<Self, InvalidJsonError> {
        let text = text.into();
        match parser::number_len(&text) {
            Some(len) if len == text.len() => Ok(Self { text }),
            Some(len) => Err(InvalidJsonError::new("trailing characters after number", len)),
            None => Err(InvalidJsonError::new("malformed number", 0)),
        }
    }

    pub(crate) fn from_source(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Source text of a string token, surrounding quotes included, escapes raw
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StringToken {
    text: String,
}

impl StringToken {
    /// Wrap `text` if the whole of it is one quoted string token.
    pub fn new(text: impl Into<String>) -> Result<Self, InvalidJsonError> {
        let text = text.into();
        if !text.starts_with('"') {
            return Err(InvalidJsonError::new("expected '\"'", 0));
        }
        let end = parser::string_end(&text, 0)?;
        if end != text.len() {
            return Err(InvalidJsonError::new("trailing characters after string", end));
        }
        Ok(Self { text })
    }

    pub(crate) fn from_source(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text between the quotes, escapes left as written
    pub fn contents(&self) -> &str {
        &self.text[1..self.text.len() - 1]
    }
}

/// One key/value pair of an object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    #[serde(serialize_with = "serialize_key")]
    pub key: StringToken,
    pub value: Node,
}

impl Member {
    pub fn new(key: StringToken, value: Node) -> Self {
        Self { key, value }
    }
}

// Keys are written like any other string node so consumers see one shape.
fn serialize_key<S: Serializer>(key: &StringToken, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("StringToken", 2)?;
    state.serialize_field("type", "string")?;
    state.serialize_field("text", key.text())?;
    state.end()
}
