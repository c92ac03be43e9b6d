//! Recursive-descent scanner for rough JSON
//!
//! There is no separate lexing pass: the parser keeps a byte cursor into the
//! borrowed input and decides what to read next from a single byte of
//! lookahead. Scalars are recorded as the slice of source they span.
//!
//! Dispatch, after skipping whitespace (space, tab, `\n`, `\r`):
//!
//! ```text
//!     n        -> literal null
//!     t / f    -> literal true / false
//!     "        -> string token
//!     - 0..9   -> number token
//!     [        -> array
//!     {        -> object
//!     other    -> InvalidJsonError
//! ```
//!
//! Arrays and objects may nest at most [`MAX_DEPTH`] levels deep; deeper input
//! fails with `nesting too deep` instead of exhausting the stack.
//!
//! Only one value is read. Whatever follows it is left untouched, so
//! `parse("true false")` returns `true`. Use [`Parser::offset`] to see where
//! the value ended.
//!
//! The scanner compares bytes. Every syntax character is ASCII and UTF-8 never
//! reuses ASCII bytes inside multi-byte sequences, so each recorded slice
//! starts and ends on a char boundary.

use super::error::InvalidJsonError;
use super::node::{Member, Node, NumberToken, StringToken};
use once_cell::sync::Lazy;
use regex::Regex;

/// Longest number token at the start of the haystack
static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?").unwrap());

/// Deepest array/object nesting accepted before failing
pub const MAX_DEPTH: usize = 512;

/// Parse one JSON value from the start of `input`.
///
/// Leading whitespace is skipped; trailing input after the value is ignored.
pub fn parse(input: &str) -> Result<Node, InvalidJsonError> {
    Parser::new(input).parse_value()
}

/// Alias of [`parse`], named after what it does to scalars.
pub fn parse_roughly(input: &str) -> Result<Node, InvalidJsonError> {
    parse(input)
}

/// Cursor over one input buffer
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    /// Byte offset of the cursor
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Input not yet consumed
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Read one value at the cursor, skipping leading whitespace.
    pub fn parse_value(&mut self) -> Result<Node, InvalidJsonError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'n') => self.parse_literal("null", Node::Null),
            Some(b't') => self.parse_literal("true", Node::Boolean { value: true }),
            Some(b'f') => self.parse_literal("false", Node::Boolean { value: false }),
            Some(b'"') => self.parse_string().map(Node::String),
            Some(b'-' | b'0'..=b'9') => self.parse_number().map(Node::Number),
            Some(b'[') => self.parse_nested(Self::parse_array),
            Some(b'{') => self.parse_nested(Self::parse_object),
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_nested(
        &mut self,
        parse: fn(&mut Self) -> Result<Node, InvalidJsonError>,
    ) -> Result<Node, InvalidJsonError> {
        if self.depth == MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn parse_literal(&mut self, literal: &str, node: Node) -> Result<Node, InvalidJsonError> {
        if !self.remaining().as_bytes().starts_with(literal.as_bytes()) {
            return Err(self.error(format!("expected '{literal}'")));
        }
        self.pos += literal.len();
        Ok(node)
    }

    fn parse_number(&mut self) -> Result<NumberToken, InvalidJsonError> {
        let len = number_len(self.remaining()).ok_or_else(|| self.error("malformed number"))?;
        let token = NumberToken::from_source(&self.input[self.pos..self.pos + len]);
        self.pos += len;
        Ok(token)
    }

    fn parse_string(&mut self) -> Result<StringToken, InvalidJsonError> {
        let start = self.pos;
        let end = string_end(self.input, start)?;
        self.pos = end;
        Ok(StringToken::from_source(&self.input[start..end]))
    }

    fn parse_array(&mut self) -> Result<Node, InvalidJsonError> {
        self.expect(b'[')?;
        self.skip_whitespace();
        if self.eat(b']') {
            return Ok(Node::Array { items: Vec::new() });
        }

        let mut items = Vec::new();
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Node::Array { items });
                }
                Some(_) => return Err(self.error("expected ',' or ']'")),
                None => return Err(self.error("unclosed array")),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Node, InvalidJsonError> {
        self.expect(b'{')?;
        self.skip_whitespace();
        if self.eat(b'}') {
            return Ok(Node::Object { items: Vec::new() });
        }

        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.error("expected string key"));
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            self.expect(b':')?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            items.push(Member::new(key, value));

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Node::Object { items });
                }
                Some(_) => return Err(self.error("expected ',' or '}'")),
                None => return Err(self.error("unclosed object")),
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), InvalidJsonError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", byte as char)))
        }
    }

    fn error(&self, message: impl Into<String>) -> InvalidJsonError {
        InvalidJsonError::new(message, self.pos)
    }
}

/// Length in bytes of the number token at the start of `text`, if any
pub(crate) fn number_len(text: &str) -> Option<usize> {
    NUMBER_REGEX.find(text).map(|m| m.end())
}

/// Offset just past the closing quote of the string token opening at `start`.
///
/// A backslash swallows the next byte whatever it is, so `\"` never closes the
/// token. A trailing lone backslash counts as an unterminated string.
pub(crate) fn string_end(input: &str, start: usize) -> Result<usize, InvalidJsonError> {
    let bytes = input.as_bytes();
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'"' => return Ok(pos + 1),
            _ => pos += 1,
        }
    }
    Err(InvalidJsonError::new("unterminated string", input.len()))
}
