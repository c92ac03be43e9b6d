//! The error raised when no value can be read from the input

use std::fmt;

/// Malformed input: the parser hit a byte it could not continue from.
///
/// There is a single kind of failure. The message says what was expected and
/// the offset points at the byte (counted from the start of the input) where
/// the scan stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidJsonError {
    message: String,
    offset: usize,
}

impl InvalidJsonError {
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }

    /// Human-readable description of what went wrong
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset into the input where parsing stopped
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for InvalidJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid JSON at offset {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for InvalidJsonError {}
