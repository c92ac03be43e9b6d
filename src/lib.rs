//! # rough-json
//!
//! A lenient JSON parser that keeps the source text of scalar tokens.
//!
//! [`parse`] reads one JSON value and returns a [`Node`] tree. Objects and
//! arrays keep their children in source order; numbers and strings keep the
//! exact text they were written with, so nothing is lost to float conversion
//! or unescaping:
//!
//! ```text
//! parse(r#"[null, true, 12, "x"]"#)
//!   => Array [ Null, Boolean(true), Number("12"), String("\"x\"") ]
//! ```
//!
//! Input after the first value is ignored. Malformed input yields an
//! [`InvalidJsonError`].

pub mod rough;

pub use rough::{
    parse, parse_roughly, InvalidJsonError, Member, Node, NumberToken, Parser, StringToken,
};
