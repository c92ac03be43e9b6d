//! Main module for rough-json library functionality

pub mod config;
pub mod error;
pub mod formats;
pub mod node;
pub mod parser;

pub use error::InvalidJsonError;
pub use node::{Member, Node, NumberToken, StringToken};
pub use parser::{parse, parse_roughly, Parser, MAX_DEPTH};
