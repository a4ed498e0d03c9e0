//! Core of the exam parser
//!
//! - [`ast`]: the parsed `Document` and its `Topic` tree
//! - [`parsing`]: command extraction, question detection, the state machine and the driver
//! - [`loader`]: reading documents from files, strings and readers
//! - [`formats`]: serializing documents (treeviz, json, yaml, latex)
//! - [`config`]: layered configuration with embedded defaults

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod loader;
pub mod parsing;

pub use ast::{Document, Topic};
pub use error::{CommandSyntaxError, ErrorKind, ParseError, ParseResult, StructuralError};
pub use parsing::{parse_lines, parse_str, Parser};
