//! A blocking, pull-based reader for a JSON-like format.
//!
//! `jsonpull` reads one byte at a time from any [`std::io::Read`] stream and
//! builds a [`Value`] tree by recursive descent. Token types are matched
//! speculatively: a failed match pushes every byte it consumed back onto the
//! [`ByteSource`], restoring the stream exactly so another alternative can
//! be tried from the same position.
//!
//! The accepted grammar is a JSON subset. Numbers are bare digit runs (no
//! sign, decimal point, or exponent), string escapes are carried through raw
//! rather than decoded, and strings are byte strings: input is not required
//! to be UTF-8. Whitespace is insignificant between tokens and significant
//! inside strings. Objects reject duplicate keys, and nesting is bounded by
//! a configurable depth limit so hostile input fails with an error instead
//! of exhausting the call stack.
//!
//! # Examples
//!
//! ```
//! use jsonpull::{Value, parse_bytes};
//!
//! let value = parse_bytes(br#"{"answer": 42}"#).unwrap();
//! let Value::Object(object) = value else {
//!     unreachable!()
//! };
//! assert_eq!(object.get("answer"), Some(&Value::Number("42".into())));
//! ```

mod error;
mod options;
mod parser;
mod source;
mod tokenizer;
mod value;

pub use error::{ErrorKind, ParseError};
pub use options::ParserOptions;
pub use parser::Parser;
pub use source::{ByteSource, Whitespace};
pub use tokenizer::Tokenizer;
pub use value::{Array, DuplicateKeyError, Object, Value};

use std::io::Read;
use std::path::Path;

/// Parses exactly one value from `reader`.
///
/// The stream must hold nothing but whitespace after the value.
///
/// # Errors
///
/// Fails when no value can be read or on any structural or stream error.
pub fn parse_reader<R: Read>(reader: R, options: ParserOptions) -> Result<Value, ParseError> {
    Parser::new(ByteSource::new(reader), options).parse()
}

/// Parses exactly one value from an in-memory buffer, with default options.
///
/// # Errors
///
/// Fails when no value can be read or on any structural error.
pub fn parse_bytes(bytes: &[u8]) -> Result<Value, ParseError> {
    parse_reader(bytes, ParserOptions::default())
}

/// Opens the file at `path` and parses exactly one value from it, with
/// default options.
///
/// # Errors
///
/// Fails when the file cannot be opened, when no value can be read, or on
/// any structural or stream error.
pub fn parse_path(path: impl AsRef<Path>) -> Result<Value, ParseError> {
    let source =
        ByteSource::from_path(path).map_err(|err| ParseError::new(ErrorKind::Io(err), 0))?;
    Parser::new(source, ParserOptions::default()).parse()
}
