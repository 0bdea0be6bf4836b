//! Recursive-descent value reader.

use std::io::Read;

use crate::error::{ErrorKind, ParseError};
use crate::options::ParserOptions;
use crate::source::ByteSource;
use crate::tokenizer::Tokenizer;
use crate::value::{Array, Object, Value};

/// Recursive-descent reader producing one [`Value`] tree per parse.
///
/// One method per grammar nonterminal. Alternatives are matched
/// speculatively: a failed attempt restores the stream through the
/// tokenizer's pushback contract, so `Ok(None)` always means the stream is
/// exactly where it was before the attempt.
#[derive(Debug)]
pub struct Parser<R> {
    tokenizer: Tokenizer<R>,
    options: ParserOptions,
}

impl<R: Read> Parser<R> {
    /// Creates a parser reading from `source`.
    pub fn new(source: ByteSource<R>, options: ParserOptions) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            options,
        }
    }

    /// Logical byte offset of the next unread byte.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.tokenizer.offset()
    }

    /// Reads exactly one root value and requires the rest of the stream to
    /// be blank, consuming the parser.
    ///
    /// # Errors
    ///
    /// Fails when no value can be read, when significant bytes trail the
    /// value, or on any structural or stream error.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let Some(value) = self.read_value()? else {
            return Err(self.missing_value());
        };
        self.expect_end()?;
        Ok(value)
    }

    /// Tries the value alternatives in fixed order: null, boolean, string,
    /// number, object, array. Returns `None` with the stream unmoved when
    /// none of them match.
    ///
    /// # Errors
    ///
    /// Fails on structural errors inside a container, on the depth limit,
    /// or on stream errors.
    pub fn read_value(&mut self) -> Result<Option<Value>, ParseError> {
        self.value_at(0)
    }

    /// Reads one object, or `None` with the stream unmoved when the next
    /// significant byte is not `{`.
    ///
    /// # Errors
    ///
    /// Fails on structural errors, duplicate keys, the depth limit, or
    /// stream errors.
    pub fn read_object(&mut self) -> Result<Option<Object>, ParseError> {
        self.object_at(0)
    }

    /// Reads one array, or `None` with the stream unmoved when the next
    /// significant byte is not `[`.
    ///
    /// # Errors
    ///
    /// Fails on structural errors, the depth limit, or stream errors.
    pub fn read_array(&mut self) -> Result<Option<Array>, ParseError> {
        self.array_at(0)
    }

    /// Confirms the stream holds nothing further but whitespace.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::TrailingData`] naming the first significant
    /// residual byte, or on stream errors.
    pub fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.tokenizer.peek_byte()? {
            None => Ok(()),
            Some(byte) => Err(self.fail(ErrorKind::TrailingData(byte))),
        }
    }

    fn fail(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.tokenizer.offset())
    }

    fn value_at(&mut self, depth: usize) -> Result<Option<Value>, ParseError> {
        if self.tokenizer.read_null()? {
            return Ok(Some(Value::Null));
        }
        if let Some(flag) = self.tokenizer.read_boolean()? {
            return Ok(Some(Value::Boolean(flag)));
        }
        if let Some(contents) = self.tokenizer.read_string()? {
            return Ok(Some(Value::String(contents)));
        }
        let digits = self.tokenizer.read_number()?;
        if !digits.is_empty() {
            return Ok(Some(Value::Number(digits)));
        }
        if let Some(object) = self.object_at(depth)? {
            return Ok(Some(Value::Object(object)));
        }
        if let Some(items) = self.array_at(depth)? {
            return Ok(Some(Value::Array(items)));
        }
        Ok(None)
    }

    /// A nested value that must be present; classifies the failure when it
    /// is not.
    fn require_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        match self.value_at(depth)? {
            Some(value) => Ok(value),
            None => Err(self.missing_value()),
        }
    }

    /// Diagnoses a failed value attempt by peeking at the restored stream.
    ///
    /// A quote at the failure position means the string alternative saw the
    /// opening quote but hit end of input before the closing one; anything
    /// else is simply not the start of a value.
    fn missing_value(&mut self) -> ParseError {
        match self.tokenizer.peek_byte() {
            Ok(None) => self.fail(ErrorKind::UnexpectedEndOfInput),
            Ok(Some(b'"')) => self.fail(ErrorKind::UnterminatedString),
            Ok(Some(_)) => self.fail(ErrorKind::ExpectedValue),
            Err(err) => err,
        }
    }

    fn object_at(&mut self, depth: usize) -> Result<Option<Object>, ParseError> {
        if !self.tokenizer.read_literal(b"{")? {
            return Ok(None);
        }
        if depth >= self.options.max_depth {
            return Err(self.fail(ErrorKind::DepthExceeded(self.options.max_depth)));
        }
        let mut object = Object::new();
        loop {
            let Some(key) = self.tokenizer.read_key()? else {
                if self.tokenizer.read_literal(b"}")? {
                    return Ok(Some(object));
                }
                return Err(self.fail(ErrorKind::ExpectedKeyOrClose));
            };
            if !self.tokenizer.read_literal(b":")? {
                return Err(self.fail(ErrorKind::ExpectedColon));
            }
            let value = self.require_value(depth + 1)?;
            object
                .insert(key, value)
                .map_err(|err| self.fail(ErrorKind::DuplicateKey(err.0)))?;
            // Pair separator; its absence is tolerated.
            self.tokenizer.read_literal(b",")?;
        }
    }

    fn array_at(&mut self, depth: usize) -> Result<Option<Array>, ParseError> {
        if !self.tokenizer.read_literal(b"[")? {
            return Ok(None);
        }
        if depth >= self.options.max_depth {
            return Err(self.fail(ErrorKind::DepthExceeded(self.options.max_depth)));
        }
        let mut items = Array::new();
        loop {
            if self.tokenizer.read_literal(b"]")? {
                return Ok(Some(items));
            }
            // Element separator; its absence is tolerated.
            self.tokenizer.read_literal(b",")?;
            items.push(self.require_value(depth + 1)?);
        }
    }
}
