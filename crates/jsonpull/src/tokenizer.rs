//! Token readers with an exact-restore backtracking contract.

use std::io::Read;

use bstr::BString;

use crate::error::{ErrorKind, ParseError};
use crate::source::{ByteSource, Whitespace};

/// Token reader over a [`ByteSource`].
///
/// Every reader either consumes exactly one token or pushes everything it
/// consumed back onto the source, so a failed match leaves the stream at its
/// pre-call position and callers can try token types speculatively in any
/// order. Insignificant whitespace consumed before the first byte of a token
/// is the one exception: it is dropped, never pushed back.
#[derive(Debug)]
pub struct Tokenizer<R> {
    source: ByteSource<R>,
}

impl<R: Read> Tokenizer<R> {
    /// Wraps `source`.
    pub fn new(source: ByteSource<R>) -> Self {
        Self { source }
    }

    /// Logical byte offset of the next unread byte.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.source.offset()
    }

    fn next_byte(&mut self, whitespace: Whitespace) -> Result<Option<u8>, ParseError> {
        let offset = self.source.offset();
        self.source
            .read_byte(whitespace)
            .map_err(|err| ParseError::new(ErrorKind::Io(err), offset))
    }

    /// Returns the next significant byte without consuming it.
    ///
    /// # Errors
    ///
    /// Fails only on stream errors.
    pub fn peek_byte(&mut self) -> Result<Option<u8>, ParseError> {
        let byte = self.next_byte(Whitespace::Skip)?;
        if let Some(byte) = byte {
            self.source.push_back(&[byte]);
        }
        Ok(byte)
    }

    /// Matches `expected` byte for byte, skipping whitespace before the
    /// first byte only.
    ///
    /// On the first mismatch the matched prefix plus the mismatching byte
    /// are pushed back as one span and `false` is returned; the stream is
    /// exactly as it was before the call. A full match consumes exactly the
    /// token.
    ///
    /// # Errors
    ///
    /// Fails only on stream errors.
    pub fn read_literal(&mut self, expected: &[u8]) -> Result<bool, ParseError> {
        for (matched, &want) in expected.iter().enumerate() {
            let whitespace = if matched == 0 {
                Whitespace::Skip
            } else {
                Whitespace::Keep
            };
            match self.next_byte(whitespace)? {
                Some(got) if got == want => {}
                Some(got) => {
                    let mut span = expected[..matched].to_vec();
                    span.push(got);
                    self.source.push_back(&span);
                    return Ok(false);
                }
                None => {
                    self.source.push_back(&expected[..matched]);
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Reads `true` or `false`, or `None` with the stream unchanged.
    ///
    /// # Errors
    ///
    /// Fails only on stream errors.
    pub fn read_boolean(&mut self) -> Result<Option<bool>, ParseError> {
        if self.read_literal(b"true")? {
            return Ok(Some(true));
        }
        if self.read_literal(b"false")? {
            return Ok(Some(false));
        }
        Ok(None)
    }

    /// Reads the `null` literal.
    ///
    /// # Errors
    ///
    /// Fails only on stream errors.
    pub fn read_null(&mut self) -> Result<bool, ParseError> {
        self.read_literal(b"null")
    }

    /// Reads an object key, which is a quoted string.
    ///
    /// # Errors
    ///
    /// Fails only on stream errors.
    pub fn read_key(&mut self) -> Result<Option<BString>, ParseError> {
        self.read_quoted()
    }

    /// Reads a quoted string value.
    ///
    /// Escape sequences are carried through raw: a `\"` pair ends up in the
    /// result as backslash-quote, and no other sequence is treated
    /// specially.
    ///
    /// # Errors
    ///
    /// Fails only on stream errors.
    pub fn read_string(&mut self) -> Result<Option<BString>, ParseError> {
        self.read_quoted()
    }

    // The closing quote only counts when the byte before it was not a
    // backslash. Single-level check: a literal backslash immediately before
    // a genuine closing quote is misread as an escape.
    fn read_quoted(&mut self) -> Result<Option<BString>, ParseError> {
        if !self.read_literal(b"\"")? {
            return Ok(None);
        }
        let mut contents = Vec::new();
        let mut prev = b'"';
        loop {
            match self.next_byte(Whitespace::Keep)? {
                None => {
                    // Unterminated. Hand the whole span back so the caller
                    // may try a different token type from the same origin.
                    let mut span = Vec::with_capacity(contents.len() + 1);
                    span.push(b'"');
                    span.extend_from_slice(&contents);
                    self.source.push_back(&span);
                    return Ok(None);
                }
                Some(b'"') if prev != b'\\' => return Ok(Some(BString::from(contents))),
                Some(byte) => {
                    prev = byte;
                    contents.push(byte);
                }
            }
        }
    }

    /// Reads a maximal run of ASCII digits; the first non-digit byte is
    /// pushed back. An empty result means no digit was present.
    ///
    /// # Errors
    ///
    /// Fails only on stream errors.
    pub fn read_number(&mut self) -> Result<String, ParseError> {
        let mut digits = String::new();
        loop {
            match self.next_byte(Whitespace::Keep)? {
                Some(byte) if byte.is_ascii_digit() => digits.push(char::from(byte)),
                Some(byte) => {
                    self.source.push_back(&[byte]);
                    break;
                }
                None => break,
            }
        }
        Ok(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer(input: &[u8]) -> Tokenizer<&[u8]> {
        Tokenizer::new(ByteSource::new(input))
    }

    fn remaining(tok: &mut Tokenizer<&[u8]>) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(byte) = tok.source.read_byte(Whitespace::Keep).unwrap() {
            out.push(byte);
        }
        out
    }

    #[test]
    fn failed_literal_restores_stream() {
        let mut tok = tokenizer(b"tru1");
        assert!(!tok.read_literal(b"true").unwrap());
        assert_eq!(tok.offset(), 0);
        assert_eq!(remaining(&mut tok), b"tru1");
    }

    #[test]
    fn matched_literal_consumes_exactly_the_token() {
        let mut tok = tokenizer(b"true!");
        assert!(tok.read_literal(b"true").unwrap());
        assert_eq!(remaining(&mut tok), b"!");
    }

    #[test]
    fn literal_skips_whitespace_before_first_byte_only() {
        let mut tok = tokenizer(b"  \t null");
        assert!(tok.read_literal(b"null").unwrap());

        let mut tok = tokenizer(b"n ull");
        assert!(!tok.read_literal(b"null").unwrap());
        assert_eq!(remaining(&mut tok), b"n ull");
    }

    #[test]
    fn literal_restores_matched_prefix_at_eof() {
        let mut tok = tokenizer(b"tr");
        assert!(!tok.read_literal(b"true").unwrap());
        assert_eq!(remaining(&mut tok), b"tr");
    }

    #[test]
    fn boolean_reader() {
        let mut tok = tokenizer(b"true false x");
        assert_eq!(tok.read_boolean().unwrap(), Some(true));
        assert_eq!(tok.read_boolean().unwrap(), Some(false));
        assert_eq!(tok.read_boolean().unwrap(), None);
        assert_eq!(remaining(&mut tok), b"x");
    }

    #[test]
    fn null_reader() {
        let mut tok = tokenizer(b"null");
        assert!(tok.read_null().unwrap());
        assert!(!tok.read_null().unwrap());
    }

    #[test]
    fn quoted_string() {
        let mut tok = tokenizer(b"\"hello world\":");
        assert_eq!(tok.read_string().unwrap().unwrap(), "hello world");
        assert_eq!(remaining(&mut tok), b":");
    }

    #[test]
    fn empty_string_is_a_match() {
        let mut tok = tokenizer(b"\"\"");
        assert_eq!(tok.read_string().unwrap().unwrap(), "");
    }

    #[test]
    fn escaped_quote_is_kept_raw() {
        let mut tok = tokenizer(br#""a\"b""#);
        assert_eq!(tok.read_string().unwrap().unwrap(), r#"a\"b"#);
    }

    #[test]
    fn whitespace_is_significant_inside_strings() {
        let mut tok = tokenizer(b"  \" a\tb \"");
        assert_eq!(tok.read_string().unwrap().unwrap(), " a\tb ");
    }

    #[test]
    fn unterminated_string_restores_stream() {
        let mut tok = tokenizer(br#""abc"#);
        assert_eq!(tok.read_string().unwrap(), None);
        assert_eq!(tok.offset(), 0);
        assert_eq!(remaining(&mut tok), br#""abc"#);
    }

    #[test]
    fn missing_open_quote_leaves_stream_unchanged() {
        let mut tok = tokenizer(b"abc");
        assert_eq!(tok.read_key().unwrap(), None);
        assert_eq!(remaining(&mut tok), b"abc");
    }

    #[test]
    fn number_stops_at_first_non_digit() {
        let mut tok = tokenizer(b"0123,rest");
        assert_eq!(tok.read_number().unwrap(), "0123");
        assert_eq!(remaining(&mut tok), b",rest");
    }

    #[test]
    fn number_runs_to_end_of_input() {
        let mut tok = tokenizer(b"42");
        assert_eq!(tok.read_number().unwrap(), "42");
        assert!(tok.source.read_byte(Whitespace::Keep).unwrap().is_none());
    }

    #[test]
    fn number_is_empty_without_a_digit() {
        let mut tok = tokenizer(b"x1");
        assert_eq!(tok.read_number().unwrap(), "");
        assert_eq!(remaining(&mut tok), b"x1");
    }

    #[test]
    fn peek_does_not_consume() {
        let mut tok = tokenizer(b"  x");
        assert_eq!(tok.peek_byte().unwrap(), Some(b'x'));
        assert_eq!(tok.peek_byte().unwrap(), Some(b'x'));
        assert_eq!(remaining(&mut tok), b"x");
    }
}
