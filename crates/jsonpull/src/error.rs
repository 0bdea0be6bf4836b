use std::io;

use bstr::BString;
use thiserror::Error;

/// Error produced by a failed parse.
///
/// Carries the [`ErrorKind`] plus the logical byte offset at which the
/// failure was detected. Offsets count every byte consumed from the stream,
/// including insignificant whitespace, minus any bytes pushed back.
#[derive(Debug, Error)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Logical offset of the next unread byte when the failure was detected.
    pub offset: u64,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, offset: u64) -> Self {
        Self { kind, offset }
    }
}

/// The failure taxonomy.
///
/// Token mismatches are not represented here: a literal that fails to match
/// is undone via pushback and reported as "no match" to the alternative
/// being tried. Only failures that cannot be recovered by trying another
/// alternative surface as errors.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The underlying stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// None of the value alternatives matched where a value is required.
    #[error("expected a value")]
    ExpectedValue,
    /// End of input was reached inside a quoted string.
    #[error("unterminated string")]
    UnterminatedString,
    /// An object key was not followed by `:`.
    #[error("expected ':' after object key")]
    ExpectedColon,
    /// An object continued with something that is neither a key nor `}`.
    #[error("expected '\"' or '}}' in object")]
    ExpectedKeyOrClose,
    /// The same key appeared twice in one object.
    #[error("duplicate object key {0:?}")]
    DuplicateKey(BString),
    /// Input nesting exceeded the configured
    /// [`max_depth`](crate::ParserOptions::max_depth).
    #[error("nesting depth limit of {0} exceeded")]
    DepthExceeded(usize),
    /// A complete value was read but significant bytes remain on the stream.
    #[error("trailing data after value (next byte {0:#04x})")]
    TrailingData(u8),
    /// The input ended before a complete value was found.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
