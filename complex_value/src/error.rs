//! Error types for complex value scanning
//!
//! Arithmetic on [`Complex`](crate::value::Complex) never fails: division by
//! zero and overflow follow IEEE-754 and surface as `Inf`/`NaN`. Errors only
//! arise while reading values from text, from the underlying I/O source, or
//! from the explicitly checked operations.

use thiserror::Error;

/// Complex value error type
#[derive(Debug, Error)]
pub enum ComplexError {
    /// Input ended before a required token
    #[error("unexpected end of input at byte {offset}, expected {expected}")]
    UnexpectedEof {
        /// What the scanner was looking for
        expected: String,
        /// Byte offset where input ran out
        offset: usize,
    },

    /// A token was found where a real number was expected
    #[error("invalid number literal '{literal}' at byte {offset}")]
    InvalidNumber {
        /// Offending text
        literal: String,
        /// Byte offset of the token
        offset: usize,
    },

    /// Text the lexer could not classify (e.g. a lone sign)
    #[error("unrecognized token at byte {offset}")]
    LexerError {
        /// Byte offset of the unrecognized text
        offset: usize,
    },

    /// Strict scanning found a different unit marker
    #[error("expected unit marker '{expected}', found '{found}' at byte {offset}")]
    UnexpectedMarker {
        expected: String,
        found: String,
        offset: usize,
    },

    /// Extra text after a single value parsed with `FromStr`
    #[error("unexpected trailing input '{found}' at byte {offset}")]
    TrailingInput { found: String, offset: usize },

    /// Domain error (e.g. division by a zero complex divisor)
    #[error("DomainError: {0}")]
    DomainError(String),

    /// Failure reading from the underlying source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ComplexError {
    /// Create an unexpected end-of-input error
    pub fn unexpected_eof<S: Into<String>>(expected: S, offset: usize) -> Self {
        ComplexError::UnexpectedEof {
            expected: expected.into(),
            offset,
        }
    }

    /// Create an invalid number error
    pub fn invalid_number<S: Into<String>>(literal: S, offset: usize) -> Self {
        ComplexError::InvalidNumber {
            literal: literal.into(),
            offset,
        }
    }

    /// Create an unexpected marker error
    pub fn unexpected_marker<S1: Into<String>, S2: Into<String>>(
        expected: S1,
        found: S2,
        offset: usize,
    ) -> Self {
        ComplexError::UnexpectedMarker {
            expected: expected.into(),
            found: found.into(),
            offset,
        }
    }

    /// Create a trailing input error
    pub fn trailing_input<S: Into<String>>(found: S, offset: usize) -> Self {
        ComplexError::TrailingInput {
            found: found.into(),
            offset,
        }
    }

    /// Create a domain error
    pub fn domain_error<S: Into<String>>(msg: S) -> Self {
        ComplexError::DomainError(msg.into())
    }

    /// Byte offset of the error within the scanned text, if it has one
    pub fn offset(&self) -> Option<usize> {
        match self {
            ComplexError::UnexpectedEof { offset, .. } => Some(*offset),
            ComplexError::InvalidNumber { offset, .. } => Some(*offset),
            ComplexError::LexerError { offset } => Some(*offset),
            ComplexError::UnexpectedMarker { offset, .. } => Some(*offset),
            ComplexError::TrailingInput { offset, .. } => Some(*offset),
            ComplexError::DomainError(_) | ComplexError::Io(_) => None,
        }
    }
}

/// Result type alias for complex value operations
pub type ComplexResult<T> = Result<T, ComplexError>;
