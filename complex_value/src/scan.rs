//! Text input for complex values
//!
//! The input format is two real literals (real part, then imaginary part)
//! followed by one unit-marker token:
//!
//! ```text
//! 3 4 i
//! 3+4i
//! -1.5 -0.25 anything
//! ```
//!
//! Numbers are read the way a stream extractor reads them: the longest
//! numeric prefix is taken and the rest of the blank-free run stays in the
//! input, so `4i` yields `4` and leaves `i` behind. The marker is the next
//! blank-free run, taken verbatim. With the default [`MarkerPolicy::Discard`]
//! it is thrown away unchecked and may be absent at end of input.
//!
//! Set `COMPLEX_VALUE_DEBUG=1` to trace consumed tokens.

use std::io::BufRead;
use std::str::FromStr;

use logos::Logos;

use crate::debug::debug_log;
use crate::error::{ComplexError, ComplexResult};
use crate::token::Token;
use crate::value::Complex;

/// What to do with the token that follows the imaginary part
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MarkerPolicy {
    /// Consume and ignore it; a missing marker at end of input is fine
    #[default]
    Discard,
    /// The marker must be present and equal to this text
    Require(String),
}

/// Scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanConfig {
    pub marker: MarkerPolicy,
}

impl ScanConfig {
    /// Accept any (or no) trailing marker
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Require `marker` after every value
    pub fn strict<S: Into<String>>(marker: S) -> Self {
        ScanConfig {
            marker: MarkerPolicy::Require(marker.into()),
        }
    }
}

/// End of the blank-free run starting at `start`
fn run_end(text: &str, start: usize) -> usize {
    text[start..]
        .find(char::is_whitespace)
        .map_or(text.len(), |len| start + len)
}

/// Reads successive complex values from a buffered source
///
/// Values may span lines. Input is pulled one line at a time and only when
/// the next token is needed, so interactive sources are not read ahead.
///
/// After an error the reader is positioned past the offending run and can
/// continue with the next value.
#[derive(Debug)]
pub struct ComplexReader<R> {
    inner: R,
    /// Unconsumed text (always whole lines)
    buf: String,
    /// Read position within `buf`
    pos: usize,
    /// Bytes discarded before the start of `buf`
    base: usize,
    eof: bool,
    config: ScanConfig,
}

impl<R: BufRead> ComplexReader<R> {
    /// Create a reader with the permissive default configuration
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, ScanConfig::default())
    }

    /// Create a reader with an explicit configuration
    pub fn with_config(inner: R, config: ScanConfig) -> Self {
        ComplexReader {
            inner,
            buf: String::new(),
            pos: 0,
            base: 0,
            eof: false,
            config,
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Byte offset of the read position from the start of the input
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    /// Consume the reader, returning the underlying source
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read the next value
    ///
    /// Returns `Ok(None)` when the input holds nothing but whitespace.
    pub fn read_complex(&mut self) -> ComplexResult<Option<Complex>> {
        if !self.fill()? {
            return Ok(None);
        }
        let re = self.read_number("real part")?;
        let im = self.read_number("imaginary part")?;
        let marker = self.next_run()?;

        if let MarkerPolicy::Require(expected) = &self.config.marker {
            match marker {
                Some((found, _)) if found == *expected => {}
                Some((found, offset)) => {
                    return Err(ComplexError::unexpected_marker(expected.as_str(), found, offset))
                }
                None => {
                    return Err(ComplexError::unexpected_eof(
                        format!("unit marker '{}'", expected),
                        self.base + self.pos,
                    ))
                }
            }
        }

        Ok(Some(Complex::new(re, im)))
    }

    /// True if a non-blank character remains in the input
    pub fn has_remaining(&mut self) -> ComplexResult<bool> {
        self.fill()
    }

    /// Make sure the buffer holds the start of a token, pulling lines as
    /// needed. Returns false at end of input.
    fn fill(&mut self) -> ComplexResult<bool> {
        loop {
            if !self.buf[self.pos..].trim_start().is_empty() {
                return Ok(true);
            }
            if self.eof {
                return Ok(false);
            }
            self.base += self.buf.len();
            self.buf.clear();
            self.pos = 0;
            match self.inner.read_line(&mut self.buf) {
                Ok(0) => self.eof = true,
                Ok(_) => {}
                Err(err) => {
                    self.eof = true;
                    return Err(err.into());
                }
            }
        }
    }

    fn read_number(&mut self, what: &str) -> ComplexResult<f64> {
        if !self.fill()? {
            return Err(ComplexError::unexpected_eof(what, self.base + self.pos));
        }

        let mut lexer = Token::lexer(&self.buf[self.pos..]);
        let token = lexer.next();
        let span = lexer.span();
        let literal = lexer.slice();
        let start = self.pos + span.start;
        let offset = self.base + start;

        match token {
            Some(Ok(Token::Number)) => {
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ComplexError::invalid_number(literal, offset))?;
                debug_log(format_args!("scan {}: '{}' at byte {}", what, literal, offset));
                self.pos += span.end;
                Ok(value)
            }
            Some(Ok(other)) => {
                debug_log(format_args!(
                    "scan {}: rejected {} '{}' at byte {}",
                    what,
                    other.name(),
                    literal,
                    offset
                ));
                let err = ComplexError::invalid_number(literal, offset);
                self.pos = run_end(&self.buf, start);
                Err(err)
            }
            Some(Err(())) => {
                self.pos = run_end(&self.buf, start);
                Err(ComplexError::LexerError { offset })
            }
            None => Err(ComplexError::unexpected_eof(what, offset)),
        }
    }

    /// Take the next blank-free run verbatim, with its offset
    fn next_run(&mut self) -> ComplexResult<Option<(String, usize)>> {
        if !self.fill()? {
            return Ok(None);
        }
        let rest = &self.buf[self.pos..];
        let start = self.pos + (rest.len() - rest.trim_start().len());
        let end = run_end(&self.buf, start);
        let run = self.buf[start..end].to_string();
        let offset = self.base + start;
        debug_log(format_args!("scan marker: '{}' at byte {}", run, offset));
        self.pos = end;
        Ok(Some((run, offset)))
    }
}

impl<R: BufRead> Iterator for ComplexReader<R> {
    type Item = ComplexResult<Complex>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_complex().transpose()
    }
}

impl Complex {
    /// Parse exactly one value from `text` using `config`
    ///
    /// Anything left after the marker is reported as `TrailingInput`.
    pub fn parse_with(text: &str, config: &ScanConfig) -> ComplexResult<Complex> {
        let mut reader = ComplexReader::with_config(text.as_bytes(), config.clone());
        let value = reader
            .read_complex()?
            .ok_or_else(|| ComplexError::unexpected_eof("real part", text.len()))?;
        if let Some((found, offset)) = reader.next_run()? {
            return Err(ComplexError::trailing_input(found, offset));
        }
        Ok(value)
    }
}

impl FromStr for Complex {
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Complex::parse_with(s, &ScanConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_separated() {
        assert_eq!("3 4 i".parse::<Complex>().unwrap(), Complex::new(3.0, 4.0));
        assert_eq!("  -1.5\t2e1  j ".parse::<Complex>().unwrap(), Complex::new(-1.5, 20.0));
    }

    #[test]
    fn test_from_str_display_form() {
        assert_eq!("3+4i".parse::<Complex>().unwrap(), Complex::new(3.0, 4.0));
        assert_eq!("3-4i".parse::<Complex>().unwrap(), Complex::new(3.0, -4.0));
        assert_eq!("0+0i".parse::<Complex>().unwrap(), Complex::ZERO);
    }

    #[test]
    fn test_marker_is_not_validated() {
        assert_eq!("3 4 xyz".parse::<Complex>().unwrap(), Complex::new(3.0, 4.0));
        assert_eq!("3 4 5".parse::<Complex>().unwrap(), Complex::new(3.0, 4.0));
        assert_eq!("3 4".parse::<Complex>().unwrap(), Complex::new(3.0, 4.0));
    }

    #[test]
    fn test_from_str_errors() {
        let err = "".parse::<Complex>().unwrap_err();
        assert!(matches!(err, ComplexError::UnexpectedEof { offset: 0, .. }));

        let err = "3".parse::<Complex>().unwrap_err();
        assert!(matches!(err, ComplexError::UnexpectedEof { offset: 1, .. }));

        let err = "3 x i".parse::<Complex>().unwrap_err();
        match err {
            ComplexError::InvalidNumber { literal, offset } => {
                assert_eq!(literal, "x");
                assert_eq!(offset, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = "3 - i".parse::<Complex>().unwrap_err();
        assert!(matches!(err, ComplexError::LexerError { offset: 2 }));

        let err = "3 4 i 5".parse::<Complex>().unwrap_err();
        assert!(matches!(err, ComplexError::TrailingInput { offset: 6, .. }));
    }

    #[test]
    fn test_strict_marker() {
        let config = ScanConfig::strict("i");
        assert_eq!(Complex::parse_with("3 4 i", &config).unwrap(), Complex::new(3.0, 4.0));
        assert_eq!(Complex::parse_with("3-4i", &config).unwrap(), Complex::new(3.0, -4.0));

        let err = Complex::parse_with("3 4 j", &config).unwrap_err();
        assert!(matches!(err, ComplexError::UnexpectedMarker { offset: 4, .. }));

        let err = Complex::parse_with("3 4", &config).unwrap_err();
        assert!(matches!(err, ComplexError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_reader_sequence_across_lines() {
        let input = "1 2 i\n3\n-4\ni 5+6i\n\n";
        let mut reader = ComplexReader::new(input.as_bytes());
        assert_eq!(reader.read_complex().unwrap(), Some(Complex::new(1.0, 2.0)));
        assert_eq!(reader.read_complex().unwrap(), Some(Complex::new(3.0, -4.0)));
        assert_eq!(reader.read_complex().unwrap(), Some(Complex::new(5.0, 6.0)));
        assert_eq!(reader.read_complex().unwrap(), None);
        assert_eq!(reader.read_complex().unwrap(), None);
    }

    #[test]
    fn test_reader_recovers_after_error() {
        let input = "1 oops i\n7 8 i\n";
        let mut reader = ComplexReader::new(input.as_bytes());
        assert!(matches!(
            reader.read_complex(),
            Err(ComplexError::InvalidNumber { offset: 2, .. })
        ));
        // The marker of the broken value is read as the next real part.
        assert!(reader.read_complex().is_err());
        assert_eq!(reader.read_complex().unwrap(), Some(Complex::new(7.0, 8.0)));
    }

    #[test]
    fn test_reader_iterator() {
        let values: Vec<Complex> = ComplexReader::new("1 1 i 2 2 i".as_bytes())
            .collect::<ComplexResult<_>>()
            .unwrap();
        assert_eq!(values, vec![Complex::new(1.0, 1.0), Complex::new(2.0, 2.0)]);
    }

    #[test]
    fn test_reader_offset() {
        let mut reader = ComplexReader::new("1 2 i\n3 4 i\n".as_bytes());
        reader.read_complex().unwrap();
        assert_eq!(reader.offset(), 5);
        reader.read_complex().unwrap();
        assert_eq!(reader.offset(), 11);
        assert!(!reader.has_remaining().unwrap());
    }
}
