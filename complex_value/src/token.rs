//! Token definitions for complex value text input
//!
//! Uses logos for efficient lexing. A `Number` is a decimal real literal with
//! an optional sign, fraction and exponent. A `Word` is any other blank-free
//! run that cannot begin a number, such as the `i` unit marker.

use logos::Logos;

/// Lexical token of the complex text format
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Real literal: `3`, `-4`, `+0.25`, `.5`, `1.`, `6.02e23`
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Number,

    /// Anything else that does not start like a number
    #[regex(r"[^\s0-9+\-.][^\s]*")]
    Word,
}

impl Token {
    /// Human-readable token name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Token::Number => "number",
            Token::Word => "word",
        }
    }
}
