//! Lexical diagnostics and decoding errors.
//!
//! Diagnostics follow a WHERE+WHAT shape: `span` locates the literal in the
//! source and `kind` says what is wrong with it. They never change the token
//! stream; the scanner always makes progress and records the problem on the
//! side.

use std::num::ParseFloatError;

use bajic_ir::{Span, TokenKind};

/// A lexical diagnostic.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE: the offending literal, delimiters included.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

/// What kind of lexical problem was found.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `"`. The string token runs to end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Missing closing `#`. The error token runs to end of input.
    #[error("unterminated date literal")]
    UnterminatedDate,
    /// Text between `#` delimiters is not `MM/DD/YYYY[ HH:MM:SS]`.
    #[error("malformed date literal, expected `#MM/DD/YYYY#` or `#MM/DD/YYYY HH:MM:SS#`")]
    MalformedDate,
}

/// Failure to decode the value of a token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("token index {index} out of range (buffer holds {len} tokens)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("expected {} token, found {}", .expected.name(), .found.name())]
    UnexpectedKind {
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("malformed number `{text}`")]
    MalformedNumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("malformed date literal `{text}`")]
    MalformedDate { text: String },

    #[error("unterminated string literal")]
    UnterminatedString,
}

#[cfg(test)]
mod tests;
