//! Token types produced by the Bajic scanner.
//!
//! A token is nothing more than a `(start, end, kind)` record over byte
//! offsets in the source. Text is never copied into the buffer; consumers
//! re-slice the source through the decoders in `bajic_lexer`.

mod buffer;
mod kind;

pub use buffer::TokenBuffer;
pub use kind::TokenKind;

use std::fmt;

use crate::Span;

/// One scanned token: a byte range plus its kind.
///
/// Layout: two `u32` offsets and a one-byte kind tag, padded to 12 bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenRecord {
    pub start: u32,
    pub end: u32,
    pub kind: TokenKind,
}

impl TokenRecord {
    #[inline]
    pub const fn new(start: u32, end: u32, kind: TokenKind) -> Self {
        TokenRecord { start, end, kind }
    }

    /// The byte range covered by this token.
    #[inline]
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

impl fmt::Debug for TokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}..{}", self.kind, self.start, self.end)
    }
}

// Size assertions to prevent accidental regressions in the packed buffer.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{TokenKind, TokenRecord};
    crate::static_assert_size!(TokenKind, 1);
    crate::static_assert_size!(TokenRecord, 12);
}
