//! Bajic lexer - turns source text into a compact token buffer.
//!
//! # Architecture
//!
//! - [`SourceBuffer`] copies the source into a sentinel-terminated buffer
//! - [`Cursor`] walks that buffer byte by byte
//! - [`Scanner`] dispatches on the current byte and yields one
//!   [`TokenRecord`](bajic_ir::TokenRecord) per token, skipping whitespace and
//!   `'` comments
//! - [`decode`] re-slices the source to produce string, number, symbol and
//!   date values on demand
//!
//! The token buffer holds offsets only. Values are decoded lazily through
//! [`SourceTokens`].
//!
//! ```
//! use bajic_ir::TokenKind;
//!
//! let tokens = bajic_lexer::tokenize("-1");
//! let kinds: Vec<TokenKind> = tokens.kinds().collect();
//! assert_eq!(kinds, [TokenKind::Operator, TokenKind::Number]);
//! ```

mod cursor;
mod date_grammar;
pub mod decode;
mod keywords;
mod lex_error;
mod scanner;
mod source_buffer;

pub use cursor::Cursor;
pub use date_grammar::{is_valid_date, match_date};
pub use decode::SourceTokens;
pub use lex_error::{DecodeError, LexError, LexErrorKind};
pub use scanner::Scanner;
pub use source_buffer::SourceBuffer;

use bajic_ir::{SpanError, TokenBuffer};
use tracing::debug;

/// Tokens and lexical diagnostics for one source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenBuffer,
    /// Problems with individual literals. The token stream is complete
    /// regardless.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into a new token buffer.
///
/// # Panics
///
/// Panics if `source` is longer than `u32::MAX` bytes. Use [`try_tokenize`]
/// to get an error instead.
pub fn tokenize(source: &str) -> TokenBuffer {
    try_tokenize(source).unwrap_or_else(|err| panic!("source too large to tokenize: {err}"))
}

/// Scan `source` into a new token buffer, failing if its byte offsets do not
/// fit in `u32`.
pub fn try_tokenize(source: &str) -> Result<TokenBuffer, SpanError> {
    let mut tokens = TokenBuffer::with_capacity(estimate_token_count(source));
    scan(source, &mut tokens)?;
    Ok(tokens)
}

/// Scan `source`, appending its tokens to `tokens`.
///
/// # Panics
///
/// Panics if `source` is longer than `u32::MAX` bytes.
pub fn tokenize_into(source: &str, tokens: &mut TokenBuffer) {
    if let Err(err) = scan(source, tokens) {
        panic!("source too large to tokenize: {err}");
    }
}

/// Scan `source`, also collecting lexical diagnostics.
///
/// # Panics
///
/// Panics if `source` is longer than `u32::MAX` bytes. Use [`try_lex`] to get
/// an error instead.
pub fn lex(source: &str) -> LexOutput {
    try_lex(source).unwrap_or_else(|err| panic!("source too large to tokenize: {err}"))
}

/// Fallible form of [`lex`].
pub fn try_lex(source: &str) -> Result<LexOutput, SpanError> {
    let mut tokens = TokenBuffer::with_capacity(estimate_token_count(source));
    let errors = scan(source, &mut tokens)?;
    Ok(LexOutput { tokens, errors })
}

/// Nothing is appended to `tokens` when the source is too large.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
fn scan(source: &str, tokens: &mut TokenBuffer) -> Result<Vec<LexError>, SpanError> {
    let buffer = SourceBuffer::new(source)?;
    let before = tokens.len();
    let mut scanner = Scanner::new(buffer.cursor());
    while let Some(record) = scanner.next_token() {
        tokens.push_record(record);
    }
    let errors = scanner.into_errors();
    debug!(
        tokens = tokens.len() - before,
        errors = errors.len(),
        "scanned source"
    );
    Ok(errors)
}

/// Rough token count for presizing; roughly one token per four bytes.
fn estimate_token_count(source: &str) -> usize {
    source.len() / 4 + 1
}
