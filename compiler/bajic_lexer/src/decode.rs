//! On-demand decoding of token values.
//!
//! The token buffer holds only offsets. The functions here re-slice the
//! source and turn a literal's text into its value. [`SourceTokens`] pairs a
//! source with its buffer and decodes by token index, checking the token's
//! kind first.

use std::borrow::Cow;

use bajic_ir::{BinaryOperator, DateValue, Symbol, TokenBuffer, TokenKind, TokenRecord};

use crate::date_grammar;
use crate::lex_error::DecodeError;
use crate::scanner;

/// Source text covered by `record`.
///
/// Empty if the record does not describe a valid range of `source`.
pub fn raw_text(source: &str, record: TokenRecord) -> &str {
    source.get(record.span().to_range()).unwrap_or_default()
}

/// Contents of a string literal: delimiters stripped and `""` collapsed to
/// `"`. Borrows from `raw` when there is nothing to collapse.
pub fn decode_string(raw: &str) -> Result<Cow<'_, str>, DecodeError> {
    let bytes = raw.as_bytes();
    if bytes.first() != Some(&b'"') {
        return Err(DecodeError::UnterminatedString);
    }

    // Find the closing quote, stepping over `""` pairs.
    let mut pos = 1;
    let close = loop {
        let Some(offset) = memchr::memchr(b'"', &bytes[pos..]) else {
            return Err(DecodeError::UnterminatedString);
        };
        let quote = pos + offset;
        if bytes.get(quote + 1) == Some(&b'"') {
            pos = quote + 2;
        } else {
            break quote;
        }
    };
    if close + 1 != bytes.len() {
        return Err(DecodeError::UnterminatedString);
    }

    let body = &raw[1..close];
    if memchr::memchr(b'"', body.as_bytes()).is_none() {
        Ok(Cow::Borrowed(body))
    } else {
        Ok(Cow::Owned(body.replace("\"\"", "\"")))
    }
}

/// Value of a number literal.
pub fn decode_number(raw: &str) -> Result<f64, DecodeError> {
    raw.parse::<f64>()
        .map_err(|source| DecodeError::MalformedNumber {
            text: raw.to_string(),
            source,
        })
}

/// Value of a `#...#` date literal.
pub fn decode_date(raw: &str) -> Result<DateValue, DecodeError> {
    raw.strip_prefix('#')
        .and_then(|rest| rest.strip_suffix('#'))
        .and_then(date_grammar::match_date)
        .ok_or_else(|| DecodeError::MalformedDate {
            text: raw.to_string(),
        })
}

/// A source text together with the tokens scanned from it.
#[derive(Clone, Copy, Debug)]
pub struct SourceTokens<'a> {
    source: &'a str,
    tokens: &'a TokenBuffer,
}

impl<'a> SourceTokens<'a> {
    pub fn new(source: &'a str, tokens: &'a TokenBuffer) -> Self {
        SourceTokens { source, tokens }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn tokens(&self) -> &'a TokenBuffer {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Records paired with their source text, in order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenRecord, &'a str)> + 'a {
        let source = self.source;
        let tokens: &'a TokenBuffer = self.tokens;
        tokens
            .as_slice()
            .iter()
            .map(move |&record| (record, raw_text(source, record)))
    }

    fn record(&self, index: usize) -> Result<TokenRecord, DecodeError> {
        self.tokens
            .get(index)
            .ok_or(DecodeError::IndexOutOfRange {
                index,
                len: self.tokens.len(),
            })
    }

    fn record_of_kind(&self, index: usize, expected: TokenKind) -> Result<TokenRecord, DecodeError> {
        let record = self.record(index)?;
        if record.kind != expected {
            return Err(DecodeError::UnexpectedKind {
                expected,
                found: record.kind,
            });
        }
        Ok(record)
    }

    /// Source text of token `index`.
    pub fn raw_text(&self, index: usize) -> Result<&'a str, DecodeError> {
        Ok(raw_text(self.source, self.record(index)?))
    }

    /// Contents of the string literal at `index`.
    pub fn decoded_string(&self, index: usize) -> Result<Cow<'a, str>, DecodeError> {
        let record = self.record_of_kind(index, TokenKind::String)?;
        decode_string(raw_text(self.source, record))
    }

    /// Value of the number literal at `index`.
    pub fn decoded_number(&self, index: usize) -> Result<f64, DecodeError> {
        let record = self.record_of_kind(index, TokenKind::Number)?;
        decode_number(raw_text(self.source, record))
    }

    /// Token `index` read as a symbol name. Any kind is accepted.
    pub fn decoded_symbol(&self, index: usize) -> Result<Symbol, DecodeError> {
        Ok(Symbol::from_text(self.raw_text(index)?))
    }

    /// Value of the date literal at `index`.
    pub fn decoded_date(&self, index: usize) -> Result<DateValue, DecodeError> {
        let record = self.record_of_kind(index, TokenKind::Date)?;
        decode_date(raw_text(self.source, record))
    }

    /// Whether token `index` begins with a separator character.
    pub fn is_separator_start(&self, index: usize) -> Result<bool, DecodeError> {
        Ok(scanner::starts_with_separator(self.raw_text(index)?))
    }

    /// Token `index` read as a binary operator, `Invalid` if it is not one.
    pub fn resolve_binary_operator(&self, index: usize) -> Result<BinaryOperator, DecodeError> {
        Ok(BinaryOperator::from_spelling(self.raw_text(index)?))
    }
}

#[cfg(test)]
mod tests;
