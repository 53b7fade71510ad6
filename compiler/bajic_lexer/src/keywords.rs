//! Word classification.
//!
//! A scanned word is an operator (`and`, `OrElse`, ...), one of the reserved
//! keywords, or an identifier. Both checks ignore ASCII case. Keywords are
//! looked up by length first; every keyword is 2-5 ASCII letters, so most
//! identifiers are rejected before any comparison.

use bajic_ir::{BinaryOperator, TokenKind};

/// Kind of a word token.
#[inline]
pub(crate) fn classify_word(text: &str) -> TokenKind {
    if BinaryOperator::is_operator_spelling(text) {
        return TokenKind::Operator;
    }
    lookup(text).unwrap_or(TokenKind::Identifier)
}

/// Reserved keyword spelled by `text`, ignoring ASCII case.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=5).contains(&len) || !text.as_bytes()[0].is_ascii_alphabetic() {
        return None;
    }

    let is = |keyword: &str| text.eq_ignore_ascii_case(keyword);
    match len {
        2 if is("as") => Some(TokenKind::KeywordAs),
        3 if is("dim") => Some(TokenKind::KeywordDim),
        3 if is("new") => Some(TokenKind::KeywordNew),
        3 if is("not") => Some(TokenKind::KeywordNot),
        5 if is("class") => Some(TokenKind::KeywordClass),
        _ => None,
    }
}
