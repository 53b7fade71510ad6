use super::*;
use pretty_assertions::assert_eq;
use std::error::Error as _;

#[test]
fn lex_error_display_names_span() {
    let err = LexError::new(Span::new(0, 7), LexErrorKind::UnterminatedDate);
    assert_eq!(err.to_string(), "unterminated date literal at 0..7");
}

#[test]
fn unexpected_kind_uses_kind_names() {
    let err = DecodeError::UnexpectedKind {
        expected: TokenKind::Number,
        found: TokenKind::Identifier,
    };
    assert_eq!(err.to_string(), "expected number token, found identifier");
}

#[test]
fn malformed_number_keeps_parse_error_as_source() {
    let Err(parse) = "1.2.3".parse::<f64>() else {
        panic!("`1.2.3` should not parse as f64");
    };
    let err = DecodeError::MalformedNumber {
        text: "1.2.3".to_string(),
        source: parse,
    };
    assert_eq!(err.to_string(), "malformed number `1.2.3`");
    assert!(err.source().is_some());
}

#[test]
fn index_out_of_range_message() {
    let err = DecodeError::IndexOutOfRange { index: 4, len: 2 };
    assert_eq!(
        err.to_string(),
        "token index 4 out of range (buffer holds 2 tokens)"
    );
}
