use super::*;
use crate::tokenize;
use bajic_ir::{SymbolScope, Time};
use pretty_assertions::assert_eq;

// === Free decoders ===

#[test]
fn string_without_escapes_is_borrowed() {
    let Ok(value) = decode_string("\"hello\"") else {
        panic!("terminated string should decode");
    };
    assert_eq!(value, "hello");
    assert!(matches!(value, Cow::Borrowed(_)));
}

#[test]
fn doubled_quotes_collapse() {
    let Ok(value) = decode_string(r#""say ""hi""""#) else {
        panic!("escaped string should decode");
    };
    assert_eq!(value, r#"say "hi""#);
    assert!(matches!(value, Cow::Owned(_)));
}

#[test]
fn empty_and_quote_only_strings() {
    assert_eq!(decode_string(r#""""#), Ok(Cow::Borrowed("")));
    assert_eq!(
        decode_string(r#""""""#),
        Ok(Cow::<str>::Owned("\"".to_string()))
    );
}

#[test]
fn unterminated_strings_fail() {
    for raw in ["\"open", "\"", r#""a"""#, "", "plain", r#""a"b"#] {
        assert_eq!(
            decode_string(raw),
            Err(DecodeError::UnterminatedString),
            "{raw:?}"
        );
    }
}

#[test]
fn numbers() {
    assert_eq!(decode_number("1"), Ok(1.0));
    assert_eq!(decode_number("3.25"), Ok(3.25));
    assert_eq!(decode_number("1."), Ok(1.0));
    assert_eq!(decode_number("007"), Ok(7.0));
}

#[test]
fn multi_dot_number_fails_at_decode() {
    let Err(DecodeError::MalformedNumber { text, .. }) = decode_number("1.2.3") else {
        panic!("`1.2.3` should be a malformed number");
    };
    assert_eq!(text, "1.2.3");
}

#[test]
fn dates() {
    assert_eq!(decode_date("#10/30/1990#"), Ok(DateValue::new(1990, 10, 30)));
    assert_eq!(
        decode_date("#10/30/1990 13:14:15#"),
        Ok(DateValue::new(1990, 10, 30).with_time(Time::new(13, 14, 15)))
    );
}

#[test]
fn malformed_dates_fail() {
    for raw in ["#hello#", "#10/30/1990", "10/30/1990#", "#", ""] {
        assert_eq!(
            decode_date(raw),
            Err(DecodeError::MalformedDate {
                text: raw.to_string()
            }),
            "{raw:?}"
        );
    }
}

#[test]
fn raw_text_out_of_range_is_empty() {
    let record = TokenRecord::new(2, 9, TokenKind::Identifier);
    assert_eq!(raw_text("abc", record), "");
    let record = TokenRecord::new(4, 5, TokenKind::Operator);
    // Byte 5 is inside `²`.
    assert_eq!(raw_text("papa\u{00B2}[", record), "");
}

// === SourceTokens ===

#[test]
fn decodes_by_index() {
    let source = r#"x@ := "a""b" & 2.5 & #01/02/2003#"#;
    let tokens = tokenize(source);
    let view = SourceTokens::new(source, &tokens);
    assert_eq!(view.len(), 7);

    assert_eq!(view.decoded_symbol(0), Ok(Symbol::local("x")));
    assert_eq!(view.raw_text(1), Ok(":="));
    assert_eq!(view.decoded_string(2), Ok(Cow::<str>::Owned("a\"b".to_string())));
    assert_eq!(view.resolve_binary_operator(3), Ok(BinaryOperator::Concat));
    assert_eq!(view.decoded_number(4), Ok(2.5));
    assert_eq!(view.decoded_date(6), Ok(DateValue::new(2003, 1, 2)));
}

#[test]
fn kind_is_checked_before_decoding() {
    let source = "x 1";
    let tokens = tokenize(source);
    let view = SourceTokens::new(source, &tokens);
    assert_eq!(
        view.decoded_number(0),
        Err(DecodeError::UnexpectedKind {
            expected: TokenKind::Number,
            found: TokenKind::Identifier,
        })
    );
    assert_eq!(
        view.decoded_string(1),
        Err(DecodeError::UnexpectedKind {
            expected: TokenKind::String,
            found: TokenKind::Number,
        })
    );
}

#[test]
fn error_date_token_is_not_decoded() {
    let source = "#nope#";
    let tokens = tokenize(source);
    let view = SourceTokens::new(source, &tokens);
    assert_eq!(
        view.decoded_date(0),
        Err(DecodeError::UnexpectedKind {
            expected: TokenKind::Date,
            found: TokenKind::Error,
        })
    );
}

#[test]
fn unterminated_string_token_fails_to_decode() {
    let source = "\"open";
    let tokens = tokenize(source);
    let view = SourceTokens::new(source, &tokens);
    assert_eq!(view.raw_text(0), Ok("\"open"));
    assert_eq!(view.decoded_string(0), Err(DecodeError::UnterminatedString));
}

#[test]
fn index_out_of_range() {
    let source = "a";
    let tokens = tokenize(source);
    let view = SourceTokens::new(source, &tokens);
    let expected = Err(DecodeError::IndexOutOfRange { index: 1, len: 1 });
    assert_eq!(view.raw_text(1), expected);
    assert_eq!(view.decoded_symbol(1).map(|_| ()), Err(DecodeError::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(view.is_separator_start(1), Err(DecodeError::IndexOutOfRange { index: 1, len: 1 }));
}

#[test]
fn separator_start() {
    let source = "abc ( := papa\u{00B2}[ ^ \"s\"";
    let tokens = tokenize(source);
    let view = SourceTokens::new(source, &tokens);
    let starts: Vec<bool> = (0..view.len())
        .map(|i| view.is_separator_start(i) == Ok(true))
        .collect();
    assert_eq!(starts, vec![false, true, true, false, true, true, false]);
}

#[test]
fn word_operator_resolution() {
    let source = "a AndAlso b";
    let tokens = tokenize(source);
    let view = SourceTokens::new(source, &tokens);
    assert_eq!(view.resolve_binary_operator(1), Ok(BinaryOperator::AndAlso));
    assert_eq!(view.resolve_binary_operator(0), Ok(BinaryOperator::Invalid));
}

#[test]
fn symbol_decoding_keeps_scope_and_path() {
    let source = "Page!Title$";
    let tokens = tokenize(source);
    let view = SourceTokens::new(source, &tokens);
    let Ok(symbol) = view.decoded_symbol(0) else {
        panic!("identifier should decode as a symbol");
    };
    assert_eq!(symbol.scope, SymbolScope::PageScope);
    assert_eq!(symbol.path, "Page");
    assert_eq!(symbol.name, "Title");
}

#[test]
fn iter_pairs_records_with_text() {
    let source = "f(1)";
    let tokens = tokenize(source);
    let view = SourceTokens::new(source, &tokens);
    let texts: Vec<&str> = view.iter().map(|(_, text)| text).collect();
    assert_eq!(texts, vec!["f", "(", "1", ")"]);
}
