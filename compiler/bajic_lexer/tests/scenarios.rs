//! End-to-end scanning scenarios through the public API.

use bajic_ir::{BinaryOperator, DateValue, Symbol, SymbolScope, Time, TokenBuffer, TokenKind};
use bajic_lexer::{
    lex, tokenize, tokenize_into, try_lex, try_tokenize, LexErrorKind, SourceTokens,
};
use pretty_assertions::assert_eq;

use TokenKind::*;

fn triples(source: &str) -> Vec<(TokenKind, u32, u32)> {
    tokenize(source)
        .iter()
        .map(|t| (t.kind, t.start, t.end))
        .collect()
}

#[test]
fn single_number() {
    assert_eq!(triples("1"), vec![(Number, 0, 1)]);
}

#[test]
fn negative_number() {
    assert_eq!(triples("-1"), vec![(Operator, 0, 1), (Number, 1, 2)]);
}

#[test]
fn lambda_arrow() {
    assert_eq!(
        triples("()=>(1)"),
        vec![
            (OpenParen, 0, 1),
            (CloseParen, 1, 2),
            (FatArrow, 2, 4),
            (OpenParen, 4, 5),
            (Number, 5, 6),
            (CloseParen, 6, 7),
        ]
    );
}

#[test]
fn date_literal_decodes_month_first() {
    let source = "#10/30/1990#";
    let tokens = tokenize(source);
    assert_eq!(triples(source), vec![(Date, 0, 12)]);
    let view = SourceTokens::new(source, &tokens);
    let Ok(date) = view.decoded_date(0) else {
        panic!("date literal should decode");
    };
    assert_eq!((date.month, date.day, date.year), (10, 30, 1990));
    assert_eq!(date.time, None);
}

#[test]
fn local_symbol() {
    let source = "hello@";
    let tokens = tokenize(source);
    assert_eq!(triples(source), vec![(Identifier, 0, 6)]);
    let view = SourceTokens::new(source, &tokens);
    let Ok(symbol) = view.decoded_symbol(0) else {
        panic!("identifier should decode");
    };
    assert_eq!(symbol.scope, SymbolScope::Local);
    assert_eq!(symbol.path, "");
    assert_eq!(symbol.name, "hello");
}

#[test]
fn member_call_with_block() {
    assert_eq!(
        triples("T.Count{U>3}"),
        vec![
            (Identifier, 0, 1),
            (Dot, 1, 2),
            (Identifier, 2, 7),
            (OpenBrace, 7, 8),
            (Identifier, 8, 9),
            (Operator, 9, 10),
            (Number, 10, 11),
            (CloseBrace, 11, 12),
        ]
    );
}

#[test]
fn hash_inside_identifier() {
    assert_eq!(
        triples("mama#(world)"),
        vec![
            (Identifier, 0, 5),
            (OpenParen, 5, 6),
            (Identifier, 6, 11),
            (CloseParen, 11, 12),
        ]
    );
}

#[test]
fn alternate_index_offsets_are_bytes() {
    assert_eq!(
        triples("papa\u{00B2}[world]"),
        vec![
            (Identifier, 0, 4),
            (OpenIndexAlt, 4, 7),
            (Identifier, 7, 12),
            (CloseIndex, 12, 13),
        ]
    );
    assert_eq!(
        triples("papa`[world]"),
        vec![
            (Identifier, 0, 4),
            (OpenIndexAlt, 4, 6),
            (Identifier, 6, 11),
            (CloseIndex, 11, 12),
        ]
    );
}

#[test]
fn statement_with_everything() {
    let source = "\
' compute a total
Dim total@ As New Number: total@ := Price$ * 2.5 & \"x\"\"y\"
If #01/02/2003 04:05:06# <> Today% AndAlso Not done@ Then ()=>[a!b]";
    let tokens = tokenize(source);
    let view = SourceTokens::new(source, &tokens);
    let texts: Vec<&str> = view.iter().map(|(_, text)| text).collect();
    assert_eq!(
        texts,
        vec![
            "Dim", "total@", "As", "New", "Number", ":", "total@", ":=", "Price$", "*", "2.5",
            "&", "\"x\"\"y\"", "If", "#01/02/2003 04:05:06#", "<>", "Today%", "AndAlso",
            "Not", "done@", "Then", "(", ")", "=>", "[", "a!b", "]",
        ]
    );
    assert_eq!(
        tokens.kinds().collect::<Vec<_>>(),
        vec![
            KeywordDim,
            Identifier,
            KeywordAs,
            KeywordNew,
            Identifier,
            StatementSeparator,
            Identifier,
            Assign,
            Identifier,
            Operator,
            Number,
            Operator,
            String,
            Identifier,
            Date,
            Operator,
            Identifier,
            Operator,
            KeywordNot,
            Identifier,
            Identifier,
            OpenParen,
            CloseParen,
            FatArrow,
            OpenIndex,
            Identifier,
            CloseIndex,
        ]
    );

    assert_eq!(view.decoded_string(12).as_deref(), Ok("x\"y"));
    assert_eq!(view.decoded_number(10), Ok(2.5));
    assert_eq!(
        view.decoded_date(14),
        Ok(DateValue::new(2003, 1, 2).with_time(Time::new(4, 5, 6)))
    );
    assert_eq!(view.resolve_binary_operator(15), Ok(BinaryOperator::Ne));
    assert_eq!(view.resolve_binary_operator(17), Ok(BinaryOperator::AndAlso));
    assert_eq!(view.decoded_symbol(8), Ok(Symbol::new(SymbolScope::PageScope, "", "price")));
    assert_eq!(view.decoded_symbol(16), Ok(Symbol::context("today")));
    assert_eq!(view.decoded_symbol(25), Ok(Symbol::new(SymbolScope::Builtin, "A", "B")));
}

#[test]
fn lex_reports_diagnostics_without_changing_tokens() {
    let source = "#13-01-2000# \"open";
    let output = lex(source);
    assert_eq!(output.tokens, tokenize(source));
    assert!(output.has_errors());
    let kinds: Vec<LexErrorKind> = output.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![LexErrorKind::MalformedDate, LexErrorKind::UnterminatedString]
    );
    assert_eq!(output.errors[0].span.start, 0);
    assert_eq!(output.errors[0].span.end, 12);
    assert_eq!(output.errors[1].span.start, 13);
    assert_eq!(output.errors[1].span.end, 18);
}

#[test]
fn clean_source_has_no_diagnostics() {
    let output = lex("x@ := #10/30/1990# & \"ok\"");
    assert!(!output.has_errors());
    assert_eq!(output.tokens.len(), 5);
}

#[test]
fn fallible_entry_points_agree_with_panicking_ones() {
    let source = "#13-01-2000# x@ := \"ok\"";
    let Ok(tokens) = try_tokenize(source) else {
        panic!("small source should tokenize");
    };
    assert_eq!(tokens, tokenize(source));
    let Ok(output) = try_lex(source) else {
        panic!("small source should lex");
    };
    assert_eq!(output, lex(source));
    assert_eq!(output.errors.len(), 1);
}

#[test]
fn tokenize_into_appends_to_presized_buffer() {
    let mut tokens = TokenBuffer::with_capacity(64);
    tokenize_into("a + b", &mut tokens);
    assert_eq!(tokens.len(), 3);
    assert!(tokens.capacity() >= 64);

    tokenize_into("c", &mut tokens);
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens.get(3).map(|t| (t.start, t.end)), Some((0, 1)));
}

#[test]
fn no_end_of_input_token() {
    let tokens = tokenize("a b");
    assert_eq!(tokens.len(), 2);
    assert!(tokens.kinds().all(|kind| kind != EndOfInput));
    assert_eq!(tokens.get(tokens.len()), None);
}

#[test]
fn large_input_keeps_order() {
    let source = "x + 1\n".repeat(2_000);
    let tokens = tokenize(&source);
    assert_eq!(tokens.len(), 6_000);
    let mut last_end = 0;
    for record in &tokens {
        assert!(record.start >= last_end);
        last_end = record.end;
    }
    assert_eq!(tokens[5_999].end as usize, source.len() - 1);
}
