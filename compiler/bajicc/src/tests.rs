use super::*;
use pretty_assertions::assert_eq;

#[test]
fn renders_triples_in_order() {
    let rendered = lex_text("-1");
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Tokens for <expr> (2 tokens):");
    assert!(lines[1].starts_with("  (0, 1, Operator)"));
    assert!(lines[1].ends_with("\"-\""));
    assert!(lines[2].starts_with("  (1, 2, Number)"));
    assert!(lines[2].ends_with("\"1\""));
}

#[test]
fn renders_diagnostics_after_tokens() {
    let rendered = lex_text("#99-99# x");
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("  (0, 7, Error)"));
    assert!(lines[2].starts_with("  (8, 9, Identifier)"));
    assert!(lines[3].starts_with("error: malformed date literal"));
    assert!(lines[3].ends_with("at 0..7"));
}

#[test]
fn empty_source_lists_no_tokens() {
    assert_eq!(lex_text("' only a comment"), "Tokens for <expr> (0 tokens):\n");
}

#[test]
fn missing_file_is_reported() {
    let Err(message) = lex_file("definitely/not/here.bajic") else {
        panic!("missing file should fail");
    };
    assert_eq!(message, "cannot find file 'definitely/not/here.bajic'");
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
