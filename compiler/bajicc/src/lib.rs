//! Bajic command-line harness.
//!
//! Library half of the `bajic` binary: tracing setup, file reading and the
//! token listing printed by `bajic lex`.

use std::fmt::Write as _;
use std::sync::Once;

use bajic_lexer::{lex, SourceTokens};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber configured from `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
/// Enable with `RUST_LOG=bajic_lexer=debug` or `RUST_LOG=bajic_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Read a source file, turning I/O failures into a user-facing message.
pub fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Render the token listing for `source`.
///
/// One `(start, end, Kind)` triple per line followed by the token text, then
/// any lexical diagnostics.
pub fn render_tokens(label: &str, source: &str) -> String {
    let output = lex(source);
    let view = SourceTokens::new(source, &output.tokens);

    let mut out = String::new();
    let _ = writeln!(out, "Tokens for {label} ({} tokens):", view.len());
    for (record, text) in view.iter() {
        let triple = format!("({}, {}, {:?})", record.start, record.end, record.kind);
        let _ = writeln!(out, "  {triple:<28} {text:?}");
    }
    for error in &output.errors {
        let _ = writeln!(out, "error: {error}");
    }
    out
}

/// `bajic lex <file>`
pub fn lex_file(path: &str) -> Result<String, String> {
    let source = read_source(path)?;
    Ok(render_tokens(&format!("'{path}'"), &source))
}

/// `bajic lex -e <text>`
pub fn lex_text(text: &str) -> String {
    render_tokens("<expr>", text)
}

#[cfg(test)]
mod tests;
