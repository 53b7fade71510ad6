//! Bajic CLI
//!
//! `bajic lex <file>` / `bajic lex -e <text>` print the token stream.

use bajicc::{init_tracing, lex_file, lex_text};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => match args.get(2).map(String::as_str) {
            Some("-e" | "--expr") => {
                let Some(text) = args.get(3) else {
                    eprintln!("error: missing text after -e");
                    eprintln!("Usage: bajic lex -e <text>");
                    std::process::exit(1);
                };
                print!("{}", lex_text(text));
            }
            Some(path) => match lex_file(path) {
                Ok(listing) => print!("{listing}"),
                Err(msg) => {
                    eprintln!("{msg}");
                    std::process::exit(1);
                }
            },
            None => {
                eprintln!("Usage: bajic lex <file> | bajic lex -e <text>");
                std::process::exit(1);
            }
        },
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("bajic {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Bajic front end");
    println!();
    println!("Usage: bajic <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>       Tokenize a file and display tokens");
    println!("  lex -e <text>    Tokenize the given text");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=bajic_lexer=trace) for scanner tracing.");
}
