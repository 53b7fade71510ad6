//! Single-pass scanner producing `(start, end, kind)` records.
//!
//! Dispatch is on the byte under the cursor. Whitespace and `'` line comments
//! are skipped; every other position starts exactly one token, and every
//! branch consumes at least one byte, so the scan always terminates.
//!
//! Lexical problems (bad or unterminated literals) never stop the scan. They
//! are recorded as [`LexError`]s next to the token stream.

use bajic_ir::{Span, TokenKind, TokenRecord};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::date_grammar;
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};

/// Lead byte of `²` (U+00B2) in UTF-8.
const SUPERSCRIPT_TWO_LEAD: u8 = 0xC2;
/// Continuation byte of `²` (U+00B2) in UTF-8.
const SUPERSCRIPT_TWO_TAIL: u8 = 0xB2;

/// Scanner over a [`Cursor`].
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Scanner {
            cursor,
            errors: Vec::new(),
        }
    }

    /// Diagnostics recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consume the scanner, returning its diagnostics.
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Scan the next token, skipping trivia. `None` at end of input.
    pub fn next_token(&mut self) -> Option<TokenRecord> {
        loop {
            if self.cursor.is_eof() {
                return None;
            }
            let start = self.cursor.pos();
            let token = match self.cursor.current() {
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.cursor.eat_while(is_whitespace);
                    continue;
                }
                b'\'' => {
                    self.cursor.eat_until_newline_or_eof();
                    continue;
                }
                b'"' => self.string(start),
                b'#' => self.date(start),
                b'0'..=b'9' => self.number(start),
                b':' => self.colon(start),
                b'=' => self.equal(start),
                b'<' => self.less(start),
                b'>' => self.greater(start),
                b'`' => self.backtick(start),
                SUPERSCRIPT_TWO_LEAD if self.cursor.peek() == SUPERSCRIPT_TWO_TAIL => {
                    self.superscript_two(start)
                }
                b',' => self.single(start, TokenKind::Comma),
                b'.' => self.single(start, TokenKind::Dot),
                b'(' => self.single(start, TokenKind::OpenParen),
                b')' => self.single(start, TokenKind::CloseParen),
                b'[' => self.single(start, TokenKind::OpenIndex),
                b']' => self.single(start, TokenKind::CloseIndex),
                b'{' => self.single(start, TokenKind::OpenBrace),
                b'}' => self.single(start, TokenKind::CloseBrace),
                b'&' | b'+' | b'-' | b'*' | b'/' | b'^' => self.single(start, TokenKind::Operator),
                _ => self.word(start),
            };
            trace!(kind = ?token.kind, start = token.start, end = token.end, "token");
            return Some(token);
        }
    }

    // ─── Helpers ───────────────────────────────────────────────────────

    #[inline]
    fn finish(&self, start: u32, kind: TokenKind) -> TokenRecord {
        TokenRecord::new(start, self.cursor.pos(), kind)
    }

    #[inline]
    fn single(&mut self, start: u32, kind: TokenKind) -> TokenRecord {
        self.cursor.advance();
        self.finish(start, kind)
    }

    /// One byte, or two when the next byte is `second`.
    #[inline]
    fn one_or_two(
        &mut self,
        start: u32,
        one: TokenKind,
        second: u8,
        two: TokenKind,
    ) -> TokenRecord {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            return self.finish(start, two);
        }
        self.finish(start, one)
    }

    fn report(&mut self, start: u32, kind: LexErrorKind) {
        let span = Span::new(start, self.cursor.pos());
        debug!(%span, %kind, "lexical error");
        self.errors.push(LexError::new(span, kind));
    }

    // ─── Punctuation & Operators ───────────────────────────────────────

    /// `:` or `:=`
    fn colon(&mut self, start: u32) -> TokenRecord {
        self.one_or_two(start, TokenKind::StatementSeparator, b'=', TokenKind::Assign)
    }

    /// `=` or `=>`
    fn equal(&mut self, start: u32) -> TokenRecord {
        self.one_or_two(start, TokenKind::Operator, b'>', TokenKind::FatArrow)
    }

    /// `<`, `<=` or `<>`
    fn less(&mut self, start: u32) -> TokenRecord {
        self.cursor.advance();
        if matches!(self.cursor.current(), b'=' | b'>') {
            self.cursor.advance();
        }
        self.finish(start, TokenKind::Operator)
    }

    /// `>` or `>=`
    fn greater(&mut self, start: u32) -> TokenRecord {
        self.one_or_two(start, TokenKind::Operator, b'=', TokenKind::Operator)
    }

    /// `` `[ `` opens an alternate index; a lone backtick is an operator.
    fn backtick(&mut self, start: u32) -> TokenRecord {
        self.one_or_two(start, TokenKind::Operator, b'[', TokenKind::OpenIndexAlt)
    }

    /// `²[` opens an alternate index; a lone `²` is an operator.
    fn superscript_two(&mut self, start: u32) -> TokenRecord {
        self.cursor.advance();
        self.one_or_two(start, TokenKind::Operator, b'[', TokenKind::OpenIndexAlt)
    }

    // ─── Literals ──────────────────────────────────────────────────────

    /// Digits and dots, greedily. `1.2.3` is one (undecodable) number.
    fn number(&mut self, start: u32) -> TokenRecord {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'.');
        self.finish(start, TokenKind::Number)
    }

    /// `"..."` where `""` is an escaped quote.
    fn string(&mut self, start: u32) -> TokenRecord {
        self.cursor.advance();
        loop {
            if !self.cursor.skip_to(b'"') {
                self.report(start, LexErrorKind::UnterminatedString);
                break;
            }
            self.cursor.advance();
            if self.cursor.current() != b'"' {
                break;
            }
            self.cursor.advance();
        }
        self.finish(start, TokenKind::String)
    }

    /// `#...#`, validated against the date grammar.
    fn date(&mut self, start: u32) -> TokenRecord {
        self.cursor.advance();
        let inner_start = self.cursor.pos();
        if !self.cursor.skip_to(b'#') {
            self.report(start, LexErrorKind::UnterminatedDate);
            return self.finish(start, TokenKind::Error);
        }
        let valid = date_grammar::is_valid_date(self.cursor.slice_from(inner_start));
        self.cursor.advance();
        if valid {
            self.finish(start, TokenKind::Date)
        } else {
            self.report(start, LexErrorKind::MalformedDate);
            self.finish(start, TokenKind::Error)
        }
    }

    // ─── Words ─────────────────────────────────────────────────────────

    /// Everything up to the next separator: identifiers, keywords and
    /// word operators.
    fn word(&mut self, start: u32) -> TokenRecord {
        while !self.cursor.is_eof() && !self.at_separator() {
            self.cursor.advance_char();
        }
        let kind = keywords::classify_word(self.cursor.slice_from(start));
        self.finish(start, kind)
    }

    fn at_separator(&self) -> bool {
        let b = self.cursor.current();
        is_separator_byte(b)
            || (b == SUPERSCRIPT_TWO_LEAD && self.cursor.peek() == SUPERSCRIPT_TWO_TAIL)
    }
}

impl Iterator for Scanner<'_> {
    type Item = TokenRecord;

    fn next(&mut self) -> Option<TokenRecord> {
        self.next_token()
    }
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// ASCII bytes that end a word. `²` is the only non-ASCII separator.
#[inline]
fn is_separator_byte(b: u8) -> bool {
    is_whitespace(b)
        || matches!(
            b,
            b':' | b','
                | b'('
                | b')'
                | b'['
                | b']'
                | b'{'
                | b'}'
                | b'='
                | b'<'
                | b'>'
                | b'&'
                | b'+'
                | b'-'
                | b'*'
                | b'/'
                // Every operator character ends a word, `^` included: `x^2`
                // is three tokens, not one identifier.
                | b'^'
                | b'.'
                | b'`'
        )
}

/// Returns `true` if `text` begins with a separator character.
pub(crate) fn starts_with_separator(text: &str) -> bool {
    match text.as_bytes() {
        [SUPERSCRIPT_TWO_LEAD, SUPERSCRIPT_TWO_TAIL, ..] => true,
        [b, ..] => is_separator_byte(*b),
        [] => false,
    }
}
