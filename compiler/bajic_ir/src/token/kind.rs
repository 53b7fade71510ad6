//! Token kinds with stable one-byte discriminants.

/// Kind of a scanned token, with semantic range layout.
///
/// Every variant carries an explicit `u8` discriminant so the value stored in
/// a [`TokenRecord`](crate::TokenRecord) never depends on declaration order:
///
/// | Range   | Category                  |
/// |---------|---------------------------|
/// | 0-15    | Literals and identifiers  |
/// | 16-31   | Punctuation               |
/// | 32-47   | Keywords                  |
/// | 48-63   | Operators                 |
/// | 240-254 | Errors                    |
/// | 255     | Control                   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // === Literals and identifiers (0-15) ===
    /// Decimal number: `42`, `1.5`
    Number = 0,
    /// Quoted string: `"say ""hi"""`
    String = 1,
    /// Date literal: `#10/30/1990#`
    Date = 2,
    /// Identifier, possibly with a scope sigil: `total@`, `Page!Title$`
    Identifier = 3,

    // === Punctuation (16-31) ===
    /// `:`
    StatementSeparator = 16,
    /// `,`
    Comma = 17,
    /// `.`
    Dot = 18,
    /// `(`
    OpenParen = 19,
    /// `)`
    CloseParen = 20,
    /// `[`
    OpenIndex = 21,
    /// `` `[ `` or `²[`
    OpenIndexAlt = 22,
    /// `]`
    CloseIndex = 23,
    /// `{`
    OpenBrace = 24,
    /// `}`
    CloseBrace = 25,
    /// `:=`
    Assign = 26,
    /// `=>`
    FatArrow = 27,

    // === Keywords (32-47) ===
    KeywordDim = 32,
    KeywordAs = 33,
    KeywordNew = 34,
    KeywordNot = 35,
    KeywordClass = 36,

    // === Operators (48-63) ===
    /// Any operator spelling, symbolic (`<>`) or word (`AndAlso`).
    Operator = 48,

    // === Errors (240-254) ===
    /// Malformed or unterminated date literal.
    Error = 240,

    // === Control (255) ===
    EndOfInput = 255,
}

impl TokenKind {
    /// All kinds, in discriminant order.
    pub const ALL: [TokenKind; 24] = [
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Date,
        TokenKind::Identifier,
        TokenKind::StatementSeparator,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenIndex,
        TokenKind::OpenIndexAlt,
        TokenKind::CloseIndex,
        TokenKind::OpenBrace,
        TokenKind::CloseBrace,
        TokenKind::Assign,
        TokenKind::FatArrow,
        TokenKind::KeywordDim,
        TokenKind::KeywordAs,
        TokenKind::KeywordNew,
        TokenKind::KeywordNot,
        TokenKind::KeywordClass,
        TokenKind::Operator,
        TokenKind::Error,
        TokenKind::EndOfInput,
    ];

    /// The stable one-byte tag of this kind.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Recover a kind from its tag. Returns `None` for unassigned values.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        Some(match tag {
            0 => TokenKind::Number,
            1 => TokenKind::String,
            2 => TokenKind::Date,
            3 => TokenKind::Identifier,
            16 => TokenKind::StatementSeparator,
            17 => TokenKind::Comma,
            18 => TokenKind::Dot,
            19 => TokenKind::OpenParen,
            20 => TokenKind::CloseParen,
            21 => TokenKind::OpenIndex,
            22 => TokenKind::OpenIndexAlt,
            23 => TokenKind::CloseIndex,
            24 => TokenKind::OpenBrace,
            25 => TokenKind::CloseBrace,
            26 => TokenKind::Assign,
            27 => TokenKind::FatArrow,
            32 => TokenKind::KeywordDim,
            33 => TokenKind::KeywordAs,
            34 => TokenKind::KeywordNew,
            35 => TokenKind::KeywordNot,
            36 => TokenKind::KeywordClass,
            48 => TokenKind::Operator,
            240 => TokenKind::Error,
            255 => TokenKind::EndOfInput,
            _ => return None,
        })
    }

    /// Returns `true` for `dim`, `as`, `new`, `not` and `class`.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self.tag(), 32..=47)
    }

    /// Returns `true` for number, string and date literals.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::String | TokenKind::Date)
    }

    /// Returns `true` for structural punctuation (brackets, separators, arrows).
    #[inline]
    pub const fn is_punctuation(self) -> bool {
        matches!(self.tag(), 16..=31)
    }

    /// Human-readable name, used by the CLI and in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Date => "date",
            TokenKind::Identifier => "identifier",
            TokenKind::StatementSeparator => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenIndex => "`[`",
            TokenKind::OpenIndexAlt => "alternate `[`",
            TokenKind::CloseIndex => "`]`",
            TokenKind::OpenBrace => "`{`",
            TokenKind::CloseBrace => "`}`",
            TokenKind::Assign => "`:=`",
            TokenKind::FatArrow => "`=>`",
            TokenKind::KeywordDim => "`dim`",
            TokenKind::KeywordAs => "`as`",
            TokenKind::KeywordNew => "`new`",
            TokenKind::KeywordNot => "`not`",
            TokenKind::KeywordClass => "`class`",
            TokenKind::Operator => "operator",
            TokenKind::Error => "error",
            TokenKind::EndOfInput => "end of input",
        }
    }
}
