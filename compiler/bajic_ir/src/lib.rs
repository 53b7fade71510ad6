//! Bajic IR - token and value types for the lexical front end.
//!
//! This crate holds the data model shared between the scanner and whatever
//! consumes its output:
//! - [`Span`] byte ranges into the source text
//! - [`TokenKind`] and the compact [`TokenBuffer`] of `(start, end, kind)` records
//! - [`BinaryOperator`] spellings and their Pratt [`BindingPower`]s
//! - [`Symbol`] names with scope sigils and `path!name` qualifiers
//! - [`DateValue`] / [`Time`] decoded from date literals
//!
//! # Design Philosophy
//!
//! - **Positions, not text**: the token buffer stores offsets only; values are
//!   decoded lazily from the source by `bajic_lexer`.
//! - **Stable tags**: every `TokenKind` has an explicit `u8` discriminant, so
//!   the packed record layout does not depend on declaration order.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod date;
mod operators;
mod span;
mod symbol;
mod token;

pub use date::{DateValue, Time};
pub use operators::{BinaryOperator, BindingPower};
pub use span::{Span, SpanError};
pub use symbol::{Symbol, SymbolScope};
pub use token::{TokenBuffer, TokenKind, TokenRecord};
