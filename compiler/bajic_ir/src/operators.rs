//! Binary operators and their Pratt binding powers.
//!
//! Every operator has exactly one spelling, matched case-insensitively:
//!
//! | Operator  | Spelling  | Binding power |
//! |-----------|-----------|---------------|
//! | `In`      | `in`      | (1, 2)        |
//! | `Or`      | `or`      | (3, 4)        |
//! | `OrElse`  | `orelse`  | (3, 4)        |
//! | `And`     | `and`     | (5, 6)        |
//! | `AndAlso` | `andalso` | (5, 6)        |
//! | `BitOr`   | `bitor`   | (7, 8)        |
//! | `BitAnd`  | `bitand`  | (9, 10)       |
//! | `Lt` `Gt` `Lte` `Gte` | `<` `>` `<=` `>=` | (11, 12) |
//! | `Eq` `Ne` | `=` `<>`  | (14, 13)      |
//! | `Concat` `Add` `Sub` | `&` `+` `-` | (15, 16) |
//! | `Mul` `Div` | `*` `/` | (17, 18)      |
//! | `Pow`     | `^`       | (19, 20)      |

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// Longest operator spelling (`andalso`). Longer words are rejected without hashing.
const MAX_SPELLING_LEN: usize = 7;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    // Comparison
    Eq,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,

    // Arithmetic
    Concat,
    Add,
    Sub,
    Mul,
    Div,
    Pow,

    // Logical
    In,
    Or,
    OrElse,
    And,
    AndAlso,

    // Bitwise
    BitOr,
    BitAnd,

    /// Text that is not an operator spelling.
    Invalid,
}

/// Left and right binding power of an infix operator.
///
/// A Pratt parser keeps folding operators while their `left` power is at
/// least the current minimum, and parses the right operand with `right` as
/// the new minimum. `left < right` groups to the left, `left > right` groups
/// to the right.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BindingPower {
    /// How tightly the operator binds to its left operand.
    pub left: u8,
    /// How tightly the operator binds to its right operand.
    pub right: u8,
}

impl BindingPower {
    /// Power of anything that is not a binary operator.
    pub const NONE: BindingPower = BindingPower { left: 0, right: 0 };

    pub const fn new(left: u8, right: u8) -> Self {
        BindingPower { left, right }
    }

    /// Returns `true` when chains of this operator group to the left.
    pub const fn is_left_associative(self) -> bool {
        self.left < self.right
    }
}

impl BinaryOperator {
    /// Every real operator (excludes [`BinaryOperator::Invalid`]).
    pub const ALL: [BinaryOperator; 19] = [
        BinaryOperator::Eq,
        BinaryOperator::Ne,
        BinaryOperator::Lt,
        BinaryOperator::Gt,
        BinaryOperator::Lte,
        BinaryOperator::Gte,
        BinaryOperator::Concat,
        BinaryOperator::Add,
        BinaryOperator::Sub,
        BinaryOperator::Mul,
        BinaryOperator::Div,
        BinaryOperator::Pow,
        BinaryOperator::In,
        BinaryOperator::Or,
        BinaryOperator::OrElse,
        BinaryOperator::And,
        BinaryOperator::AndAlso,
        BinaryOperator::BitOr,
        BinaryOperator::BitAnd,
    ];

    /// Returns the canonical (lowercase) source spelling of this operator.
    ///
    /// `Invalid` has no spelling and returns an empty string.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Lte => "<=",
            Self::Gte => ">=",
            Self::Concat => "&",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::In => "in",
            Self::Or => "or",
            Self::OrElse => "orelse",
            Self::And => "and",
            Self::AndAlso => "andalso",
            Self::BitOr => "bitor",
            Self::BitAnd => "bitand",
            Self::Invalid => "",
        }
    }

    /// Resolve a spelling to its operator, ignoring ASCII case.
    ///
    /// Returns [`BinaryOperator::Invalid`] when `text` is not an operator.
    pub fn from_spelling(text: &str) -> Self {
        let len = text.len();
        if len == 0 || len > MAX_SPELLING_LEN || !text.is_ascii() {
            return BinaryOperator::Invalid;
        }
        let mut folded = [0u8; MAX_SPELLING_LEN];
        for (dst, src) in folded.iter_mut().zip(text.bytes()) {
            *dst = src.to_ascii_lowercase();
        }
        let Ok(key) = std::str::from_utf8(&folded[..len]) else {
            return BinaryOperator::Invalid;
        };
        spelling_table()
            .get(key)
            .copied()
            .unwrap_or(BinaryOperator::Invalid)
    }

    /// Returns `true` if `text` is an operator spelling (case-insensitive).
    #[inline]
    pub fn is_operator_spelling(text: &str) -> bool {
        BinaryOperator::from_spelling(text) != BinaryOperator::Invalid
    }

    /// Returns the Pratt binding power of this operator.
    ///
    /// Higher numbers bind tighter. `Invalid` has [`BindingPower::NONE`].
    pub const fn binding_power(self) -> BindingPower {
        match self {
            Self::In => BindingPower::new(1, 2),
            Self::Or | Self::OrElse => BindingPower::new(3, 4),
            Self::And | Self::AndAlso => BindingPower::new(5, 6),
            Self::BitOr => BindingPower::new(7, 8),
            Self::BitAnd => BindingPower::new(9, 10),
            Self::Lt | Self::Gt | Self::Lte | Self::Gte => BindingPower::new(11, 12),
            Self::Eq | Self::Ne => BindingPower::new(14, 13),
            Self::Concat | Self::Add | Self::Sub => BindingPower::new(15, 16),
            Self::Mul | Self::Div => BindingPower::new(17, 18),
            Self::Pow => BindingPower::new(19, 20),
            Self::Invalid => BindingPower::NONE,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.write_str("<invalid operator>"),
            op => f.write_str(op.as_symbol()),
        }
    }
}

/// Lowercase spelling to operator, built once on first lookup.
fn spelling_table() -> &'static FxHashMap<&'static str, BinaryOperator> {
    static TABLE: OnceLock<FxHashMap<&'static str, BinaryOperator>> = OnceLock::new();
    TABLE.get_or_init(|| {
        BinaryOperator::ALL
            .iter()
            .map(|&op| (op.as_symbol(), op))
            .collect()
    })
}
