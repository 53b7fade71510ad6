//! Symbol names with scope sigils.
//!
//! An identifier token may end in a sigil selecting its scope, and may be
//! qualified as `path!name`:
//!
//! | Sigil       | Scope       |
//! |-------------|-------------|
//! | `@`         | `Local`     |
//! | `$`         | `PageScope` |
//! | `#`         | `Constant`  |
//! | `%`         | `Context`   |
//! | `£`         | `Family`    |
//! | `μ` / `µ`   | `Global`    |
//! | (none)      | `Builtin`   |

use std::fmt;
use std::hash::{Hash, Hasher};

/// Scope a symbol resolves in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolScope {
    Local,
    PageScope,
    Constant,
    Context,
    Family,
    Global,
    /// No sigil.
    Builtin,
}

impl SymbolScope {
    /// Scope selected by a trailing sigil character.
    ///
    /// Global accepts both GREEK SMALL LETTER MU and MICRO SIGN, which look
    /// identical and are both produced by common keyboard layouts.
    pub const fn from_sigil(c: char) -> Option<Self> {
        Some(match c {
            '@' => SymbolScope::Local,
            '$' => SymbolScope::PageScope,
            '#' => SymbolScope::Constant,
            '%' => SymbolScope::Context,
            '£' => SymbolScope::Family,
            '\u{03BC}' | '\u{00B5}' => SymbolScope::Global,
            _ => return None,
        })
    }

    /// Canonical sigil of this scope, `None` for `Builtin`.
    pub const fn sigil(self) -> Option<char> {
        match self {
            SymbolScope::Local => Some('@'),
            SymbolScope::PageScope => Some('$'),
            SymbolScope::Constant => Some('#'),
            SymbolScope::Context => Some('%'),
            SymbolScope::Family => Some('£'),
            SymbolScope::Global => Some('\u{03BC}'),
            SymbolScope::Builtin => None,
        }
    }
}

/// A decoded identifier: `(scope, path, name)`.
///
/// Equality and hashing compare `path` and `name` case-insensitively (full
/// Unicode lowercase folding) and `scope` exactly, so `Foo!Bar@` and
/// `foo!bar@` are the same symbol. The original spelling is preserved.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    pub scope: SymbolScope,
    /// Qualifier before the first `!`, empty when unqualified.
    pub path: String,
    pub name: String,
}

impl Symbol {
    pub fn new(scope: SymbolScope, path: impl Into<String>, name: impl Into<String>) -> Self {
        Symbol {
            scope,
            path: path.into(),
            name: name.into(),
        }
    }

    /// Decode identifier text.
    ///
    /// A trailing sigil picks the scope and is stripped; without one the scope
    /// is `Builtin` and nothing is stripped. The remainder splits at the first
    /// `!` into `path` and `name`.
    pub fn from_text(text: &str) -> Self {
        let (scope, body) = match text.chars().next_back() {
            Some(last) => match SymbolScope::from_sigil(last) {
                Some(scope) => (scope, &text[..text.len() - last.len_utf8()]),
                None => (SymbolScope::Builtin, text),
            },
            None => (SymbolScope::Builtin, text),
        };
        match body.split_once('!') {
            Some((path, name)) => Symbol::new(scope, path, name),
            None => Symbol::new(scope, "", body),
        }
    }

    /// Unqualified builtin symbol.
    pub fn builtin(name: impl Into<String>) -> Self {
        Symbol::new(SymbolScope::Builtin, "", name)
    }

    /// Unqualified local symbol.
    pub fn local(name: impl Into<String>) -> Self {
        Symbol::new(SymbolScope::Local, "", name)
    }

    /// Unqualified context symbol.
    pub fn context(name: impl Into<String>) -> Self {
        Symbol::new(SymbolScope::Context, "", name)
    }

    /// Builtin symbol with no path qualifier.
    pub fn is_global_builtin(&self) -> bool {
        self.scope == SymbolScope::Builtin && self.path.is_empty()
    }
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.scope == other.scope
            && folded(&self.path).eq(folded(&other.path))
            && folded(&self.name).eq(folded(&other.name))
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scope.hash(state);
        for c in folded(&self.path) {
            c.hash(state);
        }
        // `!` cannot appear in a path, so it keeps ("ab", "c") apart from ("a", "bc").
        '!'.hash(state);
        for c in folded(&self.name) {
            c.hash(state);
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_empty() {
            write!(f, "{}!", self.path)?;
        }
        f.write_str(&self.name)?;
        if let Some(sigil) = self.scope.sigil() {
            write!(f, "{sigil}")?;
        }
        Ok(())
    }
}
