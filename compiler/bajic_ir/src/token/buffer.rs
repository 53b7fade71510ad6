//! Append-only buffer of token records.

use std::fmt;

use super::{TokenKind, TokenRecord};

/// Capacity reserved on the first push into an unallocated buffer.
const MIN_CAPACITY: usize = 16;

/// Flat, contiguous store of `(start, end, kind)` records.
///
/// Records are only ever appended. When the buffer is full its capacity is
/// doubled, so `push` is amortized O(1); storage never shrinks. The logical
/// length is always `<= capacity()`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenBuffer {
    records: Vec<TokenRecord>,
}

impl TokenBuffer {
    /// Create a new empty buffer without allocating.
    #[inline]
    pub fn new() -> Self {
        TokenBuffer {
            records: Vec::new(),
        }
    }

    /// Create a buffer with room for `capacity` records.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenBuffer {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append one token.
    #[inline]
    pub fn push(&mut self, start: u32, end: u32, kind: TokenKind) {
        self.push_record(TokenRecord::new(start, end, kind));
    }

    /// Append a prepared record.
    pub fn push_record(&mut self, record: TokenRecord) {
        debug_assert!(
            record.start <= record.end,
            "token start {} exceeds end {}",
            record.start,
            record.end
        );
        if self.records.len() == self.records.capacity() {
            let additional = self.records.capacity().max(MIN_CAPACITY);
            self.records.reserve_exact(additional);
        }
        self.records.push(record);
    }

    /// Number of tokens in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records the buffer can hold before growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Get the record at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<TokenRecord> {
        self.records.get(index).copied()
    }

    /// Get only the kind at `index`.
    #[inline]
    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        self.records.get(index).map(|r| r.kind)
    }

    /// All records as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[TokenRecord] {
        &self.records
    }

    /// Iterate over records in source order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TokenRecord> {
        self.records.iter()
    }

    /// Iterate over kinds in source order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.records.iter().map(|r| r.kind)
    }
}

impl fmt::Debug for TokenBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenBuffer({} tokens)", self.records.len())
    }
}

impl std::ops::Index<usize> for TokenBuffer {
    type Output = TokenRecord;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a TokenBuffer {
    type Item = &'a TokenRecord;
    type IntoIter = std::slice::Iter<'a, TokenRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
