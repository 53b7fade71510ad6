//! Sentinel-terminated copy of the source text.
//!
//! The buffer stores the source bytes followed by a `0x00` sentinel and zero
//! padding up to the next 64-byte boundary. Lookahead of up to two bytes past
//! the last source byte therefore always reads zeros and never goes out of
//! bounds.

use bajic_ir::{Span, SpanError};

use crate::Cursor;

/// Buffer length is rounded up to a multiple of this.
const CACHE_LINE: usize = 64;

/// Sentinel byte plus two bytes of lookahead for `peek2()`.
const TAIL: usize = 3;

/// Sentinel-terminated source buffer.
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// Fails when the source is too large for `u32` offsets.
    pub fn new(source: &str) -> Result<Self, SpanError> {
        let bytes = source.as_bytes();
        let source_len = Span::try_from_range(0..bytes.len())?.end;

        let padded_len = (bytes.len() + TAIL + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..bytes.len()].copy_from_slice(bytes);

        Ok(SourceBuffer { buf, source_len })
    }

    /// Source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The whole buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A cursor positioned at the first byte.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.as_sentinel_bytes(), self.source_len)
    }

    /// Length of the source in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
