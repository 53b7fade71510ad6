//! Byte cursor over a sentinel-terminated buffer.
//!
//! EOF is the sentinel byte at `source_len`. A `0x00` byte inside the source
//! is ordinary content; [`Cursor::is_eof`] tells the two apart by position.

/// Forward-only cursor into a [`SourceBuffer`](crate::SourceBuffer).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the cursor. `0` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Byte after the cursor.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Byte two positions after the cursor.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text between two byte offsets.
    ///
    /// Returns an empty string if the range does not fall on character
    /// boundaries; the scanner only ever slices whole characters.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        std::str::from_utf8(&self.buf[start as usize..end as usize]).unwrap_or_default()
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds. The predicate must reject `0` so the
    /// sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Width in bytes of the UTF-8 sequence starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one whole character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Move to the next `\n` (not consumed), or to EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        if !self.skip_to(b'\n') {
            self.pos = self.source_len;
        }
    }

    /// Move to the next occurrence of `byte` at or after the cursor.
    ///
    /// Returns `false` and leaves the cursor at EOF when there is none.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len, which fits in u32"
    )]
    pub fn skip_to(&mut self, byte: u8) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr(byte, remaining) {
            Some(offset) => {
                self.pos += offset as u32;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }
}
