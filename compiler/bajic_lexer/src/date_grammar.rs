//! Matcher for the text between the `#` delimiters of a date literal.
//!
//! ```text
//! date  = NN "/" NN "/" NNNN [ ws NN ":" NN ":" NN ]
//! ```
//!
//! `N` is an ASCII digit and `ws` a single ASCII whitespace byte (space,
//! tab, LF, VT, FF or CR). The fields read month, day, year, then hour,
//! minute, second. The whole text must match.

use bajic_ir::{DateValue, Time};

/// Decode `inner` as a date, or `None` if it does not match the grammar.
pub fn match_date(inner: &str) -> Option<DateValue> {
    let bytes = inner.as_bytes();
    let (date, rest) = match bytes.len() {
        10 => (bytes, None),
        19 => (&bytes[..10], Some(&bytes[10..])),
        _ => return None,
    };

    let month = two_digits(date, 0)?;
    expect(date, 2, b'/')?;
    let day = two_digits(date, 3)?;
    expect(date, 5, b'/')?;
    let year = u16::from(two_digits(date, 6)?) * 100 + u16::from(two_digits(date, 8)?);
    let value = DateValue::new(year, month, day);

    let Some(time) = rest else {
        return Some(value);
    };
    if !is_date_whitespace(time[0]) {
        return None;
    }
    let hour = two_digits(time, 1)?;
    expect(time, 3, b':')?;
    let minute = two_digits(time, 4)?;
    expect(time, 6, b':')?;
    let second = two_digits(time, 7)?;
    Some(value.with_time(Time::new(hour, minute, second)))
}

/// Returns `true` if `inner` matches the date grammar.
#[inline]
pub fn is_valid_date(inner: &str) -> bool {
    match_date(inner).is_some()
}

fn two_digits(bytes: &[u8], at: usize) -> Option<u8> {
    let tens = digit(*bytes.get(at)?)?;
    let ones = digit(*bytes.get(at + 1)?)?;
    Some(tens * 10 + ones)
}

fn digit(b: u8) -> Option<u8> {
    b.is_ascii_digit().then(|| b - b'0')
}

fn expect(bytes: &[u8], at: usize, want: u8) -> Option<()> {
    (bytes.get(at) == Some(&want)).then_some(())
}

fn is_date_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
