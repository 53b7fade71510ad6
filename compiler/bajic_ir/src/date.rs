//! Calendar values decoded from date literals.
//!
//! Literals are written `#MM/DD/YYYY#` or `#MM/DD/YYYY HH:MM:SS#`. Fields are
//! taken as written; no calendar validation is performed.

use std::fmt;

/// Time of day.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Time {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Time {
            hour,
            minute,
            second,
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Date with an optional time of day.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateValue {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    /// Present only when the literal spelled out a time.
    pub time: Option<Time>,
}

impl DateValue {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        DateValue {
            year,
            month,
            day,
            time: None,
        }
    }

    #[must_use]
    pub const fn with_time(self, time: Time) -> Self {
        DateValue {
            time: Some(time),
            ..self
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)?;
        if let Some(time) = self.time {
            write!(f, " {time}")?;
        }
        Ok(())
    }
}

crate::static_assert_size!(DateValue, 8);
