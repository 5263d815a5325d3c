use std::str::FromStr;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::time::WorkingDuration;

#[macro_export]
macro_rules! time_stamp {
    ($hour:literal : $minute:literal) => {{
        static_assertions::const_assert!($hour <= 23);
        static_assertions::const_assert!($minute <= 59);

        unsafe { $crate::time::TimeStamp::new_unchecked($hour, $minute) }
    }};
}

/// A wall-clock time in 24-hour format, like `09:00` or `22:15`.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{hour:02}:{minute:02}")]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Time is not valid: {hour:02}:{minute:02}")]
pub struct InvalidTime {
    hour: u8,
    minute: u8,
}

impl TimeStamp {
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    // the maximum TimeStamp is 23:59, which would be 23 * 60 + 59 = 1439
    // u16::MAX is 2^16 - 1 = 65535
    #[must_use]
    const fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// The time worked between clocking in at `self` and clocking out at
    /// `end`.
    ///
    /// An end at or before the start means the shift runs past midnight
    /// into the next day: `22:00` to `06:00` is 8 hours and a shift ending
    /// right where it starts covers the full 24 hours. The result is
    /// always strictly positive.
    #[must_use]
    pub const fn duration_until(&self, end: Self) -> WorkingDuration {
        const MINUTES_PER_DAY: u16 = 24 * 60;

        let start = self.as_minutes();
        let mut end = end.as_minutes();

        if end <= start {
            end += MINUTES_PER_DAY;
        }

        WorkingDuration::from_mins((end - start) as u32)
    }
}

impl FromStr for TimeStamp {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = string
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("expected a time like \"09:00\", got \"{}\"", string))?;

        Ok(Self::new(hour.parse()?, minute.parse()?)?)
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for TimeStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
