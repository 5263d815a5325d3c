use core::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

#[macro_export]
macro_rules! working_duration {
    ($hours:literal : $minutes:literal) => {{
        static_assertions::const_assert!($minutes <= 59);

        $crate::time::WorkingDuration::from_mins($hours * 60 + $minutes)
    }};
}

/// An amount of worked time in whole minutes, displayed as `HH:MM`.
///
/// Unlike a wall-clock time this is not bounded by a single day, a month
/// of full-time work adds up to around `160:00`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkingDuration {
    mins: u32,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Duration is not valid: {hours:02}:{minutes:02}")]
pub struct InvalidWorkingDuration {
    hours: u32,
    minutes: u32,
}

impl WorkingDuration {
    pub const ZERO: Self = Self { mins: 0 };

    pub fn new(hours: u32, minutes: u32) -> Result<Self, InvalidWorkingDuration> {
        if minutes > 59 {
            return Err(InvalidWorkingDuration { hours, minutes });
        }

        // hours is unbounded at the parse boundary
        hours
            .checked_mul(60)
            .and_then(|mins| mins.checked_add(minutes))
            .map(|mins| Self { mins })
            .ok_or(InvalidWorkingDuration { hours, minutes })
    }

    #[must_use]
    pub const fn from_mins(mins: u32) -> Self {
        Self { mins }
    }

    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.mins / 60
    }

    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.mins % 60
    }

    #[must_use]
    pub const fn as_mins(&self) -> u32 {
        self.mins
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.mins == 0
    }

    /// Returns `self - other`, or zero when `other` is the larger one.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self {
            mins: self.mins.saturating_sub(other.mins),
        }
    }
}

impl fmt::Display for WorkingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl Add for WorkingDuration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            mins: self.mins + rhs.mins,
        }
    }
}

impl AddAssign for WorkingDuration {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<u32> for WorkingDuration {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self {
            mins: self.mins * rhs,
        }
    }
}

impl Sum for WorkingDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl FromStr for WorkingDuration {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = string.split_once(':').ok_or_else(|| {
            anyhow::anyhow!("expected a duration like \"20:00\", got \"{}\"", string)
        })?;

        Ok(Self::new(hours.parse()?, minutes.parse()?)?)
    }
}

impl<'de> Deserialize<'de> for WorkingDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for WorkingDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
