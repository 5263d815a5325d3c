use core::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn week_days() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// The three letter form used in tables, like `Mon` or `Sun`.
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    #[must_use]
    pub const fn is_sunday(&self) -> bool {
        matches!(self, Self::Sunday)
    }

    #[must_use]
    pub(crate) const fn add_const(self, days: usize) -> Self {
        Self::week_days()[(self.as_usize() - 1 + days % 7) % 7]
    }
}

impl Add<usize> for WeekDay {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        self.add_const(rhs)
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{0}\" is not a week day. Expected one of \"monday\" to \"sunday\"")]
pub struct InvalidWeekDay(String);

impl FromStr for WeekDay {
    type Err = InvalidWeekDay;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::week_days()
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(string))
            .ok_or_else(|| InvalidWeekDay(string.to_string()))
    }
}

impl TryFrom<String> for WeekDay {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<WeekDay> for String {
    fn from(day: WeekDay) -> Self {
        day.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_add() {
        assert_eq!(WeekDay::Monday + 0, WeekDay::Monday);
        assert_eq!(WeekDay::Monday + 1, WeekDay::Tuesday);
        assert_eq!(WeekDay::Saturday + 2, WeekDay::Monday);
        assert_eq!(WeekDay::Sunday + 7, WeekDay::Sunday);
        assert_eq!(WeekDay::Wednesday + 700, WeekDay::Wednesday);
    }

    #[test]
    fn test_from_str() {
        for day in WeekDay::week_days() {
            assert_eq!(day.name().parse(), Ok(day));
            assert_eq!(day.name().to_uppercase().parse(), Ok(day));
        }

        assert_eq!(
            "mondays".parse::<WeekDay>(),
            Err(InvalidWeekDay("mondays".to_string()))
        );
    }

    #[test]
    fn test_is_sunday() {
        assert!(WeekDay::Sunday.is_sunday());
        assert!(!WeekDay::Monday.is_sunday());
        assert!(!WeekDay::Saturday.is_sunday());
    }
}
