use core::fmt;
use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{Date, Month, Year};
use crate::utils::StrExt;

/// A day of the year without a year attached, like `12-25`.
///
/// Shop closures recur every year, so the calendar keeps them
/// year-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct MonthDay {
    month: Month,
    day: usize,
}

impl MonthDay {
    pub fn new(month: Month, day: usize) -> Result<Self, InvalidMonthDay> {
        // year 0 is a leap year, so February gets its longest form here
        // and `02-29` stays representable (it simply never occurs in
        // common years)
        if day == 0 || day > Year::new(0).number_of_days_in_month(month) {
            return Err(InvalidMonthDay::InvalidDay { month, day });
        }

        Ok(Self { month, day })
    }

    #[must_use]
    pub fn of(date: Date) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> usize {
        self.day
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMonthDay {
    #[error("\"{input}\" is not a valid day of the year. Expected format: \"MM-DD\"")]
    ParseMonthDayError { input: String },
    #[error("{day:02} is not a valid day for month {month:02}")]
    InvalidDay { month: Month, day: usize },
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month.as_usize(), self.day)
    }
}

impl FromStr for MonthDay {
    type Err = InvalidMonthDay;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let parse_or_err = |input: &str| {
            input
                .parse::<usize>()
                .map_err(|_| InvalidMonthDay::ParseMonthDayError {
                    input: string.to_string(),
                })
        };

        if let [Some(month), Some(day)] = string.split_exact::<2>("-") {
            let month = Month::try_from(parse_or_err(month)?).map_err(|_| {
                InvalidMonthDay::ParseMonthDayError {
                    input: string.to_string(),
                }
            })?;

            Self::new(month, parse_or_err(day)?)
        } else {
            Err(InvalidMonthDay::ParseMonthDayError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for MonthDay {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<MonthDay> for String {
    fn from(day: MonthDay) -> Self {
        day.to_string()
    }
}

/// The days the shop stays closed, recurring every year.
///
/// The calendar is plain configuration data: movable feasts are entered as
/// the concrete day they are observed on, nothing is ever computed from
/// the year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    closures: BTreeSet<MonthDay>,
}

impl HolidayCalendar {
    #[must_use]
    pub fn new(closures: impl IntoIterator<Item = MonthDay>) -> Self {
        Self {
            closures: closures.into_iter().collect(),
        }
    }

    /// Returns `true` when the shop stays closed on this date.
    ///
    /// Closed dates never receive assignments.
    #[must_use]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.closures.contains(&MonthDay::of(date))
    }

    pub fn iter(&self) -> impl Iterator<Item = MonthDay> + '_ {
        self.closures.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.closures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.closures.is_empty()
    }
}

impl Default for HolidayCalendar {
    /// New Year's Day, Easter Monday (one concrete observance), Labour
    /// Day, Christmas Day and St. Stephen's Day.
    fn default() -> Self {
        Self {
            closures: BTreeSet::from([
                MonthDay {
                    month: Month::January,
                    day: 1,
                },
                MonthDay {
                    month: Month::April,
                    day: 20,
                },
                MonthDay {
                    month: Month::May,
                    day: 1,
                },
                MonthDay {
                    month: Month::December,
                    day: 25,
                },
                MonthDay {
                    month: Month::December,
                    day: 26,
                },
            ]),
        }
    }
}
