use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{Month, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    /// Returns the date of the first day as a date in the month.
    #[must_use]
    pub const fn first_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: 1,
        }
    }

    /// Returns the date of the last day as a date in the month.
    #[must_use]
    pub const fn last_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: year.number_of_days_in_month(month),
        }
    }

    /// Iterates over every day of the month in chronological order.
    pub fn days_in(year: Year, month: Month) -> impl Iterator<Item = Self> + Clone {
        (1..=year.number_of_days_in_month(month)).map(move |day| Self { year, month, day })
    }
}

impl Date {
    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    pub const fn is_sunday(&self) -> bool {
        self.week_day().is_sunday()
    }

    #[must_use]
    const fn apply_offset(week_day: WeekDay, day: usize) -> usize {
        let offset = week_day as usize - 1;

        // In rust divisions always round down.
        // Dividing any number x by 7 for which holds:
        // 7 * n <= x < 7 * (n + 1) will result in n
        //
        // The first week number is 1 and not 0, so to each day 7 is added.
        //
        // Then the offset is added to the day, so that all mondays are a multiple of 7.
        // (one can calculate the week_numbers for weeks starting not on monday the same
        //  way, just make the day where the week starts a multiple of 7)
        //
        // Months starting with a monday will have the days 1, 8, 15, 22, 29
        // The offset is added so that they will be 0, 7, 14, 21, 28 (or with the + 7):
        // 7, 14, 21, 28, 35
        //  7 / 7 = 1
        // 14 / 7 = 2
        // 21 / 7 = 3
        // 28 / 7 = 4
        // 35 / 7 = 5
        day + 7 + offset - 1
    }

    /// The number of the monday-started week of the month this date falls
    /// into. The first week is week 1, a month spans at most 6 weeks.
    #[must_use]
    pub const fn week_number(&self) -> usize {
        Self::apply_offset(
            Self::first_day(self.year(), self.month()).week_day(),
            self.day(),
        ) / 7
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year)?);
            let month =
                Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                    input: string.to_string(),
                })?;
            let day = parse_or_err(day)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_to_string() {
        assert_eq!(
            Date::new(Year::new(2022), Month::January, 31).map(|d| d.to_string()),
            Ok("2022-01-31".to_string())
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2025-09-01".parse(), Ok(date!(2025:09:01)));
        assert_eq!("2024-02-29".parse(), Ok(date!(2024:02:29)));

        assert_eq!(
            "2025-02-29".parse::<Date>(),
            Err(InvalidDate::InvalidDay {
                year: Year::new(2025),
                month: Month::February,
                day: 29,
            })
        );
        assert_eq!(
            "01.09.2025".parse::<Date>(),
            Err(InvalidDate::ParseDateError {
                input: "01.09.2025".to_string(),
            })
        );
        assert_eq!(
            "2025-9".parse::<Date>(),
            Err(InvalidDate::ParseDateError {
                input: "2025-9".to_string(),
            })
        );
    }

    #[must_use]
    fn sort_array<T: Ord, const N: usize>(mut array: [T; N]) -> [T; N] {
        array.sort();
        array
    }

    #[test]
    fn test_date_sorting() {
        assert_eq!(
            sort_array([date!(2022:01:03), date!(2022:01:02), date!(2022:01:01)]),
            [date!(2022:01:01), date!(2022:01:02), date!(2022:01:03)]
        );

        assert_eq!(
            sort_array([date!(2012:01:03), date!(2013:01:02), date!(2024:01:01)]),
            [date!(2012:01:03), date!(2013:01:02), date!(2024:01:01)]
        );

        assert_eq!(
            sort_array([date!(2000:01:01), date!(2000:04:01), date!(2000:03:01)]),
            [date!(2000:01:01), date!(2000:03:01), date!(2000:04:01)]
        );
    }

    #[test]
    fn test_is_sunday() {
        assert!(date!(2025:09:07).is_sunday());
        assert!(date!(2025:09:28).is_sunday());
        assert!(!date!(2025:09:01).is_sunday());
        assert!(!date!(2025:09:06).is_sunday());
    }

    #[inline]
    #[track_caller]
    fn test_week_number_value(
        year: Year,
        month: Month,
        expected: usize,
        days: impl IntoIterator<Item = usize>,
    ) {
        for day in days {
            let actual = Date::new(year, month, day).unwrap().week_number();
            assert_eq!(
                expected, actual,
                "week_number({}-{}-{:02}): expected: {}, actual: {}",
                year, month, day, expected, actual,
            );
        }
    }

    #[test]
    fn test_week_number() {
        let year = Year::new(2022);
        let month = Month::November;

        test_week_number_value(year, month, 1, 1..=6);
        test_week_number_value(year, month, 2, 7..=13);
        test_week_number_value(year, month, 3, 14..=20);
        test_week_number_value(year, month, 4, 21..=27);
        test_week_number_value(year, month, 5, 28..=30);

        let year = Year::new(2022);
        let month = Month::December;

        test_week_number_value(year, month, 1, 1..=4);
        test_week_number_value(year, month, 2, 5..=11);
        test_week_number_value(year, month, 3, 12..=18);
        test_week_number_value(year, month, 4, 19..=25);
        test_week_number_value(year, month, 5, 26..=31);

        // a month that starts on a monday
        let year = Year::new(2025);
        let month = Month::September;

        test_week_number_value(year, month, 1, 1..=7);
        test_week_number_value(year, month, 2, 8..=14);
        test_week_number_value(year, month, 3, 15..=21);
        test_week_number_value(year, month, 4, 22..=28);
        test_week_number_value(year, month, 5, 29..=30);
    }

    #[test]
    fn test_days_in() {
        let days: Vec<_> = Date::days_in(Year::new(2024), Month::February).collect();

        assert_eq!(days.len(), 29);
        assert_eq!(days[0], date!(2024:02:01));
        assert_eq!(days[28], date!(2024:02:29));
    }

    #[test]
    fn test_serde_round_trip() {
        let date = date!(2025:09:15);

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-09-15\"");
        assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), date);
    }

    #[test]
    fn test_week_day_against_time_crate() {
        use ::time::Month as CalendarMonth;

        let months = Month::months().into_iter().zip([
            CalendarMonth::January,
            CalendarMonth::February,
            CalendarMonth::March,
            CalendarMonth::April,
            CalendarMonth::May,
            CalendarMonth::June,
            CalendarMonth::July,
            CalendarMonth::August,
            CalendarMonth::September,
            CalendarMonth::October,
            CalendarMonth::November,
            CalendarMonth::December,
        ]);

        for year in [2024, 2025, 2026] {
            for (month, calendar_month) in months.clone() {
                for date in Date::days_in(Year::new(year), month) {
                    let reference = ::time::Date::from_calendar_date(
                        year as i32,
                        calendar_month,
                        date.day() as u8,
                    )
                    .unwrap();

                    assert_eq!(
                        date.week_day().as_usize(),
                        usize::from(reference.weekday().number_days_from_monday()) + 1,
                        "weekday mismatch on {}",
                        date
                    );
                }
            }
        }
    }
}
