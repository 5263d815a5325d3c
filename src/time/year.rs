use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::time::{Date, Month, WeekDay};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(from = "usize")]
#[serde(into = "usize")]
#[display("{_0}")]
pub struct Year(usize);

/// The number of multiples of `divisor` in `0..n` (zero included).
const fn multiples_in(n: usize, divisor: usize) -> usize {
    (n + divisor - 1) / divisor
}

impl Year {
    /// All day arithmetic is based on the date 0000/01/01, because it does
    /// not make sense to go past this date. It happens to be a Saturday.
    const BASE_WEEK_DAY: WeekDay = WeekDay::Saturday;

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        !self.is_common_year() && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// The number of days in the months of this year before `month`.
    const fn days_before_month(&self, month: Month) -> usize {
        let months = Month::months();

        let mut result = 0;
        let mut i = 0;
        while i + 1 < month.as_usize() {
            result += self.number_of_days_in_month(months[i]);
            i += 1;
        }

        result
    }

    /// Returns the number of days between 0000/01/01 and the first day of
    /// this year.
    ///
    /// Every year has 365 days, plus one for each leap year in between.
    /// The leap years are counted in closed form (year 0 is a leap year).
    const fn days_since_base_date(&self) -> usize {
        let year = self.as_usize();
        let leap_years = multiples_in(year, 4) - multiples_in(year, 100) + multiples_in(year, 400);

        year * 365 + leap_years
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let days = self.days_since_base_date() + self.days_before_month(month) + (day - 1);

        Self::BASE_WEEK_DAY.add_const(days)
    }

    /// Iterates over the days of the provided month in chronological order.
    pub fn days_in(&self, month: Month) -> impl Iterator<Item = Date> + Clone {
        Date::days_in(*self, month)
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Year> for usize {
    fn from(value: Year) -> Self {
        value.as_usize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_leap_year() {
        // from: https://www.calendar.best/leap-years.html
        macro_rules! assert_leap_years {
            ( $( $year:expr ),* $(,)? ) => {
                $(
                    assert!(
                        Year::new($year).is_leap_year(),
                        concat!(stringify!($year), " should be a leap year")
                    );
                )*
            };
        }

        macro_rules! assert_not_leap_years {
            ( $( $year:expr ),* $(,)? ) => {
                $(
                    assert!(
                        !Year::new($year).is_leap_year(),
                        concat!(stringify!($year), " should not be a leap year")
                    );
                )*
            };
        }

        assert_leap_years![
            1904, 1908, 1912, 1916, 1920, 1924, 1928, 1932, 1936, 1940, 1944, 1948, 1952, 1956,
            1960, 1964, 1968, 1972, 1976, 1980, 1984, 1988, 1992, 1996, 2000, 2004, 2008, 2012,
            2016, 2020, 2024, 2028, 2032, 2036, 2040, 2044, 2048, 2052, 2056, 2060, 2064, 2068,
            2072, 2076, 2080, 2084, 2088, 2092, 2096
        ];

        assert_not_leap_years![
            1900, 1901, 1902, 1903, 1905, 1906, 1907, 1909, 1910, 1911, 1913, 1914, 1915, 1917,
            1918, 1919, 1921, 1922, 1923, 1925, 1926, 1927, 1929, 1930, 1931, 2100, 2200, 2300,
            2500, 2600, 2700, 2900, 3000
        ];
    }

    #[test]
    fn test_days_before_month() {
        let year = Year::new(2000);
        assert_eq!(year.days_before_month(Month::January), 0);
        assert_eq!(year.days_before_month(Month::February), 31);
        assert_eq!(year.days_before_month(Month::March), 31 + 29);

        assert_eq!(
            year.days_before_month(Month::December),
            year.days() - year.number_of_days_in_month(Month::December)
        );
    }

    #[test]
    fn test_days_since_base_date() {
        assert_eq!(Year::new(0).days_since_base_date(), 0);
        // year 0 is a leap year
        assert_eq!(Year::new(1).days_since_base_date(), 366);

        let mut elapsed_days = Year::new(2000).days_since_base_date();
        for year in 2000..=2100 {
            let year = Year::new(year);
            assert_eq!(
                year.days_since_base_date(),
                elapsed_days,
                "{} days since base date",
                year
            );
            elapsed_days += year.days();
        }
    }

    #[test]
    fn test_week_day() {
        assert_eq!(Year::new(2000).week_day(Month::January, 2), WeekDay::Sunday);
        assert_eq!(Year::new(2000).week_day(Month::January, 3), WeekDay::Monday);
        assert_eq!(
            Year::new(2000).week_day(Month::January, 4),
            WeekDay::Tuesday
        );

        assert_eq!(
            Year::new(2001).week_day(Month::January, 15),
            WeekDay::Monday
        );
        assert_eq!(Year::new(2002).week_day(Month::March, 10), WeekDay::Sunday);
        assert_eq!(
            Year::new(2021).week_day(Month::December, 24),
            WeekDay::Friday
        );
        assert_eq!(
            Year::new(2025).week_day(Month::September, 1),
            WeekDay::Monday
        );
    }

    #[test]
    fn test_week_day_against_time_crate() {
        for year in 1990..=2100 {
            for month in Month::months() {
                for day in 1..=Year::new(year).number_of_days_in_month(month) {
                    let expected = time::Date::from_calendar_date(
                        year as i32,
                        time::Month::try_from(month.as_usize() as u8).unwrap(),
                        day as u8,
                    )
                    .unwrap()
                    .weekday()
                    .number_from_monday();

                    assert_eq!(
                        Year::new(year).week_day(month, day).as_usize(),
                        expected as usize,
                        "week day of {:04}-{:02}-{:02}",
                        year,
                        month,
                        day
                    );
                }
            }
        }
    }

    #[test]
    fn test_days_in() {
        let year = Year::new(2025);

        let days: Vec<_> = year.days_in(Month::September).collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days.first(), Some(&Date::first_day(year, Month::September)));
        assert_eq!(days.last(), Some(&Date::last_day(year, Month::September)));
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
