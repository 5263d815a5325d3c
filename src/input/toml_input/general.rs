use serde::Deserialize;

use crate::time::{HolidayCalendar, Month, Year};

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    month: Month,
    year: Year,
    holidays: Option<HolidayCalendar>,
}

impl General {
    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> Year {
        self.year
    }

    /// The closures of the shop. `None` falls back to the default
    /// calendar.
    pub fn holidays(&self) -> Option<&HolidayCalendar> {
        self.holidays.as_ref()
    }
}
