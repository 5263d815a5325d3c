mod employee;
pub use employee::*;
mod shift;
pub use shift::*;

use crate::time::{Date, HolidayCalendar, Month, Year};

/// The employees that can be assigned, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    #[must_use]
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Iterates over the employees together with their handles, in roster
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (EmployeeId, &Employee)> {
        self.employees
            .iter()
            .enumerate()
            .map(|(index, employee)| (EmployeeId::new(index), employee))
    }

    /// Looks up an employee by handle.
    ///
    /// Handles are only ever created by the roster itself, so a lookup
    /// cannot miss.
    #[must_use]
    pub fn get(&self, id: EmployeeId) -> &Employee {
        &self.employees[id.as_usize()]
    }

    /// Resolves an employee name back to its handle.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<EmployeeId> {
        self.employees
            .iter()
            .position(|employee| employee.name() == name)
            .map(EmployeeId::new)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl FromIterator<Employee> for Roster {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter.into_iter().collect(),
        }
    }
}

/// The shift types the shop runs every day, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    shifts: Vec<Shift>,
}

impl Catalog {
    #[must_use]
    pub fn new(shifts: Vec<Shift>) -> Self {
        Self { shifts }
    }

    /// Iterates over the shifts together with their handles, in catalog
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (ShiftId, &Shift)> {
        self.shifts
            .iter()
            .enumerate()
            .map(|(index, shift)| (ShiftId::new(index), shift))
    }

    /// Looks up a shift by handle.
    ///
    /// Handles are only ever created by the catalog itself, so a lookup
    /// cannot miss.
    #[must_use]
    pub fn get(&self, id: ShiftId) -> &Shift {
        &self.shifts[id.as_usize()]
    }

    /// Resolves a shift name back to its handle.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<ShiftId> {
        self.shifts
            .iter()
            .position(|shift| shift.name() == name)
            .map(ShiftId::new)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

impl FromIterator<Shift> for Catalog {
    fn from_iter<I: IntoIterator<Item = Shift>>(iter: I) -> Self {
        Self {
            shifts: iter.into_iter().collect(),
        }
    }
}

/// Everything one planning run needs: who can work, which shifts exist,
/// which month to fill and when the shop stays closed.
///
/// The engine never reads anything else; two equal snapshots produce the
/// same plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    roster: Roster,
    catalog: Catalog,
    year: Year,
    month: Month,
    holidays: HolidayCalendar,
}

impl Snapshot {
    #[must_use]
    pub fn new(
        roster: Roster,
        catalog: Catalog,
        year: Year,
        month: Month,
        holidays: HolidayCalendar,
    ) -> Self {
        Self {
            roster,
            catalog,
            year,
            month,
            holidays,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Iterates over every day of the target month in chronological
    /// order, closures included.
    pub fn days(&self) -> impl Iterator<Item = Date> + Clone {
        self.year.days_in(self.month)
    }

    /// The days assignments may land on: every day of the month that is
    /// not a shop closure.
    pub fn open_days(&self) -> impl Iterator<Item = Date> + Clone + '_ {
        self.days().filter(|date| !self.holidays.is_holiday(*date))
    }
}
