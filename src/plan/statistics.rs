use std::collections::BTreeMap;

use crate::plan::AssignmentTable;
use crate::roster::{EmployeeId, Snapshot};
use crate::time::{Date, WorkingDuration};

const fn divide_and_round(dividend: u32, divisor: u32) -> u32 {
    (dividend + (divisor / 2)) / divisor
}

/// What one employee ended up with in a finished rota.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeStatistics {
    employee: EmployeeId,
    weekly_hours: BTreeMap<usize, WorkingDuration>,
    monthly_hours: WorkingDuration,
    weekly_average: WorkingDuration,
    days_worked: usize,
    sundays_worked: Vec<Date>,
}

impl EmployeeStatistics {
    pub fn employee(&self) -> EmployeeId {
        self.employee
    }

    /// The hours per week of the month. Weeks without any assignment are
    /// absent from the map.
    pub fn weekly_hours(&self) -> &BTreeMap<usize, WorkingDuration> {
        &self.weekly_hours
    }

    /// The total over the whole month.
    pub fn monthly_hours(&self) -> WorkingDuration {
        self.monthly_hours
    }

    /// The monthly total divided over the weeks that have hours, rounded
    /// to the minute. Zero when nothing was assigned.
    pub fn weekly_average(&self) -> WorkingDuration {
        self.weekly_average
    }

    /// On how many days the employee works, at most one shift each.
    pub fn days_worked(&self) -> usize {
        self.days_worked
    }

    /// The sundays the employee works, in chronological order.
    pub fn sundays_worked(&self) -> &[Date] {
        &self.sundays_worked
    }

    pub fn sunday_count(&self) -> usize {
        self.sundays_worked.len()
    }
}

/// The per-employee numbers of a finished table.
///
/// Nothing in here is tracked incrementally. A fresh projection of the
/// same table always gives the same statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    employees: Vec<EmployeeStatistics>,
}

impl Statistics {
    /// Projects the table into per-employee numbers, in roster order.
    #[must_use]
    pub fn collect(snapshot: &Snapshot, table: &AssignmentTable) -> Self {
        let mut employees: Vec<_> = snapshot
            .roster()
            .iter()
            .map(|(id, _)| EmployeeStatistics {
                employee: id,
                weekly_hours: BTreeMap::new(),
                monthly_hours: WorkingDuration::ZERO,
                weekly_average: WorkingDuration::ZERO,
                days_worked: 0,
                sundays_worked: Vec::new(),
            })
            .collect();

        for (date, shift, slot) in table.slots() {
            let Some(employee) = slot else { continue };

            let duration = snapshot.catalog().get(shift).duration();
            let stats = &mut employees[employee.as_usize()];

            *stats.weekly_hours.entry(date.week_number()).or_default() += duration;
            stats.monthly_hours += duration;
            // the table holds at most one shift per employee and day
            stats.days_worked += 1;

            if date.is_sunday() {
                stats.sundays_worked.push(date);
            }
        }

        for stats in &mut employees {
            if !stats.weekly_hours.is_empty() {
                stats.weekly_average = WorkingDuration::from_mins(divide_and_round(
                    stats.monthly_hours.as_mins(),
                    stats.weekly_hours.len() as u32,
                ));
            }
        }

        Self { employees }
    }

    /// The numbers of one employee.
    #[must_use]
    pub fn for_employee(&self, employee: EmployeeId) -> &EmployeeStatistics {
        &self.employees[employee.as_usize()]
    }

    /// Iterates over all employees in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &EmployeeStatistics> {
        self.employees.iter()
    }
}
