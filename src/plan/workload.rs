use crate::plan::AssignmentTable;
use crate::roster::{EmployeeId, Snapshot};
use crate::time::WorkingDuration;

/// The hours already booked, per employee and week of the month.
///
/// The counters only ever grow while a plan is built. Statistics are
/// recomputed from the finished table instead of read from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WeeklyLoads {
    // a month spans at most 6 monday-started weeks
    weeks: Vec<[WorkingDuration; 6]>,
}

impl WeeklyLoads {
    #[must_use]
    pub fn new(employee_count: usize) -> Self {
        Self {
            weeks: vec![[WorkingDuration::ZERO; 6]; employee_count],
        }
    }

    /// Rebuilds the counters from a table that already carries
    /// assignments, so a resumed run keeps respecting the weekly caps.
    #[must_use]
    pub fn from_table(snapshot: &Snapshot, table: &AssignmentTable) -> Self {
        let mut loads = Self::new(snapshot.roster().len());

        for (date, shift, slot) in table.slots() {
            if let Some(employee) = slot {
                loads.record(
                    employee,
                    date.week_number(),
                    snapshot.catalog().get(shift).duration(),
                );
            }
        }

        loads
    }

    /// The hours the employee already has in the given week of the month.
    #[must_use]
    pub fn current(&self, employee: EmployeeId, week: usize) -> WorkingDuration {
        self.weeks[employee.as_usize()][week - 1]
    }

    /// Whether `extra` more hours still stay at or under `cap` in the
    /// given week.
    #[must_use]
    pub fn fits(
        &self,
        employee: EmployeeId,
        week: usize,
        extra: WorkingDuration,
        cap: WorkingDuration,
    ) -> bool {
        self.current(employee, week) + extra <= cap
    }

    /// Books `duration` onto the employee's week.
    pub fn record(&mut self, employee: EmployeeId, week: usize, duration: WorkingDuration) {
        self.weeks[employee.as_usize()][week - 1] += duration;
    }

    /// The hours booked over the whole month.
    #[must_use]
    pub fn monthly_total(&self, employee: EmployeeId) -> WorkingDuration {
        self.weeks[employee.as_usize()].into_iter().sum()
    }
}
