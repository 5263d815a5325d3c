use crate::roster::{EmployeeId, Snapshot};
use crate::time::Date;

/// The availability filter, precomputed into one dense table per run.
///
/// An employee is available on a date when the shop is open that day, the
/// weekday is not one of their rest days and they are not on vacation.
/// Both allocation phases consult only this table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AvailabilityMap {
    // a month never has more than 31 days
    days: Vec<[bool; 31]>,
}

impl AvailabilityMap {
    #[must_use]
    pub fn build(snapshot: &Snapshot) -> Self {
        let days = snapshot
            .roster()
            .iter()
            .map(|(_, employee)| {
                let mut available = [false; 31];

                // closure days are skipped, their entries stay `false`
                for date in snapshot.open_days() {
                    available[date.day() - 1] = employee.can_work(date);
                }

                available
            })
            .collect();

        Self { days }
    }

    /// Whether the employee may be assigned on this date.
    #[must_use]
    pub fn is_available(&self, employee: EmployeeId, date: Date) -> bool {
        self.days[employee.as_usize()][date.day() - 1]
    }
}
