//! Turns a [`Snapshot`] into a finished rota.
//!
//! Planning is a pure function of the snapshot: no clock, no randomness
//! and no state outside of what the caller passes in, so the same
//! snapshot always yields the same rota.

mod allocator;
mod availability;
mod statistics;
mod table;
mod workload;

pub use allocator::Shortfall;
pub use statistics::{EmployeeStatistics, Statistics};
pub use table::{AssignmentTable, OpenSlot};

use crate::plan::allocator::Allocator;
use crate::roster::Snapshot;
use crate::time::{Month, Year};
use crate::verifier::{DefaultVerifier, Verifier};

/// A planned month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rota {
    year: Year,
    month: Month,
    table: AssignmentTable,
    statistics: Statistics,
    shortfalls: Vec<Shortfall>,
    open_slots: Vec<OpenSlot>,
}

impl Rota {
    pub fn year(&self) -> Year {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn table(&self) -> &AssignmentTable {
        &self.table
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The employees whose month ended below their contracted minimum.
    pub fn shortfalls(&self) -> &[Shortfall] {
        &self.shortfalls
    }

    /// The slots no employee could take, in date and then catalog order.
    pub fn open_slots(&self) -> &[OpenSlot] {
        &self.open_slots
    }
}

/// Plans the snapshot's month from scratch.
///
/// The snapshot is verified up front and planning only starts when it
/// is sound, so a run never aborts halfway through the month.
pub fn plan_month(snapshot: &Snapshot) -> anyhow::Result<Rota> {
    DefaultVerifier.verify(snapshot)?;

    Ok(finish(snapshot, Allocator::new(snapshot)))
}

/// Plans around an existing, possibly partial, table.
///
/// Filled slots are kept untouched. Planning an already complete table
/// returns the same rota again.
pub fn resume_month(snapshot: &Snapshot, table: AssignmentTable) -> anyhow::Result<Rota> {
    DefaultVerifier.verify(snapshot)?;

    Ok(finish(snapshot, Allocator::resume(snapshot, table)))
}

fn finish(snapshot: &Snapshot, allocator: Allocator<'_>) -> Rota {
    let (table, shortfalls) = allocator.run();

    Rota {
        year: snapshot.year(),
        month: snapshot.month(),
        statistics: Statistics::collect(snapshot, &table),
        open_slots: table.open_slots(),
        table,
        shortfalls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::roster::{Catalog, Employee, Roster, Shift};
    use crate::time::{HolidayCalendar, Month, WeekDay, Year};
    use crate::verifier::ValidationFailures;
    use crate::{time_stamp, working_duration};

    fn snapshot() -> Snapshot {
        Snapshot::new(
            Roster::new(vec![
                Employee::new("Anna", working_duration!(20:00), working_duration!(30:00))
                    .with_rest_days([WeekDay::Sunday]),
                Employee::new("Bruno", working_duration!(15:00), working_duration!(25:00)),
            ]),
            Catalog::new(vec![
                Shift::new("Morning", time_stamp!(09:00), time_stamp!(13:00)),
                Shift::new("Afternoon", time_stamp!(14:00), time_stamp!(18:00)),
            ]),
            Year::new(2025),
            Month::September,
            HolidayCalendar::default(),
        )
    }

    #[test]
    fn test_plan_month() {
        let rota = plan_month(&snapshot()).unwrap();

        assert_eq!(rota.year(), Year::new(2025));
        assert_eq!(rota.month(), Month::September);
        assert_eq!(rota.shortfalls(), []);

        // anna rests on sundays and bruno is at his weekly cap by then,
        // so both sunday slots stay open every week
        assert_eq!(rota.open_slots().len(), 8);
        assert!(rota
            .open_slots()
            .iter()
            .all(|slot| slot.date().is_sunday()));
    }

    #[test]
    fn test_planning_is_deterministic() {
        let snapshot = snapshot();

        assert_eq!(
            plan_month(&snapshot).unwrap(),
            plan_month(&snapshot).unwrap()
        );
    }

    #[test]
    fn test_resume_is_a_no_op_on_a_complete_month() {
        let snapshot = snapshot();
        let rota = plan_month(&snapshot).unwrap();

        let resumed = resume_month(&snapshot, rota.table().clone()).unwrap();

        assert_eq!(resumed, rota);
    }

    #[test]
    fn test_verification_runs_first() {
        let snapshot = Snapshot::new(
            Roster::new(vec![]),
            Catalog::new(vec![]),
            Year::new(2025),
            Month::September,
            HolidayCalendar::default(),
        );

        let error = plan_month(&snapshot).unwrap_err();
        let failures = error.downcast_ref::<ValidationFailures>().unwrap();

        assert_eq!(failures.len(), 2);
    }
}
