use log::debug;

use crate::plan::availability::AvailabilityMap;
use crate::plan::table::AssignmentTable;
use crate::plan::workload::WeeklyLoads;
use crate::roster::{EmployeeId, ShiftId, Snapshot};
use crate::time::{Date, WorkingDuration};

/// An employee who stays below their contracted minimum even after
/// the repair phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    employee: EmployeeId,
    missing: WorkingDuration,
}

impl Shortfall {
    pub fn employee(&self) -> EmployeeId {
        self.employee
    }

    /// By how much the month stays below the contracted minimum.
    pub fn missing(&self) -> WorkingDuration {
        self.missing
    }
}

/// Fills the slots of a month.
///
/// Allocation runs in two phases. The first spreads the coverage over
/// the roster by always picking the least loaded available employee.
/// The second tops employees that are still below their contracted
/// minimum up with slots the first phase left open.
///
/// Neither phase ever unassigns a slot, so running the allocator over
/// an already complete table changes nothing.
pub(crate) struct Allocator<'a> {
    snapshot: &'a Snapshot,
    availability: AvailabilityMap,
    loads: WeeklyLoads,
    table: AssignmentTable,
}

impl<'a> Allocator<'a> {
    /// Starts from an empty table.
    #[must_use]
    pub(crate) fn new(snapshot: &'a Snapshot) -> Self {
        Self::resume(snapshot, AssignmentTable::empty(snapshot))
    }

    /// Continues a partially filled table.
    ///
    /// Slots that already hold an employee are kept as they are and the
    /// weekly loads are rebuilt from them.
    #[must_use]
    pub(crate) fn resume(snapshot: &'a Snapshot, table: AssignmentTable) -> Self {
        Self {
            snapshot,
            availability: AvailabilityMap::build(snapshot),
            loads: WeeklyLoads::from_table(snapshot, &table),
            table,
        }
    }

    pub(crate) fn run(mut self) -> (AssignmentTable, Vec<Shortfall>) {
        self.balance_coverage();
        let shortfalls = self.repair_minimums();

        (self.table, shortfalls)
    }

    fn assign(&mut self, date: Date, shift: ShiftId, employee: EmployeeId) {
        let duration = self.snapshot.catalog().get(shift).duration();

        self.table.assign(date, shift, employee);
        self.loads.record(employee, date.week_number(), duration);
    }

    /// Tries to put an employee into every open slot of the month,
    /// keeping the weekly loads as even as the roster allows.
    fn balance_coverage(&mut self) {
        for date in self.snapshot.open_days() {
            for (shift, entry) in self.snapshot.catalog().iter() {
                if !self.table.is_open(date, shift) {
                    continue;
                }

                // least loaded first, equal loads stay in roster order
                let week = date.week_number();
                let mut candidates: Vec<_> = self
                    .snapshot
                    .roster()
                    .iter()
                    .map(|(id, _)| id)
                    .filter(|id| {
                        self.availability.is_available(*id, date)
                            && !self.table.day_has(date, *id)
                    })
                    .collect();
                candidates.sort_by_key(|id| (self.loads.current(*id, week), *id));

                let fitting = candidates.into_iter().find(|id| {
                    let maximum = self.snapshot.roster().get(*id).maximum_hours();
                    self.loads.fits(*id, week, entry.duration(), maximum)
                });

                match fitting {
                    Some(employee) => {
                        debug!(
                            "assigned `{}` to `{}` on {}",
                            self.snapshot.roster().get(employee).name(),
                            entry.name(),
                            date
                        );
                        self.assign(date, shift, employee);
                    }
                    None => {
                        debug!("no employee fits `{}` on {}", entry.name(), date);
                    }
                }
            }
        }
    }

    /// Tops employees that are below their contracted minimum up with
    /// slots the coverage phase left open.
    ///
    /// Returns the shortfalls of the employees for whom the open slots
    /// were not enough.
    fn repair_minimums(&mut self) -> Vec<Shortfall> {
        let mut shortfalls = Vec::new();
        let employees: Vec<_> = self.snapshot.roster().iter().map(|(id, _)| id).collect();

        for employee in employees {
            let minimum = self.snapshot.roster().get(employee).minimum_hours();
            let maximum = self.snapshot.roster().get(employee).maximum_hours();

            'dates: for date in self.snapshot.open_days() {
                if self.loads.monthly_total(employee) >= minimum {
                    break;
                }

                if !self.availability.is_available(employee, date)
                    || self.table.day_has(date, employee)
                {
                    continue;
                }

                for (shift, entry) in self.snapshot.catalog().iter() {
                    if self.table.is_open(date, shift)
                        && self.loads.fits(employee, date.week_number(), entry.duration(), maximum)
                    {
                        debug!(
                            "topped `{}` up with `{}` on {}",
                            self.snapshot.roster().get(employee).name(),
                            entry.name(),
                            date
                        );
                        self.assign(date, shift, employee);
                        // at most one extra shift per date
                        continue 'dates;
                    }
                }
            }

            let total = self.loads.monthly_total(employee);
            if total < minimum {
                debug!(
                    "`{}` stays {} below the contracted minimum",
                    self.snapshot.roster().get(employee).name(),
                    minimum.saturating_sub(total)
                );
                shortfalls.push(Shortfall {
                    employee,
                    missing: minimum.saturating_sub(total),
                });
            }
        }

        shortfalls
    }
}
