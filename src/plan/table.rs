use std::collections::BTreeMap;

use crate::roster::{EmployeeId, ShiftId, Snapshot};
use crate::time::Date;

/// A slot of the rota that nobody could fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenSlot {
    date: Date,
    shift: ShiftId,
}

impl OpenSlot {
    /// The day the slot belongs to.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The shift that stayed without an employee.
    pub fn shift(&self) -> ShiftId {
        self.shift
    }
}

/// The rota under construction: one row per open shop day, one slot per
/// catalog shift.
///
/// Closed days have no row at all, so an assignment on a holiday is not
/// even representable. Within a row an employee appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentTable {
    days: BTreeMap<Date, Box<[Option<EmployeeId>]>>,
    shift_count: usize,
}

impl AssignmentTable {
    /// A table with every slot still open, one row per non-closure day of
    /// the snapshot's month.
    #[must_use]
    pub fn empty(snapshot: &Snapshot) -> Self {
        let shift_count = snapshot.catalog().len();

        Self {
            days: snapshot
                .open_days()
                .map(|date| (date, vec![None; shift_count].into_boxed_slice()))
                .collect(),
            shift_count,
        }
    }

    /// The employee holding the slot, if the day is open and the slot is
    /// filled.
    #[must_use]
    pub fn get(&self, date: Date, shift: ShiftId) -> Option<EmployeeId> {
        self.days
            .get(&date)
            .and_then(|slots| slots[shift.as_usize()])
    }

    /// Whether the slot exists (the day is open) and nobody holds it yet.
    #[must_use]
    pub fn is_open(&self, date: Date, shift: ShiftId) -> bool {
        self.days
            .get(&date)
            .is_some_and(|slots| slots[shift.as_usize()].is_none())
    }

    /// Whether the employee already holds a shift on this date.
    #[must_use]
    pub fn day_has(&self, date: Date, employee: EmployeeId) -> bool {
        self.days
            .get(&date)
            .is_some_and(|slots| slots.contains(&Some(employee)))
    }

    pub(crate) fn assign(&mut self, date: Date, shift: ShiftId, employee: EmployeeId) {
        debug_assert!(self.is_open(date, shift), "slot is taken or the day is closed");
        debug_assert!(!self.day_has(date, employee), "one shift per day");

        if let Some(slots) = self.days.get_mut(&date) {
            slots[shift.as_usize()] = Some(employee);
        }
    }

    /// The number of shift slots each row has.
    #[must_use]
    pub fn shift_count(&self) -> usize {
        self.shift_count
    }

    /// Iterates over the rows in chronological order.
    pub fn days(&self) -> impl Iterator<Item = (Date, &[Option<EmployeeId>])> {
        self.days.iter().map(|(date, slots)| (*date, slots.as_ref()))
    }

    /// Every slot of the table, in date and then catalog order.
    pub fn slots(&self) -> impl Iterator<Item = (Date, ShiftId, Option<EmployeeId>)> + '_ {
        self.days().flat_map(|(date, slots)| {
            slots
                .iter()
                .enumerate()
                .map(move |(index, slot)| (date, ShiftId::new(index), *slot))
        })
    }

    /// The slots nobody could fill, in date and then catalog order.
    #[must_use]
    pub fn open_slots(&self) -> Vec<OpenSlot> {
        self.slots()
            .filter(|(_, _, slot)| slot.is_none())
            .map(|(date, shift, _)| OpenSlot { date, shift })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::roster::{Catalog, Employee, Roster, Shift};
    use crate::time::{HolidayCalendar, Month, MonthDay, Year};
    use crate::{date, time_stamp, working_duration};

    fn snapshot() -> Snapshot {
        Snapshot::new(
            Roster::new(vec![
                Employee::new("Anna", working_duration!(20:00), working_duration!(30:00)),
                Employee::new("Bruno", working_duration!(15:00), working_duration!(25:00)),
            ]),
            Catalog::new(vec![
                Shift::new("Morning", time_stamp!(09:00), time_stamp!(13:00)),
                Shift::new("Afternoon", time_stamp!(14:00), time_stamp!(18:00)),
            ]),
            Year::new(2025),
            Month::September,
            HolidayCalendar::new([MonthDay::new(Month::September, 1).unwrap()]),
        )
    }

    #[test]
    fn test_empty_table() {
        let snapshot = snapshot();
        let table = AssignmentTable::empty(&snapshot);

        assert_eq!(table.days().count(), 29);
        assert_eq!(table.shift_count(), 2);
        assert_eq!(table.open_slots().len(), 29 * 2);

        // the closure day has no row
        let morning = snapshot.catalog().id_of("Morning").unwrap();
        assert!(!table.is_open(date!(2025:09:01), morning));
        assert_eq!(table.get(date!(2025:09:01), morning), None);
    }

    #[test]
    fn test_assign() {
        let snapshot = snapshot();
        let mut table = AssignmentTable::empty(&snapshot);

        let anna = snapshot.roster().id_of("Anna").unwrap();
        let morning = snapshot.catalog().id_of("Morning").unwrap();
        let afternoon = snapshot.catalog().id_of("Afternoon").unwrap();

        assert!(table.is_open(date!(2025:09:02), morning));
        table.assign(date!(2025:09:02), morning, anna);

        assert_eq!(table.get(date!(2025:09:02), morning), Some(anna));
        assert!(!table.is_open(date!(2025:09:02), morning));
        assert!(table.is_open(date!(2025:09:02), afternoon));

        assert!(table.day_has(date!(2025:09:02), anna));
        assert!(!table.day_has(date!(2025:09:03), anna));
    }

    #[test]
    fn test_open_slots_order() {
        let snapshot = snapshot();
        let mut table = AssignmentTable::empty(&snapshot);

        let anna = snapshot.roster().id_of("Anna").unwrap();
        let morning = snapshot.catalog().id_of("Morning").unwrap();
        table.assign(date!(2025:09:02), morning, anna);

        let open = table.open_slots();
        assert_eq!(open.len(), 29 * 2 - 1);

        // chronological, catalog order within a day
        assert_eq!(open[0].date(), date!(2025:09:02));
        assert_eq!(
            open[0].shift(),
            snapshot.catalog().id_of("Afternoon").unwrap()
        );
        assert_eq!(open[1].date(), date!(2025:09:03));
        assert_eq!(open[1].shift(), morning);
    }
}
