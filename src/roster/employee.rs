use std::collections::BTreeSet;

use crate::time::{Date, WeekDay, WorkingDuration};

/// A stable handle to an employee: the position in the roster.
///
/// Roster order settles every tie, so the handles double as the
/// deterministic ordering of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(usize);

impl EmployeeId {
    #[must_use]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

/// An employee of the shop with their contract limits and regular
/// availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    minimum_hours: WorkingDuration,
    maximum_hours: WorkingDuration,
    overtime: bool,
    rest_days: BTreeSet<WeekDay>,
    vacations: BTreeSet<Date>,
}

impl Employee {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        minimum_hours: WorkingDuration,
        maximum_hours: WorkingDuration,
    ) -> Self {
        Self {
            name: name.into(),
            minimum_hours,
            maximum_hours,
            overtime: false,
            rest_days: BTreeSet::new(),
            vacations: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_overtime(mut self, overtime: bool) -> Self {
        self.overtime = overtime;
        self
    }

    #[must_use]
    pub fn with_rest_days(mut self, rest_days: impl IntoIterator<Item = WeekDay>) -> Self {
        self.rest_days = rest_days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_vacations(mut self, vacations: impl IntoIterator<Item = Date>) -> Self {
        self.vacations = vacations.into_iter().collect();
        self
    }

    /// The display name, which doubles as the identity in the roster and
    /// in saved plans.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contracted minimum. The month as a whole is measured
    /// against it.
    pub fn minimum_hours(&self) -> WorkingDuration {
        self.minimum_hours
    }

    /// The hard weekly cap. Assignments never push past this.
    pub fn maximum_hours(&self) -> WorkingDuration {
        self.maximum_hours
    }

    /// Whether the employee agreed to extra hours. The weekly cap stays
    /// hard either way.
    pub fn overtime(&self) -> bool {
        self.overtime
    }

    /// The week days the employee never works.
    pub fn rest_days(&self) -> impl Iterator<Item = WeekDay> + '_ {
        self.rest_days.iter().copied()
    }

    /// The concrete dates the employee is on vacation.
    pub fn vacations(&self) -> impl Iterator<Item = Date> + '_ {
        self.vacations.iter().copied()
    }

    /// Whether the employee can work on this date at all: not one of
    /// their weekly rest days and not during their vacation.
    ///
    /// Shop closures are a property of the calendar, not of the employee;
    /// the availability table combines both.
    #[must_use]
    pub fn can_work(&self, date: Date) -> bool {
        !self.rest_days.contains(&date.week_day()) && !self.vacations.contains(&date)
    }
}
