use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use log::trace;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::plan::{AssignmentTable, Rota};
use crate::roster::{Catalog, Employee, Roster, Shift, Snapshot};
use crate::time::{Date, HolidayCalendar, Month, TimeStamp, WeekDay, WorkingDuration, Year};
use crate::utils;

/// A saved rota.
///
/// The file carries the full snapshot next to the assignment rows, so
/// a plan can be reopened without the original rota description.
/// Employees and shifts are referenced by name, names are the identity
/// of the roster.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlanFile {
    schema_version: u32,
    year: Year,
    month: Month,
    holidays: HolidayCalendar,
    employees: Vec<EmployeeRecord>,
    shifts: Vec<ShiftRecord>,
    days: Vec<DayRecord>,
    statistics: Vec<StatisticsRecord>,
    shortfalls: Vec<ShortfallRecord>,
    open_slots: Vec<OpenSlotRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct EmployeeRecord {
    name: String,
    minimum_hours: WorkingDuration,
    maximum_hours: WorkingDuration,
    #[serde(default)]
    overtime: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    rest_days: Vec<WeekDay>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    vacations: Vec<Date>,
}

impl EmployeeRecord {
    fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name().to_string(),
            minimum_hours: employee.minimum_hours(),
            maximum_hours: employee.maximum_hours(),
            overtime: employee.overtime(),
            rest_days: employee.rest_days().collect(),
            vacations: employee.vacations().collect(),
        }
    }

    fn into_employee(self) -> Employee {
        Employee::new(self.name, self.minimum_hours, self.maximum_hours)
            .with_overtime(self.overtime)
            .with_rest_days(self.rest_days)
            .with_vacations(self.vacations)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ShiftRecord {
    name: String,
    start: TimeStamp,
    end: TimeStamp,
}

impl ShiftRecord {
    fn from_shift(shift: &Shift) -> Self {
        Self {
            name: shift.name().to_string(),
            start: shift.start(),
            end: shift.end(),
        }
    }

    fn into_shift(self) -> Shift {
        Shift::new(self.name, self.start, self.end)
    }
}

/// One non-holiday date; open slots keep a `null` employee.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct DayRecord {
    date: Date,
    assignments: BTreeMap<String, Option<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct StatisticsRecord {
    employee: String,
    weekly_hours: BTreeMap<usize, WorkingDuration>,
    monthly_hours: WorkingDuration,
    weekly_average: WorkingDuration,
    days_worked: usize,
    sundays_worked: Vec<Date>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ShortfallRecord {
    employee: String,
    missing: WorkingDuration,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct OpenSlotRecord {
    date: Date,
    shift: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanFileError {
    #[error("plan file schema version is {found}, this build reads version {expected}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("`{0}` is assigned in the plan but missing from the roster")]
    UnknownEmployee(String),
    #[error("`{0}` appears in the plan but is missing from the catalog")]
    UnknownShift(String),
    #[error("{0} does not belong to the planned month")]
    ForeignDate(Date),
    #[error("{0} is a closure day and cannot carry assignments")]
    ClosedDate(Date),
    #[error("{0} appears twice in the plan")]
    DuplicateDate(Date),
    #[error("`{name}` holds two shifts on {date}")]
    DoubleShift { name: String, date: Date },
}

impl PlanFile {
    pub const SCHEMA_VERSION: u32 = 1;

    #[must_use]
    pub fn new(snapshot: &Snapshot, rota: &Rota) -> Self {
        let roster = snapshot.roster();
        let catalog = snapshot.catalog();

        let days = rota
            .table()
            .days()
            .map(|(date, slots)| DayRecord {
                date,
                assignments: catalog
                    .iter()
                    .map(|(shift, entry)| {
                        let name = slots[shift.as_usize()]
                            .map(|employee| roster.get(employee).name().to_string());
                        (entry.name().to_string(), name)
                    })
                    .collect(),
            })
            .collect();

        Self {
            schema_version: Self::SCHEMA_VERSION,
            year: rota.year(),
            month: rota.month(),
            holidays: snapshot.holidays().clone(),
            employees: roster
                .iter()
                .map(|(_, employee)| EmployeeRecord::from_employee(employee))
                .collect(),
            shifts: catalog
                .iter()
                .map(|(_, shift)| ShiftRecord::from_shift(shift))
                .collect(),
            days,
            statistics: rota
                .statistics()
                .iter()
                .map(|stats| StatisticsRecord {
                    employee: roster.get(stats.employee()).name().to_string(),
                    weekly_hours: stats.weekly_hours().clone(),
                    monthly_hours: stats.monthly_hours(),
                    weekly_average: stats.weekly_average(),
                    days_worked: stats.days_worked(),
                    sundays_worked: stats.sundays_worked().to_vec(),
                })
                .collect(),
            shortfalls: rota
                .shortfalls()
                .iter()
                .map(|shortfall| ShortfallRecord {
                    employee: roster.get(shortfall.employee()).name().to_string(),
                    missing: shortfall.missing(),
                })
                .collect(),
            open_slots: rota
                .open_slots()
                .iter()
                .map(|slot| OpenSlotRecord {
                    date: slot.date(),
                    shift: catalog.get(slot.shift()).name().to_string(),
                })
                .collect(),
        }
    }

    /// Rebuilds the snapshot and the assignment table.
    ///
    /// The stored statistics are not read back, they are recomputed
    /// from the table by whoever plans on top of it.
    pub fn decode(self) -> Result<(Snapshot, AssignmentTable), PlanFileError> {
        let Self {
            year,
            month,
            holidays,
            employees,
            shifts,
            days,
            ..
        } = self;

        let snapshot = Snapshot::new(
            employees
                .into_iter()
                .map(EmployeeRecord::into_employee)
                .collect::<Roster>(),
            shifts
                .into_iter()
                .map(ShiftRecord::into_shift)
                .collect::<Catalog>(),
            year,
            month,
            holidays,
        );

        let mut table = AssignmentTable::empty(&snapshot);
        let mut seen_dates = BTreeSet::new();

        for day in days {
            if day.date.year() != year || day.date.month() != month {
                return Err(PlanFileError::ForeignDate(day.date));
            }

            if snapshot.holidays().is_holiday(day.date) {
                return Err(PlanFileError::ClosedDate(day.date));
            }

            if !seen_dates.insert(day.date) {
                return Err(PlanFileError::DuplicateDate(day.date));
            }

            for (shift_name, employee_name) in &day.assignments {
                let shift = snapshot
                    .catalog()
                    .id_of(shift_name)
                    .ok_or_else(|| PlanFileError::UnknownShift(shift_name.clone()))?;

                let Some(employee_name) = employee_name else {
                    continue;
                };

                let employee = snapshot
                    .roster()
                    .id_of(employee_name)
                    .ok_or_else(|| PlanFileError::UnknownEmployee(employee_name.clone()))?;

                if table.day_has(day.date, employee) {
                    return Err(PlanFileError::DoubleShift {
                        name: employee_name.clone(),
                        date: day.date,
                    });
                }

                table.assign(day.date, shift, employee);
            }
        }

        Ok((snapshot, table))
    }

    /// Writes the plan to `path`, going through a temporary file so a
    /// crash never leaves a half written plan behind.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        trace!("writing plan to: {}", path.display());

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(directory)?;
        file.write_all(serde_json::to_string_pretty(self)?.as_bytes())?;
        file.persist(path)
            .with_context(|| format!("failed to write `{}`", path.display()))?;

        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let input = utils::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;

        let file: Self = serde_json::from_str(&input)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;

        if file.schema_version != Self::SCHEMA_VERSION {
            return Err(PlanFileError::VersionMismatch {
                expected: Self::SCHEMA_VERSION,
                found: file.schema_version,
            }
            .into());
        }

        Ok(file)
    }
}
