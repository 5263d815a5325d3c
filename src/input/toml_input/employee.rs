use std::collections::BTreeSet;

use serde::Deserialize;

use crate::roster::Employee;
use crate::time::{Date, WeekDay, WorkingDuration};
use crate::utils::NamedEntry;

/// An `[employee.NAME]` section of the rota file.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeSection {
    #[serde(default)]
    name: String,
    minimum_hours: WorkingDuration,
    maximum_hours: WorkingDuration,
    #[serde(default)]
    overtime: bool,
    #[serde(default)]
    rest_days: BTreeSet<WeekDay>,
    #[serde(default)]
    vacations: BTreeSet<Date>,
}

impl EmployeeSection {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_employee(self) -> Employee {
        Employee::new(self.name, self.minimum_hours, self.maximum_hours)
            .with_overtime(self.overtime)
            .with_rest_days(self.rest_days)
            .with_vacations(self.vacations)
    }
}

impl NamedEntry for EmployeeSection {
    type Value = Self;

    fn from_entry(name: String, mut value: Self::Value) -> Self {
        value.name = name;
        value
    }
}
