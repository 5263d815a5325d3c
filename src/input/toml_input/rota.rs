use serde::Deserialize;

use crate::input::toml_input::{EmployeeSection, General, ShiftSection};
use crate::utils;

/// A parsed rota description file.
#[derive(Debug, Clone, Deserialize)]
pub struct RotaFile {
    general: General,
    #[serde(
        default,
        rename = "employee",
        deserialize_with = "utils::deserialize_named_entries"
    )]
    employees: Vec<EmployeeSection>,
    #[serde(
        default,
        rename = "shift",
        deserialize_with = "utils::deserialize_named_entries"
    )]
    shifts: Vec<ShiftSection>,
}

impl RotaFile {
    pub fn general(&self) -> &General {
        &self.general
    }

    /// The employee sections in file order.
    pub fn employees(&self) -> &[EmployeeSection] {
        &self.employees
    }

    /// The shift sections in file order.
    pub fn shifts(&self) -> &[ShiftSection] {
        &self.shifts
    }

    pub(crate) fn into_parts(self) -> (General, Vec<EmployeeSection>, Vec<ShiftSection>) {
        (self.general, self.employees, self.shifts)
    }
}
