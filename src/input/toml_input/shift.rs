use serde::Deserialize;

use crate::roster::Shift;
use crate::time::TimeStamp;
use crate::utils::NamedEntry;

/// A `[shift.NAME]` section of the rota file.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftSection {
    #[serde(default)]
    name: String,
    start: TimeStamp,
    end: TimeStamp,
}

impl ShiftSection {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_shift(self) -> Shift {
        Shift::new(self.name, self.start, self.end)
    }
}

impl NamedEntry for ShiftSection {
    type Value = Self;

    fn from_entry(name: String, mut value: Self::Value) -> Self {
        value.name = name;
        value
    }
}
