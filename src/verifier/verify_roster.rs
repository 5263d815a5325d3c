use std::collections::BTreeSet;

use thiserror::Error;

use crate::roster::Snapshot;
use crate::time::WorkingDuration;
use crate::verifier::Verifier;

/// Checks the employees of a snapshot.
pub struct VerifyRoster;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidRoster {
    #[error("the roster has no employees")]
    Empty,
    #[error("an employee has an empty name")]
    EmptyName,
    #[error("`{0}` appears more than once in the roster")]
    DuplicateName(String),
    #[error("`{name}` has a minimum of {minimum}, above the maximum of {maximum}")]
    MinimumAboveMaximum {
        name: String,
        minimum: WorkingDuration,
        maximum: WorkingDuration,
    },
}

impl Verifier for VerifyRoster {
    type Error = InvalidRoster;
    type Errors = Vec<InvalidRoster>;

    fn verify(&self, snapshot: &Snapshot) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();
        let roster = snapshot.roster();

        if roster.is_empty() {
            errors.push(InvalidRoster::Empty);
        }

        let mut seen = BTreeSet::new();
        for (_, employee) in roster.iter() {
            if employee.name().is_empty() {
                errors.push(InvalidRoster::EmptyName);
            } else if !seen.insert(employee.name()) {
                errors.push(InvalidRoster::DuplicateName(employee.name().to_string()));
            }

            if employee.minimum_hours() > employee.maximum_hours() {
                errors.push(InvalidRoster::MinimumAboveMaximum {
                    name: employee.name().to_string(),
                    minimum: employee.minimum_hours(),
                    maximum: employee.maximum_hours(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
