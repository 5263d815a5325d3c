use std::collections::BTreeSet;

use thiserror::Error;

use crate::roster::Snapshot;
use crate::verifier::Verifier;

/// Checks the shift catalog of a snapshot.
pub struct VerifyCatalog;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidCatalog {
    #[error("the catalog has no shifts")]
    Empty,
    #[error("a shift has an empty name")]
    EmptyName,
    #[error("`{0}` appears more than once in the catalog")]
    DuplicateName(String),
}

impl Verifier for VerifyCatalog {
    type Error = InvalidCatalog;
    type Errors = Vec<InvalidCatalog>;

    fn verify(&self, snapshot: &Snapshot) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();
        let catalog = snapshot.catalog();

        if catalog.is_empty() {
            errors.push(InvalidCatalog::Empty);
        }

        let mut seen = BTreeSet::new();
        for (_, shift) in catalog.iter() {
            if shift.name().is_empty() {
                errors.push(InvalidCatalog::EmptyName);
            } else if !seen.insert(shift.name()) {
                errors.push(InvalidCatalog::DuplicateName(shift.name().to_string()));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
