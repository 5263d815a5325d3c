use std::fmt;

use crate::roster::Snapshot;

mod verifier;
mod verify_catalog;
mod verify_roster;

pub use verifier::Verifier;
pub use verify_catalog::*;
pub use verify_roster::*;

pub struct DefaultVerifier;

impl Verifier for DefaultVerifier {
    type Error = anyhow::Error;
    type Errors = ValidationFailures;

    fn verify(&self, snapshot: &Snapshot) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();

        if let Err(problems) = VerifyRoster.verify(snapshot) {
            errors.extend(problems.into_iter().map(Into::into));
        }

        if let Err(problems) = VerifyCatalog.verify(snapshot) {
            errors.extend(problems.into_iter().map(Into::into));
        }

        if !errors.is_empty() {
            return Err(ValidationFailures(errors));
        }

        Ok(())
    }
}

/// Everything the verifier found wrong with a snapshot.
///
/// Allocation never starts on a snapshot that fails verification, so
/// callers get the full list in one go instead of one problem per run.
#[derive(Debug)]
pub struct ValidationFailures(Vec<anyhow::Error>);

impl ValidationFailures {
    pub fn iter(&self) -> impl Iterator<Item = &anyhow::Error> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ValidationFailures {
    type Item = anyhow::Error;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "found {} problems with the rota input", self.0.len())?;

        for error in &self.0 {
            write!(f, "\n- {error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationFailures {}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::roster::{Catalog, Roster};
    use crate::time::{HolidayCalendar, Month, Year};

    #[test]
    fn test_failures_are_collected_across_verifiers() {
        let snapshot = Snapshot::new(
            Roster::new(vec![]),
            Catalog::new(vec![]),
            Year::new(2025),
            Month::September,
            HolidayCalendar::default(),
        );

        let failures = DefaultVerifier.verify(&snapshot).unwrap_err();

        assert_eq!(failures.len(), 2);
        assert_eq!(
            failures.to_string(),
            "found 2 problems with the rota input\n\
             - the roster has no employees\n\
             - the catalog has no shifts"
        );
    }
}
