use std::fmt;
use std::fmt::Debug;

use crate::roster::Snapshot;

pub trait Verifier {
    type Error: fmt::Display + Debug + Sync + Send + 'static;
    type Errors: IntoIterator<Item = Self::Error>;

    fn verify(&self, snapshot: &Snapshot) -> Result<(), Self::Errors>;
}
