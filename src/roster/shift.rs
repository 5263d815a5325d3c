use crate::time::{TimeStamp, WorkingDuration};

/// A stable handle to a shift type: the position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShiftId(usize);

impl ShiftId {
    #[must_use]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

/// A shift type of the shop, like `Morning` from `09:00` to `13:00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    name: String,
    start: TimeStamp,
    end: TimeStamp,
}

impl Shift {
    #[must_use]
    pub fn new(name: impl Into<String>, start: TimeStamp, end: TimeStamp) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// The display name, which doubles as the identity in the catalog and
    /// in saved plans.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the shift starts.
    pub fn start(&self) -> TimeStamp {
        self.start
    }

    /// When the shift ends.
    pub fn end(&self) -> TimeStamp {
        self.end
    }

    /// How long the shift lasts. An end at or before the start runs past
    /// midnight, see [`TimeStamp::duration_until`].
    #[must_use]
    pub fn duration(&self) -> WorkingDuration {
        self.start.duration_until(self.end)
    }
}
