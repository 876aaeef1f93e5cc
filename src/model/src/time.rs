use {
    derive_more::{Display, From},
    std::cmp::Ordering,
};

/// A wall-clock-like triple. Fields are not range checked, so `Time::new(1, 75, -3)`
/// is a perfectly valid value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, From)]
#[display("{hours}:{minutes}:{seconds}")]
pub struct Time {
    hours: i32,
    minutes: i32,
    seconds: i32,
}

impl Time {
    pub fn new(hours: i32, minutes: i32, seconds: i32) -> Self {
        Time {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn hours(&self) -> i32 {
        self.hours
    }

    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    pub fn seconds(&self) -> i32 {
        self.seconds
    }

    /// The ordering key. Every field is copied out, so the tuple owns its
    /// contents and never borrows from `self`.
    pub fn as_tuple(&self) -> (i32, i32, i32) {
        (self.hours(), self.minutes(), self.seconds())
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_tuple().cmp(&other.as_tuple())
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
