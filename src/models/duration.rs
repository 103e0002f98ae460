//! Transit durations.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A non-negative travel duration between two consecutive transit stops.
///
/// Source tables record these as time-of-day-shaped values (an
/// hours/minutes/seconds triple); internally a duration is a whole number
/// of seconds, so addition never loses precision and ordering is exact.
///
/// # Examples
///
/// ```
/// use specimen_routing::models::TransitDuration;
///
/// let d = TransitDuration::from_hms(0, 10, 0);
/// assert_eq!(d.seconds(), 600);
/// assert!((d.as_hours() - 1.0 / 6.0).abs() < 1e-12);
/// assert_eq!((d + TransitDuration::from_hms(0, 5, 30)).to_string(), "0:15:30");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct TransitDuration {
    seconds: u64,
}

impl TransitDuration {
    /// The zero duration.
    pub const ZERO: TransitDuration = TransitDuration { seconds: 0 };

    /// Creates a duration from an hours/minutes/seconds triple.
    pub fn from_hms(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            seconds: hours * 3600 + minutes * 60 + seconds,
        }
    }

    /// Creates a duration from a whole number of seconds.
    pub fn from_seconds(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Total length in whole seconds.
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Length in fractional hours.
    pub fn as_hours(&self) -> f64 {
        self.seconds as f64 / 3600.0
    }

    /// Returns `true` if this duration is zero.
    pub fn is_zero(&self) -> bool {
        self.seconds == 0
    }
}

impl Add for TransitDuration {
    type Output = TransitDuration;

    fn add(self, rhs: TransitDuration) -> TransitDuration {
        TransitDuration {
            seconds: self.seconds + rhs.seconds,
        }
    }
}

impl AddAssign for TransitDuration {
    fn add_assign(&mut self, rhs: TransitDuration) {
        self.seconds += rhs.seconds;
    }
}

impl Sum for TransitDuration {
    fn sum<I: Iterator<Item = TransitDuration>>(iter: I) -> TransitDuration {
        iter.fold(TransitDuration::ZERO, |acc, d| acc + d)
    }
}

impl fmt::Display for TransitDuration {
    /// Formats as `H:MM:SS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}",
            self.seconds / 3600,
            (self.seconds % 3600) / 60,
            self.seconds % 60
        )
    }
}
