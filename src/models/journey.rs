//! Assigned journey type.

use serde::{Deserialize, Serialize};

use super::{Stop, TransitDuration};

/// A pickup stop assigned to a van, with its computed collection timing.
///
/// The `transit` field is the chain duration consumed to reach this
/// stop; `elapsed` is the van's running clock at collection, which never
/// decreases along a route.
///
/// # Examples
///
/// ```
/// use specimen_routing::models::{AssignedJourney, Stop, TransitDuration};
///
/// let journey = AssignedJourney {
///     stop: Stop::new(1, "Riverside Surgery", "SO15 2GB", "2023-11-06", "08:45"),
///     van: 2,
///     transit: TransitDuration::from_hms(0, 15, 0),
///     elapsed: TransitDuration::from_hms(0, 45, 0),
/// };
/// assert_eq!(journey.van_label(), "Van 2");
/// assert!((journey.collection_hours() - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedJourney {
    /// The original stop record.
    pub stop: Stop,
    /// Collecting van, 1-indexed.
    pub van: usize,
    /// Chain duration consumed to reach this stop.
    pub transit: TransitDuration,
    /// Running collection clock at this stop.
    pub elapsed: TransitDuration,
}

impl AssignedJourney {
    /// Time of collection in fractional hours since the van left the depot.
    pub fn collection_hours(&self) -> f64 {
        self.elapsed.as_hours()
    }

    /// Display label of the collecting van, e.g. `"Van 1"`.
    pub fn van_label(&self) -> String {
        format!("Van {}", self.van)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journey() -> AssignedJourney {
        AssignedJourney {
            stop: Stop::new(4, "Shirley Health Centre", "SO16 4XE", "2023-11-06", "10:05"),
            van: 1,
            transit: TransitDuration::from_hms(0, 10, 0),
            elapsed: TransitDuration::from_hms(1, 30, 0),
        }
    }

    #[test]
    fn test_collection_hours() {
        assert!((journey().collection_hours() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_van_label() {
        assert_eq!(journey().van_label(), "Van 1");
    }
}
