//! Ingestion row types: pickup stops and transit legs.

use serde::{Deserialize, Serialize};

use super::TransitDuration;

/// A single pickup request from a source surgery.
///
/// Stops are immutable once ingested. Their supplied order defines the
/// adjacency of the transit graph, not spatial distance. The specimen
/// date and time are opaque pass-through fields; the planner never
/// computes on them.
///
/// # Examples
///
/// ```
/// use specimen_routing::models::Stop;
///
/// let stop = Stop::new(1, "Riverside Surgery", "SO15 2GB", "2023-11-06", "08:45");
/// assert_eq!(stop.postcode(), "SO15 2GB");
/// assert_eq!(stop.surgery(), "Riverside Surgery");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    index: u32,
    surgery: String,
    postcode: String,
    specimen_date: String,
    specimen_time: String,
}

impl Stop {
    /// Creates a stop record.
    pub fn new(
        index: u32,
        surgery: impl Into<String>,
        postcode: impl Into<String>,
        specimen_date: impl Into<String>,
        specimen_time: impl Into<String>,
    ) -> Self {
        Self {
            index,
            surgery: surgery.into(),
            postcode: postcode.into(),
            specimen_date: specimen_date.into(),
            specimen_time: specimen_time.into(),
        }
    }

    /// Row index as supplied by the source table.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Name of the source surgery.
    pub fn surgery(&self) -> &str {
        &self.surgery
    }

    /// Postcode of the source surgery.
    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    /// Date the specimen was taken.
    pub fn specimen_date(&self) -> &str {
        &self.specimen_date
    }

    /// Time the specimen was taken.
    pub fn specimen_time(&self) -> &str {
        &self.specimen_time
    }
}

/// One ordered row of the transit table: a postcode and the recorded
/// travel time to the next row's postcode.
///
/// Row 0 is the depot. The terminal row has no successor and needs no
/// duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitLeg {
    /// Postcode of this transit stop.
    pub postcode: String,
    /// Recorded travel time to the next row, if any.
    pub time_to_next: Option<TransitDuration>,
}

impl TransitLeg {
    /// Creates a leg with a recorded time to the next stop.
    pub fn new(postcode: impl Into<String>, time_to_next: TransitDuration) -> Self {
        Self {
            postcode: postcode.into(),
            time_to_next: Some(time_to_next),
        }
    }

    /// Creates the terminal leg, which has no successor.
    pub fn terminal(postcode: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            time_to_next: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_accessors() {
        let stop = Stop::new(3, "Hill Lane Practice", "SO14 0YG", "2023-11-06", "09:10");
        assert_eq!(stop.index(), 3);
        assert_eq!(stop.surgery(), "Hill Lane Practice");
        assert_eq!(stop.postcode(), "SO14 0YG");
        assert_eq!(stop.specimen_date(), "2023-11-06");
        assert_eq!(stop.specimen_time(), "09:10");
    }

    #[test]
    fn test_leg_constructors() {
        let leg = TransitLeg::new("SO16 6YD", TransitDuration::from_hms(0, 10, 0));
        assert_eq!(leg.time_to_next, Some(TransitDuration::from_hms(0, 10, 0)));

        let last = TransitLeg::terminal("SO15 2GB");
        assert!(last.time_to_next.is_none());
    }
}
