//! Travel time aggregation.

use crate::models::{AssignedJourney, TransitDuration};

/// Sums the transit durations consumed by the given journeys.
///
/// Run after consolidation, this is the total van travel time for the
/// stops that remain van-assigned; folded-out pickups contribute
/// nothing. It is not a wall-clock end time, informational output only.
///
/// # Examples
///
/// ```
/// use specimen_routing::aggregate::total_travel_time;
/// use specimen_routing::models::{AssignedJourney, Stop, TransitDuration};
///
/// let journeys: Vec<AssignedJourney> = [10, 15].iter().enumerate().map(|(i, &m)| {
///     AssignedJourney {
///         stop: Stop::new(i as u32 + 1, "Surgery", "SO15 2GB", "2023-11-06", "08:45"),
///         van: 1,
///         transit: TransitDuration::from_hms(0, m, 0),
///         elapsed: TransitDuration::from_hms(0, m, 0),
///     }
/// }).collect();
///
/// assert_eq!(total_travel_time(&journeys), TransitDuration::from_hms(0, 25, 0));
/// ```
pub fn total_travel_time(journeys: &[AssignedJourney]) -> TransitDuration {
    journeys.iter().map(|j| j.transit).sum()
}
