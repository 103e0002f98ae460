//! Consolidation of van-assigned pickups into existing courier rounds.

use log::{debug, info};

use crate::models::{AssignedJourney, RoundEntry, TaskKind};

/// Volume of one Versapak specimen carrier, in round capacity units.
pub const SAMPLE_VOLUME: f64 = 0.036;

/// Carrying capacity of a courier round vehicle.
pub const ROUND_CAPACITY: f64 = 5.3;

/// Result of a consolidation pass: the extended courier table and the
/// journeys still assigned to vans.
#[derive(Debug, Clone)]
pub struct Consolidation {
    /// Courier rounds with any folded-in pickup rows appended.
    pub rounds: Vec<RoundEntry>,
    /// Journeys that remain van-assigned.
    pub journeys: Vec<AssignedJourney>,
}

/// Folds van-assigned pickups into courier rounds that already pass the
/// pickup postcode and have spare capacity.
///
/// For each journey in order, the **first** round entry (by original
/// table order) with a matching postcode is considered; entries appended
/// during this pass are never fold-in targets. The fold happens only if
/// the matched entry's task leaves room for a pickup ("Spare time" or
/// "Deliver/Collect post") and its volume, counting volume already
/// folded onto it this pass, still fits [`SAMPLE_VOLUME`] under
/// [`ROUND_CAPACITY`]. A journey whose match fails either test simply
/// stays van-assigned; a round is never overfilled.
///
/// The appended row carries the matched entry's round and vehicle
/// identifiers, the journey's specimen time and location fields, task
/// "Collect samples" and volume [`SAMPLE_VOLUME`].
///
/// # Examples
///
/// ```
/// use specimen_routing::consolidate::{consolidate, SAMPLE_VOLUME};
/// use specimen_routing::models::{AssignedJourney, RoundEntry, Stop, TaskKind, TransitDuration};
///
/// let journeys = vec![AssignedJourney {
///     stop: Stop::new(1, "Riverside Surgery", "SO15 2GB", "2023-11-06", "08:45"),
///     van: 1,
///     transit: TransitDuration::from_hms(0, 10, 0),
///     elapsed: TransitDuration::from_hms(0, 10, 0),
/// }];
/// let rounds = vec![RoundEntry {
///     round_id: "R1".into(),
///     vehicle_id: "V7".into(),
///     time: "09:00".into(),
///     location: "Riverside parade".into(),
///     postcode: "SO15 2GB".into(),
///     task: TaskKind::SpareTime,
///     volume: 5.0,
/// }];
///
/// let result = consolidate(journeys, &rounds);
/// assert!(result.journeys.is_empty());
/// assert_eq!(result.rounds.len(), 2);
/// assert_eq!(result.rounds[1].task, TaskKind::CollectSamples);
/// assert_eq!(result.rounds[1].volume, SAMPLE_VOLUME);
/// ```
pub fn consolidate(journeys: Vec<AssignedJourney>, rounds: &[RoundEntry]) -> Consolidation {
    let mut extended = rounds.to_vec();
    let mut remaining = Vec::with_capacity(journeys.len());
    // Volume folded onto each original entry during this pass, so
    // repeated matches cannot push a round past capacity.
    let mut folded = vec![0.0f64; rounds.len()];

    for journey in journeys {
        let matched = rounds
            .iter()
            .position(|entry| entry.postcode == journey.stop.postcode());

        let Some(index) = matched else {
            remaining.push(journey);
            continue;
        };

        let entry = &rounds[index];
        if !entry.task.accepts_pickups()
            || entry.volume + folded[index] + SAMPLE_VOLUME > ROUND_CAPACITY
        {
            debug!(
                "pickup at {} stays van-assigned (round {} {})",
                journey.stop.postcode(),
                entry.round_id,
                if entry.task.accepts_pickups() { "full" } else { "busy" }
            );
            remaining.push(journey);
            continue;
        }

        extended.push(RoundEntry {
            round_id: entry.round_id.clone(),
            vehicle_id: entry.vehicle_id.clone(),
            time: journey.stop.specimen_time().to_string(),
            location: journey.stop.surgery().to_string(),
            postcode: journey.stop.postcode().to_string(),
            task: TaskKind::CollectSamples,
            volume: SAMPLE_VOLUME,
        });
        folded[index] += SAMPLE_VOLUME;
    }

    info!(
        "consolidated {} of {} pickups into courier rounds",
        extended.len() - rounds.len(),
        remaining.len() + extended.len() - rounds.len()
    );

    Consolidation {
        rounds: extended,
        journeys: remaining,
    }
}
