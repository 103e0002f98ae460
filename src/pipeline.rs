//! The planning pipeline: graph → assignment → journeys → consolidation
//! → aggregate.

use std::time::Duration;

use log::info;

use crate::aggregate::total_travel_time;
use crate::assign::{assign_routes, AssignerConfig, DEFAULT_TIME_BUDGET};
use crate::consolidate::consolidate;
use crate::error::{DataError, PipelineError};
use crate::extract::extract_journeys;
use crate::graph::{CostPolicy, TransitGraph};
use crate::models::{AssignedJourney, RoundEntry, Stop, TransitDuration, TransitLeg};

/// Configuration for a planning run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of vans available for collection.
    pub vans: usize,
    /// Wall-clock budget for the assignment search.
    pub time_budget: Duration,
    /// Pins the assignment RNG for reproducible runs.
    pub seed: Option<u64>,
    /// Fallback transit cost for non-chain node pairs.
    pub policy: CostPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            vans: 1,
            time_budget: DEFAULT_TIME_BUDGET,
            seed: None,
            policy: CostPolicy::Detour,
        }
    }
}

/// The three outputs of a planning run.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    /// Stops that remain van-assigned, with collection timing.
    pub journeys: Vec<AssignedJourney>,
    /// Courier rounds with folded-in pickups appended.
    pub rounds: Vec<RoundEntry>,
    /// Total van travel time over the remaining journeys.
    pub total_travel: TransitDuration,
}

/// Runs the full planning pipeline over already-parsed input tables.
///
/// Stages run strictly in order, each completing before the next
/// begins. Input is validated up front: the stop set must be non-empty
/// and the transit table must carry one row per stop plus the depot
/// row.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use specimen_routing::pipeline::{run, PipelineConfig};
/// use specimen_routing::models::{Stop, TransitDuration, TransitLeg};
///
/// let stops = vec![
///     Stop::new(1, "Riverside Surgery", "SO15 2GB", "2023-11-06", "08:45"),
///     Stop::new(2, "Hill Lane Practice", "SO14 0YG", "2023-11-06", "09:10"),
/// ];
/// let legs = vec![
///     TransitLeg::new("LAB", TransitDuration::from_hms(0, 10, 0)),
///     TransitLeg::new("SO15 2GB", TransitDuration::from_hms(0, 15, 0)),
///     TransitLeg::terminal("SO14 0YG"),
/// ];
/// let config = PipelineConfig {
///     vans: 1,
///     time_budget: Duration::ZERO,
///     seed: Some(42),
///     ..PipelineConfig::default()
/// };
///
/// let outcome = run(&stops, &legs, &[], &config).unwrap();
/// assert_eq!(outcome.journeys.len(), 2);
/// assert_eq!(outcome.total_travel, TransitDuration::from_hms(0, 25, 0));
/// ```
pub fn run(
    stops: &[Stop],
    legs: &[TransitLeg],
    rounds: &[RoundEntry],
    config: &PipelineConfig,
) -> Result<PlanOutcome, PipelineError> {
    if stops.is_empty() {
        return Err(DataError::NoStops.into());
    }
    if legs.len() != stops.len() + 1 {
        return Err(DataError::StopCountMismatch {
            stops: stops.len(),
            legs: legs.len(),
        }
        .into());
    }

    let graph = TransitGraph::from_legs(legs, config.policy)?;
    info!(
        "transit graph built: {} stops, {} edges",
        graph.num_stops(),
        graph.num_nodes() - 1
    );

    let routes = assign_routes(
        &graph,
        &AssignerConfig {
            vans: config.vans,
            time_budget: config.time_budget,
            seed: config.seed,
        },
    )?;
    info!("{} van routes assigned", routes.len());

    let journeys = extract_journeys(&routes, stops, &graph)?;
    let consolidation = consolidate(journeys, rounds);
    let total_travel = total_travel_time(&consolidation.journeys);
    info!(
        "{} journeys remain van-assigned, {} total travel",
        consolidation.journeys.len(),
        total_travel
    );

    Ok(PlanOutcome {
        journeys: consolidation.journeys,
        rounds: consolidation.rounds,
        total_travel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consolidate::SAMPLE_VOLUME;
    use crate::error::AssignError;
    use crate::models::TaskKind;

    fn stops(n: u32) -> Vec<Stop> {
        (1..=n)
            .map(|i| Stop::new(i, format!("Surgery {i}"), format!("PC{i}"), "2023-11-06", "08:00"))
            .collect()
    }

    fn legs(minutes: &[u64]) -> Vec<TransitLeg> {
        let mut rows: Vec<TransitLeg> = minutes
            .iter()
            .enumerate()
            .map(|(i, &m)| TransitLeg::new(format!("PC{i}"), TransitDuration::from_hms(0, m, 0)))
            .collect();
        rows.push(TransitLeg::terminal(format!("PC{}", minutes.len())));
        rows
    }

    fn quick(vans: usize) -> PipelineConfig {
        PipelineConfig {
            vans,
            time_budget: Duration::ZERO,
            seed: Some(42),
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_end_to_end_two_vans() {
        // Four transit rows (depot + 3 stops), durations 10/15/5, no
        // consolidation possible.
        let outcome = run(&stops(3), &legs(&[10, 15, 5]), &[], &quick(2)).unwrap();

        // Every stop assigned exactly once.
        let mut indices: Vec<u32> = outcome.journeys.iter().map(|j| j.stop.index()).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![1, 2, 3]);

        // Strictly increasing clocks within each van (all durations
        // here are positive).
        for van in [1, 2] {
            let clocks: Vec<_> = outcome
                .journeys
                .iter()
                .filter(|j| j.van == van)
                .map(|j| j.elapsed)
                .collect();
            assert!(clocks.windows(2).all(|w| w[0] < w[1]));
        }

        assert_eq!(outcome.total_travel, TransitDuration::from_hms(0, 30, 0));
        assert!(outcome.rounds.is_empty());
    }

    #[test]
    fn test_consolidation_removes_journey_and_travel() {
        let rounds = vec![RoundEntry {
            round_id: "R1".into(),
            vehicle_id: "V7".into(),
            time: "09:00".into(),
            location: "Parade".into(),
            postcode: "PC2".into(),
            task: TaskKind::SpareTime,
            volume: 5.0,
        }];
        let outcome = run(&stops(3), &legs(&[10, 15, 5]), &rounds, &quick(1)).unwrap();

        // Stop 2 (postcode PC2, inbound 15 minutes) folds into the round.
        assert_eq!(outcome.journeys.len(), 2);
        assert!(outcome.journeys.iter().all(|j| j.stop.postcode() != "PC2"));
        assert_eq!(outcome.rounds.len(), 2);
        assert_eq!(outcome.rounds[1].task, TaskKind::CollectSamples);
        assert_eq!(outcome.rounds[1].volume, SAMPLE_VOLUME);
        assert_eq!(outcome.rounds[1].round_id, "R1");

        // The folded stop's transit no longer counts.
        assert_eq!(outcome.total_travel, TransitDuration::from_hms(0, 15, 0));
    }

    #[test]
    fn test_empty_stop_table_rejected() {
        let err = run(&[], &legs(&[10]), &[], &quick(1)).unwrap_err();
        assert!(matches!(err, PipelineError::Data(DataError::NoStops)));
    }

    #[test]
    fn test_table_size_mismatch_rejected() {
        let err = run(&stops(3), &legs(&[10, 15]), &[], &quick(1)).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Data(DataError::StopCountMismatch { stops: 3, legs: 3 })
        ));
    }

    #[test]
    fn test_missing_duration_rejected_before_solve() {
        let mut rows = legs(&[10, 15, 5]);
        rows[1].time_to_next = None;
        let err = run(&stops(3), &rows, &[], &quick(1)).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Data(DataError::MissingLeg { index: 1, .. })
        ));
    }

    #[test]
    fn test_zero_vans_rejected() {
        let err = run(&stops(2), &legs(&[10, 15]), &[], &quick(0)).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Assignment(AssignError::NoVehicles)
        ));
    }
}
