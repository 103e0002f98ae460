//! Journey extraction: per-van collection timing.

use log::debug;

use crate::error::DataError;
use crate::graph::TransitGraph;
use crate::models::{AssignedJourney, Stop, TransitDuration, VanRoute};

/// Walks each van route and attaches the original stop record and a
/// running collection clock to every visited node.
///
/// The clock starts at zero when a van leaves the depot and, at each
/// visited node, advances by the chain duration recorded on that node's
/// predecessor (edge k−1→k): the accumulation is keyed by the stop
/// just departed in the original ordering, not the stop just arrived
/// at. Within a van, collection times never decrease. Van numbers are
/// 1-indexed.
///
/// Stop row i corresponds to graph node i+1; the two tables must agree
/// on size.
///
/// # Examples
///
/// ```
/// use specimen_routing::extract::extract_journeys;
/// use specimen_routing::graph::{CostPolicy, TransitGraph};
/// use specimen_routing::models::{Stop, TransitDuration, TransitLeg, VanRoute};
///
/// let legs = vec![
///     TransitLeg::new("LAB", TransitDuration::from_hms(0, 10, 0)),
///     TransitLeg::new("SO15 2GB", TransitDuration::from_hms(0, 15, 0)),
///     TransitLeg::terminal("SO14 0YG"),
/// ];
/// let graph = TransitGraph::from_legs(&legs, CostPolicy::Detour).unwrap();
/// let stops = vec![
///     Stop::new(1, "Riverside Surgery", "SO15 2GB", "2023-11-06", "08:45"),
///     Stop::new(2, "Hill Lane Practice", "SO14 0YG", "2023-11-06", "09:10"),
/// ];
/// let routes = vec![VanRoute::new(0, &[1, 2])];
///
/// let journeys = extract_journeys(&routes, &stops, &graph).unwrap();
/// assert_eq!(journeys.len(), 2);
/// assert_eq!(journeys[0].van_label(), "Van 1");
/// assert!((journeys[1].collection_hours() - 25.0 / 60.0).abs() < 1e-12);
/// ```
pub fn extract_journeys(
    routes: &[VanRoute],
    stops: &[Stop],
    graph: &TransitGraph,
) -> Result<Vec<AssignedJourney>, DataError> {
    if stops.len() != graph.num_stops() {
        return Err(DataError::StopCountMismatch {
            stops: stops.len(),
            legs: graph.num_nodes(),
        });
    }

    let mut journeys = Vec::with_capacity(stops.len());
    for route in routes {
        let mut clock = TransitDuration::ZERO;
        for &node in route.stops() {
            let transit = graph.inbound(node);
            clock += transit;
            journeys.push(AssignedJourney {
                stop: stops[node - 1].clone(),
                van: route.van() + 1,
                transit,
                elapsed: clock,
            });
        }
        debug!(
            "van {}: {} stops, {} on the road",
            route.van() + 1,
            route.len(),
            clock
        );
    }

    Ok(journeys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CostPolicy;
    use crate::models::TransitLeg;

    fn fixture(minutes: &[u64]) -> (TransitGraph, Vec<Stop>) {
        let mut rows: Vec<TransitLeg> = minutes
            .iter()
            .enumerate()
            .map(|(i, &m)| TransitLeg::new(format!("PC{i}"), TransitDuration::from_hms(0, m, 0)))
            .collect();
        rows.push(TransitLeg::terminal(format!("PC{}", minutes.len())));
        let graph = TransitGraph::from_legs(&rows, CostPolicy::Detour).unwrap();

        let stops = (1..=minutes.len() as u32)
            .map(|i| Stop::new(i, format!("Surgery {i}"), format!("PC{i}"), "2023-11-06", "08:00"))
            .collect();
        (graph, stops)
    }

    #[test]
    fn test_clock_keyed_by_chain_predecessor() {
        let (graph, stops) = fixture(&[10, 15, 5]);
        // Visit out of chain order: the clock still consumes each
        // node's own inbound chain duration.
        let routes = vec![VanRoute::new(0, &[2, 3, 1])];
        let journeys = extract_journeys(&routes, &stops, &graph).unwrap();

        assert_eq!(journeys[0].transit, TransitDuration::from_hms(0, 15, 0));
        assert_eq!(journeys[0].elapsed, TransitDuration::from_hms(0, 15, 0));
        assert_eq!(journeys[1].elapsed, TransitDuration::from_hms(0, 20, 0));
        assert_eq!(journeys[2].elapsed, TransitDuration::from_hms(0, 30, 0));
    }

    #[test]
    fn test_clock_resets_per_van() {
        let (graph, stops) = fixture(&[10, 15, 5]);
        let routes = vec![VanRoute::new(0, &[1, 2]), VanRoute::new(1, &[3])];
        let journeys = extract_journeys(&routes, &stops, &graph).unwrap();

        assert_eq!(journeys[0].van, 1);
        assert_eq!(journeys[2].van, 2);
        assert_eq!(journeys[2].elapsed, TransitDuration::from_hms(0, 5, 0));
    }

    #[test]
    fn test_monotone_within_van() {
        let (graph, stops) = fixture(&[10, 15, 5, 20, 8]);
        let routes = vec![VanRoute::new(0, &[5, 2, 4]), VanRoute::new(1, &[1, 3])];
        let journeys = extract_journeys(&routes, &stops, &graph).unwrap();

        for van in [1, 2] {
            let clocks: Vec<_> = journeys
                .iter()
                .filter(|j| j.van == van)
                .map(|j| j.elapsed)
                .collect();
            assert!(clocks.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_stop_record_carried_over() {
        let (graph, stops) = fixture(&[10, 15]);
        let routes = vec![VanRoute::new(0, &[2, 1])];
        let journeys = extract_journeys(&routes, &stops, &graph).unwrap();
        assert_eq!(journeys[0].stop, stops[1]);
        assert_eq!(journeys[1].stop, stops[0]);
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let (graph, mut stops) = fixture(&[10, 15]);
        stops.pop();
        let routes = vec![VanRoute::new(0, &[1, 2])];
        let err = extract_journeys(&routes, &stops, &graph).unwrap_err();
        assert!(matches!(err, DataError::StopCountMismatch { stops: 1, legs: 3 }));
    }

    #[test]
    fn test_empty_routes_yield_no_journeys() {
        let (graph, stops) = fixture(&[10]);
        let routes = vec![VanRoute::new(0, &[]), VanRoute::new(1, &[1])];
        let journeys = extract_journeys(&routes, &stops, &graph).unwrap();
        assert_eq!(journeys.len(), 1);
        assert_eq!(journeys[0].van, 2);
    }
}
