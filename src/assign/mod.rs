//! Multi-van route assignment.
//!
//! Partitions every pickup node of the transit graph into depot-anchored
//! van routes of minimal summed transit cost. The search is a bounded
//! heuristic: a greedy seed is polished by local search, then
//! shuffled-order restarts run until the wall-clock budget elapses and
//! the best finite-cost assignment wins. Exceeding the budget degrades
//! solution quality, never correctness.

mod greedy;

use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::AssignError;
use crate::graph::TransitGraph;
use crate::local_search::{relocate_improve, two_opt_improve};
use crate::models::VanRoute;

/// Default wall-clock budget for the assignment search.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(10);

/// Configuration for [`assign_routes`].
///
/// # Examples
///
/// ```
/// use specimen_routing::assign::AssignerConfig;
///
/// let config = AssignerConfig {
///     vans: 3,
///     ..AssignerConfig::default()
/// };
/// assert_eq!(config.time_budget.as_secs(), 10);
/// assert!(config.seed.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct AssignerConfig {
    /// Number of vans to assign routes to. Must be at least 1.
    pub vans: usize,
    /// Wall-clock budget for the restart loop. A zero budget still
    /// returns the polished greedy seed.
    pub time_budget: Duration,
    /// Pins the restart RNG for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for AssignerConfig {
    fn default() -> Self {
        Self {
            vans: 1,
            time_budget: DEFAULT_TIME_BUDGET,
            seed: None,
        }
    }
}

/// Assigns every pickup node of the graph to exactly one van route.
///
/// Routes may be empty apart from the depot when there are more vans
/// than stops. Fails with [`AssignError::NoVehicles`] for a zero van
/// count and with [`AssignError::Infeasible`] when no finite-cost
/// assignment was found within the budget (which the forbidding cost
/// policy can cause).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use specimen_routing::assign::{assign_routes, AssignerConfig};
/// use specimen_routing::graph::{CostPolicy, TransitGraph};
/// use specimen_routing::models::{TransitDuration, TransitLeg};
///
/// let legs = vec![
///     TransitLeg::new("PC0", TransitDuration::from_hms(0, 10, 0)),
///     TransitLeg::new("PC1", TransitDuration::from_hms(0, 15, 0)),
///     TransitLeg::terminal("PC2"),
/// ];
/// let graph = TransitGraph::from_legs(&legs, CostPolicy::Detour).unwrap();
/// let config = AssignerConfig {
///     vans: 2,
///     time_budget: Duration::ZERO,
///     seed: Some(42),
/// };
///
/// let routes = assign_routes(&graph, &config).unwrap();
/// assert_eq!(routes.len(), 2);
/// let served: usize = routes.iter().map(|r| r.len()).sum();
/// assert_eq!(served, 2);
/// ```
pub fn assign_routes(
    graph: &TransitGraph,
    config: &AssignerConfig,
) -> Result<Vec<VanRoute>, AssignError> {
    if config.vans == 0 {
        return Err(AssignError::NoVehicles);
    }

    let started = Instant::now();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut best = improve(greedy::greedy_seed(graph, config.vans), graph);
    let mut best_cost = solution_cost(&best, graph);
    debug!("seed assignment cost {best_cost}");

    let stops: Vec<usize> = (1..graph.num_nodes()).collect();
    let mut restarts = 0usize;
    while started.elapsed() < config.time_budget {
        let mut order = stops.clone();
        order.shuffle(&mut rng);

        let candidate = improve(greedy::split_order(&order, config.vans), graph);
        let cost = solution_cost(&candidate, graph);
        restarts += 1;

        if cost < best_cost {
            debug!("restart {restarts}: cost {best_cost} -> {cost}");
            best = candidate;
            best_cost = cost;
        }
    }
    debug!(
        "assignment search finished: {restarts} restarts, best cost {best_cost}, {:?} elapsed",
        started.elapsed()
    );

    if !best_cost.is_finite() {
        return Err(AssignError::Infeasible {
            budget_secs: config.time_budget.as_secs_f64(),
        });
    }

    Ok(best
        .into_iter()
        .enumerate()
        .map(|(van, stops)| VanRoute::new(van, &stops))
        .collect())
}

/// Polishes an assignment to a local optimum: inter-route relocation
/// followed by per-route 2-opt, cycled until neither helps.
fn improve(mut routes: Vec<Vec<usize>>, graph: &TransitGraph) -> Vec<Vec<usize>> {
    loop {
        let before = solution_cost(&routes, graph);

        routes = relocate_improve(&routes, graph);
        for route in &mut routes {
            let (better, _) = two_opt_improve(route, graph);
            *route = better;
        }

        let after = solution_cost(&routes, graph);
        if !(after < before - 1e-10) {
            break;
        }
    }
    routes
}

fn solution_cost(routes: &[Vec<usize>], graph: &TransitGraph) -> f64 {
    routes.iter().map(|r| graph.route_cost(r)).sum()
}
