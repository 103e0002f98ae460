//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions (i, j) in a route, compute the change in
//! transit cost from reversing the segment [i..=j]. If the change is
//! negative, reverse the segment and accept. Repeat until no further
//! improvements are found (first-improvement strategy).
//!
//! Deltas are evaluated edge-by-edge through the graph rather than with
//! the symmetric shortcut formula: transit costs need not be symmetric,
//! and a reversed segment traverses every interior edge in the opposite
//! direction.
//!
//! # Complexity
//!
//! O(n³) per pass.

use crate::graph::TransitGraph;

/// Applies 2-opt improvement to a single route (given as a sequence of
/// stop nodes, depot excluded).
///
/// The route is assumed to start and end at the depot. Returns the
/// improved stop sequence and its total transit cost.
///
/// # Examples
///
/// ```
/// use specimen_routing::graph::{CostPolicy, TransitGraph};
/// use specimen_routing::local_search::two_opt_improve;
/// use specimen_routing::models::{TransitDuration, TransitLeg};
///
/// let legs = vec![
///     TransitLeg::new("PC0", TransitDuration::from_hms(0, 10, 0)),
///     TransitLeg::new("PC1", TransitDuration::from_hms(0, 15, 0)),
///     TransitLeg::new("PC2", TransitDuration::from_hms(0, 5, 0)),
///     TransitLeg::terminal("PC3"),
/// ];
/// let graph = TransitGraph::from_legs(&legs, CostPolicy::Detour).unwrap();
///
/// // Suboptimal order: 1, 3, 2
/// let (improved, cost) = two_opt_improve(&[1, 3, 2], &graph);
/// assert_eq!(improved, vec![1, 2, 3]);
/// assert_eq!(cost, graph.route_cost(&[1, 2, 3]));
/// ```
pub fn two_opt_improve(route: &[usize], graph: &TransitGraph) -> (Vec<usize>, f64) {
    if route.len() < 2 {
        return (route.to_vec(), graph.route_cost(route));
    }

    let mut current = route.to_vec();
    let mut improved = true;

    while improved {
        improved = false;
        let n = current.len();

        for i in 0..n - 1 {
            for j in i + 1..n {
                let delta = two_opt_delta(&current, graph, i, j);
                if delta < -1e-10 {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let cost = graph.route_cost(&current);
    (current, cost)
}

/// Cost change from reversing the segment [i..=j] of the route.
fn two_opt_delta(route: &[usize], graph: &TransitGraph, i: usize, j: usize) -> f64 {
    let prev = if i == 0 { 0 } else { route[i - 1] };
    let next = if j == route.len() - 1 { 0 } else { route[j + 1] };

    let mut old = graph.cost(prev, route[i]);
    for w in route[i..=j].windows(2) {
        old += graph.cost(w[0], w[1]);
    }
    old += graph.cost(route[j], next);

    let mut new = graph.cost(prev, route[j]);
    for k in (i + 1..=j).rev() {
        new += graph.cost(route[k], route[k - 1]);
    }
    new += graph.cost(route[i], next);

    new - old
}
