//! Inter-route stop relocation operator.
//!
//! # Algorithm
//!
//! Tries moving each stop from its current route to every insertion
//! position in every other route, accepting the best cost-reducing move
//! and repeating until none remains. Vans carry no load limit, so there
//! is no capacity test; candidate costs are recomputed through the
//! graph because transit costs need not be symmetric.
//!
//! # Complexity
//!
//! O(n³) per scan across all route pairs.

use crate::graph::TransitGraph;

/// A relocate move: take the stop at `from_pos` out of `from_route` and
/// insert it at `to_pos` in `to_route`.
#[derive(Debug, Clone)]
struct RelocateMove {
    from_route: usize,
    from_pos: usize,
    to_route: usize,
    to_pos: usize,
    delta: f64,
}

/// Applies inter-route relocate improvement to a set of routes.
///
/// Each inner vector is one van's stop sequence (depot excluded).
/// Returns the improved set; stop membership across routes is preserved
/// as a whole, only the split between vans changes.
///
/// # Examples
///
/// ```
/// use specimen_routing::graph::{CostPolicy, TransitGraph};
/// use specimen_routing::local_search::relocate_improve;
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
/// let routes = vec![vec![1, 3], vec![2]];
/// let improved = relocate_improve(&routes, &graph);
/// let total: f64 = improved.iter().map(|r| graph.route_cost(r)).sum();
/// let before: f64 = routes.iter().map(|r| graph.route_cost(r)).sum();
/// assert!(total <= before + 1e-10);
/// ```
pub fn relocate_improve(routes: &[Vec<usize>], graph: &TransitGraph) -> Vec<Vec<usize>> {
    if routes.len() < 2 {
        return routes.to_vec();
    }

    let mut routes = routes.to_vec();
    let mut improved = true;

    while improved {
        improved = false;
        if let Some(mv) = find_best_relocate(&routes, graph) {
            if mv.delta < -1e-10 {
                let node = routes[mv.from_route].remove(mv.from_pos);
                routes[mv.to_route].insert(mv.to_pos, node);
                improved = true;
            }
        }
    }

    routes
}

/// Finds the best single relocate move across all route pairs.
fn find_best_relocate(routes: &[Vec<usize>], graph: &TransitGraph) -> Option<RelocateMove> {
    let mut best: Option<RelocateMove> = None;

    for from_route in 0..routes.len() {
        for from_pos in 0..routes[from_route].len() {
            let mut donor = routes[from_route].clone();
            let node = donor.remove(from_pos);
            let donor_delta = graph.route_cost(&donor) - graph.route_cost(&routes[from_route]);

            for (to_route, target) in routes.iter().enumerate() {
                if to_route == from_route {
                    continue;
                }
                let target_cost = graph.route_cost(target);

                for to_pos in 0..=target.len() {
                    let mut host = target.clone();
                    host.insert(to_pos, node);
                    let delta = donor_delta + graph.route_cost(&host) - target_cost;

                    let better = match &best {
                        None => delta < 0.0,
                        Some(b) => delta < b.delta,
                    };
                    if better {
                        best = Some(RelocateMove {
                            from_route,
                            from_pos,
                            to_route,
                            to_pos,
                            delta,
                        });
                    }
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CostPolicy;
    use crate::models::{TransitDuration, TransitLeg};

    fn chain_graph(minutes: &[u64], policy: CostPolicy) -> TransitGraph {
        let mut rows: Vec<TransitLeg> = minutes
            .iter()
            .enumerate()
            .map(|(i, &m)| TransitLeg::new(format!("PC{i}"), TransitDuration::from_hms(0, m, 0)))
            .collect();
        rows.push(TransitLeg::terminal(format!("PC{}", minutes.len())));
        TransitGraph::from_legs(&rows, policy).unwrap()
    }

    fn total_cost(routes: &[Vec<usize>], graph: &TransitGraph) -> f64 {
        routes.iter().map(|r| graph.route_cost(r)).sum()
    }

    #[test]
    fn test_relocate_single_route_unchanged() {
        let graph = chain_graph(&[10, 15, 5], CostPolicy::Detour);
        let routes = vec![vec![2, 1, 3]];
        assert_eq!(relocate_improve(&routes, &graph), routes);
    }

    #[test]
    fn test_relocate_never_worsens() {
        let graph = chain_graph(&[10, 15, 5, 20, 8], CostPolicy::Detour);
        let routes = vec![vec![1, 4], vec![3, 2, 5]];
        let improved = relocate_improve(&routes, &graph);
        assert!(total_cost(&improved, &graph) <= total_cost(&routes, &graph) + 1e-10);
    }

    #[test]
    fn test_relocate_preserves_stop_set() {
        let graph = chain_graph(&[10, 15, 5, 20], CostPolicy::Detour);
        let improved = relocate_improve(&[vec![4, 1], vec![2, 3]], &graph);
        let mut all: Vec<usize> = improved.into_iter().flatten().collect();
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_relocate_drains_infinite_route() {
        // Under the forbidding policy only chain traversal is finite:
        // the stop stranded on the second van relocates onto the first.
        let graph = chain_graph(&[10, 15, 5], CostPolicy::Forbid);
        let improved = relocate_improve(&[vec![1, 2], vec![3]], &graph);
        assert_eq!(improved, vec![vec![1, 2, 3], vec![]]);
        assert!(total_cost(&improved, &graph).is_finite());
    }
}
