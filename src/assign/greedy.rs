//! Seed construction for the assignment search.

use crate::graph::TransitGraph;

/// Splits a stop ordering into `vans` contiguous chunks of near-equal
/// size. Later chunks may be empty when there are more vans than stops.
pub(crate) fn split_order(order: &[usize], vans: usize) -> Vec<Vec<usize>> {
    let base = order.len() / vans;
    let extra = order.len() % vans;

    let mut routes = Vec::with_capacity(vans);
    let mut start = 0;
    for van in 0..vans {
        let size = base + usize::from(van < extra);
        routes.push(order[start..start + size].to_vec());
        start += size;
    }
    routes
}

/// Builds an initial assignment greedily: each van in turn repeatedly
/// takes the cheapest-reachable unvisited stop until its share of the
/// stop set is filled.
pub(crate) fn greedy_seed(graph: &TransitGraph, vans: usize) -> Vec<Vec<usize>> {
    let quota = graph.num_stops().div_ceil(vans);
    let mut visited = vec![false; graph.num_nodes()];
    visited[0] = true; // depot

    let mut routes = Vec::with_capacity(vans);
    for _ in 0..vans {
        let mut current = 0;
        let mut route = Vec::new();

        while route.len() < quota {
            let mut best: Option<(usize, f64)> = None;
            for node in 1..graph.num_nodes() {
                if visited[node] {
                    continue;
                }
                let cost = graph.cost(current, node);
                let better = match best {
                    None => true,
                    Some((_, best_cost)) => cost < best_cost,
                };
                if better {
                    best = Some((node, cost));
                }
            }

            match best {
                Some((node, _)) => {
                    visited[node] = true;
                    route.push(node);
                    current = node;
                }
                None => break,
            }
        }

        routes.push(route);
    }

    routes
}
