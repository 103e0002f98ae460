//! Transit chain graph.

use crate::error::DataError;
use crate::models::{TransitDuration, TransitLeg};

/// Cost charged for node pairs the chain graph has no edge for.
///
/// The transit table defines N−1 edges, one per consecutive pair, but a
/// routing solver probes arbitrary pairs. The fallback is an explicit
/// choice, not an accident of construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostPolicy {
    /// Charge the corridor distance: the sum of chain edge weights
    /// between the two nodes' chain positions. Finite for every pair
    /// and equal to the literal weight on chain edges.
    #[default]
    Detour,
    /// Charge infinity, so the solver never routes through a non-chain
    /// pair. With more than one van this generally admits no
    /// finite-cost solution.
    Forbid,
}

/// A directed weighted graph over an ordered transit stop sequence.
///
/// N legs produce N nodes and N−1 edges; edge i→i+1 carries leg i's
/// literal recorded duration. Node 0 is the depot. Returning to the
/// depot is the loop-back every route ends with and costs nothing under
/// either policy; all other missing pairs are priced by the
/// [`CostPolicy`].
///
/// # Examples
///
/// ```
/// use specimen_routing::graph::{CostPolicy, TransitGraph};
/// use specimen_routing::models::{TransitDuration, TransitLeg};
///
/// let legs = vec![
///     TransitLeg::new("SO16 6YD", TransitDuration::from_hms(0, 10, 0)),
///     TransitLeg::new("SO15 2GB", TransitDuration::from_hms(0, 15, 0)),
///     TransitLeg::terminal("SO14 0YG"),
/// ];
/// let graph = TransitGraph::from_legs(&legs, CostPolicy::Detour).unwrap();
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_stops(), 2);
/// assert_eq!(graph.cost(0, 1), 600.0);
/// assert_eq!(graph.cost(0, 2), 1500.0); // detour through node 1
/// ```
#[derive(Debug, Clone)]
pub struct TransitGraph {
    codes: Vec<String>,
    weights: Vec<TransitDuration>,
    prefix: Vec<u64>,
    policy: CostPolicy,
}

impl TransitGraph {
    /// Builds the chain graph from ordered transit legs.
    ///
    /// Fails with [`DataError::NoStops`] when fewer than two legs are
    /// supplied, and with [`DataError::MissingLeg`] when any non-terminal
    /// leg lacks a duration. A duration on the terminal leg is ignored;
    /// the final stop contributes no outgoing edge.
    pub fn from_legs(legs: &[TransitLeg], policy: CostPolicy) -> Result<Self, DataError> {
        if legs.len() < 2 {
            return Err(DataError::NoStops);
        }

        let mut weights = Vec::with_capacity(legs.len() - 1);
        for (index, leg) in legs[..legs.len() - 1].iter().enumerate() {
            let duration = leg.time_to_next.ok_or_else(|| DataError::MissingLeg {
                index,
                postcode: leg.postcode.clone(),
            })?;
            weights.push(duration);
        }

        let mut prefix = Vec::with_capacity(legs.len());
        let mut total = 0u64;
        prefix.push(total);
        for w in &weights {
            total += w.seconds();
            prefix.push(total);
        }

        Ok(Self {
            codes: legs.iter().map(|leg| leg.postcode.clone()).collect(),
            weights,
            prefix,
            policy,
        })
    }

    /// Number of nodes, depot included.
    pub fn num_nodes(&self) -> usize {
        self.codes.len()
    }

    /// Number of pickup stops (all nodes except the depot).
    pub fn num_stops(&self) -> usize {
        self.codes.len() - 1
    }

    /// The configured fallback cost policy.
    pub fn policy(&self) -> CostPolicy {
        self.policy
    }

    /// Postcode of the given node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of bounds.
    pub fn code(&self, node: usize) -> &str {
        &self.codes[node]
    }

    /// The chain duration recorded on the given node's predecessor,
    /// i.e. the weight of edge `node−1 → node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is the depot or out of bounds.
    pub fn inbound(&self, node: usize) -> TransitDuration {
        self.weights[node - 1]
    }

    /// Transit cost from one node to another, in seconds.
    ///
    /// Chain edges cost their literal weight; the depot loop-back is
    /// free; every other pair is priced by the fallback policy.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        if from == to {
            return 0.0;
        }
        if to == 0 {
            return 0.0;
        }
        if to == from + 1 {
            return self.weights[from].seconds() as f64;
        }
        match self.policy {
            CostPolicy::Detour => self.prefix[to].abs_diff(self.prefix[from]) as f64,
            CostPolicy::Forbid => f64::INFINITY,
        }
    }

    /// Total cost of a depot-anchored route over the given stop
    /// sequence (depot excluded).
    pub fn route_cost(&self, stops: &[usize]) -> f64 {
        let Some(&first) = stops.first() else {
            return 0.0;
        };
        let mut cost = self.cost(0, first);
        for w in stops.windows(2) {
            cost += self.cost(w[0], w[1]);
        }
        cost + self.cost(stops[stops.len() - 1], 0)
    }
}
