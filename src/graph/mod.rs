//! Transit chain graph built from an ordered stop sequence.
//!
//! Edges derive solely from input adjacency; the fallback cost for
//! every other node pair is an explicit [`CostPolicy`].

mod transit;

pub use transit::{CostPolicy, TransitGraph};
