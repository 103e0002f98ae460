//! Domain model types for specimen collection planning.
//!
//! Provides the core records: pickup stops and transit legs as ingested,
//! second-backed transit durations, depot-anchored van routes, assigned
//! journeys with collection timing, and courier round rows.

mod courier;
mod duration;
mod journey;
mod route;
mod stop;

pub use courier::{RoundEntry, TaskKind};
pub use duration::TransitDuration;
pub use journey::AssignedJourney;
pub use route::VanRoute;
pub use stop::{Stop, TransitLeg};
