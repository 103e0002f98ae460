//! # specimen-routing
//!
//! Planning library for pathology specimen collection: assigns pickup
//! stops to a fleet of vans over a transit chain graph, folds pickups
//! into existing courier rounds with spare capacity, and reports the
//! realized van travel time.
//!
//! ## Modules
//!
//! - [`models`] — Domain records (Stop, TransitLeg, VanRoute, AssignedJourney, RoundEntry)
//! - [`graph`] — Transit chain graph with an explicit fallback cost policy
//! - [`assign`] — Time-budgeted multi-van route assignment
//! - [`local_search`] — Improvement operators (2-opt, relocate)
//! - [`extract`] — Per-van journey extraction with collection timing
//! - [`consolidate`] — Folding pickups into capacity-constrained courier rounds
//! - [`aggregate`] — Travel time aggregation
//! - [`pipeline`] — The five stages wired end to end
//! - [`error`] — Pipeline error types

pub mod aggregate;
pub mod assign;
pub mod consolidate;
pub mod error;
pub mod extract;
pub mod graph;
pub mod local_search;
pub mod models;
pub mod pipeline;
