//! Error types for the planning pipeline.

/// Malformed or inconsistent input tables.
///
/// Raised before any solve attempt; never retried.
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("transit row {index} ({postcode}) has no time to next stop")]
    MissingLeg { index: usize, postcode: String },
    #[error("transit table must contain the depot row and at least one stop")]
    NoStops,
    #[error("{stops} stop rows but {legs} transit rows; expected one transit row per stop plus the depot")]
    StopCountMismatch { stops: usize, legs: usize },
}

/// The routing assignment could not produce a usable solution.
#[derive(thiserror::Error, Debug)]
pub enum AssignError {
    #[error("van count must be at least 1")]
    NoVehicles,
    #[error("no finite-cost assignment found within {budget_secs:.1}s")]
    Infeasible { budget_secs: f64 },
}

/// Any failure surfaced by [`pipeline::run`](crate::pipeline::run).
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Assignment(#[from] AssignError),
}
