//! Resource state engine.
//!
//! Wraps one asynchronous request into an observable tri-state value
//! (`data`, `loading`, `error`) with reload, manual overrides and
//! last-writer-wins handling of overlapping loads.

mod engine;
mod state;

pub use engine::{LoadHandle, LoadOutcome, ResourceEngine, CALL_ABORTED};
pub use state::{Phase, RequestState};
