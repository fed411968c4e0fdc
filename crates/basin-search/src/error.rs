//! Search-subsystem error type.

use thiserror::Error;

use basin_core::{Cell, Tick};

/// Errors produced by `basin-search`.
///
/// Exhaustion is the only failure mode: the `(phase, cell)` state space is
/// finite, so a search either reaches its destination or proves it
/// unreachable — it cannot loop.  Retrying has no value; the search is
/// deterministic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("no path from {origin} to {destination} departing at {departure}")]
    Unreachable {
        origin: Cell,
        destination: Cell,
        departure: Tick,
    },
}

pub type SearchResult<T> = Result<T, SearchError>;
