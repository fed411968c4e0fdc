//! Pathfinding trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! The itinerary runner calls searches via the [`Pathfinder`] trait, so a
//! different algorithm (A* with a Manhattan heuristic, bidirectional BFS)
//! can be swapped in without touching the legs machinery.  The default
//! [`BfsPathfinder`] is exact and fast enough for any realistic field.
//!
//! # State space
//!
//! A search node is a `(tick, cell)` pair.  Occupancy repeats with the
//! table's period, so two nodes with the same cell and congruent ticks
//! behave identically; the visited set is therefore keyed on
//! `(tick mod period, cell)`.  That bounds the space by
//! `period × width × height` states and guarantees termination even when
//! the destination is unreachable.  Keying on the raw tick instead would
//! let the frontier grow without bound.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use basin_core::{Cell, Tick};
use basin_field::{Field, OccupancyTable};

use crate::{SearchError, SearchResult};

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable point-to-point search over the time-expanded field.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one pathfinder can serve
/// parallel itinerary batches.  Per-call scratch state (queue, visited
/// set) belongs in the body of `crossing`, never in `self`.
pub trait Pathfinder: Send + Sync {
    /// The earliest tick `t ≥ departure` at which a traveler leaving
    /// `origin` at `departure` can stand on `destination`.
    ///
    /// `origin == destination` is answered with `departure` itself — a
    /// zero-length leg is already complete.
    fn crossing(
        &self,
        field: &Field,
        table: &OccupancyTable,
        origin: Cell,
        destination: Cell,
        departure: Tick,
    ) -> SearchResult<Tick>;
}

// ── BfsPathfinder ─────────────────────────────────────────────────────────────

/// Breadth-first search over `(tick, cell)` states.
///
/// Every transition costs exactly one tick, so plain FIFO order is already
/// optimal: the first time the destination is popped, its tick is the
/// minimum arrival time.
pub struct BfsPathfinder;

impl Pathfinder for BfsPathfinder {
    fn crossing(
        &self,
        field: &Field,
        table: &OccupancyTable,
        origin: Cell,
        destination: Cell,
        departure: Tick,
    ) -> SearchResult<Tick> {
        let period = table.period();

        let mut queue: VecDeque<(Tick, Cell)> = VecDeque::new();
        let mut visited: FxHashSet<(usize, Cell)> = FxHashSet::default();

        queue.push_back((departure, origin));
        visited.insert((departure.phase(period), origin));

        while let Some((tick, cell)) = queue.pop_front() {
            if cell == destination {
                return Ok(tick);
            }

            let arrival = tick + 1;
            let occupied = table.frame(arrival);

            // Four orthogonal moves plus holding in place.  A candidate is
            // legal iff it is an open cell and no blizzard occupies it at
            // the arrival tick.  Out-of-bounds cells beyond the entrance
            // and exit fail `is_open`, so no boundary special case exists.
            for next in cell.neighbors().into_iter().chain([cell]) {
                if !field.is_open(next) || occupied.contains(&next) {
                    continue;
                }
                if visited.insert((arrival.phase(period), next)) {
                    queue.push_back((arrival, next));
                }
            }
        }

        Err(SearchError::Unreachable {
            origin,
            destination,
            departure,
        })
    }
}
