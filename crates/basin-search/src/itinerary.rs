//! Legs and the expedition runner.
//!
//! A [`Leg`] is one point-to-point traversal request; an [`Expedition`]
//! runs an ordered list of legs, feeding each leg's arrival tick into the
//! next leg's departure.  One parameterized runner plus a slice of legs
//! covers every itinerary shape — there are no per-leg-count code paths.

use basin_core::{Cell, Tick};
use basin_field::{Field, OccupancyTable};

use crate::{ExpeditionObserver, NoopObserver, Pathfinder, SearchResult};

// ── Leg ───────────────────────────────────────────────────────────────────────

/// One traversal direction within an itinerary.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Leg {
    pub origin: Cell,
    pub destination: Cell,
}

impl Leg {
    pub const fn new(origin: Cell, destination: Cell) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Entrance → exit.
    pub fn crossing(field: &Field) -> Self {
        Self::new(field.entrance(), field.exit())
    }

    /// Exit → entrance.
    pub fn return_trip(field: &Field) -> Self {
        Self::new(field.exit(), field.entrance())
    }
}

/// The classic three-leg itinerary: across, back, and across again.
pub fn there_and_back_again(field: &Field) -> [Leg; 3] {
    [
        Leg::crossing(field),
        Leg::return_trip(field),
        Leg::crossing(field),
    ]
}

// ── Expedition ────────────────────────────────────────────────────────────────

/// Runs itineraries over one field and its occupancy table.
///
/// Borrows both immutably, so any number of expeditions (or parallel
/// batches within one) can share them.
pub struct Expedition<'a, P: Pathfinder> {
    field: &'a Field,
    table: &'a OccupancyTable,
    pathfinder: P,
}

impl<'a, P: Pathfinder> Expedition<'a, P> {
    pub fn new(field: &'a Field, table: &'a OccupancyTable, pathfinder: P) -> Self {
        Self {
            field,
            table,
            pathfinder,
        }
    }

    /// Run `legs` in order starting at `departure`.  Each leg departs at
    /// the previous leg's arrival tick; the final arrival is returned.
    /// Legs are never skipped or reordered — the first unreachable leg
    /// aborts the itinerary with its error.
    pub fn run(&self, legs: &[Leg], departure: Tick) -> SearchResult<Tick> {
        self.run_with(legs, departure, &mut NoopObserver)
    }

    /// Like [`run`](Self::run), with observer callbacks at leg boundaries.
    pub fn run_with<O: ExpeditionObserver>(
        &self,
        legs: &[Leg],
        departure: Tick,
        observer: &mut O,
    ) -> SearchResult<Tick> {
        let mut now = departure;

        for (index, leg) in legs.iter().enumerate() {
            observer.on_leg_start(index, leg, now);
            now = self.pathfinder.crossing(
                self.field,
                self.table,
                leg.origin,
                leg.destination,
                now,
            )?;
            observer.on_leg_end(index, leg, now);
        }

        observer.on_expedition_end(now);
        Ok(now)
    }

    /// Total elapsed ticks for an itinerary departing at tick zero.
    pub fn total_ticks(&self, legs: &[Leg]) -> SearchResult<u64> {
        self.run(legs, Tick::ZERO)
            .map(|arrival| arrival.since(Tick::ZERO))
    }

    /// Evaluate independent itineraries on Rayon's thread pool.
    ///
    /// Each itinerary is a separate search with its own queue and visited
    /// set; all of them read the shared occupancy table.  Results come
    /// back in input order.
    #[cfg(feature = "parallel")]
    pub fn run_batch(&self, itineraries: &[Vec<Leg>], departure: Tick) -> Vec<SearchResult<Tick>> {
        use rayon::prelude::*;

        itineraries
            .par_iter()
            .map(|legs| self.run(legs, departure))
            .collect()
    }
}
