//! Pre-materialized blizzard occupancy for one full period.
//!
//! # Period
//!
//! Horizontal blizzard motion depends only on `tick mod inner_width` and
//! vertical motion only on `tick mod inner_height`, so the occupancy
//! pattern repeats every `lcm(inner_width, inner_height)` ticks.  The
//! dimension product is also a valid period — just a larger one; the lcm
//! keeps the table at its minimal size.
//!
//! # Sharing
//!
//! The table is immutable after [`OccupancyTable::build`] and holds only
//! hash sets, so `&OccupancyTable` can be shared freely across threads:
//! parallel itineraries all read the same table without coordination.

use rustc_hash::FxHashSet;

use basin_core::{Cell, Tick, lcm};

use crate::Field;

/// The set of occupied interior cells for every tick of one period.
///
/// Memory is bounded by `period` frames of at most `blizzard count` cells
/// each.  Lookup for any tick `t ≥ 0` is `frames[t mod period]` — the
/// pathfinder never re-simulates.
#[derive(Clone, Debug)]
pub struct OccupancyTable {
    period: u64,
    frames: Vec<FxHashSet<Cell>>,
}

impl OccupancyTable {
    /// Materialize occupancy for ticks `0..period` from closed-form
    /// blizzard positions.  O(period × blizzard count).
    pub fn build(field: &Field) -> Self {
        let (inner_width, inner_height) = (field.inner_width(), field.inner_height());
        let period = lcm(inner_width as u64, inner_height as u64);

        let frames = (0..period)
            .map(|t| {
                field
                    .blizzards()
                    .iter()
                    .map(|blizzard| blizzard.position_at(Tick(t), inner_width, inner_height))
                    .collect()
            })
            .collect();

        Self { period, frames }
    }

    /// Ticks until the occupancy pattern repeats.
    #[inline]
    pub fn period(&self) -> u64 {
        self.period
    }

    /// Occupied cells at `tick`, folded through the period.
    #[inline]
    pub fn frame(&self, tick: Tick) -> &FxHashSet<Cell> {
        &self.frames[tick.phase(self.period)]
    }

    /// Whether `cell` holds at least one blizzard at `tick`.
    #[inline]
    pub fn occupied(&self, tick: Tick, cell: Cell) -> bool {
        self.frame(tick).contains(&cell)
    }
}
