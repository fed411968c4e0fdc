//! Simulation time model.
//!
//! # Design
//!
//! Time is a bare monotonically increasing `Tick` counter.  One tick is the
//! atomic unit of everything that happens: every blizzard advances one cell
//! and the traveler makes exactly one move (or hold) per tick.  There is no
//! wall-clock mapping.
//!
//! Using an integer tick as the canonical unit keeps all arithmetic exact
//! and makes the pathfinder's composite state key (`tick mod period`, cell)
//! a pair of plain integers.

use std::fmt;

/// An absolute simulation tick counter.
///
/// Stored as `u64`; the search space is bounded by `period × cells`, so the
/// counter never comes close to overflow.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }

    /// Position of this tick within a repeating cycle of length `period`.
    ///
    /// The occupancy pattern repeats with its period, so `(phase, cell)`
    /// is a complete description of a search state.
    #[inline]
    pub fn phase(self, period: u64) -> usize {
        (self.0 % period) as usize
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
