//! `basin-core` — foundational types for the basin pathfinding engine.
//!
//! This crate is a dependency of every other `basin-*` crate.  It has no
//! `basin-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`cell`]    | `Cell` — integer grid coordinate                  |
//! | [`heading`] | `Heading` — the four blizzard travel directions   |
//! | [`time`]    | `Tick` — absolute simulation time                 |
//! | [`period`]  | `gcd` / `lcm` for sizing the occupancy table      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod cell;
pub mod heading;
pub mod period;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use heading::Heading;
pub use period::{gcd, lcm};
pub use time::Tick;
