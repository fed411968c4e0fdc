//! `basin-field` — field geometry and the periodic occupancy table.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`field`]     | `Field` (walls, openings, blizzards), `Blizzard`       |
//! | [`parse`]     | `parse_field` — text-grid loader                       |
//! | [`occupancy`] | `OccupancyTable` — one period of occupancy, by tick    |
//! | [`error`]     | `FieldError`, `FieldResult<T>`                         |
//!
//! A `Field` is pure immutable geometry; the `OccupancyTable` is the only
//! derived state, built once and read-only thereafter.  Everything a search
//! needs at runtime is answered by `Field::is_open` and
//! `OccupancyTable::occupied`.

pub mod error;
pub mod field;
pub mod occupancy;
pub mod parse;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FieldError, FieldResult};
pub use field::{Blizzard, Field};
pub use occupancy::OccupancyTable;
pub use parse::parse_field;
