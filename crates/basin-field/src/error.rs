//! Field-subsystem error type.
//!
//! Every variant is a configuration error: raised once while parsing or
//! validating a `Field`, before any occupancy simulation or search runs.
//! There is no recovery path — a malformed grid is fatal to the run.

use thiserror::Error;

use basin_core::Cell;

/// Errors produced by `basin-field`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("empty grid")]
    EmptyGrid,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected glyph {glyph:?} at {cell}")]
    UnexpectedGlyph { glyph: char, cell: Cell },

    #[error("interior is {inner_width}x{inner_height}; both dimensions must be at least 1")]
    DegenerateInterior { inner_width: i32, inner_height: i32 },

    #[error("top row has {found} openings, expected exactly 1")]
    TopOpenings { found: usize },

    #[error("bottom row has {found} openings, expected exactly 1")]
    BottomOpenings { found: usize },

    #[error("side wall has a gap at {cell}")]
    PerimeterGap { cell: Cell },

    #[error("blizzard at {cell} is outside the interior")]
    BlizzardOutsideInterior { cell: Cell },
}

pub type FieldResult<T> = Result<T, FieldError>;
