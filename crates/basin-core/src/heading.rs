//! Blizzard headings and their grid deltas.

use std::fmt;

/// One of the four directions a blizzard travels.
///
/// A heading is fixed at parse time and never changes: a blizzard's whole
/// trajectory is its origin plus `tick × delta`, wrapped inside the
/// interior.  The traveler reuses the same four deltas for its move
/// candidates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// All headings, in the order used for neighbor expansion.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Unit `(dx, dy)` step.  `y` grows downward, so `Up` is `(0, -1)`.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// The input glyph for this heading.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Heading::Up => '^',
            Heading::Down => 'v',
            Heading::Left => '<',
            Heading::Right => '>',
        }
    }

    /// Parse a heading glyph.  `None` for any other character.
    #[inline]
    pub const fn from_glyph(glyph: char) -> Option<Heading> {
        match glyph {
            '^' => Some(Heading::Up),
            'v' => Some(Heading::Down),
            '<' => Some(Heading::Left),
            '>' => Some(Heading::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
