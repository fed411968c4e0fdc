//! Text-grid parser.
//!
//! # Input format
//!
//! One grid row per line, every line the same width:
//!
//! | Glyph     | Meaning                            |
//! |-----------|------------------------------------|
//! | `#`       | wall                               |
//! | `.`       | open ground                        |
//! | `^ v < >` | blizzard with the matching heading |
//!
//! The first and last rows must each contain exactly one opening — the
//! entrance and the exit.  Structural validation (openings, wall ring,
//! blizzard placement) happens in [`Field::new`]; this module only maps
//! glyphs to geometry.

use std::str::FromStr;

use rustc_hash::FxHashSet;

use basin_core::{Cell, Heading};

use crate::{Blizzard, Field, FieldError, FieldResult};

/// Parse a field from its text form.
pub fn parse_field(input: &str) -> FieldResult<Field> {
    let mut walls: FxHashSet<Cell> = FxHashSet::default();
    let mut blizzards: Vec<Blizzard> = Vec::new();
    let mut width: usize = 0;
    let mut height: usize = 0;

    for (y, line) in input.lines().enumerate() {
        if y == 0 {
            width = line.len();
        } else if line.len() != width {
            return Err(FieldError::RowWidth {
                row: y,
                expected: width,
                found: line.len(),
            });
        }

        for (x, glyph) in line.chars().enumerate() {
            let cell = Cell::new(x as i32, y as i32);
            match glyph {
                '#' => {
                    walls.insert(cell);
                }
                '.' => {}
                _ => match Heading::from_glyph(glyph) {
                    Some(heading) => blizzards.push(Blizzard::new(cell, heading)),
                    None => return Err(FieldError::UnexpectedGlyph { glyph, cell }),
                },
            }
        }

        height += 1;
    }

    if height == 0 || width == 0 {
        return Err(FieldError::EmptyGrid);
    }

    Field::new(width as i32, height as i32, walls, blizzards)
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> FieldResult<Self> {
        parse_field(s)
    }
}
