//! Immutable field geometry: walls, openings, and the initial blizzard list.
//!
//! # Coordinates
//!
//! The full grid is `width × height` with the wall ring on its perimeter.
//! Interior columns are `1..=inner_width` and interior rows
//! `1..=inner_height`, where `inner_width = width - 2` and
//! `inner_height = height - 2`.  The entrance is the single opening in the
//! top wall row, the exit the single opening in the bottom wall row.

use rustc_hash::{FxHashMap, FxHashSet};

use basin_core::{Cell, Heading, Tick};

use crate::{FieldError, FieldResult};

// ── Blizzard ──────────────────────────────────────────────────────────────────

/// A moving obstacle: a tick-0 position plus a fixed heading.
///
/// Blizzards are never stepped in place.  The position at any tick is a
/// pure function of the origin, the heading, and the interior bounds, so
/// one `Blizzard` value describes the whole trajectory.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Blizzard {
    /// Position at tick 0.  Always inside the interior.
    pub origin: Cell,
    pub heading: Heading,
}

impl Blizzard {
    pub const fn new(origin: Cell, heading: Heading) -> Self {
        Self { origin, heading }
    }

    /// Closed-form position at `tick`.
    ///
    /// Leaving one interior edge re-enters at the opposite edge on the same
    /// axis; the wall ring is never touched.  O(1) per call — no caller
    /// ever steps a blizzard tick-by-tick.
    pub fn position_at(self, tick: Tick, inner_width: i32, inner_height: i32) -> Cell {
        let (dx, dy) = self.heading.delta();
        let t = tick.0 as i64;

        // Interior axes are 1-indexed: shift to 0-based, wrap, shift back.
        let wrap = |origin: i32, delta: i32, extent: i32| -> i32 {
            ((origin - 1) as i64 + delta as i64 * t).rem_euclid(extent as i64) as i32 + 1
        };

        Cell::new(
            wrap(self.origin.x, dx, inner_width),
            wrap(self.origin.y, dy, inner_height),
        )
    }
}

// ── Field ─────────────────────────────────────────────────────────────────────

/// Immutable grid geometry and the parsed blizzard list.
///
/// Build via [`parse_field`](crate::parse_field) / `str::parse`, or
/// [`Field::new`] when constructing programmatically (tests, generators).
/// Both paths run the same validation, so a `Field` value is always
/// well-formed: one entrance, one exit, an unbroken wall ring elsewhere,
/// and every blizzard inside the interior.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    width: i32,
    height: i32,
    walls: FxHashSet<Cell>,
    blizzards: Vec<Blizzard>,
    entrance: Cell,
    exit: Cell,
}

impl Field {
    /// Validate raw geometry into a `Field`.
    ///
    /// `walls` holds every wall cell; any in-bounds cell not in it is open
    /// ground.  Fails with a [`FieldError`] if the grid is not a walled
    /// rectangle with exactly one opening in the top row and one in the
    /// bottom row, or if a blizzard sits outside the interior.
    pub fn new(
        width: i32,
        height: i32,
        walls: FxHashSet<Cell>,
        blizzards: Vec<Blizzard>,
    ) -> FieldResult<Self> {
        let (inner_width, inner_height) = (width - 2, height - 2);
        if inner_width < 1 || inner_height < 1 {
            return Err(FieldError::DegenerateInterior {
                inner_width,
                inner_height,
            });
        }

        let entrance = Self::single_opening(&walls, width, 0)
            .map_err(|found| FieldError::TopOpenings { found })?;
        let exit = Self::single_opening(&walls, width, height - 1)
            .map_err(|found| FieldError::BottomOpenings { found })?;

        // The side columns (corners included) must be solid wall; this also
        // rejects an entrance or exit sitting in a corner.
        for y in 0..height {
            for x in [0, width - 1] {
                let cell = Cell::new(x, y);
                if !walls.contains(&cell) {
                    return Err(FieldError::PerimeterGap { cell });
                }
            }
        }

        for blizzard in &blizzards {
            let Cell { x, y } = blizzard.origin;
            if x < 1 || x > inner_width || y < 1 || y > inner_height {
                return Err(FieldError::BlizzardOutsideInterior {
                    cell: blizzard.origin,
                });
            }
        }

        Ok(Self {
            width,
            height,
            walls,
            blizzards,
            entrance,
            exit,
        })
    }

    /// The single non-wall cell in `row`, or `Err(count)` if there is not
    /// exactly one.
    fn single_opening(walls: &FxHashSet<Cell>, width: i32, row: i32) -> Result<Cell, usize> {
        let mut openings = (0..width)
            .map(|x| Cell::new(x, row))
            .filter(|cell| !walls.contains(cell));

        match (openings.next(), openings.next()) {
            (Some(opening), None) => Ok(opening),
            (None, _) => Err(0),
            (Some(_), Some(_)) => Err(2 + openings.count()),
        }
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Playable columns: `width - 2` (the wall ring excluded).
    #[inline]
    pub fn inner_width(&self) -> i32 {
        self.width - 2
    }

    /// Playable rows: `height - 2`.
    #[inline]
    pub fn inner_height(&self) -> i32 {
        self.height - 2
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// In bounds and not a wall.  The entrance and exit are open like any
    /// interior cell, so a search needs no boundary special case.
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.walls.contains(&cell)
    }

    /// The single opening in the top wall row.
    #[inline]
    pub fn entrance(&self) -> Cell {
        self.entrance
    }

    /// The single opening in the bottom wall row.
    #[inline]
    pub fn exit(&self) -> Cell {
        self.exit
    }

    /// The blizzard list as parsed (tick-0 positions).
    #[inline]
    pub fn blizzards(&self) -> &[Blizzard] {
        &self.blizzards
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Render the field at `tick` in the input text form: `#` walls, `.`
    /// open ground, a heading glyph where a single blizzard sits, and the
    /// blizzard count where several share a cell (ten or more render as
    /// `*`).  One line per row, each newline-terminated.
    pub fn render_at(&self, tick: Tick) -> String {
        let mut occupants: FxHashMap<Cell, (u32, Heading)> = FxHashMap::default();
        for blizzard in &self.blizzards {
            let pos = blizzard.position_at(tick, self.inner_width(), self.inner_height());
            occupants
                .entry(pos)
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, blizzard.heading));
        }

        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = Cell::new(x, y);
                out.push(if self.walls.contains(&cell) {
                    '#'
                } else {
                    match occupants.get(&cell) {
                        None => '.',
                        Some((1, heading)) => heading.glyph(),
                        Some((count @ 2..=9, _)) => (b'0' + *count as u8) as char,
                        Some(_) => '*',
                    }
                });
            }
            out.push('\n');
        }
        out
    }
}
