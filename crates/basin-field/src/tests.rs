//! Unit tests for basin-field.
//!
//! All tests use hand-written grids small enough to verify by eye.

#[cfg(test)]
mod helpers {
    use basin_core::Cell;

    use crate::{Blizzard, Field, parse_field};

    /// The canonical example field: 6×4 interior, 19 blizzards, period 12.
    pub const CANONICAL: &str = concat!(
        "#.######\n",
        "#>>.<^<#\n",
        "#.<..<<#\n",
        "#>v.><>#\n",
        "#<^v^^>#\n",
        "######.#\n",
    );

    /// 5×5 interior with one rightward and one downward blizzard — small
    /// enough to track both by hand through a full period (5 ticks).
    pub const SIMPLE_T0: &str = concat!(
        "#.#####\n",
        "#.....#\n",
        "#>....#\n",
        "#.....#\n",
        "#...v.#\n",
        "#.....#\n",
        "#####.#\n",
    );

    pub fn canonical() -> Field {
        parse_field(CANONICAL).expect("canonical grid parses")
    }

    pub fn simple() -> Field {
        parse_field(SIMPLE_T0).expect("simple grid parses")
    }

    /// Step every blizzard one tick the slow way: move one cell, then wrap
    /// on the interior edges.  The occupancy table must agree with this at
    /// every tick.
    pub fn step_naive(blizzards: &[Blizzard], inner_width: i32, inner_height: i32) -> Vec<Blizzard> {
        blizzards
            .iter()
            .map(|b| {
                let (dx, dy) = b.heading.delta();
                let mut x = b.origin.x + dx;
                let mut y = b.origin.y + dy;
                if x < 1 {
                    x = inner_width;
                } else if x > inner_width {
                    x = 1;
                }
                if y < 1 {
                    y = inner_height;
                } else if y > inner_height {
                    y = 1;
                }
                Blizzard::new(Cell::new(x, y), b.heading)
            })
            .collect()
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse {
    use basin_core::Cell;

    use crate::{FieldError, parse_field};

    #[test]
    fn canonical_geometry() {
        let field = super::helpers::canonical();
        assert_eq!(field.width(), 8);
        assert_eq!(field.height(), 6);
        assert_eq!(field.inner_width(), 6);
        assert_eq!(field.inner_height(), 4);
        assert_eq!(field.entrance(), Cell::new(1, 0));
        assert_eq!(field.exit(), Cell::new(6, 5));
        assert_eq!(field.blizzards().len(), 19);
    }

    #[test]
    fn openings_are_open_walls_are_not() {
        let field = super::helpers::canonical();
        assert!(field.is_open(field.entrance()));
        assert!(field.is_open(field.exit()));
        assert!(field.is_open(Cell::new(3, 2)));
        assert!(field.is_wall(Cell::new(0, 0)));
        assert!(!field.is_open(Cell::new(0, 3)));
        // One step above the entrance is out of bounds, not merely walled.
        assert!(!field.is_open(Cell::new(1, -1)));
    }

    #[test]
    fn smallest_valid_grid() {
        let field = parse_field("#.#\n#.#\n#.#\n").expect("1x1 interior is legal");
        assert_eq!(field.inner_width(), 1);
        assert_eq!(field.inner_height(), 1);
        assert_eq!(field.entrance(), Cell::new(1, 0));
        assert_eq!(field.exit(), Cell::new(1, 2));
    }

    #[test]
    fn from_str_matches_parse_field() {
        let field: crate::Field = super::helpers::CANONICAL.parse().unwrap();
        assert_eq!(field.blizzards(), super::helpers::canonical().blizzards());
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(parse_field(""), Err(FieldError::EmptyGrid));
    }

    #[test]
    fn ragged_rows_rejected() {
        assert_eq!(
            parse_field("#.###\n#..#\n###.#\n"),
            Err(FieldError::RowWidth {
                row: 1,
                expected: 5,
                found: 4,
            })
        );
    }

    #[test]
    fn unknown_glyph_rejected() {
        assert_eq!(
            parse_field("#.###\n#.X.#\n###.#\n"),
            Err(FieldError::UnexpectedGlyph {
                glyph: 'X',
                cell: Cell::new(2, 1),
            })
        );
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validate {
    use basin_core::Cell;

    use crate::{FieldError, parse_field};

    #[test]
    fn two_top_openings_rejected() {
        assert_eq!(
            parse_field("#..##\n#...#\n###.#\n"),
            Err(FieldError::TopOpenings { found: 2 })
        );
    }

    #[test]
    fn missing_bottom_opening_rejected() {
        assert_eq!(
            parse_field("#.###\n#...#\n#####\n"),
            Err(FieldError::BottomOpenings { found: 0 })
        );
    }

    #[test]
    fn degenerate_interior_rejected() {
        assert_eq!(
            parse_field("#.\n.#\n"),
            Err(FieldError::DegenerateInterior {
                inner_width: 0,
                inner_height: 0,
            })
        );
    }

    #[test]
    fn side_wall_gap_rejected() {
        assert_eq!(
            parse_field("#.###\n#....\n###.#\n"),
            Err(FieldError::PerimeterGap {
                cell: Cell::new(4, 1),
            })
        );
    }

    #[test]
    fn blizzard_in_wall_row_rejected() {
        // The `>` occupies the top row's only opening, so it parses as a
        // blizzard sitting outside the interior.
        assert_eq!(
            parse_field("#>###\n#...#\n###.#\n"),
            Err(FieldError::BlizzardOutsideInterior {
                cell: Cell::new(1, 0),
            })
        );
    }
}

// ── Blizzard trajectories ─────────────────────────────────────────────────────

#[cfg(test)]
mod blizzard {
    use basin_core::{Cell, Heading, Tick};

    use crate::Blizzard;

    const INNER: (i32, i32) = (3, 3);

    #[test]
    fn wraps_on_every_edge() {
        let (iw, ih) = INNER;
        // Left-mover on column 1 re-enters at column inner_width …
        let left = Blizzard::new(Cell::new(1, 2), Heading::Left);
        assert_eq!(left.position_at(Tick(1), iw, ih), Cell::new(iw, 2));
        // … and the opposite heading on the opposite edge, symmetric.
        let right = Blizzard::new(Cell::new(iw, 2), Heading::Right);
        assert_eq!(right.position_at(Tick(1), iw, ih), Cell::new(1, 2));
        let up = Blizzard::new(Cell::new(2, 1), Heading::Up);
        assert_eq!(up.position_at(Tick(1), iw, ih), Cell::new(2, ih));
        let down = Blizzard::new(Cell::new(2, ih), Heading::Down);
        assert_eq!(down.position_at(Tick(1), iw, ih), Cell::new(2, 1));
    }

    #[test]
    fn crossing_axis_is_untouched() {
        let (iw, ih) = INNER;
        let b = Blizzard::new(Cell::new(1, 2), Heading::Right);
        for t in 0..10 {
            assert_eq!(b.position_at(Tick(t), iw, ih).y, 2);
        }
    }

    #[test]
    fn closed_form_matches_naive_stepping() {
        let (iw, ih) = INNER;
        let start = vec![
            Blizzard::new(Cell::new(1, 1), Heading::Left),
            Blizzard::new(Cell::new(2, 3), Heading::Down),
            Blizzard::new(Cell::new(3, 2), Heading::Right),
            Blizzard::new(Cell::new(2, 2), Heading::Up),
        ];

        let mut stepped = start.clone();
        for t in 0..12 {
            for (fixed, walked) in start.iter().zip(&stepped) {
                assert_eq!(
                    fixed.position_at(Tick(t), iw, ih),
                    walked.origin,
                    "tick {t}"
                );
            }
            stepped = super::helpers::step_naive(&stepped, iw, ih);
        }
    }

    #[test]
    fn origin_at_tick_zero() {
        let b = Blizzard::new(Cell::new(2, 1), Heading::Down);
        assert_eq!(b.position_at(Tick::ZERO, 5, 5), b.origin);
    }
}

// ── Occupancy table ───────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use rustc_hash::FxHashSet;

    use basin_core::{Cell, Tick};

    use crate::OccupancyTable;

    #[test]
    fn period_is_lcm_of_interior() {
        let field = super::helpers::canonical();
        let table = OccupancyTable::build(&field);
        // 6×4 interior → lcm = 12 (the product, 24, would also repeat).
        assert_eq!(table.period(), 12);

        let simple = super::helpers::simple();
        assert_eq!(OccupancyTable::build(&simple).period(), 5);
    }

    #[test]
    fn table_matches_naive_simulation_for_three_periods() {
        let field = super::helpers::canonical();
        let table = OccupancyTable::build(&field);
        let (iw, ih) = (field.inner_width(), field.inner_height());

        let mut blizzards = field.blizzards().to_vec();
        for t in 0..3 * table.period() {
            let naive: FxHashSet<Cell> = blizzards.iter().map(|b| b.origin).collect();
            assert_eq!(&naive, table.frame(Tick(t)), "tick {t}");
            blizzards = super::helpers::step_naive(&blizzards, iw, ih);
        }
    }

    #[test]
    fn lookup_folds_through_period() {
        let field = super::helpers::canonical();
        let table = OccupancyTable::build(&field);
        let period = table.period();

        for t in 0..period {
            assert_eq!(table.frame(Tick(t)), table.frame(Tick(t + 7 * period)));
        }
    }

    #[test]
    fn openings_are_never_occupied() {
        let field = super::helpers::canonical();
        let table = OccupancyTable::build(&field);

        for t in 0..table.period() {
            assert!(!table.occupied(Tick(t), field.entrance()));
            assert!(!table.occupied(Tick(t), field.exit()));
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod render {
    use basin_core::Tick;

    const SIMPLE_T1: &str = concat!(
        "#.#####\n",
        "#.....#\n",
        "#.>...#\n",
        "#.....#\n",
        "#.....#\n",
        "#...v.#\n",
        "#####.#\n",
    );
    const SIMPLE_T2: &str = concat!(
        "#.#####\n",
        "#...v.#\n",
        "#..>..#\n",
        "#.....#\n",
        "#.....#\n",
        "#.....#\n",
        "#####.#\n",
    );
    // At T3 both blizzards share a cell, rendered as their count.
    const SIMPLE_T3: &str = concat!(
        "#.#####\n",
        "#.....#\n",
        "#...2.#\n",
        "#.....#\n",
        "#.....#\n",
        "#.....#\n",
        "#####.#\n",
    );
    const SIMPLE_T4: &str = concat!(
        "#.#####\n",
        "#.....#\n",
        "#....>#\n",
        "#...v.#\n",
        "#.....#\n",
        "#.....#\n",
        "#####.#\n",
    );

    #[test]
    fn tick_zero_reproduces_the_input() {
        let field = super::helpers::simple();
        assert_eq!(field.render_at(Tick::ZERO), super::helpers::SIMPLE_T0);
    }

    #[test]
    fn frames_across_one_period() {
        let field = super::helpers::simple();
        assert_eq!(field.render_at(Tick(1)), SIMPLE_T1);
        assert_eq!(field.render_at(Tick(2)), SIMPLE_T2);
        assert_eq!(field.render_at(Tick(3)), SIMPLE_T3);
        assert_eq!(field.render_at(Tick(4)), SIMPLE_T4);
        // One full period later the field is back where it started.
        assert_eq!(field.render_at(Tick(5)), super::helpers::SIMPLE_T0);
    }
}
