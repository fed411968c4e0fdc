//! expedition — demo run of the basin pathfinding engine.
//!
//! Parses a grid (the embedded example field, or a file passed as the
//! first argument), materializes one period of blizzard occupancy, and
//! runs the classic three-leg itinerary, printing each leg as it lands.
//!
//! ```text
//! cargo run -p expedition            # embedded 6x4-interior example
//! cargo run -p expedition -- my.txt  # grid from disk
//! ```

use std::env;
use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};

use basin_core::Tick;
use basin_field::{Field, OccupancyTable, parse_field};
use basin_search::{BfsPathfinder, Expedition, ExpeditionObserver, Leg, there_and_back_again};

// ── Embedded example field ────────────────────────────────────────────────────

const EXAMPLE: &str = concat!(
    "#.######\n",
    "#>>.<^<#\n",
    "#.<..<<#\n",
    "#>v.><>#\n",
    "#<^v^^>#\n",
    "######.#\n",
);

// ── Progress printer ──────────────────────────────────────────────────────────

struct ProgressPrinter;

impl ExpeditionObserver for ProgressPrinter {
    fn on_leg_start(&mut self, index: usize, leg: &Leg, departure: Tick) {
        println!(
            "leg {index}: {} -> {}, departing {departure}",
            leg.origin, leg.destination
        );
    }

    fn on_leg_end(&mut self, _index: usize, _leg: &Leg, arrival: Tick) {
        println!("  arrived {arrival}");
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let field: Field = match env::args().nth(1) {
        Some(path) => {
            let grid =
                fs::read_to_string(&path).with_context(|| format!("reading grid {path:?}"))?;
            parse_field(&grid).with_context(|| format!("parsing grid {path:?}"))?
        }
        None => parse_field(EXAMPLE).context("parsing the embedded example grid")?,
    };

    println!(
        "field: {}x{} ({}x{} interior), {} blizzards",
        field.width(),
        field.height(),
        field.inner_width(),
        field.inner_height(),
        field.blizzards().len()
    );
    print!("{}", field.render_at(Tick::ZERO));

    let build_start = Instant::now();
    let table = OccupancyTable::build(&field);
    println!(
        "occupancy table: period {}, built in {:.2?}",
        table.period(),
        build_start.elapsed()
    );

    let expedition = Expedition::new(&field, &table, BfsPathfinder);
    let legs = there_and_back_again(&field);
    let arrival = expedition.run_with(&legs, Tick::ZERO, &mut ProgressPrinter)?;

    println!("total: {} ticks", arrival.since(Tick::ZERO));
    Ok(())
}
