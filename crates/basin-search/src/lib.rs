//! `basin-search` — time-expanded shortest paths and itineraries.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`pathfinder`] | `Pathfinder` trait, `BfsPathfinder` default         |
//! | [`itinerary`]  | `Leg`, `Expedition`, `there_and_back_again`         |
//! | [`observer`]   | `ExpeditionObserver`, `NoopObserver`                |
//! | [`error`]      | `SearchError`, `SearchResult<T>`                    |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | [`Expedition::run_batch`] on Rayon's thread pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use basin_field::{OccupancyTable, parse_field};
//! use basin_search::{BfsPathfinder, Expedition, there_and_back_again};
//!
//! let field = parse_field(&grid)?;
//! let table = OccupancyTable::build(&field);
//! let expedition = Expedition::new(&field, &table, BfsPathfinder);
//! let total = expedition.total_ticks(&there_and_back_again(&field))?;
//! ```

pub mod error;
pub mod itinerary;
pub mod observer;
pub mod pathfinder;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SearchError, SearchResult};
pub use itinerary::{Expedition, Leg, there_and_back_again};
pub use observer::{ExpeditionObserver, NoopObserver};
pub use pathfinder::{BfsPathfinder, Pathfinder};
