//! Expedition observer trait for progress reporting.

use basin_core::Tick;

use crate::Leg;

/// Callbacks invoked by [`Expedition::run_with`][crate::Expedition::run_with]
/// at leg boundaries.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl ExpeditionObserver for ProgressPrinter {
///     fn on_leg_end(&mut self, index: usize, leg: &Leg, arrival: Tick) {
///         println!("leg {index}: {} → {} at {arrival}", leg.origin, leg.destination);
///     }
/// }
/// ```
pub trait ExpeditionObserver {
    /// Called before a leg's search starts, with its departure tick.
    fn on_leg_start(&mut self, _index: usize, _leg: &Leg, _departure: Tick) {}

    /// Called after a leg's search succeeds, with its arrival tick.
    fn on_leg_end(&mut self, _index: usize, _leg: &Leg, _arrival: Tick) {}

    /// Called once after the final leg completes.
    fn on_expedition_end(&mut self, _arrival: Tick) {}
}

/// An [`ExpeditionObserver`] that does nothing.  Use when you need to run
/// an itinerary but don't want progress callbacks.
pub struct NoopObserver;

impl ExpeditionObserver for NoopObserver {}
