//! Diagnostic counters shared by all execution contexts.
//!
//! Every counter is a relaxed `AtomicU32`: producers only increment, readers take a
//! [`StatsSnapshot`] for logging. Nothing in the pipeline makes decisions from them.

use core::sync::atomic::{AtomicU32, Ordering};

/// Atomic pipeline counters.
pub struct Stats {
    cycles: AtomicU32,
    echoes: AtomicU32,
    out_of_range: AtomicU32,
    echo_timeouts: AtomicU32,
    renders: AtomicU32,
    render_errors: AtomicU32,
}

/// Point-in-time copy of the pipeline counters.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct StatsSnapshot {
    /// Trigger pulses fired.
    pub cycles: u32,
    /// Falling edges captured (valid or out of range).
    pub echoes: u32,
    /// Captured echoes classified as out of range.
    pub out_of_range: u32,
    /// Measurements discarded because the queue was full.
    pub dropped: u32,
    /// Render cycles that gave up waiting for an echo.
    pub echo_timeouts: u32,
    /// Frames committed to the display.
    pub renders: u32,
    /// Frames the display driver rejected.
    pub render_errors: u32,
}

impl Stats {
    /// Create a zeroed counter set.
    pub const fn new() -> Self {
        Self {
            cycles: AtomicU32::new(0),
            echoes: AtomicU32::new(0),
            out_of_range: AtomicU32::new(0),
            echo_timeouts: AtomicU32::new(0),
            renders: AtomicU32::new(0),
            render_errors: AtomicU32::new(0),
        }
    }

    /// Count a trigger pulse. Returns the new total.
    #[inline]
    pub fn record_cycle(&self) -> u32 { self.cycles.fetch_add(1, Ordering::Relaxed).wrapping_add(1) }

    /// Count a captured echo.
    #[inline]
    pub fn record_echo(
        &self,
        out_of_range: bool,
    ) {
        self.echoes.fetch_add(1, Ordering::Relaxed);
        if out_of_range {
            self.out_of_range.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Count a render cycle that timed out waiting for an echo.
    #[inline]
    pub fn record_echo_timeout(&self) { self.echo_timeouts.fetch_add(1, Ordering::Relaxed); }

    /// Count a committed frame.
    #[inline]
    pub fn record_render(&self) { self.renders.fetch_add(1, Ordering::Relaxed); }

    /// Count a frame the display rejected.
    #[inline]
    pub fn record_render_error(&self) { self.render_errors.fetch_add(1, Ordering::Relaxed); }

    /// Copy the counters. `dropped` lives on the queue and is passed in.
    pub fn snapshot(
        &self,
        dropped: u32,
    ) -> StatsSnapshot {
        StatsSnapshot {
            cycles: self.cycles.load(Ordering::Relaxed),
            echoes: self.echoes.load(Ordering::Relaxed),
            out_of_range: self.out_of_range.load(Ordering::Relaxed),
            dropped,
            echo_timeouts: self.echo_timeouts.load(Ordering::Relaxed),
            renders: self.renders.load(Ordering::Relaxed),
            render_errors: self.render_errors.load(Ordering::Relaxed),
        }
    }
}

impl Default for Stats {
    fn default() -> Self { Self::new() }
}
