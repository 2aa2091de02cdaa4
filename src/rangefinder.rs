//! Composition root for the measurement pipeline.
//!
//! [`Rangefinder`] owns everything the execution contexts share: the measurement
//! queue, the cycle gate and the diagnostic counters. The firmware keeps one in a
//! `static` and hands each task the component it needs:
//!
//! | Context | Component | Shared state it can touch |
//! |---------|-----------|---------------------------|
//! | Echo edge handler (interrupt executor) | [`EdgeCapture`] | queue send-or-drop, counters |
//! | Trigger task | [`TriggerScheduler`] | gate release, counters |
//! | Display task | [`DisplayRenderer`] | gate acquire, queue receive, counters |

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::capture::EdgeCapture;
use crate::config::MEASUREMENT_QUEUE_DEPTH;
use crate::render::{Display, DisplayRenderer};
use crate::stats::{Stats, StatsSnapshot};
use crate::sync::{CycleGate, MeasurementChannel};
use crate::trigger::TriggerScheduler;

/// Shared state of one sensor/display pair.
pub struct Rangefinder<const N: usize = MEASUREMENT_QUEUE_DEPTH> {
    channel: MeasurementChannel<N>,
    gate: CycleGate,
    stats: Stats,
}

impl<const N: usize> Rangefinder<N> {
    /// Create an idle pipeline: empty queue, closed gate, zeroed counters.
    pub const fn new() -> Self {
        Self {
            channel: MeasurementChannel::new(),
            gate: CycleGate::new(),
            stats: Stats::new(),
        }
    }

    /// Capture state for the echo edge handler.
    pub const fn edge_capture(&self) -> EdgeCapture<'_, N> { EdgeCapture::new(self.channel.isr_sender(), &self.stats) }

    /// Trigger scheduler driving `trigger` and pacing with `delay`.
    pub fn trigger_scheduler<P, D>(
        &self,
        trigger: P,
        delay: D,
    ) -> TriggerScheduler<'_, P, D>
    where
        P: OutputPin<Error = Infallible>,
        D: DelayNs,
    {
        TriggerScheduler::new(trigger, delay, &self.gate, &self.stats)
    }

    /// Renderer drawing to `display`, using `delay` for the echo timeout.
    pub fn display_renderer<D, T>(
        &self,
        display: D,
        delay: T,
    ) -> DisplayRenderer<'_, D, T, N>
    where
        D: Display,
        T: DelayNs,
    {
        DisplayRenderer::new(display, delay, &self.gate, self.channel.receiver(), &self.stats)
    }

    /// Measurement queue.
    #[inline]
    pub const fn channel(&self) -> &MeasurementChannel<N> { &self.channel }

    /// Cycle gate.
    #[inline]
    pub const fn gate(&self) -> &CycleGate { &self.gate }

    /// Copy of all diagnostic counters.
    pub fn snapshot(&self) -> StatsSnapshot { self.stats.snapshot(self.channel.dropped()) }
}

impl<const N: usize> Default for Rangefinder<N> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Pipeline Scenarios
// =============================================================================
