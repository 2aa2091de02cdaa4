//! Display task body: gate, measurement, render.
//!
//! [`DisplayRenderer::step`] runs one pass of the state machine
//!
//! ```text
//! WaitGate ──gate acquired──▶ WaitMeasurement ──reading──▶ Render ──▶ WaitGate
//! ```
//!
//! The gate wait is unbounded. The measurement wait follows [`EchoWait`]: either
//! unbounded (a missed echo stalls the display) or limited, in which case the
//! cycle renders [`Reading::MissingEcho`].
//!
//! # Ordering
//!
//! The gate and the queue are fed by independent contexts. After each gate the
//! renderer takes the OLDEST queued measurement, so an echo that lands after its
//! cycle's gate was consumed (or after its wait timed out) is shown on a later
//! cycle. Stale entries are not discarded.

use embassy_futures::select::{Either, select};
use embedded_hal_async::delay::DelayNs;

use super::{Display, Reading, draw_reading};
use crate::config::{ECHO_WAIT, EchoWait, MEASUREMENT_QUEUE_DEPTH};
use crate::stats::Stats;
use crate::sync::{CycleGate, MeasurementReceiver};

/// Where the renderer is in its cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum RenderStage {
    /// Waiting for the trigger task to release the cycle gate.
    #[default]
    WaitGate,
    /// Gate consumed; waiting for a measurement.
    WaitMeasurement,
    /// Reading in hand; drawing and committing the frame.
    Render,
}

/// Consumer side of the pipeline, owned by the display task.
pub struct DisplayRenderer<'a, D, T, const N: usize = MEASUREMENT_QUEUE_DEPTH> {
    display: D,
    delay: T,
    gate: &'a CycleGate,
    receiver: MeasurementReceiver<'a, N>,
    stats: &'a Stats,
    echo_wait: EchoWait,
    stage: RenderStage,
}

impl<'a, D, T, const N: usize> DisplayRenderer<'a, D, T, N>
where
    D: Display,
    T: DelayNs,
{
    /// Create a renderer using the configured [`ECHO_WAIT`] policy.
    pub fn new(
        display: D,
        delay: T,
        gate: &'a CycleGate,
        receiver: MeasurementReceiver<'a, N>,
        stats: &'a Stats,
    ) -> Self {
        Self {
            display,
            delay,
            gate,
            receiver,
            stats,
            echo_wait: ECHO_WAIT,
            stage: RenderStage::WaitGate,
        }
    }

    /// Override the echo wait policy.
    #[must_use]
    pub fn with_echo_wait(
        mut self,
        echo_wait: EchoWait,
    ) -> Self {
        self.echo_wait = echo_wait;
        self
    }

    /// Current state machine stage.
    #[inline]
    pub const fn stage(&self) -> RenderStage { self.stage }

    /// Active echo wait policy.
    #[inline]
    pub const fn echo_wait(&self) -> EchoWait { self.echo_wait }

    /// The owned display, for inspection.
    #[inline]
    pub const fn display(&self) -> &D { &self.display }

    /// Wait for the next cycle gate, then for a measurement (or the echo timeout).
    pub async fn next_reading(&mut self) -> Reading {
        self.stage = RenderStage::WaitGate;
        self.gate.acquire().await;

        self.stage = RenderStage::WaitMeasurement;
        let reading = match self.echo_wait {
            EchoWait::Unbounded => Reading::from_measurement(self.receiver.receive().await),
            EchoWait::Timeout { ms } => match select(self.receiver.receive(), self.delay.delay_ms(ms)).await {
                Either::First(result) => Reading::from_measurement(result),
                Either::Second(()) => {
                    self.stats.record_echo_timeout();
                    Reading::MissingEcho
                }
            },
        };

        self.stage = RenderStage::Render;
        reading
    }

    /// Draw `reading` and commit it. Fire-and-forget: a failed frame is counted,
    /// returned, and not retried.
    pub fn render(
        &mut self,
        reading: &Reading,
    ) -> Result<(), D::Error> {
        self.stage = RenderStage::Render;
        let result = draw_reading(&mut self.display, reading).and_then(|()| self.display.show());
        match result {
            Ok(()) => self.stats.record_render(),
            Err(_) => self.stats.record_render_error(),
        }
        self.stage = RenderStage::WaitGate;
        result
    }

    /// One full pass: gate, measurement, render.
    pub async fn step(&mut self) -> Result<Reading, D::Error> {
        let reading = self.next_reading().await;
        self.render(&reading)?;
        Ok(reading)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
