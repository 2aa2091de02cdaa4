//! Periodic trigger pulse generation.
//!
//! Each cycle drives the trigger output high for [`TRIGGER_PULSE_US`], drives it
//! low, releases the [`CycleGate`] once, then sleeps for [`CYCLE_PERIOD_MS`].
//!
//! Pin writes are infallible at this layer: the output pin's error type must be
//! [`Infallible`], which embassy's `Output` satisfies.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::{CYCLE_PERIOD_MS, TRIGGER_PULSE_US};
use crate::stats::Stats;
use crate::sync::{CycleGate, GateRelease};

/// Summary of one completed trigger cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct TriggerCycle {
    /// Cycle number, starting at 1.
    pub count: u32,
    /// Whether the gate release posted a new token or merged into a pending one.
    pub gate: GateRelease,
}

/// Drives the sensor trigger line and paces the display through the cycle gate.
pub struct TriggerScheduler<'a, P, D> {
    trigger: P,
    delay: D,
    gate: &'a CycleGate,
    stats: &'a Stats,
    pulse_us: u32,
    period_ms: u32,
}

impl<'a, P, D> TriggerScheduler<'a, P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Create a scheduler with the configured timing. Drives the trigger low.
    pub fn new(
        mut trigger: P,
        delay: D,
        gate: &'a CycleGate,
        stats: &'a Stats,
    ) -> Self {
        let Ok(()) = trigger.set_low();
        Self {
            trigger,
            delay,
            gate,
            stats,
            pulse_us: TRIGGER_PULSE_US,
            period_ms: CYCLE_PERIOD_MS,
        }
    }

    /// Override the pulse width and inter-cycle period.
    #[must_use]
    pub fn with_timing(
        mut self,
        pulse_us: u32,
        period_ms: u32,
    ) -> Self {
        self.pulse_us = pulse_us;
        self.period_ms = period_ms;
        self
    }

    /// Run one trigger cycle: pulse, release the gate, wait out the period.
    pub async fn cycle(&mut self) -> TriggerCycle {
        let Ok(()) = self.trigger.set_high();
        self.delay.delay_us(self.pulse_us).await;
        let Ok(()) = self.trigger.set_low();

        let count = self.stats.record_cycle();
        let gate = self.gate.release();

        self.delay.delay_ms(self.period_ms).await;

        TriggerCycle { count, gate }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
