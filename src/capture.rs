//! Echo pulse capture for the interrupt-context edge handler.
//!
//! [`EdgeCapture::on_edge`] is called once per edge of the echo line with a
//! microsecond timestamp. A rising edge stores the timestamp; a falling edge turns
//! the elapsed time into a [`MeasurementResult`] and queues it through an
//! [`IsrSender`], which drops the result rather than wait when the queue is full.
//!
//! # Boundaries
//!
//! - The start timestamp begins at 0, so a falling edge before any rising edge
//!   measures from boot.
//! - The start timestamp is not cleared by a falling edge. A second falling edge
//!   without a new rising edge measures from the same start.

use crate::config::MEASUREMENT_QUEUE_DEPTH;
use crate::measurement::{MeasurementResult, PulseWidth};
use crate::stats::Stats;
use crate::sync::{IsrSender, SendOutcome};

/// Direction of a transition on the echo line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Edge {
    /// Low to high: echo pulse started.
    Rising,
    /// High to low: echo pulse ended.
    Falling,
}

impl Edge {
    /// Edge that produced the current line level.
    #[inline]
    pub const fn from_level(is_high: bool) -> Self {
        if is_high { Self::Rising } else { Self::Falling }
    }
}

/// A measurement produced by a falling edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Captured {
    /// Classified pulse width.
    pub result: MeasurementResult,
    /// Whether the queue accepted it.
    pub outcome: SendOutcome,
}

/// Echo pulse width capture state, owned by the edge handler.
pub struct EdgeCapture<'a, const N: usize = MEASUREMENT_QUEUE_DEPTH> {
    start_us: u64,
    sender: IsrSender<'a, N>,
    stats: &'a Stats,
}

impl<'a, const N: usize> EdgeCapture<'a, N> {
    /// Create a capture that queues results through `sender`.
    pub const fn new(
        sender: IsrSender<'a, N>,
        stats: &'a Stats,
    ) -> Self {
        Self {
            start_us: 0,
            sender,
            stats,
        }
    }

    /// Handle one edge observed at `now_us` microseconds since boot.
    ///
    /// Returns the queued measurement for falling edges, `None` for rising edges.
    /// Never blocks.
    pub fn on_edge(
        &mut self,
        edge: Edge,
        now_us: u64,
    ) -> Option<Captured> {
        match edge {
            Edge::Rising => {
                self.start_us = now_us;
                None
            }
            Edge::Falling => {
                let width: PulseWidth = now_us.saturating_sub(self.start_us);
                let result = MeasurementResult::classify(width);
                self.stats
                    .record_echo(matches!(result, MeasurementResult::OutOfRange));
                let outcome = self.sender.send_or_drop(result);
                Some(Captured { result, outcome })
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::MeasurementChannel;

    #[test]
    fn test_edge_from_level() {
        assert_eq!(Edge::from_level(true), Edge::Rising);
        assert_eq!(Edge::from_level(false), Edge::Falling);
    }

    #[test]
    fn test_rising_edge_queues_nothing() {
        let channel = MeasurementChannel::<4>::new();
        let stats = Stats::new();
        let mut capture = EdgeCapture::new(channel.isr_sender(), &stats);

        assert!(capture.on_edge(Edge::Rising, 1000).is_none());
        assert!(channel.is_empty());
        assert_eq!(stats.snapshot(0).echoes, 0);
    }

    #[test]
    fn test_valid_pulse() {
        let channel = MeasurementChannel::<4>::new();
        let stats = Stats::new();
        let mut capture = EdgeCapture::new(channel.isr_sender(), &stats);

        capture.on_edge(Edge::Rising, 1000);
        let captured = capture.on_edge(Edge::Falling, 3500).unwrap();

        assert_eq!(captured.result, MeasurementResult::Valid(2500));
        assert_eq!(captured.outcome, SendOutcome::Sent);
        assert_eq!(channel.receiver().try_receive(), Some(MeasurementResult::Valid(2500)));

        let distance = captured.result.distance_cm().unwrap();
        assert!((distance - 42.875).abs() < 0.01);
    }

    #[test]
    fn test_long_pulse_is_out_of_range() {
        let channel = MeasurementChannel::<4>::new();
        let stats = Stats::new();
        let mut capture = EdgeCapture::new(channel.isr_sender(), &stats);

        capture.on_edge(Edge::Rising, 0);
        let captured = capture.on_edge(Edge::Falling, 9_000_000).unwrap();

        assert_eq!(captured.result, MeasurementResult::OutOfRange);
        assert_eq!(channel.receiver().try_receive(), Some(MeasurementResult::OutOfRange));

        let snap = stats.snapshot(0);
        assert_eq!(snap.echoes, 1);
        assert_eq!(snap.out_of_range, 1);
    }

    #[test]
    fn test_falling_edge_without_rising_measures_from_boot() {
        let channel = MeasurementChannel::<4>::new();
        let stats = Stats::new();
        let mut capture = EdgeCapture::new(channel.isr_sender(), &stats);

        let captured = capture.on_edge(Edge::Falling, 4000).unwrap();
        assert_eq!(captured.result, MeasurementResult::Valid(4000));
    }

    #[test]
    fn test_second_falling_edge_reuses_start() {
        let channel = MeasurementChannel::<4>::new();
        let stats = Stats::new();
        let mut capture = EdgeCapture::new(channel.isr_sender(), &stats);

        capture.on_edge(Edge::Rising, 10_000);
        capture.on_edge(Edge::Falling, 11_000);
        let captured = capture.on_edge(Edge::Falling, 12_000).unwrap();
        assert_eq!(captured.result, MeasurementResult::Valid(2000));
    }

    #[test]
    fn test_repeated_rising_edge_restarts_pulse() {
        let channel = MeasurementChannel::<4>::new();
        let stats = Stats::new();
        let mut capture = EdgeCapture::new(channel.isr_sender(), &stats);

        capture.on_edge(Edge::Rising, 1_000);
        capture.on_edge(Edge::Rising, 5_000);
        let captured = capture.on_edge(Edge::Falling, 5_600).unwrap();
        assert_eq!(captured.result, MeasurementResult::Valid(600));
    }

    #[test]
    fn test_full_queue_drops_without_blocking() {
        let channel = MeasurementChannel::<1>::new();
        let stats = Stats::new();
        let mut capture = EdgeCapture::new(channel.isr_sender(), &stats);

        capture.on_edge(Edge::Rising, 0);
        assert_eq!(capture.on_edge(Edge::Falling, 100).unwrap().outcome, SendOutcome::Sent);
        capture.on_edge(Edge::Rising, 1_000);
        assert_eq!(capture.on_edge(Edge::Falling, 1_200).unwrap().outcome, SendOutcome::Dropped);

        assert_eq!(channel.dropped(), 1);
        // The queued (older) measurement survives
        assert_eq!(channel.receiver().try_receive(), Some(MeasurementResult::Valid(100)));
        // Dropped echoes were still captured
        assert_eq!(stats.snapshot(channel.dropped()).echoes, 2);
    }
}
