//! Bounded FIFO carrying measurements from the echo handler to the renderer.
//!
//! The queue is split into two capabilities:
//! - [`IsrSender`]: only [`IsrSender::send_or_drop`], which never waits. This is the
//!   only handle given to interrupt-context code.
//! - [`MeasurementReceiver`]: the blocking, task-side receive.
//!
//! When the queue is full the NEWEST measurement is dropped and counted; queued
//! entries are never evicted.

use core::sync::atomic::{AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::config::MEASUREMENT_QUEUE_DEPTH;
use crate::measurement::MeasurementResult;

/// Result of a non-blocking enqueue.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum SendOutcome {
    /// Measurement queued.
    Sent,
    /// Queue was full; the measurement was discarded.
    Dropped,
}

/// Bounded measurement queue shared between the echo handler and the renderer.
pub struct MeasurementChannel<const N: usize = MEASUREMENT_QUEUE_DEPTH> {
    queue: Channel<CriticalSectionRawMutex, MeasurementResult, N>,
    dropped: AtomicU32,
}

impl<const N: usize> MeasurementChannel<N> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            queue: Channel::new(),
            dropped: AtomicU32::new(0),
        }
    }

    /// Non-blocking producer handle for interrupt-context code.
    #[inline]
    pub const fn isr_sender(&self) -> IsrSender<'_, N> { IsrSender { channel: self } }

    /// Blocking consumer handle for the renderer task.
    #[inline]
    pub const fn receiver(&self) -> MeasurementReceiver<'_, N> { MeasurementReceiver { channel: self } }

    /// Number of queued measurements.
    #[inline]
    pub fn len(&self) -> usize { self.queue.len() }

    /// Check if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.queue.is_empty() }

    /// Total measurements discarded because the queue was full.
    #[inline]
    pub fn dropped(&self) -> u32 { self.dropped.load(Ordering::Relaxed) }
}

impl<const N: usize> Default for MeasurementChannel<N> {
    fn default() -> Self { Self::new() }
}

/// Send-only handle that can never block.
#[derive(Clone, Copy)]
pub struct IsrSender<'a, const N: usize = MEASUREMENT_QUEUE_DEPTH> {
    channel: &'a MeasurementChannel<N>,
}

impl<const N: usize> IsrSender<'_, N> {
    /// Queue a measurement, or discard it if the queue is full.
    pub fn send_or_drop(
        &self,
        result: MeasurementResult,
    ) -> SendOutcome {
        match self.channel.queue.try_send(result) {
            Ok(()) => SendOutcome::Sent,
            Err(_) => {
                self.channel.dropped.fetch_add(1, Ordering::Relaxed);
                SendOutcome::Dropped
            }
        }
    }
}

/// Receive-side handle for the renderer task.
#[derive(Clone, Copy)]
pub struct MeasurementReceiver<'a, const N: usize = MEASUREMENT_QUEUE_DEPTH> {
    channel: &'a MeasurementChannel<N>,
}

impl<const N: usize> MeasurementReceiver<'_, N> {
    /// Wait for the oldest queued measurement.
    pub async fn receive(&self) -> MeasurementResult { self.channel.queue.receive().await }

    /// Take the oldest queued measurement if there is one.
    pub fn try_receive(&self) -> Option<MeasurementResult> { self.channel.queue.try_receive().ok() }
}

// =============================================================================
// Unit Tests
// =============================================================================
