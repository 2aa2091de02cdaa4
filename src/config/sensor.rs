//! Sensor, timing and pipeline configuration.
//!
//! All values are compile-time constants. Two Cargo features change behavior:
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `trigger-pulse-10us` | Trigger held high for 10 us instead of 10 ms |
//! | `unbounded-echo-wait` | Renderer waits forever for an echo (no `No echo` timeout) |

// =============================================================================
// Distance Conversion
// =============================================================================

/// Maximum measurable distance in centimeters.
pub const MAX_DISTANCE_CM: u32 = 150;

/// Speed of sound in cm/us at ~20 °C.
pub const SPEED_OF_SOUND_CM_PER_US: f32 = 0.0343;

/// Echo round-trip time per centimeter of distance, in microseconds.
pub const ROUND_TRIP_US_PER_CM: u64 = 58;

/// Pulse widths at or above this value are classified as out of range.
pub const MAX_PULSE_WIDTH_US: u64 = MAX_DISTANCE_CM as u64 * ROUND_TRIP_US_PER_CM;

// =============================================================================
// Trigger Timing
// =============================================================================

/// How long the trigger output is held high, in microseconds.
///
/// The HC-SR04 datasheet asks for at least 10 us. The firmware has always held the
/// line for 10 ms and the sensor fires on the falling edge either way, so 10 ms
/// stays the default until `trigger-pulse-10us` is confirmed on hardware.
#[cfg(not(feature = "trigger-pulse-10us"))]
pub const TRIGGER_PULSE_US: u32 = 10_000;

/// How long the trigger output is held high, in microseconds (datasheet value).
#[cfg(feature = "trigger-pulse-10us")]
pub const TRIGGER_PULSE_US: u32 = 10;

/// Delay between the end of one trigger pulse and the start of the next.
pub const CYCLE_PERIOD_MS: u32 = 1000;

// =============================================================================
// Pipeline
// =============================================================================

/// Capacity of the measurement queue between the echo handler and the renderer.
pub const MEASUREMENT_QUEUE_DEPTH: usize = 10;

/// How long the renderer waits for an echo after acquiring the cycle gate.
///
/// A sensor with nothing in front of it still returns a ~38 ms pulse, so 100 ms
/// only expires when the echo line never toggles.
pub const ECHO_TIMEOUT_MS: u32 = 100;

/// Number of display frames between diagnostic counter summaries in the log.
pub const STATS_LOG_INTERVAL: u32 = 10;

/// Policy for the renderer's wait on the measurement queue.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum EchoWait {
    /// Block until a measurement arrives, however long that takes.
    /// A missed echo stalls the display until some later echo is captured.
    Unbounded,
    /// Give up after `ms` milliseconds and render a `No echo` frame.
    Timeout {
        /// Wait limit in milliseconds.
        ms: u32,
    },
}

/// Echo wait policy used by the firmware.
#[cfg(not(feature = "unbounded-echo-wait"))]
pub const ECHO_WAIT: EchoWait = EchoWait::Timeout { ms: ECHO_TIMEOUT_MS };

/// Echo wait policy used by the firmware.
#[cfg(feature = "unbounded-echo-wait")]
pub const ECHO_WAIT: EchoWait = EchoWait::Unbounded;
