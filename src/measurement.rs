//! Echo pulse classification and distance conversion.
//!
//! A pulse width is the time between the rising and falling edge of the echo
//! line. Anything shorter than [`MAX_PULSE_WIDTH_US`] is a valid reading; the rest
//! is carried through the queue as the [`MeasurementResult::OutOfRange`] sentinel.

use crate::config::{MAX_PULSE_WIDTH_US, SPEED_OF_SOUND_CM_PER_US};

/// Raw echo pulse width in microseconds.
pub type PulseWidth = u64;

/// One echo measurement, as queued from the edge handler to the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum MeasurementResult {
    /// Echo within range, with its pulse width in microseconds.
    Valid(PulseWidth),
    /// Echo too long to be inside the measurable range.
    OutOfRange,
}

impl MeasurementResult {
    /// Classify a pulse width against the range threshold.
    #[inline]
    pub const fn classify(width_us: PulseWidth) -> Self {
        if width_us < MAX_PULSE_WIDTH_US {
            Self::Valid(width_us)
        } else {
            Self::OutOfRange
        }
    }

    /// Distance in centimeters, or `None` for the out-of-range sentinel.
    #[inline]
    pub fn distance_cm(self) -> Option<f32> {
        match self {
            Self::Valid(width_us) => Some(distance_cm(width_us)),
            Self::OutOfRange => None,
        }
    }
}

/// Convert a round-trip pulse width to a one-way distance in centimeters.
#[inline]
pub fn distance_cm(width_us: PulseWidth) -> f32 {
    width_us as f32 * SPEED_OF_SOUND_CM_PER_US / 2.0
}

/// Pulse width the sensor reports for an object `distance` centimeters away.
#[inline]
pub fn pulse_width_us(distance: f32) -> PulseWidth {
    (distance * 2.0 / SPEED_OF_SOUND_CM_PER_US) as PulseWidth
}

// =============================================================================
// Unit Tests
// =============================================================================
