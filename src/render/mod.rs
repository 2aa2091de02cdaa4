//! Distance readout rendering.
//!
//! This module provides:
//! - [`Reading`] - What one display update shows (distance, out of range, or no echo)
//! - [`Display`] - The commit hook the external display driver implements
//! - [`DisplayRenderer`] - The gate/queue/render loop body run by the display task
//! - [`draw_reading`] / [`draw_splash`] - Frame composition on any monochrome `DrawTarget`
//!
//! # Frame Layout (128x32)
//!
//! ```text
//! ┌────────────────────────────────┐
//! │Dist: 42.88 cm                  │  status line, top-left
//! │                                │
//! │━━━━━━━━━━                      │  bar at y = 22, length ∝ distance
//! └────────────────────────────────┘
//! ```
//!
//! Error readings (`Out of range`, `No echo`) draw the status line only.

mod frame;
mod renderer;
mod styles;

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use heapless::String;

pub use frame::{draw_reading, draw_splash};
pub use renderer::{DisplayRenderer, RenderStage};

use crate::config::{DISPLAY_WIDTH, MAX_DISTANCE_CM, STATUS_TEXT_LEN};
use crate::measurement::MeasurementResult;

/// Status line for readings beyond the measurable range.
pub const OUT_OF_RANGE_TEXT: &str = "Out of range";

/// Status line for cycles where no echo arrived in time.
pub const NO_ECHO_TEXT: &str = "No echo";

/// Monochrome display that buffers drawing until [`Display::show`] is called.
///
/// Implemented by the firmware's SSD1306 wrapper; the pixel buffer and bus
/// transfer stay inside the driver.
pub trait Display: DrawTarget<Color = BinaryColor> {
    /// Commit the buffered frame to the panel.
    fn show(&mut self) -> Result<(), Self::Error>;
}

/// Value shown by one display update.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Reading {
    /// Echo within range.
    Distance {
        /// One-way distance in centimeters.
        cm: f32,
    },
    /// Echo captured but beyond the measurable range.
    OutOfRange,
    /// No echo arrived before the wait limit.
    MissingEcho,
}

impl Reading {
    /// Convert a queued measurement into a reading.
    #[inline]
    pub fn from_measurement(result: MeasurementResult) -> Self {
        match result.distance_cm() {
            Some(cm) => Self::Distance { cm },
            None => Self::OutOfRange,
        }
    }

    /// Format the status line.
    pub fn status_text(&self) -> String<STATUS_TEXT_LEN> {
        let mut text = String::new();
        match self {
            // Fits: the longest in-range value is "Dist: 149.19 cm"
            Self::Distance { cm } => write!(text, "Dist: {cm:.2} cm").ok(),
            Self::OutOfRange => text.push_str(OUT_OF_RANGE_TEXT).ok(),
            Self::MissingEcho => text.push_str(NO_ECHO_TEXT).ok(),
        };
        text
    }

    /// Length of the distance bar in pixels, `None` when no bar is drawn.
    ///
    /// Proportional to `cm / MAX_DISTANCE_CM` across the display width.
    pub fn bar_length(&self) -> Option<u32> {
        match self {
            Self::Distance { cm } => {
                let len = (cm / MAX_DISTANCE_CM as f32) * DISPLAY_WIDTH as f32;
                Some((len.max(0.0) as u32).min(DISPLAY_WIDTH))
            }
            Self::OutOfRange | Self::MissingEcho => None,
        }
    }

    /// Check if this reading is an error state.
    #[inline]
    pub const fn is_error(&self) -> bool { !matches!(self, Self::Distance { .. }) }
}

// =============================================================================
// Unit Tests
// =============================================================================
