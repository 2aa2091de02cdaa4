//! Host-side fakes for the hardware traits the pipeline is generic over.

use core::cell::RefCell;
use core::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::render::Display;

// =============================================================================
// Output Pin
// =============================================================================

/// Level written to a [`RecordingPin`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PinEvent {
    High,
    Low,
}

/// Output pin that records every write. Clones share the record.
#[derive(Clone, Default)]
pub struct RecordingPin {
    events: Rc<RefCell<Vec<PinEvent>>>,
}

impl RecordingPin {
    pub fn new() -> Self { Self::default() }

    pub fn events(&self) -> Vec<PinEvent> { self.events.borrow().clone() }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.events.borrow_mut().push(PinEvent::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.events.borrow_mut().push(PinEvent::High);
        Ok(())
    }
}

// =============================================================================
// Delays
// =============================================================================

#[derive(Default)]
struct DelayLog {
    requests_ns: Vec<u64>,
    stall_after: Option<usize>,
}

/// Delay that completes immediately and records the requested durations.
///
/// With [`RecordingDelay::stalling_after`], calls past the given count are still
/// recorded but never complete.
#[derive(Clone, Default)]
pub struct RecordingDelay {
    log: Rc<RefCell<DelayLog>>,
}

impl RecordingDelay {
    pub fn new() -> Self { Self::default() }

    pub fn stalling_after(completed: usize) -> Self {
        let delay = Self::default();
        delay.log.borrow_mut().stall_after = Some(completed);
        delay
    }

    pub fn requests_ns(&self) -> Vec<u64> { self.log.borrow().requests_ns.clone() }

    async fn record(
        &mut self,
        ns: u64,
    ) {
        let stall = {
            let mut log = self.log.borrow_mut();
            log.requests_ns.push(ns);
            log.stall_after.is_some_and(|limit| log.requests_ns.len() > limit)
        };
        if stall {
            core::future::pending::<()>().await;
        }
    }
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.record(u64::from(ns)).await;
    }

    async fn delay_us(
        &mut self,
        us: u32,
    ) {
        self.record(u64::from(us) * 1_000).await;
    }

    async fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.record(u64::from(ms) * 1_000_000).await;
    }
}

/// Delay that never completes.
pub struct NeverDelay;

impl DelayNs for NeverDelay {
    async fn delay_ns(
        &mut self,
        _ns: u32,
    ) {
        core::future::pending::<()>().await;
    }
}

// =============================================================================
// Frame Buffer
// =============================================================================

const W: usize = DISPLAY_WIDTH as usize;
const H: usize = DISPLAY_HEIGHT as usize;

/// Error returned by a [`FrameBuffer`] built with [`FrameBuffer::failing`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CommitError;

/// In-memory 128x32 monochrome display.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FrameBuffer {
    pixels: [[bool; W]; H],
    shows: usize,
    fail_show: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: [[false; W]; H],
            shows: 0,
            fail_show: false,
        }
    }

    /// A display whose commit always fails.
    pub fn failing() -> Self { Self { fail_show: true, ..Self::new() } }

    pub fn is_on(
        &self,
        x: i32,
        y: i32,
    ) -> bool {
        self.pixels[y as usize][x as usize]
    }

    pub fn lit_in_row(
        &self,
        y: i32,
    ) -> usize {
        self.pixels[y as usize].iter().filter(|&&on| on).count()
    }

    pub fn lit_in_rows(
        &self,
        rows: core::ops::Range<i32>,
    ) -> usize {
        rows.map(|y| self.lit_in_row(y)).sum()
    }

    /// Number of successful commits.
    pub fn shows(&self) -> usize { self.shows }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size { Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT) }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = CommitError;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..W as i32).contains(&point.x) && (0..H as i32).contains(&point.y) {
                self.pixels[point.y as usize][point.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

impl Display for FrameBuffer {
    fn show(&mut self) -> Result<(), Self::Error> {
        if self.fail_show {
            return Err(CommitError);
        }
        self.shows += 1;
        Ok(())
    }
}
