//! Frame composition for the readout and the boot splash.
//!
//! Both functions draw into the display's buffer only; committing the frame is
//! the caller's job ([`Display::show`](super::Display::show)).

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Line;
use embedded_graphics::text::Text;
use heapless::String;

use super::Reading;
use super::styles::{BAR_STYLE, STATUS_STYLE, TITLE_STYLE, TOP_LEFT};
use crate::config::{BAR_Y, MAX_DISTANCE_CM, STATUS_ORIGIN, STATUS_TEXT_LEN};

/// Splash title.
const SPLASH_TITLE: &str = "RANGEFINDER";

/// Top edge of the splash subtitle.
const SPLASH_SUBTITLE_Y: i32 = 18;

/// Clear the buffer and draw one reading: status line, then the bar if any.
pub fn draw_reading<D>(
    display: &mut D,
    reading: &Reading,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off)?;

    let text = reading.status_text();
    let origin = Point::new(STATUS_ORIGIN.0, STATUS_ORIGIN.1);
    Text::with_text_style(&text, origin, STATUS_STYLE, TOP_LEFT).draw(display)?;

    if let Some(len) = reading.bar_length() {
        Line::new(Point::new(0, BAR_Y), Point::new(len as i32, BAR_Y))
            .into_styled(BAR_STYLE)
            .draw(display)?;
    }

    Ok(())
}

/// Clear the buffer and draw the boot splash (title and configured range).
pub fn draw_splash<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off)?;

    Text::with_text_style(SPLASH_TITLE, Point::zero(), TITLE_STYLE, TOP_LEFT).draw(display)?;

    let mut subtitle: String<STATUS_TEXT_LEN> = String::new();
    write!(subtitle, "max {MAX_DISTANCE_CM} cm").ok();
    Text::with_text_style(&subtitle, Point::new(0, SPLASH_SUBTITLE_Y), STATUS_STYLE, TOP_LEFT).draw(display)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
    use crate::test_support::FrameBuffer;

    #[test]
    fn test_distance_frame_has_text_and_bar() {
        let mut fb = FrameBuffer::new();
        draw_reading(&mut fb, &Reading::Distance { cm: 75.0 }).unwrap();

        assert!(fb.lit_in_rows(0..12) > 0, "status line missing");
        // Line endpoints are inclusive: x = 0..=64
        assert_eq!(fb.lit_in_row(BAR_Y), 65);
        assert!(fb.is_on(0, BAR_Y));
        assert!(fb.is_on(64, BAR_Y));
        assert!(!fb.is_on(65, BAR_Y));
    }

    #[test]
    fn test_error_frame_has_no_bar() {
        for reading in [Reading::OutOfRange, Reading::MissingEcho] {
            let mut fb = FrameBuffer::new();
            draw_reading(&mut fb, &reading).unwrap();

            assert!(fb.lit_in_rows(0..12) > 0, "status line missing for {reading:?}");
            assert_eq!(fb.lit_in_rows(BAR_Y..DISPLAY_HEIGHT as i32), 0);
        }
    }

    #[test]
    fn test_error_frames_differ() {
        let mut out_of_range = FrameBuffer::new();
        let mut no_echo = FrameBuffer::new();
        draw_reading(&mut out_of_range, &Reading::OutOfRange).unwrap();
        draw_reading(&mut no_echo, &Reading::MissingEcho).unwrap();
        assert_ne!(out_of_range, no_echo);
    }

    #[test]
    fn test_frame_is_cleared_between_readings() {
        let mut fb = FrameBuffer::new();
        draw_reading(&mut fb, &Reading::Distance { cm: 140.0 }).unwrap();
        assert!(fb.lit_in_row(BAR_Y) > 0);

        draw_reading(&mut fb, &Reading::OutOfRange).unwrap();
        assert_eq!(fb.lit_in_row(BAR_Y), 0);
    }

    #[test]
    fn test_drawing_does_not_commit() {
        let mut fb = FrameBuffer::new();
        draw_reading(&mut fb, &Reading::OutOfRange).unwrap();
        assert_eq!(fb.shows(), 0);
    }

    #[test]
    fn test_splash() {
        let mut fb = FrameBuffer::new();
        draw_reading(&mut fb, &Reading::Distance { cm: 140.0 }).unwrap();
        draw_splash(&mut fb).unwrap();

        assert!(fb.lit_in_rows(0..SPLASH_SUBTITLE_Y) > 0);
        assert!(fb.lit_in_rows(SPLASH_SUBTITLE_Y..DISPLAY_HEIGHT as i32) > 0);
        // Splash replaces the previous bar
        assert!(fb.lit_in_row(BAR_Y) < DISPLAY_WIDTH as usize / 2);
    }
}
