//! Display task: one rendered frame per cycle gate.
//!
//! A failed frame is logged and dropped; the next cycle draws a fresh one.

use defmt::{Debug2Format, debug, error, info, warn};
use embassy_time::Delay;
use rangefinder::config::STATS_LOG_INTERVAL;
use rangefinder::{DisplayRenderer, Rangefinder, Reading};

use crate::oled::Oled;

#[embassy_executor::task]
pub async fn display_task(
    mut renderer: DisplayRenderer<'static, Oled, Delay>,
    rangefinder: &'static Rangefinder,
) {
    info!("Display task started (echo wait: {})", renderer.echo_wait());

    loop {
        match renderer.step().await {
            Ok(Reading::MissingEcho) => warn!("No echo ({})", renderer.echo_wait()),
            Ok(reading) => debug!("Rendered {}", reading),
            Err(e) => error!("Display commit failed: {}", Debug2Format(&e)),
        }

        let stats = rangefinder.snapshot();
        let frames = stats.renders.wrapping_add(stats.render_errors);
        if frames % STATS_LOG_INTERVAL == 0 {
            info!("Stats: {}", stats);
        }
    }
}
