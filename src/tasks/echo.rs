//! Echo edge capture task.
//!
//! Spawned on the high-priority interrupt executor, so each edge is handled in
//! interrupt context ahead of the trigger and display tasks. The loop never logs:
//! results go to the queue with [`IsrSender::send_or_drop`](rangefinder::IsrSender)
//! and everything else is an atomic counter.

use embassy_rp::gpio::Input;
use embassy_time::Instant;
use rangefinder::{Edge, EdgeCapture};

#[embassy_executor::task]
pub async fn echo_task(
    mut echo: Input<'static>,
    mut capture: EdgeCapture<'static>,
) {
    loop {
        echo.wait_for_any_edge().await;
        let now_us = Instant::now().as_micros();
        capture.on_edge(Edge::from_level(echo.is_high()), now_us);
    }
}
