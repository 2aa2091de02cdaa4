//! Trigger task: one sensor pulse and one gate release per cycle.

use defmt::{debug, info};
use embassy_rp::gpio::Output;
use embassy_time::Delay;
use rangefinder::TriggerScheduler;
use rangefinder::config::{CYCLE_PERIOD_MS, TRIGGER_PULSE_US};

#[embassy_executor::task]
pub async fn trigger_task(mut scheduler: TriggerScheduler<'static, Output<'static>, Delay>) {
    info!("Trigger task started (pulse {} us, period {} ms)", TRIGGER_PULSE_US, CYCLE_PERIOD_MS);

    loop {
        let cycle = scheduler.cycle().await;
        debug!("Cycle {}: gate {}", cycle.count, cycle.gate);
    }
}
