//! HC-SR04 Rangefinder Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Measures distance with an HC-SR04 ultrasonic sensor once per second and shows
//! it on an SSD1306 128x32 OLED as text plus a proportional bar.
//!
//! # Architecture
//!
//! Three tasks share one static [`Rangefinder`]:
//! - Echo task (interrupt executor, highest priority): timestamps echo edges and
//!   queues pulse widths without ever blocking
//! - Trigger task: pulses the sensor, releases the cycle gate, sleeps one period
//! - Display task: waits for the gate, takes the oldest measurement, renders it
//!
//! # Wiring
//!
//! - TRIG: GPIO12
//! - ECHO: GPIO13 (through a 5V to 3.3V divider)
//! - OLED SDA: GPIO14, SCL: GPIO15 (I2C1, address 0x3C)

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

mod oled;
mod tasks;

use defmt::{error, info};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::{Delay, Timer};
use rangefinder::config::{MAX_DISTANCE_CM, MEASUREMENT_QUEUE_DEPTH};
use rangefinder::render::draw_splash;
use rangefinder::{Display, Rangefinder};
use {defmt_rtt as _, panic_probe as _};

use crate::oled::{I2C_FREQUENCY_HZ, Oled, oled_i2c_config};
use crate::tasks::{display_task, echo_task, trigger_task};

/// How long the boot splash stays up before the first reading replaces it.
const SPLASH_HOLD_MS: u64 = 1500;

/// Queue, gate and counters shared by all tasks.
static RANGEFINDER: Rangefinder = Rangefinder::new();

/// Runs the echo task from the `SWI_IRQ_1` handler, preempting thread-mode tasks.
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    // SAFETY: SWI_IRQ_1 is reserved for EXECUTOR_HIGH and only pended by it
    unsafe { EXECUTOR_HIGH.on_interrupt() }
}

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-rangefinder"),
    embassy_rp::binary_info::rp_program_description!(c"HC-SR04 rangefinder with SSD1306 128x32 readout"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Rangefinder starting...");

    let p = embassy_rp::init(Default::default());

    // Sensor pins: trigger idles low, echo is driven by the sensor
    let trig = Output::new(p.PIN_12, Level::Low);
    let echo = Input::new(p.PIN_13, Pull::Down);
    info!("Sensor pins ready (TRIG GPIO12, ECHO GPIO13)");

    // OLED on I2C1: SDA=14, SCL=15
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, oled_i2c_config());
    let mut oled = Oled::new(i2c).expect("SSD1306 init failed");
    info!("Display initialized ({} kHz I2C)", I2C_FREQUENCY_HZ / 1000);

    // Boot splash; a failed frame here is not fatal
    if let Err(e) = draw_splash(&mut oled).and_then(|()| oled.show()) {
        error!("Splash failed: {}", defmt::Debug2Format(&e));
    }
    Timer::after_millis(SPLASH_HOLD_MS).await;

    // Echo capture runs at interrupt priority so edges are never held up by rendering
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner.spawn(echo_task(echo, RANGEFINDER.edge_capture())).unwrap();
    info!("Echo task spawned (interrupt executor)");

    let renderer = RANGEFINDER.display_renderer(oled, Delay);
    spawner.spawn(display_task(renderer, &RANGEFINDER)).unwrap();
    info!("Display task spawned");

    let scheduler = RANGEFINDER.trigger_scheduler(trig, Delay);
    spawner.spawn(trigger_task(scheduler)).unwrap();
    info!(
        "Trigger task spawned: range {} cm, queue depth {}",
        MAX_DISTANCE_CM, MEASUREMENT_QUEUE_DEPTH
    );
}
