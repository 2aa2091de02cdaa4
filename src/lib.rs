//! Rangefinder library - testable modules for the ultrasonic rangefinder.
//!
//! This library contains the measurement pipeline and the concurrency core that can
//! be tested on the host machine. The binary (`main.rs`) uses this library and adds
//! the embedded-specific code (pins, interrupt executor, SSD1306 driver).
//!
//! # Pipeline
//!
//! ```text
//! TriggerScheduler ──pulse──▶ sensor ──echo edges──▶ EdgeCapture
//!        │                                               │ send_or_drop
//!        │ release                                       ▼
//!        └──────────▶ CycleGate ──▶ DisplayRenderer ◀── MeasurementChannel
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

// Configuration
pub mod config;

// Measurement pipeline
pub mod capture;
pub mod measurement;
pub mod render;
pub mod trigger;

// Cross-context primitives
pub mod rangefinder;
pub mod stats;
pub mod sync;

#[cfg(test)]
mod test_support;

pub use capture::{Edge, EdgeCapture};
pub use measurement::MeasurementResult;
pub use rangefinder::Rangefinder;
pub use render::{Display, DisplayRenderer, Reading, RenderStage};
pub use stats::{Stats, StatsSnapshot};
pub use sync::{CycleGate, GateRelease, IsrSender, MeasurementChannel, MeasurementReceiver, SendOutcome};
pub use trigger::TriggerScheduler;
