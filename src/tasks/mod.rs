//! Async tasks for the rangefinder firmware.
//!
//! Thin concrete wrappers around the generic pipeline in the library:
//! - `echo`: echo edge capture (interrupt executor)
//! - `trigger`: periodic trigger pulse and cycle gate release
//! - `display`: gate, measurement, render loop

pub mod display;
pub mod echo;
pub mod trigger;

pub use display::display_task;
pub use echo::echo_task;
pub use trigger::trigger_task;
