//! Application configuration.
//!
//! - `layout`: Display dimensions and pre-computed layout constants
//! - `sensor`: Distance conversion, trigger timing, queue depth and echo wait policy

pub mod layout;
pub mod sensor;

// Re-export layout constants at config level for convenience
pub use layout::{BAR_Y, DISPLAY_HEIGHT, DISPLAY_WIDTH, STATUS_ORIGIN, STATUS_TEXT_LEN};
// Re-export sensor constants at config level for convenience
pub use sensor::{
    CYCLE_PERIOD_MS,
    ECHO_TIMEOUT_MS,
    ECHO_WAIT,
    EchoWait,
    MAX_DISTANCE_CM,
    MAX_PULSE_WIDTH_US,
    MEASUREMENT_QUEUE_DEPTH,
    ROUND_TRIP_US_PER_CM,
    SPEED_OF_SOUND_CM_PER_US,
    STATS_LOG_INTERVAL,
    TRIGGER_PULSE_US,
};
