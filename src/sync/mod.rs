//! Cross-context synchronization primitives.
//!
//! - `channel`: Bounded measurement queue with split ISR-side / task-side handles
//! - `gate`: Binary cycle gate released by the trigger task, consumed by the renderer
//!
//! Both are backed by `embassy-sync` with a `CriticalSectionRawMutex`, so they are
//! safe to share between the interrupt executor and the thread-mode executor.

mod channel;
mod gate;

pub use channel::{IsrSender, MeasurementChannel, MeasurementReceiver, SendOutcome};
pub use gate::{CycleGate, GateRelease};
