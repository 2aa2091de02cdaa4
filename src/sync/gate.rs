//! Binary gate synchronizing one trigger cycle to one display update.
//!
//! Backed by an `embassy-sync` [`Signal`], which holds at most one value: a second
//! release before the renderer acquires is absorbed instead of counted.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// What happened to a gate release.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum GateRelease {
    /// The gate was empty; a token is now pending.
    Posted,
    /// A token was already pending; this release merged into it.
    Absorbed,
}

/// Single-slot cycle gate.
pub struct CycleGate {
    signal: Signal<CriticalSectionRawMutex, ()>,
}

impl CycleGate {
    /// Create a closed gate (no pending token).
    pub const fn new() -> Self { Self { signal: Signal::new() } }

    /// Post the token for this cycle.
    ///
    /// Only the trigger task releases the gate, so the pending check and the post
    /// cannot interleave with another release.
    pub fn release(&self) -> GateRelease {
        let already_pending = self.signal.signaled();
        self.signal.signal(());
        if already_pending {
            GateRelease::Absorbed
        } else {
            GateRelease::Posted
        }
    }

    /// Wait for the token and consume it.
    pub async fn acquire(&self) { self.signal.wait().await }

    /// Consume the token if one is pending.
    pub fn try_acquire(&self) -> bool { self.signal.try_take().is_some() }

    /// Check if a token is pending.
    #[inline]
    pub fn is_pending(&self) -> bool { self.signal.signaled() }
}

impl Default for CycleGate {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
