//! Shared pause flag
//!
//! The only datum shared between the countdown and the outside world. Any
//! number of handles may toggle it; the engine reads it once per tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct PauseFlag {
    paused: Arc<AtomicBool>,
}

impl PauseFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip paused/running, returning the new value
    pub fn toggle(&self) -> bool {
        !self.paused.fetch_xor(true, Ordering::SeqCst)
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }
}
