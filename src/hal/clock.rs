//! Monotonic millisecond time source.

use std::time::Instant;

/// Monotonic clock capability.
pub trait Clock {
    /// Milliseconds since some fixed origin. Never goes backwards.
    fn now_ms(&self) -> u64;
}

/// Host clock counting from its construction.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}
