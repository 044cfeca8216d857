//! Host time adapter.
//!
//! Monotonic uptime from `std::time::Instant`, standing in for the
//! board's `millis()` counter.

use std::time::Instant;

use crate::app::ports::ClockPort;

pub struct HostClock {
    start: Instant,
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

impl HostClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds since boot (monotonic).
    pub fn uptime_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl ClockPort for HostClock {
    fn uptime_secs(&self) -> u64 {
        self.start.elapsed().as_secs()
    }
}
