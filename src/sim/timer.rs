//! Tick-counted interval gate
//!
//! Paces anything repeatable (meteor spawns, weapon cooldown). Real-time
//! durations are converted to ticks once, at construction, against the
//! simulation rate the driver supplies.

use std::time::Duration;

/// Counts ticks up to a target and reports when the target was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    elapsed_ticks: u32,
    target_ticks: u32,
}

impl Timer {
    /// Timer that becomes ready after `target_ticks` updates
    pub fn new(target_ticks: u32) -> Self {
        Self {
            elapsed_ticks: 0,
            target_ticks,
        }
    }

    /// `target = floor(millis * ticks_per_second / 1000)`
    pub fn from_millis(millis: u64, ticks_per_second: u32) -> Self {
        let ticks = millis.saturating_mul(u64::from(ticks_per_second)) / 1000;
        Self::new(u32::try_from(ticks).unwrap_or(u32::MAX))
    }

    pub fn from_duration(duration: Duration, ticks_per_second: u32) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self::from_millis(millis, ticks_per_second)
    }

    /// Advance one tick (saturates at the target)
    #[inline]
    pub fn update(&mut self) {
        if self.elapsed_ticks < self.target_ticks {
            self.elapsed_ticks += 1;
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.elapsed_ticks >= self.target_ticks
    }

    #[inline]
    pub fn reset(&mut self) {
        self.elapsed_ticks = 0;
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    pub fn target_ticks(&self) -> u32 {
        self.target_ticks
    }
}
