//! Simulated store latency.
//!
//! The in-memory stores pause before each operation so callers exercise
//! their pending/loading handling. The profile is injected at store
//! construction rather than hardcoded, which keeps tests deterministic:
//! `zero()` never sleeps at all.

use std::time::Duration;

/// One delay per store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl LatencyProfile {
    /// No delay on any operation. The profile tests should use.
    pub fn zero() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }

    /// Bounded delays in the range a small hosted API would show.
    pub fn simulated() -> Self {
        Self {
            list: Duration::from_millis(300),
            get: Duration::from_millis(200),
            create: Duration::from_millis(250),
            update: Duration::from_millis(250),
            delete: Duration::from_millis(200),
        }
    }

    pub(crate) async fn pause(duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn zero_profile_does_not_advance_time() {
        let before = tokio::time::Instant::now();
        LatencyProfile::pause(LatencyProfile::zero().list).await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_profile_sleeps_for_the_configured_delay() {
        let before = tokio::time::Instant::now();
        LatencyProfile::pause(LatencyProfile::simulated().list).await;
        assert_eq!(before.elapsed(), Duration::from_millis(300));
    }
}
