//! Loading indicator that stays up for a minimum time.

use std::time::{Duration, Instant};

/// How long the indicator lingers after the store becomes ready.
pub const DEFAULT_MIN_LOADING: Duration = Duration::from_millis(1000);

/// Decouples the visible loading state from actual readiness: the indicator
/// starts visible and hides only `min_visible` after the store reports ready.
/// Going back to loading shows it again and restarts the countdown.
#[derive(Debug, Clone)]
pub struct LoadingGate {
    min_visible: Duration,
    ready_since: Option<Instant>,
}

impl LoadingGate {
    pub fn new(min_visible: Duration) -> Self {
        Self {
            min_visible,
            ready_since: None,
        }
    }

    /// Feed the store's loading flag; returns whether the indicator shows.
    pub fn observe(&mut self, store_loading: bool, now: Instant) -> bool {
        if store_loading {
            self.ready_since = None;
            return true;
        }

        let since = *self.ready_since.get_or_insert(now);
        now.saturating_duration_since(since) < self.min_visible
    }
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LOADING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lingers_after_ready() {
        let t0 = Instant::now();
        let mut gate = LoadingGate::default();

        assert!(gate.observe(true, t0));
        assert!(gate.observe(false, t0 + Duration::from_millis(1500)));
        assert!(gate.observe(false, t0 + Duration::from_millis(2499)));
        assert!(!gate.observe(false, t0 + Duration::from_millis(2500)));
    }

    #[test]
    fn shows_even_when_ready_from_the_start() {
        let t0 = Instant::now();
        let mut gate = LoadingGate::new(Duration::from_millis(1000));

        assert!(gate.observe(false, t0));
        assert!(!gate.observe(false, t0 + Duration::from_secs(1)));
    }

    #[test]
    fn reloading_restarts_countdown() {
        let t0 = Instant::now();
        let mut gate = LoadingGate::default();

        gate.observe(false, t0);
        assert!(!gate.observe(false, t0 + Duration::from_secs(2)));
        assert!(gate.observe(true, t0 + Duration::from_secs(3)));
        assert!(gate.observe(false, t0 + Duration::from_millis(3500)));
        assert!(!gate.observe(false, t0 + Duration::from_millis(4500)));
    }
}
