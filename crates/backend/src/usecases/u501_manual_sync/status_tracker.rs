use std::sync::RwLock;

use chrono::Utc;
use contracts::usecases::u501_manual_sync::{SyncState, SyncStatus};

/// In-memory sync status (single process, for real-time display).
///
/// Each run gets a token; finish/reset with a stale token are no-ops, so a
/// delayed indicator reset can never clobber a newer run.
pub struct StatusTracker {
    inner: RwLock<TrackedStatus>,
}

#[derive(Default)]
struct TrackedStatus {
    run: u64,
    status: SyncStatus,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TrackedStatus::default()),
        }
    }

    /// Begin a run. Returns None when a sync is already in flight.
    pub fn begin(&self) -> Option<u64> {
        let mut inner = self.inner.write().unwrap();
        if inner.status.state == SyncState::Syncing {
            return None;
        }
        inner.run += 1;
        inner.status.state = SyncState::Syncing;
        inner.status.last_started_at = Some(Utc::now());
        inner.status.message = None;
        Some(inner.run)
    }

    pub fn finish(&self, run: u64, state: SyncState, message: Option<String>) {
        let mut inner = self.inner.write().unwrap();
        if inner.run != run {
            return;
        }
        inner.status.state = state;
        inner.status.last_finished_at = Some(Utc::now());
        inner.status.message = message;
    }

    /// Revert a settled success/failed indicator back to idle.
    pub fn reset(&self, run: u64) {
        let mut inner = self.inner.write().unwrap();
        if inner.run != run {
            return;
        }
        if matches!(inner.status.state, SyncState::Success | SyncState::Failed) {
            inner.status.state = SyncState::Idle;
        }
    }

    pub fn current(&self) -> SyncStatus {
        self.inner.read().unwrap().status.clone()
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected_while_syncing() {
        let tracker = StatusTracker::new();
        let run = tracker.begin().unwrap();
        assert!(tracker.begin().is_none());

        tracker.finish(run, SyncState::Success, None);
        assert!(tracker.begin().is_some());
    }

    #[test]
    fn reset_reverts_settled_states_to_idle() {
        let tracker = StatusTracker::new();
        let run = tracker.begin().unwrap();
        tracker.finish(run, SyncState::Failed, Some("boom".to_string()));
        assert_eq!(tracker.current().state, SyncState::Failed);

        tracker.reset(run);
        assert_eq!(tracker.current().state, SyncState::Idle);
        // Failure detail survives until the next trigger
        assert_eq!(tracker.current().message.as_deref(), Some("boom"));
    }

    #[test]
    fn stale_reset_does_not_touch_a_newer_run() {
        let tracker = StatusTracker::new();
        let first = tracker.begin().unwrap();
        tracker.finish(first, SyncState::Success, None);
        tracker.reset(first);

        let second = tracker.begin().unwrap();
        tracker.finish(second, SyncState::Success, None);

        // The first run's delayed reset fires late
        tracker.reset(first);
        assert_eq!(tracker.current().state, SyncState::Success);

        tracker.reset(second);
        assert_eq!(tracker.current().state, SyncState::Idle);
    }
}
