use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current sync indicator state, as shown next to the sync button.
///
/// Success and Failed are transient: the tracker reverts them to Idle after
/// a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    #[default]
    Idle,
    Syncing,
    Success,
    Failed,
}

/// Sync status surfaced to the UI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncStatus {
    pub state: SyncState,
    pub last_started_at: Option<DateTime<Utc>>,
    pub last_finished_at: Option<DateTime<Utc>>,
    /// Failure detail, cleared on the next trigger
    pub message: Option<String>,
}
