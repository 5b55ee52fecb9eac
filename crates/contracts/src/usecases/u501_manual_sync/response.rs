use serde::{Deserialize, Serialize};

/// Response to a sync trigger request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse {
    pub status: SyncStartStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStartStatus {
    /// The external sync endpoint answered 2xx
    Started,

    /// Non-2xx answer, transport failure, or a sync already in flight
    Failed,
}
