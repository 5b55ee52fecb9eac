use serde::{Deserialize, Serialize};

/// Request to trigger the external SP-API sync job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncRequest {
    #[serde(default)]
    pub mode: SyncMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Triggered from the UI sync button
    #[default]
    Interactive,

    /// Triggered by the built-in schedule
    Background,
}
