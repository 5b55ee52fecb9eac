use std::sync::Arc;

use axum::Json;
use contracts::usecases::u501_manual_sync::{SyncRequest, SyncResponse, SyncStatus};
use once_cell::sync::Lazy;

use crate::shared::config;
use crate::usecases::u501_manual_sync::{StatusTracker, SyncExecutor};

static SYNC_EXECUTOR: Lazy<Arc<SyncExecutor>> = Lazy::new(|| {
    let sync = &config::get().sync;
    let tracker = Arc::new(StatusTracker::new());
    Arc::new(SyncExecutor::new(
        sync.trigger_url.clone(),
        sync.status_reset_secs,
        tracker,
    ))
});

/// Start the background schedule, if one is configured. Called once from
/// main after the config is loaded.
pub fn initialize_schedule() {
    SYNC_EXECUTOR
        .clone()
        .spawn_schedule(config::get().sync.auto_sync_interval_hours);
}

/// POST /api/u501/sync/start
///
/// The UI posts without a body; an explicit mode is accepted but optional.
pub async fn start_sync(request: Option<Json<SyncRequest>>) -> Json<SyncResponse> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let response = SYNC_EXECUTOR.start_sync(request).await;
    Json(response)
}

/// GET /api/u501/sync/status
pub async fn get_status() -> Json<SyncStatus> {
    Json(SYNC_EXECUTOR.status())
}
