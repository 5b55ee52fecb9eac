use std::sync::Arc;
use std::time::Duration;

use contracts::usecases::u501_manual_sync::{
    SyncMode, SyncRequest, SyncResponse, SyncStartStatus, SyncState,
};

use super::status_tracker::StatusTracker;
use crate::shared::store::snapshot;

/// Executor for the manual-sync trigger.
///
/// The actual SP-API sync job runs elsewhere; this only POSTs to its
/// trigger endpoint and tracks the indicator state. Any 2xx answer counts
/// as success, the response body is never consumed.
pub struct SyncExecutor {
    client: reqwest::Client,
    trigger_url: String,
    reset_delay: Duration,
    tracker: Arc<StatusTracker>,
}

impl SyncExecutor {
    pub fn new(trigger_url: String, status_reset_secs: u64, tracker: Arc<StatusTracker>) -> Self {
        Self {
            // The sync job runs to completion before the trigger answers;
            // its own deadline is 540 s, so allow a little past that.
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(600))
                .build()
                .expect("Failed to create HTTP client"),
            trigger_url,
            reset_delay: Duration::from_secs(status_reset_secs),
            tracker,
        }
    }

    /// Trigger the external sync and wait for it to answer.
    ///
    /// A second trigger while one is in flight fails immediately without
    /// firing another request.
    pub async fn start_sync(&self, request: SyncRequest) -> SyncResponse {
        let Some(run) = self.tracker.begin() else {
            return SyncResponse {
                status: SyncStartStatus::Failed,
                message: "Sync already running".to_string(),
            };
        };

        tracing::info!("Triggering external sync ({:?})", request.mode);

        let response = match self.client.post(&self.trigger_url).send().await {
            Ok(answer) if answer.status().is_success() => {
                self.tracker.finish(run, SyncState::Success, None);
                tracing::info!("External sync completed");

                // Pull the fresh records right away instead of waiting for
                // the next poll
                if let Err(e) = snapshot::refresh().await {
                    tracing::warn!("Post-sync snapshot refresh failed: {}", e);
                }

                SyncResponse {
                    status: SyncStartStatus::Started,
                    message: "Sync completed".to_string(),
                }
            }
            Ok(answer) => {
                let status = answer.status();
                tracing::error!("Sync trigger answered {}", status);
                self.tracker.finish(
                    run,
                    SyncState::Failed,
                    Some(format!("Sync endpoint answered {}", status)),
                );
                SyncResponse {
                    status: SyncStartStatus::Failed,
                    message: format!("Sync endpoint answered {}", status),
                }
            }
            Err(e) => {
                tracing::error!("Sync trigger failed: {}", e);
                self.tracker
                    .finish(run, SyncState::Failed, Some(e.to_string()));
                SyncResponse {
                    status: SyncStartStatus::Failed,
                    message: "Sync trigger failed".to_string(),
                }
            }
        };

        // Revert the indicator after the fixed display delay
        let tracker = self.tracker.clone();
        let delay = self.reset_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracker.reset(run);
        });

        response
    }

    pub fn status(&self) -> contracts::usecases::u501_manual_sync::SyncStatus {
        self.tracker.current()
    }

    /// Background schedule mirroring the sync job's own cadence. Disabled
    /// when `every_hours` is 0.
    pub fn spawn_schedule(self: Arc<Self>, every_hours: u64) {
        if every_hours == 0 {
            return;
        }
        let executor = self;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(every_hours * 3600));
            // The first tick fires immediately; skip it so startup does not
            // trigger a sync
            interval.tick().await;
            loop {
                interval.tick().await;
                let response = executor
                    .start_sync(SyncRequest {
                        mode: SyncMode::Background,
                    })
                    .await;
                tracing::info!(
                    "Scheduled sync finished: {:?} ({})",
                    response.status,
                    response.message
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_trigger_reports_failure() {
        let tracker = Arc::new(StatusTracker::new());
        // Port 9 (discard) is not listening; the connection is refused
        let executor = SyncExecutor::new("http://127.0.0.1:9/sync".to_string(), 1, tracker);

        let response = executor.start_sync(SyncRequest::default()).await;
        assert_eq!(response.status, SyncStartStatus::Failed);
        assert_eq!(executor.status().state, SyncState::Failed);
        assert!(executor.status().message.is_some());
    }
}
