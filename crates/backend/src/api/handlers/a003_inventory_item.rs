use axum::{extract::Query, Json};
use contracts::domain::a003_inventory_item::aggregate::{InventoryItem, InventoryStatusCounts};
use contracts::enums::fulfillment_channel::StatusFilter;
use serde::Deserialize;

use crate::domain::a003_inventory_item::service;
use crate::shared::store::snapshot;

#[derive(Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

/// GET /api/inventory?status=Healthy
pub async fn list(Query(params): Query<ListParams>) -> Json<Vec<InventoryItem>> {
    let status = params
        .status
        .as_deref()
        .map(StatusFilter::from_code)
        .unwrap_or_default();
    let snapshot = snapshot::current();
    Json(service::list(&snapshot, &status))
}

/// GET /api/inventory/status-counts
pub async fn get_status_counts() -> Json<InventoryStatusCounts> {
    let snapshot = snapshot::current();
    Json(service::status_counts(&snapshot))
}
