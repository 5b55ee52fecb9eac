use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a004_shipment::aggregate::{Shipment, ShipmentStats};

use crate::domain::a004_shipment::service;
use crate::shared::store::snapshot;

/// GET /api/shipments
pub async fn list_shipments() -> Json<Vec<Shipment>> {
    let snapshot = snapshot::current();
    Json(service::list_all(&snapshot))
}

/// GET /api/shipments/stats
pub async fn get_stats() -> Json<ShipmentStats> {
    let snapshot = snapshot::current();
    Json(service::stats(&snapshot))
}

/// GET /api/shipments/:id
pub async fn get_shipment_detail(Path(id): Path<String>) -> Result<Json<Shipment>, StatusCode> {
    let snapshot = snapshot::current();
    match service::get_by_id(&snapshot, &id) {
        Some(shipment) => Ok(Json(shipment)),
        None => Err(StatusCode::NOT_FOUND),
    }
}
