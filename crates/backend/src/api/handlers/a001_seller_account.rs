use axum::Json;
use contracts::domain::a001_seller_account::aggregate::SellerAccount;

use crate::domain::a001_seller_account::service;
use crate::shared::store::snapshot;

/// GET /api/accounts
pub async fn list_all() -> Json<Vec<SellerAccount>> {
    let snapshot = snapshot::current();
    Json(service::list_all(&snapshot))
}
