use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d400_finance_overview::FinanceOverviewRequest;
use contracts::domain::a002_order::aggregate::{Order, OrderListResponse, OrderStatusCounts};
use contracts::enums::fulfillment_channel::{FulfillmentFilter, StatusFilter};
use serde::Deserialize;

use crate::dashboards::d400_finance_overview::service::resolve_range;
use crate::domain::a002_order::service::{self, OrderQuery};
use crate::shared::store::snapshot;

#[derive(Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub fulfillment: Option<String>,
    pub label: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub account_id: Option<String>,
    pub marketplace_id: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

fn to_query(params: ListParams) -> OrderQuery {
    // Without any window parameter the table lists every order on record
    let wants_window = params.label.is_some()
        || (params.date_from.is_some() && params.date_to.is_some());
    let range = wants_window.then(|| {
        resolve_range(&FinanceOverviewRequest {
            label: params.label.clone(),
            date_from: params.date_from.clone(),
            date_to: params.date_to.clone(),
            ..Default::default()
        })
    });

    OrderQuery {
        status: params
            .status
            .as_deref()
            .map(StatusFilter::from_code)
            .unwrap_or_default(),
        fulfillment: params
            .fulfillment
            .as_deref()
            .map(FulfillmentFilter::from_code)
            .unwrap_or_default(),
        range,
        account_id: params.account_id,
        marketplace_id: params.marketplace_id,
        page: params.page.unwrap_or(1),
        per_page: params.per_page.unwrap_or(0),
    }
}

/// GET /api/orders?status=Shipped&fulfillment=FBA&page=1
pub async fn list_orders(Query(params): Query<ListParams>) -> Json<OrderListResponse> {
    let snapshot = snapshot::current();
    Json(service::list(&snapshot, &to_query(params)))
}

/// GET /api/orders/:id
pub async fn get_order_detail(Path(id): Path<String>) -> Result<Json<Order>, StatusCode> {
    let snapshot = snapshot::current();
    match service::get_by_id(&snapshot, &id) {
        Some(order) => Ok(Json(order)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// GET /api/orders/status-counts
pub async fn get_status_counts(Query(params): Query<ListParams>) -> Json<OrderStatusCounts> {
    let snapshot = snapshot::current();
    Json(service::status_counts(&snapshot, &to_query(params)))
}
