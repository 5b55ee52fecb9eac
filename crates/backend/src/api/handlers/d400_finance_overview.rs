use axum::{extract::Query, Json};
use contracts::dashboards::d400_finance_overview::{
    FinanceOverviewRequest, FinanceOverviewResponse, PnlStatement,
};

use crate::dashboards::d400_finance_overview::service;
use crate::shared::{config, store::snapshot};

/// GET /api/d400/finance-overview?label=Last+30+Days
pub async fn get_finance_overview(
    Query(request): Query<FinanceOverviewRequest>,
) -> Json<FinanceOverviewResponse> {
    let snapshot = snapshot::current();
    if !snapshot.is_loaded() {
        tracing::warn!("D400 Dashboard: serving before the first snapshot load");
    }
    let response = service::finance_overview(&snapshot, &request);

    tracing::info!(
        "D400 Dashboard: {} orders in window '{}', net profit {:.2}",
        response.order_count,
        response.label,
        response.totals.net_profit
    );

    Json(response)
}

/// GET /api/d400/pnl?label=Month+to+Date
pub async fn get_pnl(Query(request): Query<FinanceOverviewRequest>) -> Json<PnlStatement> {
    let snapshot = snapshot::current();
    let statement = service::pnl_statement(&snapshot, &request, &config::get().pnl);
    Json(statement)
}
