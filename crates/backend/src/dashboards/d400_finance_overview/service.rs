use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use contracts::dashboards::d400_finance_overview::{
    FinanceOverviewRequest, FinanceOverviewResponse, PnlStatement,
};
use contracts::shared::date_range::DateRange;

use super::compute;
use crate::shared::config::PnlConfig;
use crate::shared::store::snapshot::RecordSnapshot;

/// Window used when the request names neither a preset nor custom bounds.
/// Matches the sync job's 30-day order backfill.
const DEFAULT_PRESET: &str = "Last 30 Days";

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Bare dates arrive from <input type="date"> pickers
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Resolve the request into a normalized date window.
pub fn resolve_range(request: &FinanceOverviewRequest) -> DateRange {
    if let Some(label) = request.label.as_deref() {
        if label != "Custom" {
            return DateRange::preset(label, Utc::now());
        }
    }

    let bounds = request
        .date_from
        .as_deref()
        .and_then(parse_instant)
        .zip(request.date_to.as_deref().and_then(parse_instant));

    match bounds {
        Some((start, end)) => DateRange::custom(start, end),
        None => DateRange::preset(DEFAULT_PRESET, Utc::now()),
    }
}

/// Run the full pipeline for the overview header: scope, date window,
/// COGS join, aggregate, derive.
pub fn finance_overview(
    snapshot: &RecordSnapshot,
    request: &FinanceOverviewRequest,
) -> FinanceOverviewResponse {
    let range = resolve_range(request);

    let scoped = compute::scope_orders(
        &snapshot.orders,
        request.account_id.as_deref(),
        request.marketplace_id.as_deref(),
    );
    let windowed = compute::filter_by_date_window(scoped.iter().copied(), &range);

    let cogs_index = compute::build_cogs_index(&snapshot.inventory);
    let totals = compute::aggregate(windowed.iter().copied(), &cogs_index);
    let summary = compute::derive_metrics(&totals);
    let currency_symbol = compute::pick_currency_symbol(&windowed, &snapshot.orders);

    FinanceOverviewResponse {
        label: range.label,
        date_from: range.start.to_rfc3339(),
        date_to: range.end.to_rfc3339(),
        currency_symbol,
        totals: summary,
        order_count: windowed.len(),
        active_sku_count: cogs_index.active_sku_count,
    }
}

/// P&L statement for the finance page: the same aggregate pass plus the
/// configured flat deductions (refunds, promos, ad spend).
pub fn pnl_statement(
    snapshot: &RecordSnapshot,
    request: &FinanceOverviewRequest,
    deductions: &PnlConfig,
) -> PnlStatement {
    let overview = finance_overview(snapshot, request);
    let totals = &overview.totals;

    let net_profit = totals.total_sales
        - deductions.refunds
        - deductions.promos
        - deductions.ad_spend
        - totals.total_fees
        - totals.total_cogs;
    let margin_percent = if totals.total_sales == 0.0 {
        0.0
    } else {
        net_profit / totals.total_sales * 100.0
    };

    PnlStatement {
        label: overview.label,
        currency_symbol: overview.currency_symbol,
        gross_sales: totals.total_sales,
        refunds: deductions.refunds,
        promos: deductions.promos,
        ad_spend: deductions.ad_spend,
        amazon_fees: totals.total_fees,
        total_cogs: totals.total_cogs,
        units_sold: totals.units_sold,
        net_profit,
        margin_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_order::aggregate::{Order, OrderItem};
    use contracts::domain::a003_inventory_item::aggregate::InventoryItem;

    fn snapshot_with_one_sale() -> RecordSnapshot {
        RecordSnapshot {
            orders: vec![Order {
                amazon_order_id: "114-0000000-0000001".to_string(),
                purchase_date: "2026-10-25T12:00:00Z".to_string(),
                order_status: "Shipped".to_string(),
                order_total: 100.0,
                estimated_fees: 10.0,
                currency: "USD".to_string(),
                items: vec![OrderItem {
                    sku: "X".to_string(),
                    quantity: 2,
                    ..Default::default()
                }],
                ..Default::default()
            }],
            inventory: vec![InventoryItem {
                sku: "X".to_string(),
                cogs: 5.0,
                ..Default::default()
            }],
            fetched_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    fn request_for_window(from: &str, to: &str) -> FinanceOverviewRequest {
        FinanceOverviewRequest {
            date_from: Some(from.to_string()),
            date_to: Some(to.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn overview_joins_orders_against_cogs() {
        let snapshot = snapshot_with_one_sale();
        let response =
            finance_overview(&snapshot, &request_for_window("2026-10-01", "2026-10-31"));

        assert_eq!(response.totals.total_sales, 100.0);
        assert_eq!(response.totals.total_fees, 10.0);
        assert_eq!(response.totals.total_cogs, 10.0);
        assert_eq!(response.totals.units_sold, 2);
        assert_eq!(response.totals.net_profit, 80.0);
        assert_eq!(response.totals.margin_percent, 80.0);
        assert_eq!(response.currency_symbol, "$");
        assert_eq!(response.order_count, 1);
        assert_eq!(response.active_sku_count, 1);
    }

    #[test]
    fn overview_outside_the_window_is_empty_but_keeps_currency() {
        let snapshot = snapshot_with_one_sale();
        let response =
            finance_overview(&snapshot, &request_for_window("2026-01-01", "2026-01-31"));

        assert_eq!(response.order_count, 0);
        assert_eq!(response.totals.total_sales, 0.0);
        assert_eq!(response.totals.margin_percent, 0.0);
        // Falls back to the first order of the unfiltered set
        assert_eq!(response.currency_symbol, "$");
    }

    #[test]
    fn pnl_subtracts_flat_deductions() {
        let snapshot = snapshot_with_one_sale();
        let deductions = PnlConfig {
            refunds: 5.0,
            promos: 2.0,
            ad_spend: 3.0,
        };
        let statement = pnl_statement(
            &snapshot,
            &request_for_window("2026-10-01", "2026-10-31"),
            &deductions,
        );

        // 100 - 5 - 2 - 3 - 10 - 10
        assert_eq!(statement.net_profit, 70.0);
        assert_eq!(statement.margin_percent, 70.0);
        assert_eq!(statement.amazon_fees, 10.0);
    }

    #[test]
    fn custom_bounds_win_when_no_label_is_given() {
        let range = resolve_range(&request_for_window("2026-10-01", "2026-10-31"));
        assert_eq!(range.label, "Custom");

        let range = resolve_range(&FinanceOverviewRequest::default());
        assert_eq!(range.label, DEFAULT_PRESET);
    }
}
