use serde::{Deserialize, Serialize};

/// Request for the finance overview dashboard.
///
/// Either a preset `label` ("Today", "Last 30 Days", ...) or an explicit
/// custom window via `date_from`/`date_to` (ISO-8601). When both are given
/// the label wins. Account/marketplace scope the record set before any
/// other step of the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinanceOverviewRequest {
    pub label: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub account_id: Option<String>,
    pub marketplace_id: Option<String>,
}

/// Response for the finance overview dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceOverviewResponse {
    /// Window label, preset name or "Custom"
    pub label: String,
    /// Resolved window bounds, RFC 3339
    pub date_from: String,
    pub date_to: String,
    /// Display symbol derived from order currency codes ("$", "£", "€",
    /// or the raw code)
    pub currency_symbol: String,
    pub totals: ProfitSummary,
    /// Orders inside the window (cancelled included; they are skipped by
    /// the totals, not by the count)
    pub order_count: usize,
    /// Inventory records seen while building the COGS index. Counts raw
    /// records, not distinct SKUs — kept as the dashboard always reported it.
    pub active_sku_count: usize,
}

/// Aggregated financial totals over a date window
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfitSummary {
    pub total_sales: f64,
    pub total_fees: f64,
    pub total_cogs: f64,
    pub units_sold: i64,
    /// total_sales - total_fees - total_cogs
    pub net_profit: f64,
    /// net_profit / total_sales * 100, or 0 when there are no sales
    pub margin_percent: f64,
}

/// Profit & Loss statement for the finance page.
///
/// Refunds, promos and ad spend are configured display-layer constants —
/// the record store carries no source for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PnlStatement {
    pub label: String,
    pub currency_symbol: String,
    pub gross_sales: f64,
    pub refunds: f64,
    pub promos: f64,
    pub ad_spend: f64,
    pub amazon_fees: f64,
    pub total_cogs: f64,
    pub units_sold: i64,
    pub net_profit: f64,
    pub margin_percent: f64,
}
