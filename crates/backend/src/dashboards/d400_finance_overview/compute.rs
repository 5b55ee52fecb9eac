//! Finance aggregation pipeline.
//!
//! Pure functions over an immutable record snapshot: scope → date window →
//! (status/channel for the table) → aggregate → derived metrics. Every pass
//! recomputes from scratch; nothing here holds state.

use std::collections::HashMap;

use contracts::dashboards::d400_finance_overview::ProfitSummary;
use contracts::domain::a002_order::aggregate::Order;
use contracts::domain::a003_inventory_item::aggregate::InventoryItem;
use contracts::enums::fulfillment_channel::{FulfillmentFilter, StatusFilter};
use contracts::shared::date_range::DateRange;

use crate::shared::format::currency_symbol;

// ============================================================================
// COGS index
// ============================================================================

/// SKU → unit cost lookup built from the inventory record set
#[derive(Debug, Clone, Default)]
pub struct CogsIndex {
    map: HashMap<String, f64>,

    /// Raw inventory record count, reported as the "active SKUs" stat.
    /// Duplicate SKUs are counted per record, not per key — the dashboard
    /// always reported it this way and downstream displays expect it.
    pub active_sku_count: usize,
}

impl CogsIndex {
    /// Unit cost for a SKU; unknown SKUs cost 0.
    pub fn unit_cost(&self, sku: &str) -> f64 {
        self.map.get(sku).copied().unwrap_or(0.0)
    }
}

/// Build the SKU → unit cost mapping.
///
/// When the same SKU appears more than once the later record overwrites the
/// earlier one.
pub fn build_cogs_index(inventory: &[InventoryItem]) -> CogsIndex {
    let mut map = HashMap::with_capacity(inventory.len());
    for item in inventory {
        map.insert(item.sku.clone(), item.cogs);
    }
    CogsIndex {
        map,
        active_sku_count: inventory.len(),
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Narrow a record set to one account and/or marketplace. None passes all.
pub fn scope_orders<'a>(
    orders: &'a [Order],
    account_id: Option<&str>,
    marketplace_id: Option<&str>,
) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| account_id.map_or(true, |id| o.account_id == id))
        .filter(|o| marketplace_id.map_or(true, |id| o.marketplace_id == id))
        .collect()
}

/// Orders purchased inside the inclusive [start, end] window.
///
/// Orders without a parseable purchase timestamp are excluded, never an
/// error.
pub fn filter_by_date_window<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    range: &DateRange,
) -> Vec<&'a Order> {
    orders
        .into_iter()
        .filter(|o| {
            o.purchase_instant()
                .map(|instant| range.contains(instant))
                .unwrap_or(false)
        })
        .collect()
}

/// Status and fulfillment predicates for the orders table, combined with
/// AND. The aggregate totals never go through this filter — table filters
/// narrow what is listed, not what is summed.
pub fn filter_by_status_channel<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    status: &StatusFilter,
    fulfillment: &FulfillmentFilter,
) -> Vec<&'a Order> {
    orders
        .into_iter()
        .filter(|o| status.matches(&o.order_status))
        .filter(|o| fulfillment.matches(&o.fulfillment_channel))
        .collect()
}

// ============================================================================
// Aggregation
// ============================================================================

/// Raw sums produced by one pass over the date-filtered order set
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateTotals {
    pub total_sales: f64,
    pub total_fees: f64,
    pub total_cogs: f64,
    pub units_sold: i64,
}

/// Walk the order set once, resolving each line item through the COGS
/// index. Cancelled orders contribute zero to every total.
pub fn aggregate<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    cogs_index: &CogsIndex,
) -> AggregateTotals {
    let mut totals = AggregateTotals::default();

    for order in orders {
        if order.is_cancelled() {
            continue;
        }

        totals.total_sales += order.order_total;
        totals.total_fees += order.estimated_fees;

        for item in &order.items {
            totals.total_cogs += cogs_index.unit_cost(&item.sku) * item.quantity as f64;
            totals.units_sold += item.quantity;
        }
    }

    totals
}

/// Derive net profit and margin from raw totals.
///
/// Margin is 0 when there are no sales — never a division by zero.
pub fn derive_metrics(totals: &AggregateTotals) -> ProfitSummary {
    let net_profit = totals.total_sales - totals.total_fees - totals.total_cogs;
    let margin_percent = if totals.total_sales == 0.0 {
        0.0
    } else {
        net_profit / totals.total_sales * 100.0
    };

    ProfitSummary {
        total_sales: totals.total_sales,
        total_fees: totals.total_fees,
        total_cogs: totals.total_cogs,
        units_sold: totals.units_sold,
        net_profit,
        margin_percent,
    }
}

// ============================================================================
// Currency symbol
// ============================================================================

/// Display symbol for the stats header: taken from the first order of the
/// date-filtered set, falling back to the first order overall, then to USD.
pub fn pick_currency_symbol(filtered: &[&Order], all_orders: &[Order]) -> String {
    let code = filtered
        .first()
        .map(|o| o.currency.as_str())
        .or_else(|| all_orders.first().map(|o| o.currency.as_str()))
        .filter(|code| !code.is_empty())
        .unwrap_or("USD");
    currency_symbol(code)
}
