use contracts::domain::a002_order::aggregate::{Order, OrderListResponse, OrderStatusCounts};
use contracts::enums::fulfillment_channel::{FulfillmentFilter, StatusFilter};
use contracts::shared::date_range::DateRange;

use crate::dashboards::d400_finance_overview::compute;
use crate::shared::store::snapshot::RecordSnapshot;

pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Query for the orders table. Filter changes reset the client to page 1;
/// the service itself is stateless and just clamps whatever page it gets.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub status: StatusFilter,
    pub fulfillment: FulfillmentFilter,
    /// None lists every order regardless of purchase date
    pub range: Option<DateRange>,
    pub account_id: Option<String>,
    pub marketplace_id: Option<String>,
    pub page: usize,
    pub per_page: usize,
}

fn scoped_and_windowed<'a>(snapshot: &'a RecordSnapshot, query: &OrderQuery) -> Vec<&'a Order> {
    let scoped = compute::scope_orders(
        &snapshot.orders,
        query.account_id.as_deref(),
        query.marketplace_id.as_deref(),
    );
    match &query.range {
        Some(range) => compute::filter_by_date_window(scoped, range),
        None => scoped,
    }
}

/// One page of the orders table, newest purchases first.
pub fn list(snapshot: &RecordSnapshot, query: &OrderQuery) -> OrderListResponse {
    let windowed = scoped_and_windowed(snapshot, query);
    let mut matching: Vec<&Order> =
        compute::filter_by_status_channel(windowed, &query.status, &query.fulfillment);

    // Orders without a parseable date sort to the end
    matching.sort_by(|a, b| b.purchase_instant().cmp(&a.purchase_instant()));

    let total = matching.len();
    let per_page = if query.per_page == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        query.per_page
    };
    let page_count = total.div_ceil(per_page).max(1);
    let page = query.page.clamp(1, page_count);

    let orders = matching
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .cloned()
        .collect();

    OrderListResponse {
        orders,
        total,
        page,
        per_page,
    }
}

pub fn get_by_id(snapshot: &RecordSnapshot, amazon_order_id: &str) -> Option<Order> {
    snapshot
        .orders
        .iter()
        .find(|o| o.amazon_order_id == amazon_order_id)
        .cloned()
}

/// Counts for the status tiles, computed over the scoped/windowed set so
/// the tiles agree with the table beneath them.
pub fn status_counts(snapshot: &RecordSnapshot, query: &OrderQuery) -> OrderStatusCounts {
    let windowed = scoped_and_windowed(snapshot, query);

    let mut counts = OrderStatusCounts {
        total: windowed.len(),
        ..Default::default()
    };
    for order in windowed {
        match order.order_status.as_str() {
            "Shipped" => counts.shipped += 1,
            "Pending" => counts.pending += 1,
            "Canceled" => counts.canceled += 1,
            _ => {}
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, status: &str, channel: &str, date: &str) -> Order {
        Order {
            amazon_order_id: id.to_string(),
            order_status: status.to_string(),
            fulfillment_channel: channel.to_string(),
            purchase_date: date.to_string(),
            ..Default::default()
        }
    }

    fn snapshot() -> RecordSnapshot {
        RecordSnapshot {
            orders: vec![
                order("114-1", "Shipped", "AFN", "2026-10-25T14:30:00Z"),
                order("114-2", "Shipped", "MFN", "2026-10-25T15:45:00Z"),
                order("114-3", "Pending", "AFN", "2026-10-26T09:15:00Z"),
                order("114-4", "Canceled", "AFN", "2026-10-24T08:00:00Z"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn list_sorts_newest_first() {
        let response = list(&snapshot(), &OrderQuery::default());
        assert_eq!(response.total, 4);
        assert_eq!(response.orders[0].amazon_order_id, "114-3");
        assert_eq!(response.orders[3].amazon_order_id, "114-4");
    }

    #[test]
    fn table_filters_combine_with_and() {
        let query = OrderQuery {
            status: StatusFilter::from_code("Shipped"),
            fulfillment: FulfillmentFilter::Fba,
            ..Default::default()
        };
        let response = list(&snapshot(), &query);
        assert_eq!(response.total, 1);
        assert_eq!(response.orders[0].amazon_order_id, "114-1");
    }

    #[test]
    fn page_is_clamped_to_the_last_page() {
        let query = OrderQuery {
            page: 99,
            per_page: 3,
            ..Default::default()
        };
        let response = list(&snapshot(), &query);
        assert_eq!(response.page, 2);
        assert_eq!(response.orders.len(), 1);
    }

    #[test]
    fn counts_match_the_tiles() {
        let counts = status_counts(&snapshot(), &OrderQuery::default());
        assert_eq!(counts.total, 4);
        assert_eq!(counts.shipped, 2);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.canceled, 1);
    }

    #[test]
    fn get_by_id_finds_exact_order() {
        assert!(get_by_id(&snapshot(), "114-2").is_some());
        assert!(get_by_id(&snapshot(), "114-9").is_none());
    }
}
