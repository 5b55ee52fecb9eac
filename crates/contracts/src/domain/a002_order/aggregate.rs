use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Marketplace order, as written by the external SP-API sync job.
///
/// Read-only projection: the hub never mutates order documents. Numeric
/// fields the store may omit deserialize to 0; a missing purchase date
/// deserializes to an empty string and excludes the order from any date
/// window instead of raising.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Order {
    /// Amazon order identifier, unique within the snapshot
    #[serde(default)]
    pub amazon_order_id: String,

    /// Seller account that owns this order
    #[serde(rename = "accountId", default)]
    pub account_id: String,

    /// Marketplace code the order was placed in (e.g. "US", "UK")
    #[serde(rename = "marketplaceId", default)]
    pub marketplace_id: String,

    /// Purchase timestamp, ISO-8601 string as delivered by the store
    #[serde(default)]
    pub purchase_date: String,

    /// "Shipped" | "Pending" | "Canceled" / "Cancelled" | free text
    #[serde(default)]
    pub order_status: String,

    #[serde(default)]
    pub order_total: f64,

    #[serde(default)]
    pub estimated_fees: f64,

    #[serde(default)]
    pub estimated_proceeds: f64,

    /// 3-letter currency code, display only
    #[serde(default)]
    pub currency: String,

    /// "AFN" (Amazon-fulfilled) | "MFN" (merchant-fulfilled)
    #[serde(default)]
    pub fulfillment_channel: String,

    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderItem {
    #[serde(default)]
    pub sku: String,

    #[serde(default)]
    pub title: String,

    /// Units ordered. The sync job writes QuantityOrdered with a 0 default,
    /// so a missing quantity counts as 0 everywhere.
    #[serde(default)]
    pub quantity: i64,

    #[serde(default)]
    pub item_price: f64,
}

impl Order {
    /// Parse the purchase date into an instant.
    ///
    /// Returns None for an empty or unparseable value; callers exclude such
    /// orders from date windows rather than treating them as errors.
    pub fn purchase_instant(&self) -> Option<DateTime<Utc>> {
        if self.purchase_date.is_empty() {
            return None;
        }
        DateTime::parse_from_rfc3339(&self.purchase_date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Cancelled orders contribute zero to every aggregate total.
    /// Both spellings occur in stored data.
    pub fn is_cancelled(&self) -> bool {
        self.order_status == "Canceled" || self.order_status == "Cancelled"
    }

    /// Total units across all line items
    pub fn unit_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// ============================================================================
// List DTOs (flat structures for the orders table)
// ============================================================================

/// One page of the orders table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    /// Matching orders before pagination
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

/// Counts behind the status tiles above the orders table.
///
/// Tile counts use exact status equality, like the tiles always did —
/// "Cancelled" (double l) lands in `total` only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderStatusCounts {
    pub total: usize,
    pub shipped: usize,
    pub pending: usize,
    pub canceled: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_numeric_fields() {
        let json = r#"{
            "amazon_order_id": "114-0000000-0000001",
            "order_status": "Shipped",
            "items": [{"sku": "SKU-001"}]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_total, 0.0);
        assert_eq!(order.estimated_fees, 0.0);
        assert_eq!(order.items[0].quantity, 0);
        assert_eq!(order.items[0].item_price, 0.0);
    }

    #[test]
    fn purchase_instant_parses_iso_timestamps() {
        let order = Order {
            purchase_date: "2026-10-25T14:30:00Z".to_string(),
            ..Default::default()
        };
        let instant = order.purchase_instant().unwrap();
        assert_eq!(instant.to_rfc3339(), "2026-10-25T14:30:00+00:00");
    }

    #[test]
    fn purchase_instant_is_none_for_missing_or_garbage() {
        let empty = Order::default();
        assert!(empty.purchase_instant().is_none());

        let garbage = Order {
            purchase_date: "not-a-date".to_string(),
            ..Default::default()
        };
        assert!(garbage.purchase_instant().is_none());
    }

    #[test]
    fn both_cancelled_spellings_match() {
        for status in ["Canceled", "Cancelled"] {
            let order = Order {
                order_status: status.to_string(),
                ..Default::default()
            };
            assert!(order.is_cancelled());
        }
        let shipped = Order {
            order_status: "Shipped".to_string(),
            ..Default::default()
        };
        assert!(!shipped.is_cancelled());
    }
}
