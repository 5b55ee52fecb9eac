use serde::{Deserialize, Serialize};

/// Statuses counted as "active" on the shipments dashboard
pub const ACTIVE_STATUSES: [&str; 4] = ["WORKING", "SHIPPED", "IN_TRANSIT", "RECEIVING"];

/// Statuses counted as "delivered"
pub const DELIVERED_STATUSES: [&str; 3] = ["DELIVERED", "CLOSED", "CHECKED_IN"];

/// Inbound FBA shipment record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Shipment {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub shipment_name: String,

    /// Destination fulfillment center
    #[serde(default)]
    pub destination: String,

    /// SP-API shipment status, e.g. "IN_TRANSIT"
    #[serde(default)]
    pub status: String,

    /// Estimated unit count for the whole shipment
    #[serde(default)]
    pub items: i64,

    #[serde(default)]
    pub created_date: String,

    #[serde(default)]
    pub tracking: String,

    /// Per-SKU contents; empty until a detail sync ran
    #[serde(default)]
    pub shipment_items: Vec<ShipmentItem>,
}

/// One SKU inside a shipment
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShipmentItem {
    #[serde(default)]
    pub sku: String,

    #[serde(default)]
    pub fulfillment_network_sku: String,

    #[serde(default)]
    pub quantity_shipped: i64,

    #[serde(default)]
    pub quantity_received: i64,
}

/// Headline stats for the shipments page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipmentStats {
    pub active: usize,
    pub in_transit: usize,
    pub delivered: usize,
    /// Sum of estimated unit counts across all shipments
    pub total_units: i64,
}

impl Shipment {
    pub fn is_active(&self) -> bool {
        ACTIVE_STATUSES.contains(&self.status.as_str())
    }

    pub fn is_delivered(&self) -> bool {
        DELIVERED_STATUSES.contains(&self.status.as_str())
    }
}
