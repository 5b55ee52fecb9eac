use serde::{Deserialize, Serialize};

/// FBA inventory record, as written by the external sync job.
///
/// `sku` is the key used for COGS lookups. It is not guaranteed unique
/// across records (the same SKU can appear per account/marketplace pair);
/// when an index is built, the later record wins.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InventoryItem {
    /// Document id, "{account}_{marketplace}_{sku}" in stored data
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub sku: String,

    #[serde(default)]
    pub asin: String,

    #[serde(default)]
    pub title: String,

    /// Unit cost of goods sold, entered by the seller. 0 until entered.
    #[serde(default)]
    pub cogs: f64,

    /// Fulfillable quantity at Amazon
    #[serde(default)]
    pub stock_level: i64,

    /// "Healthy" | "At Risk" | "Stranded" | "OutOfStock" | free text
    #[serde(default)]
    pub status: String,

    /// Listing price, display only
    #[serde(default)]
    pub price: f64,

    #[serde(rename = "accountId", default)]
    pub account_id: String,

    #[serde(rename = "marketplaceId", default)]
    pub marketplace_id: String,
}

/// Counts behind the status tiles above the inventory table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryStatusCounts {
    pub total: usize,
    pub healthy: usize,
    pub at_risk: usize,
    pub stranded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cogs_defaults_to_zero() {
        let json = r#"{"sku": "SKU-009", "title": "Widget", "stock_level": 4}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.cogs, 0.0);
        assert_eq!(item.stock_level, 4);
    }
}
