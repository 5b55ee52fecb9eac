use contracts::domain::a003_inventory_item::aggregate::{InventoryItem, InventoryStatusCounts};
use contracts::enums::fulfillment_channel::StatusFilter;

use crate::shared::store::snapshot::RecordSnapshot;

/// Inventory table listing, filtered by health status and sorted by title.
pub fn list(snapshot: &RecordSnapshot, status: &StatusFilter) -> Vec<InventoryItem> {
    let mut items: Vec<InventoryItem> = snapshot
        .inventory
        .iter()
        .filter(|i| status.matches(&i.status))
        .cloned()
        .collect();
    items.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    items
}

/// Counts for the health tiles above the inventory table
pub fn status_counts(snapshot: &RecordSnapshot) -> InventoryStatusCounts {
    let mut counts = InventoryStatusCounts {
        total: snapshot.inventory.len(),
        ..Default::default()
    };
    for item in &snapshot.inventory {
        match item.status.as_str() {
            "Healthy" => counts.healthy += 1,
            "At Risk" => counts.at_risk += 1,
            "Stranded" => counts.stranded += 1,
            _ => {}
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sku: &str, title: &str, status: &str) -> InventoryItem {
        InventoryItem {
            sku: sku.to_string(),
            title: title.to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    fn snapshot() -> RecordSnapshot {
        RecordSnapshot {
            inventory: vec![
                item("SKU-001", "Wireless Mouse", "Healthy"),
                item("SKU-002", "charging cable", "At Risk"),
                item("SKU-003", "Headphones", "Stranded"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn list_filters_by_exact_status() {
        let healthy = list(&snapshot(), &StatusFilter::from_code("Healthy"));
        assert_eq!(healthy.len(), 1);
        assert_eq!(healthy[0].sku, "SKU-001");

        let all = list(&snapshot(), &StatusFilter::All);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn list_sorts_case_insensitively_by_title() {
        let all = list(&snapshot(), &StatusFilter::All);
        assert_eq!(all[0].sku, "SKU-002"); // "charging cable"
        assert_eq!(all[1].sku, "SKU-003"); // "Headphones"
    }

    #[test]
    fn counts_cover_every_tile() {
        let counts = status_counts(&snapshot());
        assert_eq!(counts.total, 3);
        assert_eq!(counts.healthy, 1);
        assert_eq!(counts.at_risk, 1);
        assert_eq!(counts.stranded, 1);
    }
}
