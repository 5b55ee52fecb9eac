use contracts::domain::a004_shipment::aggregate::{Shipment, ShipmentStats};

use crate::shared::store::snapshot::RecordSnapshot;

/// All shipments in store order. The store already returns them grouped
/// the way the sync job wrote them.
pub fn list_all(snapshot: &RecordSnapshot) -> Vec<Shipment> {
    snapshot.shipments.clone()
}

pub fn get_by_id(snapshot: &RecordSnapshot, id: &str) -> Option<Shipment> {
    snapshot.shipments.iter().find(|s| s.id == id).cloned()
}

/// Headline stats: active / in-transit / delivered counts and the estimated
/// unit total across all shipments.
pub fn stats(snapshot: &RecordSnapshot) -> ShipmentStats {
    let mut stats = ShipmentStats::default();
    for shipment in &snapshot.shipments {
        if shipment.is_active() {
            stats.active += 1;
        }
        if shipment.status == "IN_TRANSIT" {
            stats.in_transit += 1;
        }
        if shipment.is_delivered() {
            stats.delivered += 1;
        }
        stats.total_units += shipment.items;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment(id: &str, status: &str, items: i64) -> Shipment {
        Shipment {
            id: id.to_string(),
            status: status.to_string(),
            items,
            ..Default::default()
        }
    }

    fn snapshot() -> RecordSnapshot {
        RecordSnapshot {
            shipments: vec![
                shipment("FBA-1", "WORKING", 100),
                shipment("FBA-2", "IN_TRANSIT", 50),
                shipment("FBA-3", "DELIVERED", 200),
                shipment("FBA-4", "CLOSED", 25),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn stats_group_statuses_like_the_dashboard() {
        let stats = stats(&snapshot());
        // WORKING and IN_TRANSIT are both active
        assert_eq!(stats.active, 2);
        assert_eq!(stats.in_transit, 1);
        // DELIVERED and CLOSED both count as delivered
        assert_eq!(stats.delivered, 2);
        assert_eq!(stats.total_units, 375);
    }

    #[test]
    fn get_by_id_finds_shipments() {
        assert!(get_by_id(&snapshot(), "FBA-2").is_some());
        assert!(get_by_id(&snapshot(), "FBA-9").is_none());
    }
}
