use std::sync::Arc;

use chrono::{DateTime, Utc};
use contracts::domain::a001_seller_account::aggregate::SellerAccount;
use contracts::domain::a002_order::aggregate::Order;
use contracts::domain::a003_inventory_item::aggregate::InventoryItem;
use contracts::domain::a004_shipment::aggregate::Shipment;
use once_cell::sync::OnceCell;
use tokio::sync::watch;

use super::client::RecordSource;

/// Immutable full snapshot of the record store.
///
/// Every refresh replaces the whole snapshot; nothing is merged
/// incrementally, so readers never observe a partially updated record set.
#[derive(Debug, Clone, Default)]
pub struct RecordSnapshot {
    pub orders: Vec<Order>,
    pub inventory: Vec<InventoryItem>,
    pub shipments: Vec<Shipment>,
    pub accounts: Vec<SellerAccount>,

    /// None until the first successful refresh ("still loading")
    pub fetched_at: Option<DateTime<Utc>>,
}

impl RecordSnapshot {
    pub fn is_loaded(&self) -> bool {
        self.fetched_at.is_some()
    }
}

static SNAPSHOT_TX: OnceCell<watch::Sender<Arc<RecordSnapshot>>> = OnceCell::new();
static SOURCE: OnceCell<Arc<dyn RecordSource>> = OnceCell::new();

/// Install the record source and publish an empty snapshot.
pub fn initialize(source: Arc<dyn RecordSource>) -> anyhow::Result<()> {
    let (tx, _rx) = watch::channel(Arc::new(RecordSnapshot::default()));
    SNAPSHOT_TX
        .set(tx)
        .map_err(|_| anyhow::anyhow!("Snapshot store already initialized"))?;
    SOURCE
        .set(source)
        .map_err(|_| anyhow::anyhow!("Record source already initialized"))?;
    Ok(())
}

/// The latest published snapshot. Cheap to call: clones an Arc.
pub fn current() -> Arc<RecordSnapshot> {
    SNAPSHOT_TX
        .get()
        .expect("Snapshot store has not been initialized")
        .borrow()
        .clone()
}

/// Fetch all collections and publish a replacement snapshot.
///
/// Any fetch failure abandons the whole refresh and keeps the previous
/// snapshot; the next scheduled poll is the only retry.
pub async fn refresh() -> anyhow::Result<()> {
    let source = SOURCE
        .get()
        .expect("Record source has not been initialized")
        .clone();

    let (orders, inventory, shipments, accounts) = tokio::try_join!(
        source.fetch_orders(),
        source.fetch_inventory(),
        source.fetch_shipments(),
        source.fetch_accounts(),
    )?;

    let snapshot = RecordSnapshot {
        orders,
        inventory,
        shipments,
        accounts,
        fetched_at: Some(Utc::now()),
    };

    tracing::info!(
        "Record snapshot refreshed: {} orders, {} inventory, {} shipments, {} accounts",
        snapshot.orders.len(),
        snapshot.inventory.len(),
        snapshot.shipments.len(),
        snapshot.accounts.len()
    );

    SNAPSHOT_TX
        .get()
        .expect("Snapshot store has not been initialized")
        .send_replace(Arc::new(snapshot));

    Ok(())
}

/// Poll the record source on a fixed interval, replacing the snapshot on
/// every successful pass.
pub fn spawn_listener(poll_interval_secs: u64) {
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(poll_interval_secs.max(1)));
        loop {
            interval.tick().await;
            if let Err(e) = refresh().await {
                tracing::error!("Record snapshot refresh failed: {}", e);
            }
        }
    });
}
