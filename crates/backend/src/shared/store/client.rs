use anyhow::Result;
use async_trait::async_trait;
use contracts::domain::a001_seller_account::aggregate::SellerAccount;
use contracts::domain::a002_order::aggregate::Order;
use contracts::domain::a003_inventory_item::aggregate::InventoryItem;
use contracts::domain::a004_shipment::aggregate::Shipment;
use serde::de::DeserializeOwned;

/// The external record source. The hosted document store owns the data;
/// the hub only ever reads full collections from it.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_orders(&self) -> Result<Vec<Order>>;
    async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>>;
    async fn fetch_shipments(&self) -> Result<Vec<Shipment>>;
    async fn fetch_accounts(&self) -> Result<Vec<SellerAccount>>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record store request for '{collection}' failed with status {status}: {body}")]
    Status {
        collection: String,
        status: u16,
        body: String,
    },

    #[error("record store request for '{collection}' failed: {source}")]
    Transport {
        collection: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("record store returned non-array payload for '{collection}': {source}")]
    Decode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client for the document store's REST surface.
///
/// Collections are fetched whole: `GET {base_url}/collections/{name}/documents`
/// answers a JSON array of plain records.
pub struct HttpStoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStoreClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one collection and decode its records.
    ///
    /// Individual records that fail to decode are skipped with a warning;
    /// the store performs no schema validation, so one malformed document
    /// must not take the whole snapshot down.
    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, StoreError> {
        let url = format!("{}/collections/{}/documents", self.base_url, collection);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|source| StoreError::Transport {
                    collection: collection.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                collection: collection.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| StoreError::Transport {
                collection: collection.to_string(),
                source,
            })?;

        let raw: Vec<serde_json::Value> =
            serde_json::from_str(&body).map_err(|source| StoreError::Decode {
                collection: collection.to_string(),
                source,
            })?;

        let total = raw.len();
        let mut records = Vec::with_capacity(total);
        for value in raw {
            match serde_json::from_value::<T>(value) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping malformed '{}' record: {}", collection, e);
                }
            }
        }

        tracing::debug!(
            "Fetched {}/{} records from collection '{}'",
            records.len(),
            total,
            collection
        );

        Ok(records)
    }
}

#[async_trait]
impl RecordSource for HttpStoreClient {
    async fn fetch_orders(&self) -> Result<Vec<Order>> {
        Ok(self.fetch_collection("orders").await?)
    }

    async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>> {
        Ok(self.fetch_collection("inventory").await?)
    }

    async fn fetch_shipments(&self) -> Result<Vec<Shipment>> {
        Ok(self.fetch_collection("shipments").await?)
    }

    async fn fetch_accounts(&self) -> Result<Vec<SellerAccount>> {
        Ok(self.fetch_collection("seller_accounts").await?)
    }
}
