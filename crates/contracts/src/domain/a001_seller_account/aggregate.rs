use serde::{Deserialize, Serialize};

/// Seller account registered in the hub.
///
/// Projection of the `seller_accounts` collection. The stored documents also
/// carry LWA credentials (client id/secret, refresh token) for the sync job;
/// those fields are intentionally absent here — the hub never reads them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SellerAccount {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// SP-API region, e.g. "NA" or "EU"
    #[serde(default)]
    pub region: String,

    /// Marketplace codes this account sells in, e.g. ["US", "UK"]
    #[serde(default)]
    pub marketplaces: Vec<String>,
}

impl SellerAccount {
    /// The account every installation starts with before any are registered.
    /// Mirrors the hidden default account the sync job maintains.
    pub fn default_account() -> Self {
        Self {
            id: "default_hidden_account".to_string(),
            name: "Default Account".to_string(),
            region: "NA".to_string(),
            marketplaces: vec!["US".to_string(), "UK".to_string()],
        }
    }
}
