use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub sync: SyncConfig,
    pub pnl: PnlConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Base URL of the hosted document store's REST surface
    pub base_url: String,

    /// Seconds between full-snapshot refreshes
    pub poll_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SyncConfig {
    /// External endpoint that kicks off the SP-API sync job
    pub trigger_url: String,

    /// Seconds before a success/failed sync indicator reverts to idle
    pub status_reset_secs: u64,

    /// Hours between automatic sync triggers; 0 disables the schedule
    pub auto_sync_interval_hours: u64,
}

/// Flat P&L deductions shown on the finance page. The record store has no
/// source for these; they are display-layer constants.
#[derive(Debug, Deserialize, Clone)]
pub struct PnlConfig {
    pub refunds: f64,
    pub promos: f64,
    pub ad_spend: f64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[store]
base_url = "http://localhost:8080"
poll_interval_secs = 60

[sync]
trigger_url = "http://localhost:8080/api/manual_amazon_sync"
status_reset_secs = 3
auto_sync_interval_hours = 4

[pnl]
refunds = 0.0
promos = 0.0
ad_spend = 0.0
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Load the configuration once and keep it for the process lifetime
pub fn initialize() -> anyhow::Result<&'static Config> {
    let config = load_config()?;
    Ok(CONFIG.get_or_init(|| config))
}

pub fn get() -> &'static Config {
    CONFIG.get().expect("Configuration has not been initialized")
}
