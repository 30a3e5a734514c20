//! Canonical defaults for the known config files
//!
//! `config.toml` holds node settings and `app.toml` holds application
//! settings. Field names and defaults here define the current structure
//! that on-disk files are checked against.

use serde::Serialize;

use drift_core::ConfigEntry;

pub const NODE_CONFIG_FILE: &str = "config.toml";
pub const APP_CONFIG_FILE: &str = "app.toml";

/// Node settings (`config.toml`)
#[derive(Debug, Clone, Serialize)]
pub struct NodeConfig {
    pub proxy_app: String,
    pub moniker: String,
    pub db_backend: String,
    pub db_dir: String,
    pub log_level: String,
    pub log_format: String,
    pub rpc: RpcConfig,
    pub p2p: P2pConfig,
    pub mempool: MempoolConfig,
    pub consensus: ConsensusConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct RpcConfig {
    pub laddr: String,
    pub cors_allowed_origins: Vec<String>,
    pub max_open_connections: u32,
    pub timeout_broadcast_tx_commit: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct P2pConfig {
    pub laddr: String,
    pub external_address: String,
    pub seeds: String,
    pub persistent_peers: String,
    pub max_num_inbound_peers: u32,
    pub max_num_outbound_peers: u32,
    pub pex: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MempoolConfig {
    pub size: u32,
    pub cache_size: u32,
    pub max_tx_bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsensusConfig {
    pub timeout_propose: String,
    pub timeout_commit: String,
    pub create_empty_blocks: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            proxy_app: "tcp://127.0.0.1:26658".into(),
            moniker: "node".into(),
            db_backend: "goleveldb".into(),
            db_dir: "data".into(),
            log_level: "info".into(),
            log_format: "plain".into(),
            rpc: RpcConfig {
                laddr: "tcp://127.0.0.1:26657".into(),
                cors_allowed_origins: Vec::new(),
                max_open_connections: 900,
                timeout_broadcast_tx_commit: "10s".into(),
            },
            p2p: P2pConfig {
                laddr: "tcp://0.0.0.0:26656".into(),
                external_address: String::new(),
                seeds: String::new(),
                persistent_peers: String::new(),
                max_num_inbound_peers: 40,
                max_num_outbound_peers: 10,
                pex: true,
            },
            mempool: MempoolConfig {
                size: 5000,
                cache_size: 10000,
                max_tx_bytes: 1_048_576,
            },
            consensus: ConsensusConfig {
                timeout_propose: "3s".into(),
                timeout_commit: "5s".into(),
                create_empty_blocks: true,
            },
        }
    }
}

/// Application settings (`app.toml`)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    pub minimum_gas_prices: String,
    pub pruning: String,
    pub pruning_keep_recent: String,
    pub pruning_interval: String,
    pub halt_height: u64,
    pub halt_time: u64,
    pub min_retain_blocks: u64,
    pub index_events: Vec<String>,
    pub telemetry: TelemetryConfig,
    pub api: ApiConfig,
    pub grpc: GrpcConfig,
    pub state_sync: StateSyncConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TelemetryConfig {
    pub enabled: bool,
    pub service_name: String,
    pub prometheus_retention_time: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApiConfig {
    pub enable: bool,
    pub swagger: bool,
    pub address: String,
    pub max_open_connections: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GrpcConfig {
    pub enable: bool,
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StateSyncConfig {
    pub snapshot_interval: u64,
    pub snapshot_keep_recent: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            minimum_gas_prices: String::new(),
            pruning: "default".into(),
            pruning_keep_recent: "0".into(),
            pruning_interval: "0".into(),
            halt_height: 0,
            halt_time: 0,
            min_retain_blocks: 0,
            index_events: Vec::new(),
            telemetry: TelemetryConfig {
                enabled: false,
                service_name: String::new(),
                prometheus_retention_time: 0,
            },
            api: ApiConfig {
                enable: false,
                swagger: false,
                address: "tcp://0.0.0.0:1317".into(),
                max_open_connections: 1000,
            },
            grpc: GrpcConfig {
                enable: true,
                address: "0.0.0.0:9090".into(),
            },
            state_sync: StateSyncConfig {
                snapshot_interval: 0,
                snapshot_keep_recent: 2,
            },
        }
    }
}

/// The known config files, in the order they are checked.
pub fn builtin_entries() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::new(NODE_CONFIG_FILE, NodeConfig::default),
        ConfigEntry::new(APP_CONFIG_FILE, AppConfig::default),
    ]
}

/// Look up a known config file by name.
pub fn builtin_entry(file_name: &str) -> Option<ConfigEntry> {
    builtin_entries()
        .into_iter()
        .find(|entry| entry.file_name() == file_name)
}

pub fn known_file_names() -> Vec<String> {
    builtin_entries()
        .iter()
        .map(|entry| entry.file_name().to_string())
        .collect()
}
