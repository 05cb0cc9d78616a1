// 2022-2026 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use serde::Deserialize;

use crate::defaults;

/// Record store settings.
///
/// Can be flattened into a host binary's command line with
/// `#[command(flatten)]` or read from JSON with [`StoreConfig::from_json_str`].
#[derive(clap::Args, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Record store database URL (e.g. sqlite://data/records.db)
    #[arg(long = "database-url", env = "PAGER_DATABASE_URL", default_value = defaults::DATABASE_URL)]
    pub database_url: String,

    /// Table holding the paginated records
    #[arg(long = "records-table", env = "PAGER_RECORDS_TABLE", default_value = defaults::RECORDS_TABLE)]
    pub table: String,

    /// Maximum number of pooled store connections
    #[arg(
        long = "max-connections",
        env = "PAGER_MAX_CONNECTIONS",
        default_value_t = defaults::MAX_POOL_CONNECTIONS
    )]
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: defaults::DATABASE_URL.to_string(),
            table: defaults::RECORDS_TABLE.to_string(),
            max_connections: defaults::MAX_POOL_CONNECTIONS,
        }
    }
}

impl StoreConfig {
    pub fn from_json_str(config: &str) -> anyhow::Result<Self> {
        serde_json::from_str(config)
            .map_err(|e| anyhow::format_err!("can't deserialize StoreConfig: {}", e))
    }
}
