use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Service configuration, read from a TOML file.
///
/// Every field is optional in the file:
///
/// ```toml
/// data_dir = "/var/lib/macgen"
/// listen = "127.0.0.1:9090"
/// code_prefix = "RRE"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Directory holding the database file.
    pub data_dir: Option<PathBuf>,

    /// Path to the redb database file.
    /// Defaults to `{data_dir}/data.redb` if not specified.
    pub db_path: Option<PathBuf>,

    /// Listen address for the HTTP server.
    pub listen: String,

    /// Fixed prefix of every work-order code.
    pub code_prefix: String,

    /// Name of the singleton work-order sequence counter.
    pub counter_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            db_path: None,
            listen: "0.0.0.0:8080".to_string(),
            code_prefix: "RRE".to_string(),
            counter_name: "macGenerator".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ServiceConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the redb database path, falling back to `{data_dir}/data.redb`.
    pub fn resolve_db_path(&self) -> PathBuf {
        self.db_path.clone().unwrap_or_else(|| {
            self.data_dir
                .as_ref()
                .map(|d| d.join("data.redb"))
                .unwrap_or_else(|| PathBuf::from("data.redb"))
        })
    }
}
