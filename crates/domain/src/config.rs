use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection settings for the aggregation service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AggregatorConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// One monitored DNS filtering server (Pi-hole, AdGuard Home, Technitium).
///
/// The enabled names form the server universe the scope filter normalizes
/// against.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamServer {
    pub name: String,

    #[serde(default)]
    pub url: String,

    #[serde(default = "default_server_type")]
    pub server_type: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_server_type() -> String {
    "pihole".to_string()
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Command-line overrides applied on top of the loaded file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub aggregator: AggregatorConfig,

    #[serde(default)]
    pub servers: Vec<UpstreamServer>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Load from an explicit path, or from `dnsmon.toml` in the working
    /// directory when present; defaults otherwise.
    pub fn load(path: Option<&str>) -> Result<Self, DomainError> {
        let path = match path {
            Some(explicit) => explicit,
            None if Path::new("dnsmon.toml").exists() => "dnsmon.toml",
            None => return Ok(Self::default()),
        };

        let raw = std::fs::read_to_string(path)
            .map_err(|e| DomainError::ConfigError(format!("cannot read {}: {}", path, e)))?;
        toml::from_str(&raw)
            .map_err(|e| DomainError::ConfigError(format!("cannot parse {}: {}", path, e)))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(base_url) = overrides.base_url {
            self.aggregator.base_url = base_url;
        }
        if let Some(api_key) = overrides.api_key {
            self.aggregator.api_key = Some(api_key);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Names of the enabled servers, in configured order.
    pub fn server_roster(&self) -> Vec<String> {
        self.servers
            .iter()
            .filter(|server| server.enabled)
            .map(|server| server.name.clone())
            .collect()
    }
}
