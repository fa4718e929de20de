use dnsmon_domain::{CliOverrides, DashboardConfig, DomainError};
use tracing_subscriber::EnvFilter;

pub fn load_config(
    path: Option<&str>,
    overrides: CliOverrides,
) -> Result<DashboardConfig, DomainError> {
    let mut config = DashboardConfig::load(path)?;
    config.apply_overrides(overrides);
    Ok(config)
}

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &DashboardConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
