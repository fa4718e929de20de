use clap::Parser;
use dnsmon_application::StatsCoordinator;
use dnsmon_domain::{CliOverrides, Period};
use dnsmon_infrastructure::RestAggregationGateway;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod render;

#[derive(Parser)]
#[command(name = "dnsmon")]
#[command(version)]
#[command(about = "dnsmon - statistics console for the DNS monitoring dashboard")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Aggregation service base URL
    #[arg(long)]
    base_url: Option<String>,

    /// API key for the aggregation service
    #[arg(long)]
    api_key: Option<String>,

    /// Time period: 24h, 7d or 30d
    #[arg(short, long, default_value = "24h")]
    period: String,

    /// Comma-separated server names to narrow to
    #[arg(long)]
    servers: Option<String>,

    /// Comma-separated client ips to narrow to
    #[arg(long)]
    clients: Option<String>,

    /// Print the raw statistics payload as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_period(value: &str) -> anyhow::Result<Period> {
    match value {
        "24h" => Ok(Period::Last24h),
        "7d" => Ok(Period::Last7d),
        "30d" => Ok(Period::Last30d),
        other => anyhow::bail!("invalid period '{}': expected 24h, 7d or 30d", other),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        base_url: cli.base_url.clone(),
        api_key: cli.api_key.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let period = parse_period(&cli.period)?;

    info!(
        base_url = %config.aggregator.base_url,
        servers = config.servers.len(),
        "dnsmon statistics console v{}",
        env!("CARGO_PKG_VERSION")
    );

    let gateway = Arc::new(RestAggregationGateway::new(&config.aggregator)?);
    let coordinator = StatsCoordinator::new(gateway, config.server_roster());

    coordinator.initialize().await;
    coordinator.select_preset(period).await;

    // Narrowing goes through the same operations the dashboard uses, so the
    // console exercises the exact refresh chain the UI does.
    if let Some(requested) = cli.servers.as_deref() {
        let requested: HashSet<String> = split_list(requested).into_iter().collect();
        for name in config.server_roster() {
            if !requested.contains(&name) {
                coordinator.toggle_server(&name).await;
            }
        }
    }

    if let Some(requested) = cli.clients.as_deref() {
        let requested: HashSet<String> = split_list(requested).into_iter().collect();
        coordinator.open_client_editor();
        for candidate in coordinator.view().candidates {
            if !requested.contains(&candidate.client_ip) {
                coordinator.toggle_client(&candidate.client_ip);
            }
        }
        coordinator.apply_client_selection().await;
    }

    let view = coordinator.view();
    if let Some(error) = &view.error {
        anyhow::bail!("aggregation query failed: {}", error);
    }

    match &view.statistics {
        Some(statistics) if cli.json => {
            println!("{}", serde_json::to_string_pretty(statistics)?);
        }
        Some(_) if view.no_data => {
            println!("No queries recorded for the selected filters.");
        }
        Some(statistics) => render::print_statistics(&view, statistics),
        None => println!("No statistics available."),
    }

    Ok(())
}
