use dnsmon_application::StatsView;
use dnsmon_domain::{Period, ServerScope, Statistics};

const TOP_LIST_LIMIT: usize = 10;

pub fn print_statistics(view: &StatsView, statistics: &Statistics) {
    println!("Scope: {}", describe_scope(view));
    println!();

    println!("Queries");
    println!("  today      {:>10}", statistics.queries_today);
    println!("  this week  {:>10}", statistics.queries_week);
    println!("  this month {:>10}", statistics.queries_month);
    println!("  total      {:>10}", statistics.queries_total);
    println!(
        "  blocked    {:>10}  ({:.1}%)",
        statistics.blocked_today, statistics.blocked_percentage
    );
    println!(
        "  clients    {:>10}  ({} new)",
        statistics.unique_clients, statistics.new_clients_24h
    );

    if !statistics.top_domains.is_empty() {
        println!();
        println!("Top domains");
        for entry in statistics.top_domains.iter().take(TOP_LIST_LIMIT) {
            println!("  {:>8}  {}", entry.count, entry.domain);
        }
    }

    if !statistics.top_blocked_domains.is_empty() {
        println!();
        println!("Top blocked domains");
        for entry in statistics.top_blocked_domains.iter().take(TOP_LIST_LIMIT) {
            println!("  {:>8}  {}", entry.count, entry.domain);
        }
    }

    if !statistics.top_clients.is_empty() {
        println!();
        println!("Top clients");
        for entry in statistics.top_clients.iter().take(TOP_LIST_LIMIT) {
            match &entry.client_hostname {
                Some(hostname) => {
                    println!("  {:>8}  {} ({})", entry.count, entry.client_ip, hostname)
                }
                None => println!("  {:>8}  {}", entry.count, entry.client_ip),
            }
        }
    }

    if !statistics.queries_by_server.is_empty() {
        println!();
        println!("Per server");
        for entry in &statistics.queries_by_server {
            println!(
                "  {:<20} {:>8} queries  {:>7} blocked  {:>7} cached",
                entry.server, entry.queries, entry.blocked, entry.cached
            );
        }
    }
}

fn describe_scope(view: &StatsView) -> String {
    let period = match view.scope.period {
        Period::Custom => match &view.scope.custom_range {
            Some(range) => format!("{} .. {}", range.from, range.to),
            None => "custom (no range applied)".to_string(),
        },
        preset => format!("last {}", preset),
    };

    let servers = match &view.scope.servers {
        ServerScope::AllServers => "all servers".to_string(),
        ServerScope::Subset(names) => names.iter().cloned().collect::<Vec<_>>().join(", "),
    };

    let clients = if view.selected_clients == view.candidates.len() {
        "all clients".to_string()
    } else {
        format!("{} of {} clients", view.selected_clients, view.candidates.len())
    };

    format!("{} | {} | {}", period, servers, clients)
}
