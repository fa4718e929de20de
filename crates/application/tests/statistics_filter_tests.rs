use dnsmon_application::StatsCoordinator;
use dnsmon_domain::ClientCandidate;
use std::sync::Arc;

mod helpers;
use helpers::MockAggregationGateway;

fn household() -> Vec<ClientCandidate> {
    [
        ("192.168.1.10", Some("living-room-tv")),
        ("192.168.1.11", Some("bedroom-tv")),
        ("192.168.1.20", Some("laptop")),
        ("192.168.1.21", None),
        ("192.168.1.30", Some("thermostat")),
    ]
    .into_iter()
    .map(|(ip, hostname)| ClientCandidate {
        client_ip: ip.to_string(),
        client_hostname: hostname.map(str::to_string),
        count: 10,
    })
    .collect()
}

fn coordinator_with(mock: &MockAggregationGateway) -> StatsCoordinator {
    StatsCoordinator::new(Arc::new(mock.clone()), vec!["pihole-a".into()])
}

#[tokio::test]
async fn test_outside_click_commits_exactly_like_apply() {
    let mock = MockAggregationGateway::new();
    mock.set_candidates_for("24h", household());
    let coordinator = coordinator_with(&mock);
    coordinator.initialize().await;

    coordinator.open_client_editor();
    coordinator.toggle_client("192.168.1.21");
    coordinator.handle_outside_interaction().await;

    let by_outside_click = mock.statistics_calls()[1].clients.clone();

    let mock = MockAggregationGateway::new();
    mock.set_candidates_for("24h", household());
    let coordinator = coordinator_with(&mock);
    coordinator.initialize().await;

    coordinator.open_client_editor();
    coordinator.toggle_client("192.168.1.21");
    coordinator.apply_client_selection().await;

    assert_eq!(mock.statistics_calls()[1].clients, by_outside_click);
}

#[tokio::test]
async fn test_text_filter_overrides_checkbox_draft_at_commit() {
    let mock = MockAggregationGateway::new();
    mock.set_candidates_for("24h", household());
    let coordinator = coordinator_with(&mock);
    coordinator.initialize().await;

    coordinator.open_client_editor();
    // Checkbox edits that the active search then supersedes entirely.
    coordinator.toggle_client("192.168.1.20");
    coordinator.toggle_client("192.168.1.30");
    coordinator.set_client_text_filter("tv");
    coordinator.handle_outside_interaction().await;

    let sent = mock.statistics_calls()[1].clients.clone().unwrap();
    assert_eq!(
        sent,
        vec!["192.168.1.10".to_string(), "192.168.1.11".to_string()]
    );
    assert_eq!(coordinator.view().selected_clients, 2);
}

#[tokio::test]
async fn test_text_filter_matching_everything_commits_to_no_filter() {
    let mock = MockAggregationGateway::new();
    mock.set_candidates_for("24h", household());
    let coordinator = coordinator_with(&mock);
    coordinator.initialize().await;

    coordinator.open_client_editor();
    coordinator.set_client_text_filter("192.168");
    coordinator.handle_outside_interaction().await;

    // Every candidate matches, so the committed scope is the whole universe
    // and the request omits the client parameter.
    assert_eq!(mock.statistics_call_count(), 1);
    assert_eq!(coordinator.view().selected_clients, 5);
}

#[tokio::test]
async fn test_reopening_editor_starts_from_committed_scope() {
    let mock = MockAggregationGateway::new();
    mock.set_candidates_for("24h", household());
    let coordinator = coordinator_with(&mock);
    coordinator.initialize().await;

    coordinator.open_client_editor();
    coordinator.toggle_client("192.168.1.10");
    coordinator.apply_client_selection().await;
    assert_eq!(coordinator.view().selected_clients, 4);

    // A fresh open copies the committed 4-client scope; closing unchanged
    // keeps it and triggers nothing.
    coordinator.open_client_editor();
    coordinator.handle_outside_interaction().await;
    assert_eq!(coordinator.view().selected_clients, 4);
    assert_eq!(mock.statistics_call_count(), 2);
}

#[tokio::test]
async fn test_period_change_discards_open_editor_draft() {
    let mock = MockAggregationGateway::new();
    mock.set_candidates_for("24h", household());
    mock.set_clients_for("7d", &["192.168.1.10", "192.168.1.99"]);
    let coordinator = coordinator_with(&mock);
    coordinator.initialize().await;

    coordinator.open_client_editor();
    coordinator.toggle_client("192.168.1.10");
    coordinator
        .select_preset(dnsmon_domain::Period::Last7d)
        .await;

    // The reload replaced the universe and reset the scope to all of it;
    // the draft staged against the old universe is gone with its editor.
    let view = coordinator.view();
    assert!(!view.editor_open);
    assert_eq!(view.selected_clients, 2);
    assert!(view.scope.clients.contains("192.168.1.99"));
}
