use fpl_leaderboard::{
    config::Config,
    data_fetcher::aggregator::{current_standings, monthly_standings},
    error::AppError,
    ui::leaderboard::render_leaderboard,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_config(api_domain: String) -> Config {
    Config {
        api_domain,
        log_file_path: None,
        http_timeout_seconds: fpl_leaderboard::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
    }
}

fn create_test_client() -> reqwest::Client {
    fpl_leaderboard::data_fetcher::api::http_client::create_http_client_with_timeout(
        fpl_leaderboard::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
    )
    .expect("Failed to create test HTTP client")
}

/// Standings body for a two-manager league, A ahead of B overall
fn standings_body() -> serde_json::Value {
    serde_json::json!({
        "league": { "name": "Walrus United" },
        "standings": {
            "results": [
                {
                    "rank": 1,
                    "player_name": "Alice Example",
                    "entry_name": "Alice Athletic",
                    "entry": 1001,
                    "total": 1234
                },
                {
                    "rank": 2,
                    "player_name": "Bob Example",
                    "entry_name": "Bob Rovers",
                    "entry": 1002,
                    "total": 1180
                }
            ]
        }
    })
}

/// Season schedule with gameweeks 5 and 6 in November 2024
fn bootstrap_body() -> serde_json::Value {
    serde_json::json!({
        "events": [
            { "deadline_time": "2024-08-16T17:30:00Z" },
            { "deadline_time": "2024-08-24T10:00:00Z" },
            { "deadline_time": "2024-09-14T10:00:00Z" },
            { "deadline_time": "2024-10-05T10:00:00Z" },
            { "deadline_time": "2024-11-02T11:00:00Z" },
            { "deadline_time": "2024-11-09T11:00:00Z" },
            { "deadline_time": "2024-12-03T18:30:00Z" }
        ]
    })
}

async fn mount_league(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/leagues-classic/314159/standings/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standings_body()))
        .mount(mock_server)
        .await;
}

async fn mount_bootstrap(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/bootstrap-static/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bootstrap_body()))
        .mount(mock_server)
        .await;
}

/// Alice: all 100 points in gameweek 5. Bob: 80 in gameweek 5, 20 in
/// gameweek 6. Monthly totals tie at 100.
async fn mount_histories(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/entry/1001/history/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": [
                { "event": 4, "points": 30, "total_points": 30 },
                { "event": 5, "points": 100, "total_points": 130 }
            ]
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/entry/1002/history/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": [
                { "event": 4, "points": 50, "total_points": 50 },
                { "event": 5, "points": 80, "total_points": 130 },
                { "event": 6, "points": 20, "total_points": 150 }
            ]
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_monthly_standings_tie_keeps_roster_order() {
    let mock_server = MockServer::start().await;
    let client = create_test_client();
    let config = create_test_config(mock_server.uri());

    mount_league(&mock_server).await;
    mount_bootstrap(&mock_server).await;
    mount_histories(&mock_server).await;

    let entries = monthly_standings(&client, &config, 314159, 11, 2024, 10)
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);

    // Both scored 100 in November; Alice keeps her roster position
    assert_eq!(entries[0].manager.display_name, "Alice Example");
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[0].score, 100);
    assert_eq!(entries[1].manager.display_name, "Bob Example");
    assert_eq!(entries[1].rank, 2);
    assert_eq!(entries[1].score, 100);
}

#[tokio::test]
async fn test_monthly_standings_limit_one_returns_first_of_tie() {
    let mock_server = MockServer::start().await;
    let client = create_test_client();
    let config = create_test_config(mock_server.uri());

    mount_league(&mock_server).await;
    mount_bootstrap(&mock_server).await;
    mount_histories(&mock_server).await;

    let entries = monthly_standings(&client, &config, 314159, 11, 2024, 1)
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].manager.display_name, "Alice Example");
}

#[tokio::test]
async fn test_monthly_standings_limit_zero_returns_empty() {
    let mock_server = MockServer::start().await;
    let client = create_test_client();
    let config = create_test_config(mock_server.uri());

    mount_league(&mock_server).await;
    mount_bootstrap(&mock_server).await;
    mount_histories(&mock_server).await;

    let entries = monthly_standings(&client, &config, 314159, 11, 2024, 0)
        .await
        .unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_monthly_standings_month_without_gameweeks_scores_zero() {
    let mock_server = MockServer::start().await;
    let client = create_test_client();
    let config = create_test_config(mock_server.uri());

    mount_league(&mock_server).await;
    mount_bootstrap(&mock_server).await;
    mount_histories(&mock_server).await;

    // June 2024 has no deadlines; everyone ties at 0 and is still ranked
    let entries = monthly_standings(&client, &config, 314159, 6, 2024, 10)
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|entry| entry.score == 0));
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[0].manager.display_name, "Alice Example");
    assert_eq!(entries[1].rank, 2);
    assert_eq!(entries[1].manager.display_name, "Bob Example");
}

#[tokio::test]
async fn test_monthly_standings_invalid_league_id() {
    let mock_server = MockServer::start().await;
    let client = create_test_client();
    let config = create_test_config(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/leagues-classic/99/standings/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = monthly_standings(&client, &config, 99, 11, 2024, 10).await;

    match result {
        Err(e) => assert!(e.is_invalid_league_id(), "unexpected error: {e}"),
        Ok(_) => panic!("expected InvalidLeagueId"),
    }
}

#[tokio::test]
async fn test_monthly_standings_missing_manager_history_is_fatal() {
    let mock_server = MockServer::start().await;
    let client = create_test_client();
    let config = create_test_config(mock_server.uri());

    mount_league(&mock_server).await;
    mount_bootstrap(&mock_server).await;

    // Alice has history, Bob does not: the report must fail, not skip Bob
    Mock::given(method("GET"))
        .and(path("/entry/1001/history/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": [ { "event": 5, "points": 100, "total_points": 100 } ]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/entry/1002/history/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = monthly_standings(&client, &config, 314159, 11, 2024, 10).await;
    assert!(matches!(
        result,
        Err(AppError::ManagerNotFound {
            manager_id: 1002,
            ..
        })
    ));
}

#[tokio::test]
async fn test_monthly_standings_schedule_unavailable_is_fatal() {
    let mock_server = MockServer::start().await;
    let client = create_test_client();
    let config = create_test_config(mock_server.uri());

    mount_league(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/bootstrap-static/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = monthly_standings(&client, &config, 314159, 11, 2024, 10).await;
    assert!(matches!(result, Err(AppError::ScheduleUnavailable { .. })));
}

#[tokio::test]
async fn test_current_standings_is_idempotent() {
    let mock_server = MockServer::start().await;
    let client = create_test_client();
    let config = create_test_config(mock_server.uri());

    mount_league(&mock_server).await;

    let first = current_standings(&client, &config, 314159, 10).await.unwrap();
    let second = current_standings(&client, &config, 314159, 10).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].rank, 1);
    assert_eq!(first[0].score, 1234);
}

#[tokio::test]
async fn test_current_standings_limit_beyond_roster_returns_whole_roster() {
    let mock_server = MockServer::start().await;
    let client = create_test_client();
    let config = create_test_config(mock_server.uri());

    mount_league(&mock_server).await;

    let entries = current_standings(&client, &config, 314159, 50).await.unwrap();
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn test_rendered_monthly_report() {
    let mock_server = MockServer::start().await;
    let client = create_test_client();
    let config = create_test_config(mock_server.uri());

    mount_league(&mock_server).await;
    mount_bootstrap(&mock_server).await;
    mount_histories(&mock_server).await;

    let entries = monthly_standings(&client, &config, 314159, 11, 2024, 10)
        .await
        .unwrap();

    let title = format!(
        "{} Manager of the Month - November 2024:",
        entries[0].manager.league_name
    );
    let rendered = render_leaderboard(&title, &entries, false);

    assert_eq!(
        rendered,
        "Walrus United Manager of the Month - November 2024:\n\
         \n\
         1. Alice Example (Alice Athletic) - 100\n\
         2. Bob Example (Bob Rovers) - 100\n"
    );
}
