use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use serie_a_relay::relay::Relay;
use serie_a_relay::server::build_router;
use serie_a_relay::upstream::football_data::FootballDataClient;

use crate::mock_upstream::MockUpstream;

const TOKEN: &str = "integration-test-token";

fn app_for(base_url: &str, token: Option<&str>) -> Router {
    app_with_timeout(base_url, token, Duration::from_secs(5))
}

fn app_with_timeout(base_url: &str, token: Option<&str>, timeout: Duration) -> Router {
    let client = FootballDataClient::new(
        base_url,
        "SA",
        token.map(|t| SecretString::new(t.to_string())),
        timeout,
    )
    .expect("client should build");
    build_router(Arc::new(Relay::new(Arc::new(client))))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), 1_000_000).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

/// A base URL on which nothing is listening.
async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn test_standings_reshaped_in_order() {
    let upstream = MockUpstream::start().await;
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    let (status, body) = get_json(&app, "/standings").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    let positions: Vec<u64> = rows.iter().map(|r| r["position"].as_u64().unwrap()).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);

    assert_eq!(
        rows[0],
        json!({
            "position": 1,
            "teamName": "FC Internazionale Milano",
            "teamCrestUrl": "https://crests.football-data.org/108.png",
            "points": 50,
            "played": 20,
            "won": 15,
            "drawn": 5,
            "lost": 0,
            "recentForm": ["W", "W", "D", "L", "L"]
        })
    );
    // null crest and null form are defaulted
    assert_eq!(rows[2]["teamCrestUrl"], "");
    assert_eq!(rows[2]["recentForm"], json!([]));
}

#[tokio::test]
async fn test_token_attached_to_upstream_calls() {
    let upstream = MockUpstream::start().await;
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    get_json(&app, "/standings").await;
    get_json(&app, "/teams").await;

    assert_eq!(upstream.seen_tokens(), vec![Some(TOKEN.to_string()); 2]);
    assert_eq!(
        upstream.hits(),
        vec!["/competitions/SA/standings", "/competitions/SA/teams"]
    );
}

#[tokio::test]
async fn test_missing_token_sends_no_header() {
    let upstream = MockUpstream::start().await;
    let app = app_for(&upstream.base_url(), None);

    get_json(&app, "/scorers").await;
    assert_eq!(upstream.seen_tokens(), vec![None]);
}

#[tokio::test]
async fn test_teams() {
    let upstream = MockUpstream::start().await;
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    let (_, body) = get_json(&app, "/teams").await;
    assert_eq!(
        body,
        json!([
            {"id": 108, "shortName": "Inter", "crestUrl": "https://crests.football-data.org/108.png"},
            {"id": 98, "shortName": "Milan", "crestUrl": "https://crests.football-data.org/98.png"},
            {"id": 109, "shortName": "Juventus", "crestUrl": ""}
        ])
    );
}

#[tokio::test]
async fn test_squad() {
    let upstream = MockUpstream::start().await;
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    let (status, body) = get_json(&app, "/teams/98").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["teamName"], "Milan");
    assert_eq!(body["crestUrl"], "https://crests.football-data.org/98.png");

    let roster = body["roster"].as_array().unwrap();
    assert_eq!(roster.len(), 3);
    assert_eq!(
        roster[1],
        json!({"playerName": "Rafael Leão", "position": "Offence", "nationality": "Portugal"})
    );
    assert_eq!(
        roster[2],
        json!({"playerName": "Youth Prospect", "position": "N/D", "nationality": "N/D"})
    );
    assert_eq!(upstream.hits(), vec!["/teams/98"]);
}

#[tokio::test]
async fn test_squad_unknown_team_is_fail_soft() {
    let upstream = MockUpstream::start().await;
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    let (status, body) = get_json(&app, "/teams/424242").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "squad error"}));
}

#[tokio::test]
async fn test_scorers_null_counts_default_to_zero() {
    let upstream = MockUpstream::start().await;
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    let (_, body) = get_json(&app, "/scorers").await;
    let scorers = body.as_array().unwrap();
    assert_eq!(scorers.len(), 2);
    assert_eq!(scorers[0]["assists"], 4);
    assert_eq!(scorers[0]["matchesPlayed"], 19);
    assert_eq!(
        scorers[1],
        json!({
            "playerName": "Dušan Vlahović",
            "teamShortName": "Juventus",
            "teamCrestUrl": "https://crests.football-data.org/109.png",
            "goals": 11,
            "assists": 0,
            "matchesPlayed": 0
        })
    );
}

#[tokio::test]
async fn test_forecast() {
    let upstream = MockUpstream::start().await;
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    let (status, body) = get_json(&app, "/forecast/inter/milan").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "match": "Inter vs Milan",
            "homeTeam": "Inter",
            "awayTeam": "Milan",
            "currentStats": {
                "homeForm": "W,W,D,L,L",
                "homeFormBonus": "+7",
                "awayForm": "",
                "awayFormBonus": "+0"
            },
            "prediction": {
                "homeWin": "46.2%",
                "draw": "25.0%",
                "awayWin": "28.8%"
            }
        })
    );
}

#[tokio::test]
async fn test_forecast_teams_not_found() {
    let upstream = MockUpstream::start().await;
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    let (_, body) = get_json(&app, "/forecast/inter/real%20madrid").await;
    assert_eq!(body, json!({"error": "teams not found"}));
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let upstream = MockUpstream::start().await;
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    for uri in ["/standings", "/teams", "/teams/98", "/scorers", "/forecast/napoli/juve"] {
        let (_, first) = get_json(&app, uri).await;
        let (_, second) = get_json(&app, uri).await;
        assert_eq!(first, second, "{uri} should be idempotent");
    }
}

#[tokio::test]
async fn test_upstream_500_on_every_endpoint() {
    let upstream = MockUpstream::start().await;
    upstream.fail_with(500);
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    for (uri, message) in [
        ("/standings", "standings error"),
        ("/teams", "teams error"),
        ("/teams/98", "squad error"),
        ("/scorers", "scorers error"),
        ("/forecast/inter/milan", "forecast error"),
    ] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({"error": message}), "{uri}");
    }
}

#[tokio::test]
async fn test_upstream_auth_rejection_is_fail_soft() {
    let upstream = MockUpstream::start().await;
    upstream.fail_with(403);
    let app = app_for(&upstream.base_url(), None);

    let (_, body) = get_json(&app, "/teams").await;
    assert_eq!(body, json!({"error": "teams error"}));
}

#[tokio::test]
async fn test_malformed_payload_is_fail_soft() {
    let upstream = MockUpstream::start().await;
    upstream.respond_with_raw("<html>gateway timeout</html>");
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    let (_, body) = get_json(&app, "/standings").await;
    assert_eq!(body, json!({"error": "standings error"}));
    let (_, body) = get_json(&app, "/scorers").await;
    assert_eq!(body, json!({"error": "scorers error"}));
}

#[tokio::test]
async fn test_standings_missing_keys_is_fail_soft() {
    let upstream = MockUpstream::start().await;
    upstream.respond_with_raw(r#"{"standings": []}"#);
    let app = app_for(&upstream.base_url(), Some(TOKEN));

    let (_, body) = get_json(&app, "/standings").await;
    assert_eq!(body, json!({"error": "standings error"}));
    let (_, body) = get_json(&app, "/forecast/inter/milan").await;
    assert_eq!(body, json!({"error": "forecast error"}));
}

#[tokio::test]
async fn test_unreachable_upstream_is_fail_soft() {
    let app = app_for(&dead_base_url().await, Some(TOKEN));

    let (status, body) = get_json(&app, "/standings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "standings error"}));

    let (_, body) = get_json(&app, "/teams/98").await;
    assert_eq!(body, json!({"error": "squad error"}));
}

#[tokio::test]
async fn test_upstream_timeout_is_fail_soft() {
    let upstream = MockUpstream::start().await;
    upstream.stall_for(Duration::from_secs(3));
    let app = app_with_timeout(&upstream.base_url(), Some(TOKEN), Duration::from_secs(1));

    let started = std::time::Instant::now();
    let (status, body) = get_json(&app, "/standings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "standings error"}));
    assert!(started.elapsed() < Duration::from_secs(3));
}
