//! Route handlers.
//!
//! Every handler is fail-soft: any `RelayError` becomes a fixed
//! `{"error": "..."}` body with status 200, and the cause is only logged.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::relay::Relay;
use crate::types::{ErrorBody, RelayError, WelcomeMessage};

pub type AppState = Arc<Relay>;

pub const WELCOME: &str = "Serie A relay is up and running";
pub const STANDINGS_ERROR: &str = "standings error";
pub const TEAMS_ERROR: &str = "teams error";
pub const SQUAD_ERROR: &str = "squad error";
pub const INVALID_TEAM_ID: &str = "invalid team id";
pub const SCORERS_ERROR: &str = "scorers error";
pub const FORECAST_ERROR: &str = "forecast error";
pub const INVALID_TEAM_NAME: &str = "invalid team name";
pub const TEAMS_NOT_FOUND: &str = "teams not found";

/// Serialize the success value, or collapse the error to `message`.
fn fail_soft<T: Serialize>(route: &str, result: Result<T, RelayError>, message: &str) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            warn!(route, error = %e, "Request failed, returning fail-soft payload");
            Json(ErrorBody::new(message)).into_response()
        }
    }
}

/// GET /
pub async fn root() -> Json<WelcomeMessage> {
    Json(WelcomeMessage { message: WELCOME.to_string() })
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// GET /standings
pub async fn get_standings(State(relay): State<AppState>) -> Response {
    fail_soft("standings", relay.standings().await, STANDINGS_ERROR)
}

/// GET /teams
pub async fn get_teams(State(relay): State<AppState>) -> Response {
    fail_soft("teams", relay.teams().await, TEAMS_ERROR)
}

/// GET /teams/:team_id
pub async fn get_squad(
    State(relay): State<AppState>,
    team_id: Result<Path<u64>, PathRejection>,
) -> Response {
    match team_id {
        Ok(Path(team_id)) => fail_soft("squad", relay.squad(team_id).await, SQUAD_ERROR),
        Err(rejection) => {
            warn!(error = %rejection, "Rejected team id");
            (StatusCode::BAD_REQUEST, Json(ErrorBody::new(INVALID_TEAM_ID))).into_response()
        }
    }
}

/// GET /scorers
pub async fn get_scorers(State(relay): State<AppState>) -> Response {
    fail_soft("scorers", relay.scorers().await, SCORERS_ERROR)
}

/// GET /forecast/:home/:away
pub async fn get_forecast(
    State(relay): State<AppState>,
    teams: Result<Path<(String, String)>, PathRejection>,
) -> Response {
    let (home, away) = match teams {
        Ok(Path(teams)) => teams,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected team names");
            return (StatusCode::BAD_REQUEST, Json(ErrorBody::new(INVALID_TEAM_NAME))).into_response();
        }
    };

    match relay.forecast(&home, &away).await {
        Err(RelayError::TeamNotFound(query)) => {
            warn!(home = %home, away = %away, unmatched = %query, "Forecast team lookup failed");
            Json(ErrorBody::new(TEAMS_NOT_FOUND)).into_response()
        }
        other => fail_soft("forecast", other, FORECAST_ERROR),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
