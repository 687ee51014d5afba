//! football-data.org v4 integration.
//!
//! API docs: https://www.football-data.org/documentation/api
//! Base URL: https://api.football-data.org/v4
//! Auth: `X-Auth-Token` header on every request.
//! Free tier: 10 requests/minute.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::debug;

use super::StatsProvider;
use crate::config::UpstreamConfig;
use crate::types::RelayError;

const AUTH_HEADER: &str = "X-Auth-Token";

// ---------------------------------------------------------------------------
// API response types (football-data JSON → Rust)
//
// Only the fields the relay reads are declared. Required fields are plain
// types so a missing key fails decoding; anything the relay defaults is an
// `Option`, which covers both an absent key and an explicit null.
// ---------------------------------------------------------------------------

/// `/competitions/{code}/standings`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsResponse {
    pub standings: Vec<StandingGroup>,
}

/// One standings group (TOTAL, HOME, AWAY). The relay reads the first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingGroup {
    pub table: Vec<TableEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    pub position: u32,
    pub team: TableTeam,
    pub played_games: u32,
    /// e.g. `"W,D,L,W,W"`; null before the first matchday.
    #[serde(default)]
    pub form: Option<String>,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub points: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableTeam {
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
}

/// `/competitions/{code}/teams`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Option<Vec<TeamEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    pub id: u64,
    pub short_name: String,
    #[serde(default)]
    pub crest: Option<String>,
}

/// `/teams/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetail {
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
    #[serde(default)]
    pub squad: Option<Vec<SquadMember>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SquadMember {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

/// `/competitions/{code}/scorers`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorersResponse {
    #[serde(default)]
    pub scorers: Option<Vec<ScorerRecord>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerRecord {
    pub player: ScorerPlayer,
    pub team: ScorerTeam,
    #[serde(default)]
    pub goals: Option<u32>,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub played_matches: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScorerPlayer {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerTeam {
    pub short_name: String,
    #[serde(default)]
    pub crest: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// football-data.org client bound to a single competition.
pub struct FootballDataClient {
    http: Client,
    base_url: String,
    competition: String,
    token: Option<SecretString>,
}

impl FootballDataClient {
    pub fn new(
        base_url: &str,
        competition: &str,
        token: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent("serie-a-relay/0.1.0")
            .build()
            .context("Failed to build HTTP client for football-data")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            competition: competition.to_string(),
            token,
        })
    }

    pub fn from_config(cfg: &UpstreamConfig, token: Option<SecretString>) -> Result<Self> {
        Self::new(
            &cfg.base_url,
            &cfg.competition,
            token,
            Duration::from_secs(cfg.timeout_secs),
        )
    }

    fn competition_path(&self, resource: &str) -> String {
        format!("/competitions/{}/{resource}", self.competition)
    }

    /// GET `{base_url}{path}` and decode the body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RelayError> {
        let url = format!("{}{path}", self.base_url);
        let before = Instant::now();

        let mut req = self.http.get(&url);
        if let Some(token) = &self.token {
            req = req.header(AUTH_HEADER, token.expose_secret());
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            debug!(url = %url, status = status.as_u16(), "football-data returned error status");
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }

        let body = resp.text().await?;
        debug!(url = %url, elapsed = ?before.elapsed(), bytes = body.len(), "football-data call");

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl StatsProvider for FootballDataClient {
    async fn standings(&self) -> Result<StandingsResponse, RelayError> {
        self.get_json(&self.competition_path("standings")).await
    }

    async fn teams(&self) -> Result<TeamsResponse, RelayError> {
        self.get_json(&self.competition_path("teams")).await
    }

    async fn team(&self, team_id: u64) -> Result<TeamDetail, RelayError> {
        self.get_json(&format!("/teams/{team_id}")).await
    }

    async fn scorers(&self) -> Result<ScorersResponse, RelayError> {
        self.get_json(&self.competition_path("scorers")).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
