//! Shared types for the relay.
//!
//! These are the client-facing shapes returned by every endpoint, plus
//! the internal error taxonomy. Upstream wire types live in
//! `upstream::football_data` and never leave the relay uncorrected.

use serde::Serialize;

/// Substituted for absent player position/nationality.
pub const NOT_AVAILABLE: &str = "N/D";

/// Substituted for an absent squad team name.
pub const DEFAULT_TEAM_NAME: &str = "Team";

// ---------------------------------------------------------------------------
// Standings
// ---------------------------------------------------------------------------

/// One row of the league table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub position: u32,
    pub team_name: String,
    pub team_crest_url: String,
    pub points: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    /// Up to five results, in upstream order.
    pub recent_form: Vec<FormResult>,
}

/// A single recent result letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl FormResult {
    /// Maximum number of results kept in a form sequence.
    pub const MAX_LEN: usize = 5;

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(FormResult::Win),
            'D' => Some(FormResult::Draw),
            'L' => Some(FormResult::Loss),
            _ => None,
        }
    }

    /// Parse an upstream form string (`"W,D,L"` or `"WDL"`).
    ///
    /// Separators and unknown characters are skipped; only the last
    /// `MAX_LEN` results are kept.
    pub fn parse_sequence(form: &str) -> Vec<Self> {
        let all: Vec<Self> = form.chars().filter_map(Self::from_letter).collect();
        let start = all.len().saturating_sub(Self::MAX_LEN);
        all[start..].to_vec()
    }
}

// ---------------------------------------------------------------------------
// Teams & squads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: u64,
    pub short_name: String,
    pub crest_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player_name: String,
    pub position: String,
    pub nationality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadSummary {
    pub team_name: String,
    pub crest_url: String,
    pub roster: Vec<RosterEntry>,
}

// ---------------------------------------------------------------------------
// Scorers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerEntry {
    pub player_name: String,
    pub team_short_name: String,
    pub team_crest_url: String,
    pub goals: u32,
    pub assists: u32,
    pub matches_played: u32,
}

// ---------------------------------------------------------------------------
// Forecast
// ---------------------------------------------------------------------------

/// Result of the outcome heuristic for one fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// `"{home} vs {away}"`.
    #[serde(rename = "match")]
    pub fixture: String,
    pub home_team: String,
    pub away_team: String,
    pub current_stats: FormStats,
    pub prediction: OutcomeOdds,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStats {
    pub home_form: String,
    /// Formatted as `+N`.
    pub home_form_bonus: String,
    pub away_form: String,
    pub away_form_bonus: String,
}

/// Percentages formatted with one decimal and a `%` suffix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeOdds {
    pub home_win: String,
    pub draw: String,
    pub away_win: String,
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct WelcomeMessage {
    pub message: String,
}

/// The uniform fail-soft payload: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: &str) -> Self {
        Self { error: message.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Internal failure causes. Handlers collapse every variant to a fixed
/// endpoint message; the variant is only logged.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Upstream network error: {0}")]
    Network(String),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),

    #[error("No team matches {0:?}")]
    TeamNotFound(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            RelayError::UpstreamStatus(status.as_u16())
        } else if e.is_decode() {
            RelayError::MalformedPayload(e.to_string())
        } else {
            RelayError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        RelayError::MalformedPayload(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
