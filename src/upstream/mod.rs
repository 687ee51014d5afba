//! Upstream statistics provider.
//!
//! Defines the `StatsProvider` trait and the football-data.org v4
//! implementation. Providers return upstream-shaped payloads; reshaping
//! into client types happens in `relay`.

pub mod football_data;

use async_trait::async_trait;

use crate::types::RelayError;
use football_data::{ScorersResponse, StandingsResponse, TeamDetail, TeamsResponse};

/// Abstraction over the external statistics API.
///
/// One method per upstream endpoint; each performs exactly one call
/// with no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// League table for the configured competition.
    async fn standings(&self) -> Result<StandingsResponse, RelayError>;

    /// Teams registered in the configured competition.
    async fn teams(&self) -> Result<TeamsResponse, RelayError>;

    /// Detail (including squad) for a single team.
    async fn team(&self, team_id: u64) -> Result<TeamDetail, RelayError>;

    /// Top scorers for the configured competition.
    async fn scorers(&self) -> Result<ScorersResponse, RelayError>;
}
