//! Request relay: one upstream call per operation, reshaped for clients.
//!
//! Each method either returns the full client shape or a `RelayError`;
//! nothing partial is ever returned.

pub mod reshape;

use std::sync::Arc;
use tracing::debug;

use crate::forecast::matcher::find_team;
use crate::forecast::{Forecaster, TeamStrength};
use crate::types::{Forecast, RelayError, ScorerEntry, SquadSummary, StandingRow, TeamSummary};
use crate::upstream::football_data::TableEntry;
use crate::upstream::StatsProvider;

pub struct Relay {
    provider: Arc<dyn StatsProvider>,
    forecaster: Forecaster,
}

impl Relay {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider, forecaster: Forecaster::default() }
    }

    /// The first standings group's table, in upstream order.
    async fn table(&self) -> Result<Vec<TableEntry>, RelayError> {
        let rsp = self.provider.standings().await?;
        rsp.standings
            .into_iter()
            .next()
            .map(|group| group.table)
            .ok_or_else(|| RelayError::MalformedPayload("standings array is empty".into()))
    }

    pub async fn standings(&self) -> Result<Vec<StandingRow>, RelayError> {
        let table = self.table().await?;
        debug!(rows = table.len(), "Standings fetched");
        Ok(table.iter().map(reshape::standing_row).collect())
    }

    pub async fn teams(&self) -> Result<Vec<TeamSummary>, RelayError> {
        let rsp = self.provider.teams().await?;
        Ok(rsp
            .teams
            .unwrap_or_default()
            .iter()
            .map(reshape::team_summary)
            .collect())
    }

    pub async fn squad(&self, team_id: u64) -> Result<SquadSummary, RelayError> {
        let detail = self.provider.team(team_id).await?;
        Ok(reshape::squad_summary(&detail))
    }

    pub async fn scorers(&self) -> Result<Vec<ScorerEntry>, RelayError> {
        let rsp = self.provider.scorers().await?;
        Ok(rsp
            .scorers
            .unwrap_or_default()
            .iter()
            .map(reshape::scorer_entry)
            .collect())
    }

    pub async fn forecast(&self, home: &str, away: &str) -> Result<Forecast, RelayError> {
        let table = self.table().await?;

        let home_row = find_team(&table, home)
            .ok_or_else(|| RelayError::TeamNotFound(home.to_string()))?;
        let away_row = find_team(&table, away)
            .ok_or_else(|| RelayError::TeamNotFound(away.to_string()))?;

        Ok(self.forecaster.predict(
            &TeamStrength::from_entry(home_row),
            &TeamStrength::from_entry(away_row),
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
