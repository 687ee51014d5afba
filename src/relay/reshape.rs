//! Upstream → client field remapping.
//!
//! Every optional upstream field is defaulted here.

use crate::types::{
    FormResult, RosterEntry, ScorerEntry, SquadSummary, StandingRow, TeamSummary,
    DEFAULT_TEAM_NAME, NOT_AVAILABLE,
};
use crate::upstream::football_data::{ScorerRecord, SquadMember, TableEntry, TeamDetail, TeamEntry};

pub fn standing_row(entry: &TableEntry) -> StandingRow {
    StandingRow {
        position: entry.position,
        team_name: entry.team.name.clone(),
        team_crest_url: entry.team.crest.clone().unwrap_or_default(),
        points: entry.points,
        played: entry.played_games,
        won: entry.won,
        drawn: entry.draw,
        lost: entry.lost,
        recent_form: entry
            .form
            .as_deref()
            .map(FormResult::parse_sequence)
            .unwrap_or_default(),
    }
}

pub fn team_summary(team: &TeamEntry) -> TeamSummary {
    TeamSummary {
        id: team.id,
        short_name: team.short_name.clone(),
        crest_url: team.crest.clone().unwrap_or_default(),
    }
}

pub fn roster_entry(player: &SquadMember) -> RosterEntry {
    RosterEntry {
        player_name: player.name.clone(),
        position: or_not_available(player.position.as_deref()),
        nationality: or_not_available(player.nationality.as_deref()),
    }
}

pub fn squad_summary(detail: &TeamDetail) -> SquadSummary {
    SquadSummary {
        team_name: detail
            .short_name
            .clone()
            .unwrap_or_else(|| DEFAULT_TEAM_NAME.to_string()),
        crest_url: detail.crest.clone().unwrap_or_default(),
        roster: detail
            .squad
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(roster_entry)
            .collect(),
    }
}

pub fn scorer_entry(record: &ScorerRecord) -> ScorerEntry {
    ScorerEntry {
        player_name: record.player.name.clone(),
        team_short_name: record.team.short_name.clone(),
        team_crest_url: record.team.crest.clone().unwrap_or_default(),
        goals: record.goals.unwrap_or(0),
        assists: record.assists.unwrap_or(0),
        matches_played: record.played_matches.unwrap_or(0),
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}
