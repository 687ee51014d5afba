//! Match-outcome heuristic.
//!
//! Scores each side as `points + baseline + form bonus`, weights the home
//! side, and splits a fixed decided-result share between the two. The draw
//! share is constant, so the three figures sum to 100 only because the
//! decided share is 75; they are not a fitted distribution.

pub mod matcher;

use tracing::debug;

use crate::types::{Forecast, FormResult, FormStats, OutcomeOdds};
use crate::upstream::football_data::TableEntry;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Heuristic constants.
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    /// Points added to both sides before weighting.
    pub baseline_points: u32,
    /// Multiplier applied to the home side's adjusted points.
    pub home_advantage: f64,
    /// Percentage split between home and away wins; the rest is the draw.
    pub decided_share: f64,
    pub win_bonus: u32,
    pub draw_bonus: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            baseline_points: 10,
            home_advantage: 1.2,
            decided_share: 75.0,
            win_bonus: 3,
            draw_bonus: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The slice of a standings row the heuristic needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStrength {
    pub display_name: String,
    pub points: u32,
    /// Raw upstream form string, empty when absent.
    pub form: String,
}

impl TeamStrength {
    pub fn from_entry(entry: &TableEntry) -> Self {
        let display_name = entry
            .team
            .short_name
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| entry.team.name.clone());
        Self {
            display_name,
            points: entry.points,
            form: entry.form.clone().unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Forecaster
// ---------------------------------------------------------------------------

pub struct Forecaster {
    config: ForecastConfig,
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new(ForecastConfig::default())
    }
}

impl Forecaster {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// `win_bonus × W + draw_bonus × D` over the whole form string.
    pub fn form_bonus(&self, form: &str) -> u32 {
        form.chars()
            .filter_map(FormResult::from_letter)
            .map(|r| match r {
                FormResult::Win => self.config.win_bonus,
                FormResult::Draw => self.config.draw_bonus,
                FormResult::Loss => 0,
            })
            .sum()
    }

    pub fn adjusted_points(&self, team: &TeamStrength) -> u32 {
        team.points + self.config.baseline_points + self.form_bonus(&team.form)
    }

    /// Home and away win percentages, unrounded.
    pub fn win_shares(&self, home: &TeamStrength, away: &TeamStrength) -> (f64, f64) {
        let home_weighted = f64::from(self.adjusted_points(home)) * self.config.home_advantage;
        let away_adjusted = f64::from(self.adjusted_points(away));
        let combined = home_weighted + away_adjusted;

        if combined <= 0.0 {
            let half = self.config.decided_share / 2.0;
            return (half, half);
        }

        (
            home_weighted / combined * self.config.decided_share,
            away_adjusted / combined * self.config.decided_share,
        )
    }

    pub fn predict(&self, home: &TeamStrength, away: &TeamStrength) -> Forecast {
        let home_bonus = self.form_bonus(&home.form);
        let away_bonus = self.form_bonus(&away.form);
        let (home_pct, away_pct) = self.win_shares(home, away);

        debug!(
            home = %home.display_name,
            away = %away.display_name,
            home_bonus,
            away_bonus,
            home_pct,
            away_pct,
            "Forecast computed"
        );

        Forecast {
            fixture: format!("{} vs {}", home.display_name, away.display_name),
            home_team: home.display_name.clone(),
            away_team: away.display_name.clone(),
            current_stats: FormStats {
                home_form: home.form.clone(),
                home_form_bonus: format!("+{home_bonus}"),
                away_form: away.form.clone(),
                away_form_bonus: format!("+{away_bonus}"),
            },
            prediction: OutcomeOdds {
                home_win: format_pct(home_pct),
                draw: format_pct(100.0 - self.config.decided_share),
                away_win: format_pct(away_pct),
            },
        }
    }
}

/// Round to one decimal and format as `"46.2%"`.
pub fn format_pct(value: f64) -> String {
    format!("{:.1}%", round1(value))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
