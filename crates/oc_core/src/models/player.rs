use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Playing role tag. A single flat tag plus capability flags replaces the
/// usual batsman/bowler class split so an all-rounder carries exactly one
/// copy of every counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl Role {
    /// Roles whose batting average is meaningful.
    pub fn can_bat(&self) -> bool {
        matches!(self, Role::Batsman | Role::AllRounder | Role::WicketKeeper)
    }

    /// Roles whose bowling average is meaningful.
    pub fn can_bowl(&self) -> bool {
        matches!(self, Role::Bowler | Role::AllRounder)
    }

    /// Canonical display name (e.g., "All-Rounder").
    pub fn code(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-Rounder",
            Role::WicketKeeper => "Wicket-Keeper",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "batsman" => Ok(Role::Batsman),
            "bowler" => Ok(Role::Bowler),
            "allrounder" => Ok(Role::AllRounder),
            "wicketkeeper" => Ok(Role::WicketKeeper),
            _ => Err(CoreError::InvalidParameter(format!("Unknown role: {}", s))),
        }
    }
}

/// Career record for one player.
///
/// Counters accumulate monotonically; the rate fields are derived and only
/// ever written by the `update_*` methods below. A rate whose divisor is
/// still zero keeps its last computed value (0.0 initially) rather than
/// raising.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    pub age: u8,
    pub role: Role,

    // Career counters
    #[serde(default)]
    pub matches: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub wickets: u32,
    #[serde(default)]
    pub balls_faced: u32,
    #[serde(default)]
    pub balls_bowled: u32,
    #[serde(default)]
    pub runs_conceded: u32,
    #[serde(default)]
    pub catches: u32,
    #[serde(default)]
    pub run_outs: u32,
    #[serde(default)]
    pub stumpings: u32,
    #[serde(default)]
    pub dismissals: u32,

    // Derived rates (recomputed on demand, never set directly)
    #[serde(default)]
    pub strike_rate: f64,
    #[serde(default)]
    pub economy_rate: f64,
    #[serde(default)]
    pub batting_average: f64,
    #[serde(default)]
    pub bowling_average: f64,
}

impl Player {
    pub fn new(name: impl Into<String>, age: u8, role: Role) -> Self {
        Self {
            name: name.into(),
            age,
            role,
            matches: 0,
            runs: 0,
            wickets: 0,
            balls_faced: 0,
            balls_bowled: 0,
            runs_conceded: 0,
            catches: 0,
            run_outs: 0,
            stumpings: 0,
            dismissals: 0,
            strike_rate: 0.0,
            economy_rate: 0.0,
            batting_average: 0.0,
            bowling_average: 0.0,
        }
    }

    /// Runs per 100 balls faced. No-op while `balls_faced == 0`.
    pub fn update_strike_rate(&mut self) {
        if self.balls_faced > 0 {
            self.strike_rate = self.runs as f64 / self.balls_faced as f64 * 100.0;
        }
    }

    /// Runs conceded per six balls bowled. No-op while `balls_bowled == 0`.
    pub fn update_economy_rate(&mut self) {
        if self.balls_bowled > 0 {
            self.economy_rate = self.runs_conceded as f64 / (self.balls_bowled as f64 / 6.0);
        }
    }

    /// Runs per dismissal. Only meaningful for batting roles; a pure
    /// bowler's batting average stays at 0.0 regardless of counters.
    pub fn update_batting_average(&mut self) {
        if self.role.can_bat() && self.dismissals > 0 {
            self.batting_average = self.runs as f64 / self.dismissals as f64;
        }
    }

    /// Runs conceded per wicket taken (lower is better). Only meaningful
    /// for bowling roles.
    pub fn update_bowling_average(&mut self) {
        if self.role.can_bowl() && self.wickets > 0 {
            self.bowling_average = self.runs_conceded as f64 / self.wickets as f64;
        }
    }

    /// Recompute every rate this player's role supports.
    pub fn update_all_rates(&mut self) {
        self.update_strike_rate();
        self.update_economy_rate();
        self.update_batting_average();
        self.update_bowling_average();
    }
}

/// Compare two players on a named metric.
///
/// Returns `true` when `p1` ranks ahead of `p2`. Direction depends on the
/// metric: batting average is higher-is-better, bowling average is
/// lower-is-better. Unknown metric names are rejected, not defaulted.
pub fn compare_players(p1: &Player, p2: &Player, metric: &str) -> Result<bool> {
    match metric {
        "batting_average" => Ok(p1.batting_average > p2.batting_average),
        "bowling_average" => Ok(p1.bowling_average < p2.bowling_average),
        other => Err(CoreError::UnsupportedMetric(other.to_string())),
    }
}
