//! Read-only reporting interface
//!
//! Pure derivations over finished Team/Player snapshots, shaped for an
//! external renderer (line series and bar charts). Nothing here mutates
//! engine state or performs output.

use crate::models::{Player, Team};
use serde::{Deserialize, Serialize};

/// A team's runs-per-over series padded with zeros up to `total_overs`,
/// so two sides with different recorded over counts plot on one axis.
pub fn runs_per_over_series(team: &Team, total_overs: u32) -> Vec<u32> {
    let mut series = team.runs_per_over.clone();
    series.resize(total_overs as usize, 0);
    series
}

/// One bar of an averages chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AverageBar {
    pub name: String,
    pub value: f64,
}

/// Batting average per player, in roster order.
pub fn batting_average_bars(players: &[Player]) -> Vec<AverageBar> {
    players
        .iter()
        .map(|p| AverageBar { name: p.name.clone(), value: p.batting_average })
        .collect()
}

/// Bowling average per player, in roster order. Lower is better; the
/// renderer decides how to present that.
pub fn bowling_average_bars(players: &[Player]) -> Vec<AverageBar> {
    players
        .iter()
        .map(|p| AverageBar { name: p.name.clone(), value: p.bowling_average })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_series_padded_to_total_overs() {
        let mut team = Team::new("Short Innings XI");
        team.runs = 21;
        team.overs = 2;
        team.runs_per_over = vec![14, 7];

        assert_eq!(runs_per_over_series(&team, 4), vec![14, 7, 0, 0]);
        assert_eq!(runs_per_over_series(&team, 2), vec![14, 7]);
    }

    #[test]
    fn test_average_bars_preserve_roster_order() {
        let mut first = Player::new("First", 30, Role::Batsman);
        first.batting_average = 42.5;
        let mut second = Player::new("Second", 26, Role::Bowler);
        second.bowling_average = 18.0;
        let players = vec![first, second];

        let batting = batting_average_bars(&players);
        assert_eq!(batting[0].name, "First");
        assert!((batting[0].value - 42.5).abs() < 1e-9);
        assert_eq!(batting[1].value, 0.0);

        let bowling = bowling_average_bars(&players);
        assert_eq!(bowling[1].name, "Second");
        assert!((bowling[1].value - 18.0).abs() < 1e-9);
    }
}
