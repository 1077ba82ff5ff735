//! Match result data structures
//!
//! Output sink of the simulation: final team snapshots, the buffered event
//! log, and the decided outcome. Consumers (narration, charts) read this
//! after `simulate()` returns; nothing here is mutated mid-over.

use super::{MatchEvent, Team};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decided result of a completed match. Higher total wins by the run
/// margin; equal totals tie. No wicket- or over-based tiebreak exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MatchOutcome {
    Win { team: String, margin: u32 },
    Tie,
}

impl MatchOutcome {
    pub fn from_totals(team_a: &Team, team_b: &Team) -> Self {
        if team_a.runs > team_b.runs {
            MatchOutcome::Win {
                team: team_a.name.clone(),
                margin: team_a.runs - team_b.runs,
            }
        } else if team_b.runs > team_a.runs {
            MatchOutcome::Win {
                team: team_b.name.clone(),
                margin: team_b.runs - team_a.runs,
            }
        } else {
            MatchOutcome::Tie
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchOutcome::Win { team, margin } => {
                write!(f, "{} wins by {} runs", team, margin)
            }
            MatchOutcome::Tie => write!(f, "Match tied"),
        }
    }
}

/// Quick-display lines derived from a finished result.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchSummary {
    /// e.g. "Team A wins by 5 runs"
    pub result: String,
    /// e.g. "Team A 40/3 (2 ov)"
    pub scoreline_a: String,
    pub scoreline_b: String,
    pub total_overs: u32,
}

fn scoreline(team: &Team) -> String {
    format!("{} {}/{} ({} ov)", team.name, team.runs, team.wickets, team.overs)
}

impl MatchSummary {
    pub fn from_result(result: &MatchResult) -> Self {
        Self {
            result: result.outcome.to_string(),
            scoreline_a: scoreline(&result.team_a),
            scoreline_b: scoreline(&result.team_b),
            total_overs: result.team_a.overs.max(result.team_b.overs),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub schema_version: u8,
    pub seed: u64,
    pub team_a: Team,
    pub team_b: Team,
    pub events: Vec<MatchEvent>,
    pub outcome: MatchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<MatchSummary>,
}

impl MatchResult {
    /// Generate and attach the quick-display summary.
    pub fn finalize(&mut self) {
        self.summary = Some(MatchSummary::from_result(self));
    }
}
