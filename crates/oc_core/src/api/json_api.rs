//! JSON API for match simulation
//!
//! The outer configuration surface: a request carries the schema version,
//! seed, over count, and both rosters; the response is the serialized
//! `MatchResult`. Errors cross this boundary as strings so embedders do
//! not need the internal error types.

use serde::Deserialize;

use crate::engine::{MatchEngine, MatchPlan, DEFAULT_OVERS};
use crate::models::{Player, Team};

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Overs per innings; both sides always bat the full count.
    #[serde(default = "default_overs")]
    pub overs: u32,
    pub team_a: TeamData,
    pub team_b: TeamData,
}

fn default_overs() -> u32 {
    DEFAULT_OVERS
}

#[derive(Debug, Deserialize)]
pub struct TeamData {
    pub name: String,
    pub players: Vec<PlayerData>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    pub name: String,
    pub age: u8,
    /// Role name, e.g. "batsman", "All-Rounder", "wicket_keeper".
    pub role: String,
}

fn convert_player(data: PlayerData) -> Result<Player, String> {
    let role = data.role.parse().map_err(|e| format!("Player {}: {}", data.name, e))?;
    Ok(Player::new(data.name, data.age, role))
}

fn convert_team(data: TeamData) -> Result<Team, String> {
    let mut team = Team::new(data.name);
    for player in data.players {
        team.add_player(convert_player(player)?);
    }
    Ok(team)
}

/// Build a validated match plan from a parsed request.
pub fn build_plan(request: MatchRequest) -> Result<MatchPlan, String> {
    if request.schema_version != crate::SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let team_a = convert_team(request.team_a)?;
    let team_b = convert_team(request.team_b)?;

    Ok(MatchPlan { team_a, team_b, overs: request.overs, seed: request.seed })
}

/// Parse a request, run the full match, and serialize the result.
pub fn simulate_match_json(request_json: &str) -> Result<String, String> {
    let request: MatchRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    let plan = build_plan(request)?;

    let mut engine = MatchEngine::new(plan).map_err(|e| e.to_string())?;
    let result = engine.simulate().map_err(|e| e.to_string())?;

    serde_json::to_string(&result).map_err(|e| format!("Failed to serialize result: {}", e))
}
