pub mod json_api;

pub use json_api::{build_plan, simulate_match_json, MatchRequest, PlayerData, TeamData};
