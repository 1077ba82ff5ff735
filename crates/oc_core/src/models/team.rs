use super::Player;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// One side of a match: the roster plus the running innings totals.
///
/// Roster order is selection order. The innings counters cover exactly one
/// innings; they are zeroed at construction and only the simulator mutates
/// them. `runs_per_over` holds one entry per completed over, so its length
/// always equals `overs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub wickets: u32,
    #[serde(default)]
    pub overs: u32,
    #[serde(default)]
    pub runs_per_over: Vec<u32>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
            runs: 0,
            wickets: 0,
            overs: 0,
            runs_per_over: Vec::new(),
        }
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Remove a player by name, returning the removed record.
    pub fn remove_player(&mut self, name: &str) -> Result<Player> {
        match self.players.iter().position(|p| p.name == name) {
            Some(idx) => Ok(self.players.remove(idx)),
            None => Err(CoreError::PlayerNotFound(name.to_string())),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(CoreError::InvalidParameter("Team name must not be empty".to_string()));
        }
        if self.players.is_empty() {
            return Err(CoreError::InvalidParameter(format!(
                "Team {} must have at least one player",
                self.name
            )));
        }
        Ok(())
    }

    /// Fold one completed over into the innings totals.
    pub(crate) fn record_over(&mut self, over_runs: u32, over_wickets: u32) {
        self.runs += over_runs;
        self.wickets += over_wickets;
        self.overs += 1;
        self.runs_per_over.push(over_runs);
        debug_assert_eq!(self.runs_per_over.len(), self.overs as usize);
    }
}
