use serde::{Deserialize, Serialize};

use crate::engine::scoring::{BallOutcome, BallType, ShotType};

/// One observable step of the simulation, buffered into the result so a
/// presentation layer can narrate the match after the fact. The engine
/// itself performs no output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    /// 1 or 2.
    pub innings: u8,
    /// 1-based over number within the innings.
    pub over: u32,
    /// 1-based ball number within the over; absent for over/innings events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball: Option<u8>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<EventDetails>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// One ball bowled and scored.
    Delivery,
    /// Six balls done; over folded into the innings totals.
    OverComplete,
    /// A side's innings finished.
    InningsComplete,
    /// Second innings finished; result is decided.
    MatchEnd,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EventDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wicket: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wickets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot: Option<ShotType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_type: Option<BallType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overs: Option<u32>,
}

impl MatchEvent {
    /// Create a per-ball event.
    pub fn delivery(
        innings: u8,
        over: u32,
        ball: u8,
        outcome: &BallOutcome,
        runs: u32,
    ) -> Self {
        Self {
            innings,
            over,
            ball: Some(ball),
            event_type: EventType::Delivery,
            details: Some(EventDetails {
                runs: Some(runs),
                wicket: Some(outcome.wicket),
                shot: Some(outcome.shot),
                ball_type: Some(outcome.ball),
                ..Default::default()
            }),
        }
    }

    /// Create an over summary event.
    pub fn over_complete(innings: u8, over: u32, runs: u32, wickets: u32) -> Self {
        Self {
            innings,
            over,
            ball: None,
            event_type: EventType::OverComplete,
            details: Some(EventDetails {
                runs: Some(runs),
                wickets: Some(wickets),
                ..Default::default()
            }),
        }
    }

    /// Create an innings summary event.
    pub fn innings_complete(
        innings: u8,
        team: impl Into<String>,
        runs: u32,
        wickets: u32,
        overs: u32,
    ) -> Self {
        Self {
            innings,
            over: overs,
            ball: None,
            event_type: EventType::InningsComplete,
            details: Some(EventDetails {
                team: Some(team.into()),
                runs: Some(runs),
                wickets: Some(wickets),
                overs: Some(overs),
                ..Default::default()
            }),
        }
    }

    /// Create the closing event.
    pub fn match_end(overs: u32) -> Self {
        Self {
            innings: 2,
            over: overs,
            ball: None,
            event_type: EventType::MatchEnd,
            details: None,
        }
    }
}
