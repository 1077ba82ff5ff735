//! Match simulation engine
//!
//! Drives a two-innings limited-overs match: per ball the engine draws a
//! shot, a delivery type, and a wicket flag, scores the ball through the
//! penalty rule, and accumulates the over into the batting side. The layer
//! split mirrors the scoring module doc: `scoring.rs` holds the stateless
//! rules, `score_over` is the pure aggregation step, and `MatchEngine`
//! owns the stateful loop, the RNG, and the event log.
//!
//! Simulation is 100% deterministic: the same `MatchPlan` seed produces the
//! same draws, the same events, and the same result. Only the side batting
//! is mutated; the bowling side's counters are untouched by design.

use crate::engine::scoring::{self, BallOutcome, BallType, ShotType};
use crate::error::{CoreError, Result};
use crate::models::{MatchEvent, MatchOutcome, MatchResult, Team};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub const BALLS_PER_OVER: u8 = 6;
pub const DEFAULT_OVERS: u32 = 2;

/// Everything needed to run one match. Constructing a plan and handing it
/// to `MatchEngine::new` is the whole setup; there is no global state.
#[derive(Debug, Clone)]
pub struct MatchPlan {
    pub team_a: Team,
    pub team_b: Team,
    pub overs: u32,
    pub seed: u64,
}

/// Orchestration state. Innings run strictly in order and never restart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    NotStarted,
    InningsOneInProgress,
    InningsOneComplete,
    InningsTwoInProgress,
    MatchOver,
}

/// Aggregate of one over's six balls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverSummary {
    pub runs: u32,
    pub wickets: u32,
}

/// Draw one delivery: shot value uniform in 1..=6, delivery type uniform
/// over the three legalities, wicket a flat coin flip with no game-state
/// coupling.
pub fn draw_ball<R: Rng>(rng: &mut R) -> BallOutcome {
    let shot = ShotType::Scored(rng.gen_range(1..=6));
    let ball = match rng.gen_range(0..3) {
        0 => BallType::Normal,
        1 => BallType::Wide,
        _ => BallType::NoBall,
    };
    let wicket = rng.gen::<bool>();
    BallOutcome { shot, ball, wicket }
}

/// Score a fixed sequence of deliveries as one over and fold it into the
/// batting side. Pure apart from the team mutation; tests inject draws
/// here to pin down exact totals.
pub fn score_over(team: &mut Team, balls: &[BallOutcome]) -> Result<OverSummary> {
    let mut summary = OverSummary::default();
    for outcome in balls {
        summary.runs += scoring::penalized_run_value(outcome.ball, outcome.shot)?;
        if outcome.wicket {
            summary.wickets += 1;
        }
    }
    team.record_over(summary.runs, summary.wickets);
    Ok(summary)
}

pub struct MatchEngine {
    team_a: Team,
    team_b: Team,
    overs: u32,
    seed: u64,
    rng: ChaCha8Rng,
    phase: MatchPhase,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    pub fn new(plan: MatchPlan) -> Result<Self> {
        if plan.overs == 0 {
            return Err(CoreError::InvalidParameter(
                "Overs count must be at least 1".to_string(),
            ));
        }
        plan.team_a.validate()?;
        plan.team_b.validate()?;

        let rng = ChaCha8Rng::seed_from_u64(plan.seed);
        Ok(Self {
            team_a: plan.team_a,
            team_b: plan.team_b,
            overs: plan.overs,
            seed: plan.seed,
            rng,
            phase: MatchPhase::NotStarted,
            events: Vec::new(),
        })
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Run both innings back to back and decide the match. Both sides bat
    /// the full over count; there is no chase cut-off and no all-out rule.
    pub fn simulate(&mut self) -> Result<MatchResult> {
        if self.phase != MatchPhase::NotStarted {
            return Err(CoreError::InvalidParameter(
                "Match has already been simulated".to_string(),
            ));
        }

        log::info!("Starting match: {} vs {}", self.team_a.name, self.team_b.name);

        self.phase = MatchPhase::InningsOneInProgress;
        self.play_innings(1)?;
        self.phase = MatchPhase::InningsOneComplete;

        self.phase = MatchPhase::InningsTwoInProgress;
        self.play_innings(2)?;
        self.phase = MatchPhase::MatchOver;

        self.events.push(MatchEvent::match_end(self.overs));

        let outcome = MatchOutcome::from_totals(&self.team_a, &self.team_b);
        log::info!("Match over: {}", outcome);

        let mut result = MatchResult {
            schema_version: crate::SCHEMA_VERSION,
            seed: self.seed,
            team_a: self.team_a.clone(),
            team_b: self.team_b.clone(),
            events: std::mem::take(&mut self.events),
            outcome,
            summary: None,
        };
        result.finalize();
        Ok(result)
    }

    fn play_innings(&mut self, innings: u8) -> Result<()> {
        for over_number in 1..=self.overs {
            self.play_over(innings, over_number)?;
        }

        let batting = if innings == 1 { &self.team_a } else { &self.team_b };
        log::info!(
            "Innings {}: {} scored {}/{} in {} overs",
            innings,
            batting.name,
            batting.runs,
            batting.wickets,
            batting.overs
        );
        self.events.push(MatchEvent::innings_complete(
            innings,
            batting.name.clone(),
            batting.runs,
            batting.wickets,
            batting.overs,
        ));
        Ok(())
    }

    fn play_over(&mut self, innings: u8, over_number: u32) -> Result<()> {
        let mut balls = Vec::with_capacity(BALLS_PER_OVER as usize);
        for ball_number in 1..=BALLS_PER_OVER {
            let outcome = draw_ball(&mut self.rng);
            let runs = scoring::penalized_run_value(outcome.ball, outcome.shot)?;
            self.events
                .push(MatchEvent::delivery(innings, over_number, ball_number, &outcome, runs));
            balls.push(outcome);
        }

        let batting = if innings == 1 { &mut self.team_a } else { &mut self.team_b };
        let summary = score_over(batting, &balls)?;
        log::debug!(
            "Innings {} over {}: {} runs, {} wickets",
            innings,
            over_number,
            summary.runs,
            summary.wickets
        );
        self.events
            .push(MatchEvent::over_complete(innings, over_number, summary.runs, summary.wickets));
        Ok(())
    }
}
