pub mod match_sim;
pub mod scoring;

pub use match_sim::{
    draw_ball, score_over, MatchEngine, MatchPhase, MatchPlan, OverSummary, BALLS_PER_OVER,
    DEFAULT_OVERS,
};
pub use scoring::{
    base_run_value, is_run_out, penalized_run_value, situational_run_value, BallOutcome, BallType,
    ShotType,
};
