//! Scoring rule utilities for match simulation
//!
//! All functions are pure - they take a delivery description as input and
//! return a run value. This allows easy unit testing without needing a full
//! MatchEngine.
//!
//! Two adjustment rules exist side by side and never compose:
//! `situational_run_value` applies the powerplay/death-over multiplier,
//! `penalized_run_value` applies the wide/no-ball penalty. The ball loop in
//! `match_sim` uses only the penalty rule; the multiplier rule is exposed
//! for callers and tests but is not wired into simulation.

use crate::error::ScoringError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Delivery Description
// ============================================================================

/// What the bat (or the field) produced off one delivery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    /// A scoring shot worth 1..=6 runs. Values outside that band are
    /// rejected by `base_run_value`.
    Scored(u8),
    LegBye,
    Bye,
    Overthrow,
}

/// Legality of the delivery itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum BallType {
    Normal,
    Wide,
    NoBall,
}

/// One delivery, produced and consumed within a single over step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BallOutcome {
    pub shot: ShotType,
    pub ball: BallType,
    pub wicket: bool,
}

// ============================================================================
// Run Value Functions
// ============================================================================

/// Base run value of a shot, before any adjustment.
#[inline]
pub fn base_run_value(shot: ShotType) -> Result<u32, ScoringError> {
    match shot {
        ShotType::LegBye => Ok(1),
        ShotType::Bye => Ok(0),
        ShotType::Overthrow => Ok(4),
        ShotType::Scored(n @ 1..=6) => Ok(u32::from(n)),
        ShotType::Scored(n) => Err(ScoringError::InvalidShotType(n)),
    }
}

/// Base run value scaled by the match situation: x1.2 in the powerplay
/// (overs 1-6), x1.5 in the death overs (over 41 onward), x1.0 otherwise.
/// Fractional results are returned as-is; no rounding step exists.
#[inline]
pub fn situational_run_value(over_number: u32, shot: ShotType) -> Result<f64, ScoringError> {
    let base = f64::from(base_run_value(shot)?);
    let multiplier = if (1..=6).contains(&over_number) {
        1.2
    } else if over_number > 40 {
        1.5
    } else {
        1.0
    };
    Ok(base * multiplier)
}

/// Base run value plus the one-run penalty for an illegal delivery.
/// Does NOT apply the situational multiplier.
#[inline]
pub fn penalized_run_value(ball: BallType, shot: ShotType) -> Result<u32, ScoringError> {
    let penalty = match ball {
        BallType::Wide | BallType::NoBall => 1,
        BallType::Normal => 0,
    };
    Ok(base_run_value(shot)? + penalty)
}

/// Run-out check for a single running attempt. Not consulted by the ball
/// loop; available for callers layering fielding on top of the engine.
#[inline]
pub fn is_run_out(distance_covered: f32, reaction_time: f32) -> bool {
    distance_covered > 30.0 && reaction_time > 2.0
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_run_value_scored_shots() {
        for n in 1..=6u8 {
            assert_eq!(base_run_value(ShotType::Scored(n)).unwrap(), u32::from(n));
        }
    }

    #[test]
    fn test_base_run_value_extras() {
        assert_eq!(base_run_value(ShotType::LegBye).unwrap(), 1);
        assert_eq!(base_run_value(ShotType::Bye).unwrap(), 0);
        assert_eq!(base_run_value(ShotType::Overthrow).unwrap(), 4);
    }

    #[test]
    fn test_base_run_value_rejects_out_of_band() {
        assert_eq!(
            base_run_value(ShotType::Scored(0)),
            Err(ScoringError::InvalidShotType(0))
        );
        assert_eq!(
            base_run_value(ShotType::Scored(7)),
            Err(ScoringError::InvalidShotType(7))
        );
    }

    #[test]
    fn test_situational_powerplay() {
        for over in 1..=6 {
            let v = situational_run_value(over, ShotType::Scored(5)).unwrap();
            assert!((v - 6.0).abs() < 1e-9, "over {} should scale 5 to 6.0, got {}", over, v);
        }
    }

    #[test]
    fn test_situational_middle_overs_unscaled() {
        for over in 7..=40 {
            let v = situational_run_value(over, ShotType::Scored(3)).unwrap();
            assert!((v - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_situational_death_overs() {
        let v = situational_run_value(41, ShotType::Scored(4)).unwrap();
        assert!((v - 6.0).abs() < 1e-9);
        let v = situational_run_value(50, ShotType::LegBye).unwrap();
        assert!((v - 1.5).abs() < 1e-9, "Fractional results are kept as-is");
    }

    #[test]
    fn test_penalized_wide_adds_one() {
        assert_eq!(penalized_run_value(BallType::Wide, ShotType::Scored(4)).unwrap(), 5);
    }

    #[test]
    fn test_penalized_no_ball_on_bye() {
        assert_eq!(penalized_run_value(BallType::NoBall, ShotType::Bye).unwrap(), 1);
    }

    #[test]
    fn test_penalized_normal_is_base() {
        assert_eq!(penalized_run_value(BallType::Normal, ShotType::Scored(6)).unwrap(), 6);
    }

    #[test]
    fn test_every_ball_type_scores_every_legal_shot() {
        use strum::IntoEnumIterator;
        for ball in BallType::iter() {
            for n in 1..=6u8 {
                let runs = penalized_run_value(ball, ShotType::Scored(n)).unwrap();
                // The penalty rule carries no over context; at most one
                // extra run on top of the face value.
                assert!(runs == u32::from(n) || runs == u32::from(n) + 1);
            }
        }
    }

    #[test]
    fn test_run_out_requires_both_conditions() {
        assert!(is_run_out(31.0, 2.1));
        assert!(!is_run_out(31.0, 2.0));
        assert!(!is_run_out(30.0, 2.1));
        assert!(!is_run_out(12.0, 0.4));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: legal scored shots are worth their own face value.
            #[test]
            fn prop_base_value_is_identity_on_1_to_6(n in 1u8..=6) {
                prop_assert_eq!(base_run_value(ShotType::Scored(n)).unwrap(), u32::from(n));
            }

            /// Property: the penalty rule never scales, only adds 0 or 1.
            #[test]
            fn prop_penalty_is_additive(n in 1u8..=6) {
                let base = base_run_value(ShotType::Scored(n)).unwrap();
                let wide = penalized_run_value(BallType::Wide, ShotType::Scored(n)).unwrap();
                let no_ball = penalized_run_value(BallType::NoBall, ShotType::Scored(n)).unwrap();
                let normal = penalized_run_value(BallType::Normal, ShotType::Scored(n)).unwrap();
                prop_assert_eq!(wide, base + 1);
                prop_assert_eq!(no_ball, base + 1);
                prop_assert_eq!(normal, base);
            }

            /// Property: the situational multiplier is 1.2, 1.5, or 1.0
            /// depending only on the over number.
            #[test]
            fn prop_situational_multiplier_bands(over in 1u32..=60, n in 1u8..=6) {
                let base = f64::from(n);
                let v = situational_run_value(over, ShotType::Scored(n)).unwrap();
                let expected = if over <= 6 {
                    base * 1.2
                } else if over > 40 {
                    base * 1.5
                } else {
                    base
                };
                prop_assert!((v - expected).abs() < 1e-9);
            }

            /// Property: out-of-band scored shots always fail, through every
            /// rule that consumes them.
            #[test]
            fn prop_invalid_shot_rejected_everywhere(n in proptest::sample::select(vec![0u8, 7, 8, 20, 255])) {
                prop_assert!(base_run_value(ShotType::Scored(n)).is_err());
                prop_assert!(situational_run_value(10, ShotType::Scored(n)).is_err());
                prop_assert!(penalized_run_value(BallType::Wide, ShotType::Scored(n)).is_err());
            }
        }
    }
}
