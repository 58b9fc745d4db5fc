//! Stage — The core enum defining all canonical round phases
//!
//! A Stage is NOT an animation, NOT an engine event.
//! A Stage is the SEMANTIC MEANING of a moment in the round flow.

use serde::{Deserialize, Serialize};

use crate::taxonomy::AwardTier;

/// Canonical round stage — the shared language of reflex-reel round flow
///
/// The engine emits stages; the presentation layer renders and reacts to
/// stages, never to raw engine state transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Stage {
    // ═══════════════════════════════════════════════════════════════════════
    // ROUND LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════
    /// Start pressed, all reels begin cycling
    RoundStart,

    /// Reel is spinning (cycling its value until stopped)
    ReelSpinning {
        /// Which reel (0-indexed)
        reel_index: u8,
    },

    /// Reel has stopped, showing its final value
    ReelStop {
        /// Which reel stopped (0-indexed)
        reel_index: u8,
        /// Value the reel landed on (1..=9)
        value: u8,
    },

    /// All reels stopped, outcome being evaluated
    EvaluateRound,

    // ═══════════════════════════════════════════════════════════════════════
    // OUTCOME
    // ═══════════════════════════════════════════════════════════════════════
    /// All three reels aligned — points awarded
    RoundWon {
        /// Which award tier
        tier: AwardTier,
        /// Points added to the score
        points: u32,
    },

    /// Reels mismatched — one failure recorded
    RoundLost {
        /// Failure count after this loss
        failure_count: u8,
    },

    /// A new high score was recorded
    HighScoreUpdated {
        /// The new high score
        score: u32,
    },

    // ═══════════════════════════════════════════════════════════════════════
    // SESSION
    // ═══════════════════════════════════════════════════════════════════════
    /// Third failure reached — session is over until acknowledged
    GameOver {
        /// Score at the moment the session ended
        final_score: u32,
    },

    /// Session state cleared for a fresh start
    SessionReset,
}

/// Stage category for grouping and trace filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageCategory {
    RoundFlow,
    Outcome,
    Session,
}

impl Stage {
    /// Get the stage category for grouping
    pub fn category(&self) -> StageCategory {
        match self {
            Stage::RoundStart
            | Stage::ReelSpinning { .. }
            | Stage::ReelStop { .. }
            | Stage::EvaluateRound => StageCategory::RoundFlow,

            Stage::RoundWon { .. } | Stage::RoundLost { .. } | Stage::HighScoreUpdated { .. } => {
                StageCategory::Outcome
            }

            Stage::GameOver { .. } | Stage::SessionReset => StageCategory::Session,
        }
    }

    /// Get a simple string name for this stage type
    pub fn type_name(&self) -> &'static str {
        match self {
            Stage::RoundStart => "round_start",
            Stage::ReelSpinning { .. } => "reel_spinning",
            Stage::ReelStop { .. } => "reel_stop",
            Stage::EvaluateRound => "evaluate_round",
            Stage::RoundWon { .. } => "round_won",
            Stage::RoundLost { .. } => "round_lost",
            Stage::HighScoreUpdated { .. } => "high_score_updated",
            Stage::GameOver { .. } => "game_over",
            Stage::SessionReset => "session_reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(Stage::RoundStart.category(), StageCategory::RoundFlow);
        assert_eq!(
            Stage::ReelStop {
                reel_index: 2,
                value: 7
            }
            .category(),
            StageCategory::RoundFlow
        );
        assert_eq!(
            Stage::RoundWon {
                tier: AwardTier::Triple,
                points: 300
            }
            .category(),
            StageCategory::Outcome
        );
        assert_eq!(
            Stage::GameOver { final_score: 600 }.category(),
            StageCategory::Session
        );
    }

    #[test]
    fn test_serde_tagged() {
        let stage = Stage::ReelStop {
            reel_index: 1,
            value: 4,
        };
        let json = serde_json::to_string(&stage).unwrap();
        assert!(json.contains("\"type\":\"reel_stop\""));

        let back: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stage);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Stage::RoundStart.type_name(), "round_start");
        assert_eq!(
            Stage::RoundLost { failure_count: 2 }.type_name(),
            "round_lost"
        );
        assert_eq!(Stage::SessionReset.type_name(), "session_reset");
    }
}
