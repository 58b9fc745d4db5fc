//! Round result — the outcome of one evaluated round

use serde::{Deserialize, Serialize};

use crate::paytable::Award;
use crate::reel::REEL_COUNT;

/// Complete outcome of one round, produced when the last reel stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Round ID within the session
    pub round_id: String,
    /// Final reel values (1..=9 each)
    pub values: [u8; REEL_COUNT],
    /// Award for an aligned triple; `None` on a mismatch
    pub award: Option<Award>,
    /// Failure count after this round
    pub failure_count: u8,
    /// Score after this round
    pub score: u32,
    /// Did this round end the session?
    pub game_over: bool,
}

impl RoundResult {
    /// Check if this round was won
    pub fn won(&self) -> bool {
        self.award.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfx_stage::AwardTier;

    #[test]
    fn test_won() {
        let result = RoundResult {
            round_id: "round-0001".into(),
            values: [6, 6, 6],
            award: Some(Award {
                tier: AwardTier::TripleSpecial,
                points: 500,
            }),
            failure_count: 0,
            score: 500,
            game_over: false,
        };
        assert!(result.won());
    }

    #[test]
    fn test_serde_roundtrip() {
        let result = RoundResult {
            round_id: "round-0003".into(),
            values: [1, 4, 7],
            award: None,
            failure_count: 2,
            score: 300,
            game_over: false,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: RoundResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
        assert!(!back.won());
    }
}
