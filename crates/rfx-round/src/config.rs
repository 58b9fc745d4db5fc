//! Round engine configuration

use serde::{Deserialize, Serialize};

use crate::paytable::Paytable;
use crate::reel::REEL_COUNT;

/// Slowest allowed tick interval (seconds)
pub const MAX_SPIN_SPEED: f64 = 0.3;

/// Fastest allowed tick interval (seconds)
pub const MIN_SPIN_SPEED: f64 = 0.01;

/// The canonical recording speed: high scores persist only at this setting
pub const RECORD_SPIN_SPEED: f64 = 0.10;

/// Store key the high score persists under
pub const HIGH_SCORE_KEY: &str = "HighScore";

/// Clamp a requested spin speed into the supported range
pub fn clamp_spin_speed(speed: f64) -> f64 {
    speed.clamp(MIN_SPIN_SPEED, MAX_SPIN_SPEED)
}

/// Round engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Seconds between ticks while a reel spins; immutable mid-round
    pub spin_speed: f64,

    /// Values the reels show at rest and reset to after evaluation
    pub start_values: [u8; REEL_COUNT],

    /// Mismatches that end the session
    pub max_failures: u8,

    /// Award values
    pub paytable: Paytable,

    /// Score store key for the persisted high score
    pub high_score_key: String,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            spin_speed: RECORD_SPIN_SPEED,
            start_values: [1, 4, 7],
            max_failures: 3,
            paytable: Paytable::default(),
            high_score_key: HIGH_SCORE_KEY.to_string(),
        }
    }
}

impl RoundConfig {
    /// Default config at a specific spin speed (clamped)
    pub fn with_spin_speed(speed: f64) -> Self {
        Self {
            spin_speed: clamp_spin_speed(speed),
            ..Self::default()
        }
    }

    /// Tick interval in logical milliseconds
    pub fn spin_speed_ms(&self) -> f64 {
        self.spin_speed * 1000.0
    }

    /// Is this the canonical recording speed?
    ///
    /// Exact comparison: only a round configured at precisely 0.10 s
    /// qualifies for high-score recording.
    pub fn is_record_speed(&self) -> bool {
        self.spin_speed == RECORD_SPIN_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.spin_speed, RECORD_SPIN_SPEED);
        assert_eq!(config.start_values, [1, 4, 7]);
        assert_eq!(config.max_failures, 3);
        assert!(config.is_record_speed());
    }

    #[test]
    fn test_spin_speed_clamps() {
        assert_eq!(RoundConfig::with_spin_speed(0.001).spin_speed, MIN_SPIN_SPEED);
        assert_eq!(RoundConfig::with_spin_speed(1.0).spin_speed, MAX_SPIN_SPEED);
        assert_eq!(RoundConfig::with_spin_speed(0.15).spin_speed, 0.15);
    }

    #[test]
    fn test_record_speed_is_exact() {
        assert!(!RoundConfig::with_spin_speed(0.15).is_record_speed());
        assert!(!RoundConfig::with_spin_speed(0.11).is_record_speed());
        assert!(RoundConfig::with_spin_speed(0.10).is_record_speed());
    }

    #[test]
    fn test_serde_roundtrip_with_defaults() {
        let json = "{}";
        let config: RoundConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.start_values, [1, 4, 7]);

        let full = serde_json::to_string(&RoundConfig::with_spin_speed(0.2)).unwrap();
        let back: RoundConfig = serde_json::from_str(&full).unwrap();
        assert_eq!(back.spin_speed, 0.2);
    }
}
