//! Stage Taxonomy — Enums classifying round outcomes

use serde::{Deserialize, Serialize};

/// Award tier classification for a won round
///
/// A round is won when all three reels show the same value.
/// The tier depends on which value was aligned:
/// - Triple: any ordinary value
/// - TripleSpecial: the designated special value (styled as the red "7")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardTier {
    Triple,
    TripleSpecial,
}

impl AwardTier {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Triple => "TRIPLE",
            Self::TripleSpecial => "TRIPLE 7",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(AwardTier::Triple.display_name(), "TRIPLE");
        assert_eq!(AwardTier::TripleSpecial.display_name(), "TRIPLE 7");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&AwardTier::TripleSpecial).unwrap();
        assert_eq!(json, "\"triple_special\"");
    }
}
