//! Paytable and round award calculation

use serde::{Deserialize, Serialize};

use rfx_stage::AwardTier;

use crate::reel::REEL_COUNT;
use crate::symbols::SymbolSet;

/// Points awarded for a won round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    /// Which tier was hit
    pub tier: AwardTier,
    /// Points added to the score
    pub points: u32,
}

/// Award values for aligned triples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paytable {
    /// Points for any ordinary triple
    pub triple: u32,
    /// Points for a triple on the special glyph
    pub triple_special: u32,
}

impl Default for Paytable {
    fn default() -> Self {
        Self {
            triple: 300,
            triple_special: 500,
        }
    }
}

impl Paytable {
    /// Evaluate a stopped round
    ///
    /// Returns `None` for a mismatch; the caller records the failure.
    pub fn evaluate(&self, values: [u8; REEL_COUNT], symbols: &SymbolSet) -> Option<Award> {
        if values[0] != values[1] || values[1] != values[2] {
            return None;
        }
        if symbols.is_special(values[0]) {
            Some(Award {
                tier: AwardTier::TripleSpecial,
                points: self.triple_special,
            })
        } else {
            Some(Award {
                tier: AwardTier::Triple,
                points: self.triple,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinary_triple() {
        let paytable = Paytable::default();
        let award = paytable.evaluate([4, 4, 4], &SymbolSet::standard()).unwrap();
        assert_eq!(award.tier, AwardTier::Triple);
        assert_eq!(award.points, 300);
    }

    #[test]
    fn test_special_triple() {
        let paytable = Paytable::default();
        let award = paytable.evaluate([6, 6, 6], &SymbolSet::standard()).unwrap();
        assert_eq!(award.tier, AwardTier::TripleSpecial);
        assert_eq!(award.points, 500);
    }

    #[test]
    fn test_displayed_seven_is_not_special() {
        // Value 7 renders as "8"; the special condition follows the stored
        // value, not the rules text.
        let paytable = Paytable::default();
        let award = paytable.evaluate([7, 7, 7], &SymbolSet::standard()).unwrap();
        assert_eq!(award.tier, AwardTier::Triple);
    }

    #[test]
    fn test_mismatch() {
        let paytable = Paytable::default();
        assert!(paytable.evaluate([1, 4, 7], &SymbolSet::standard()).is_none());
        assert!(paytable.evaluate([4, 4, 5], &SymbolSet::standard()).is_none());
        assert!(paytable.evaluate([5, 4, 4], &SymbolSet::standard()).is_none());
    }
}
