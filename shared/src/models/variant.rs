use serde::{Deserialize, Serialize};
use std::fmt;

/// Points a single completed suit is worth under the standard rules
pub const DEFAULT_POINTS_PER_SUIT: u32 = 5;

/// Stable identity of a game variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u32);

impl VariantId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VariantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A rule-set of the game as listed in the variant catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub name: String,
    /// Number of suits in the deck
    pub num_suits: u32,
    /// Explicit max score for variants whose stacks are not worth the usual
    /// points per suit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<u32>,
}

impl Variant {
    pub fn new(id: u32, name: &str, num_suits: u32) -> Self {
        Self {
            id: VariantId(id),
            name: name.to_string(),
            num_suits,
            max_score: None,
        }
    }

    pub fn with_max_score(mut self, max_score: u32) -> Self {
        self.max_score = Some(max_score);
        self
    }

    /// Highest score a team can reach in this variant, or `None` if the suit
    /// count times `points_per_suit` does not fit in a `u32`
    pub fn max_score(&self, points_per_suit: u32) -> Option<u32> {
        match self.max_score {
            Some(max_score) => Some(max_score),
            None => self.num_suits.checked_mul(points_per_suit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_max_score_from_suit_count() {
        let variant = Variant::new(0, "No Variant", 5);
        assert_eq!(variant.max_score(DEFAULT_POINTS_PER_SUIT), Some(25));

        let six_suits = Variant::new(1, "6 Suits", 6);
        assert_eq!(six_suits.max_score(DEFAULT_POINTS_PER_SUIT), Some(30));
    }

    #[test]
    fn test_explicit_max_score_wins() {
        let variant = Variant::new(40, "Up or Down (5 Suits)", 5).with_max_score(20);
        assert_eq!(variant.max_score(DEFAULT_POINTS_PER_SUIT), Some(20));

        let huge = Variant::new(41, "Huge", u32::MAX).with_max_score(20);
        assert_eq!(huge.max_score(DEFAULT_POINTS_PER_SUIT), Some(20));
    }

    #[test]
    fn test_max_score_overflow_is_none() {
        let variant = Variant::new(7, "Too Many Suits", u32::MAX / 2);
        assert_eq!(variant.max_score(DEFAULT_POINTS_PER_SUIT), None);
        assert_eq!(variant.max_score(1), Some(u32::MAX / 2));
    }

    #[test]
    fn test_variant_deserialization_without_max_score() {
        let json = r#"{"id": 2, "name": "Black (6 Suits)", "num_suits": 6}"#;
        let variant: Variant = serde_json::from_str(json).unwrap();
        assert_eq!(variant.id, VariantId(2));
        assert_eq!(variant.max_score, None);
    }
}
