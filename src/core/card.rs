//! Card values.

use serde::{Deserialize, Serialize};

use super::config::{CARD_MAX, CARD_MIN};

/// A value shown on a card, always within `CARD_MIN..=CARD_MAX`.
///
/// Deserialization goes through [`CardValue::new`], so an out-of-range
/// number never produces a `CardValue`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardValue(u8);

impl CardValue {
    /// Lowest card.
    pub const MIN: Self = Self(CARD_MIN);

    /// Highest card.
    pub const MAX: Self = Self(CARD_MAX);

    /// Create a card value, or `None` if `value` is outside the card range.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= CARD_MIN && value <= CARD_MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CardValue {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(OutOfRange(value))
    }
}

impl From<CardValue> for u8 {
    fn from(value: CardValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A number that does not fit on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("card value {0} outside {min}..={max}", min = CARD_MIN, max = CARD_MAX)]
pub struct OutOfRange(pub u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        assert!(CardValue::new(0).is_none());
        assert_eq!(CardValue::new(1).map(CardValue::get), Some(1));
        assert_eq!(CardValue::new(10).map(CardValue::get), Some(10));
        assert!(CardValue::new(11).is_none());
    }

    #[test]
    fn test_ordering_follows_value() {
        let three = CardValue::new(3).unwrap();
        let seven = CardValue::new(7).unwrap();
        assert!(three < seven);
    }

    #[test]
    fn test_display() {
        assert_eq!(CardValue::new(8).unwrap().to_string(), "8");
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let value: CardValue = serde_json::from_str("4").unwrap();
        assert_eq!(value.get(), 4);
        assert_eq!(serde_json::to_string(&value).unwrap(), "4");

        assert!(serde_json::from_str::<CardValue>("0").is_err());
        assert!(serde_json::from_str::<CardValue>("11").is_err());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = CardValue::try_from(42).unwrap_err();
        assert_eq!(err.to_string(), "card value 42 outside 1..=10");
    }
}
