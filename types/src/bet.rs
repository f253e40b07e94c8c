//! Bet types and payout positions.
//!
//! Wire tags (persisted by the external collaborator as snake_case strings):
//! simple_group, dozen, hundred, thousand, group_double, group_triple.
//!
//! Per-type tables:
//! - max hearts: simple_group=2, dozen=2, hundred=3, thousand=4,
//!   group_double=2, group_triple=3
//! - digit width: 2/2/3/4; none for the group double/triple variants
//! - base multiplier: 9/30/300/2000/150/250

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wager category. Governs selection arity, combination width, and the base
/// payout multiplier.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetType {
    SimpleGroup = 0,
    Dozen = 1,
    Hundred = 2,
    Thousand = 3,
    GroupDouble = 4,
    GroupTriple = 5,
}

/// Error for bet type tags outside the six defined values.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("unknown bet type tag {0}")]
pub struct InvalidBetType(pub u8);

impl BetType {
    /// All bet types in declaration order.
    pub const ALL: [BetType; 6] = [
        BetType::SimpleGroup,
        BetType::Dozen,
        BetType::Hundred,
        BetType::Thousand,
        BetType::GroupDouble,
        BetType::GroupTriple,
    ];

    /// Number of hearts a selection for this bet type accepts. Pushes beyond
    /// this are rejected.
    pub fn max_hearts(self) -> usize {
        match self {
            BetType::SimpleGroup | BetType::Dozen | BetType::GroupDouble => 2,
            BetType::Hundred | BetType::GroupTriple => 3,
            BetType::Thousand => 4,
        }
    }

    /// Fixed display width of the derived combination, in digits.
    ///
    /// `None` for group double/triple: those accumulate hearts but define no
    /// combination derivation.
    pub fn digit_width(self) -> Option<usize> {
        match self {
            BetType::SimpleGroup | BetType::Dozen => Some(2),
            BetType::Hundred => Some(3),
            BetType::Thousand => Some(4),
            BetType::GroupDouble | BetType::GroupTriple => None,
        }
    }

    /// Base payout multiplier, before the position factor is applied.
    pub fn base_multiplier(self) -> u32 {
        match self {
            BetType::SimpleGroup => 9,
            BetType::Dozen => 30,
            BetType::Hundred => 300,
            BetType::Thousand => 2_000,
            BetType::GroupDouble => 150,
            BetType::GroupTriple => 250,
        }
    }
}

impl TryFrom<u8> for BetType {
    type Error = InvalidBetType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BetType::SimpleGroup),
            1 => Ok(BetType::Dozen),
            2 => Ok(BetType::Hundred),
            3 => Ok(BetType::Thousand),
            4 => Ok(BetType::GroupDouble),
            5 => Ok(BetType::GroupTriple),
            other => Err(InvalidBetType(other)),
        }
    }
}

/// Ranked payout tier. First pays the full multiplier; each lower tier scales
/// it down by 0.2.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Position {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Fifth = 5,
}

/// Error for position ranks outside 1-5.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("position out of range (got={got}, min=1, max=5)")]
pub struct InvalidPosition {
    pub got: u8,
}

impl Position {
    /// All positions, best first.
    pub const ALL: [Position; super::POSITION_COUNT] = [
        Position::First,
        Position::Second,
        Position::Third,
        Position::Fourth,
        Position::Fifth,
    ];

    /// Multiplier scaling factor for this tier.
    pub fn factor(self) -> f64 {
        match self {
            Position::First => 1.0,
            Position::Second => 0.8,
            Position::Third => 0.6,
            Position::Fourth => 0.4,
            Position::Fifth => 0.2,
        }
    }

    /// Rank as persisted (1 best, 5 worst).
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Position {
    type Error = InvalidPosition;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Position::First),
            2 => Ok(Position::Second),
            3 => Ok(Position::Third),
            4 => Ok(Position::Fourth),
            5 => Ok(Position::Fifth),
            got => Err(InvalidPosition { got }),
        }
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_arity_table() {
        assert_eq!(BetType::SimpleGroup.max_hearts(), 2);
        assert_eq!(BetType::Dozen.max_hearts(), 2);
        assert_eq!(BetType::Hundred.max_hearts(), 3);
        assert_eq!(BetType::Thousand.max_hearts(), 4);
        assert_eq!(BetType::GroupDouble.max_hearts(), 2);
        assert_eq!(BetType::GroupTriple.max_hearts(), 3);
    }

    #[test]
    fn test_digit_width_table() {
        assert_eq!(BetType::SimpleGroup.digit_width(), Some(2));
        assert_eq!(BetType::Dozen.digit_width(), Some(2));
        assert_eq!(BetType::Hundred.digit_width(), Some(3));
        assert_eq!(BetType::Thousand.digit_width(), Some(4));
        assert_eq!(BetType::GroupDouble.digit_width(), None);
        assert_eq!(BetType::GroupTriple.digit_width(), None);
    }

    #[test]
    fn test_base_multipliers() {
        assert_eq!(BetType::SimpleGroup.base_multiplier(), 9);
        assert_eq!(BetType::Dozen.base_multiplier(), 30);
        assert_eq!(BetType::Hundred.base_multiplier(), 300);
        assert_eq!(BetType::Thousand.base_multiplier(), 2_000);
        assert_eq!(BetType::GroupDouble.base_multiplier(), 150);
        assert_eq!(BetType::GroupTriple.base_multiplier(), 250);
    }

    #[test]
    fn test_position_factors_descend_by_fifths() {
        let factors: Vec<f64> = Position::ALL.iter().map(|p| p.factor()).collect();
        assert_eq!(factors, vec![1.0, 0.8, 0.6, 0.4, 0.2]);
    }

    #[test]
    fn test_bet_type_serde_matches_persisted_tags() {
        let json = serde_json::to_string(&BetType::SimpleGroup).unwrap();
        assert_eq!(json, "\"simple_group\"");
        let back: BetType = serde_json::from_str("\"group_double\"").unwrap();
        assert_eq!(back, BetType::GroupDouble);
    }

    #[test]
    fn test_position_serde_as_rank() {
        let json = serde_json::to_string(&Position::Third).unwrap();
        assert_eq!(json, "3");
        let back: Position = serde_json::from_str("5").unwrap();
        assert_eq!(back, Position::Fifth);
        assert!(serde_json::from_str::<Position>("0").is_err());
        assert!(serde_json::from_str::<Position>("6").is_err());
    }

    proptest! {
        #[test]
        fn prop_bet_type_tags_roundtrip(tag in 0u8..=255) {
            match BetType::try_from(tag) {
                Ok(bet_type) => prop_assert_eq!(bet_type as u8, tag),
                Err(InvalidBetType(got)) => {
                    prop_assert_eq!(got, tag);
                    prop_assert!(tag >= 6);
                }
            }
        }

        #[test]
        fn prop_position_ranks_roundtrip(rank in 0u8..=255) {
            match Position::try_from(rank) {
                Ok(position) => prop_assert_eq!(position.rank(), rank),
                Err(InvalidPosition { got }) => {
                    prop_assert_eq!(got, rank);
                    prop_assert!(rank == 0 || rank > 5);
                }
            }
        }
    }
}
