//! Heart symbols.
//!
//! Ten fixed selectable hearts, one per decimal digit. Which digit a heart
//! represents at any instant is owned by the engine's rotating mapper, not by
//! the symbol itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A selectable heart symbol.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heart {
    Red = 0,
    Pink = 1,
    Orange = 2,
    Yellow = 3,
    Green = 4,
    Cyan = 5,
    Blue = 6,
    Purple = 7,
    Black = 8,
    White = 9,
}

/// Error for heart tags outside 0-9.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("unknown heart tag {0}")]
pub struct InvalidHeart(pub u8);

impl Heart {
    /// All hearts in their stable declaration order. The mapper zips shuffled
    /// digits against this order; do not reorder.
    pub const ALL: [Heart; super::HEART_COUNT] = [
        Heart::Red,
        Heart::Pink,
        Heart::Orange,
        Heart::Yellow,
        Heart::Green,
        Heart::Cyan,
        Heart::Blue,
        Heart::Purple,
        Heart::Black,
        Heart::White,
    ];

    /// Stable index of this heart in [`Heart::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase color name used in logs and display strings.
    pub fn name(self) -> &'static str {
        match self {
            Heart::Red => "red",
            Heart::Pink => "pink",
            Heart::Orange => "orange",
            Heart::Yellow => "yellow",
            Heart::Green => "green",
            Heart::Cyan => "cyan",
            Heart::Blue => "blue",
            Heart::Purple => "purple",
            Heart::Black => "black",
            Heart::White => "white",
        }
    }
}

impl TryFrom<u8> for Heart {
    type Error = InvalidHeart;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Heart::Red),
            1 => Ok(Heart::Pink),
            2 => Ok(Heart::Orange),
            3 => Ok(Heart::Yellow),
            4 => Ok(Heart::Green),
            5 => Ok(Heart::Cyan),
            6 => Ok(Heart::Blue),
            7 => Ok(Heart::Purple),
            8 => Ok(Heart::Black),
            9 => Ok(Heart::White),
            other => Err(InvalidHeart(other)),
        }
    }
}

impl fmt::Display for Heart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
