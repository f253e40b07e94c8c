//! Submission-time bet record.
//!
//! Handed to the external persistence collaborator on submission. Both the
//! raw heart picks and the derived numbers are retained in parallel; the
//! settlement process later attaches the outcome on its side of the boundary.

use crate::{BetType, Heart, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invariant violations for a [`BetTicket`].
#[derive(Debug, Error, PartialEq)]
pub enum TicketInvariantError {
    #[error("hearts length mismatch (got={got}, need={need})")]
    HeartsLen { got: usize, need: usize },
    #[error("stake must be a finite non-negative amount (got={0})")]
    InvalidStake(f64),
    #[error("draw period must not be empty")]
    EmptyDrawPeriod,
    #[error("derived numbers missing for {0:?}")]
    MissingNumbers(BetType),
}

/// A bet as submitted.
///
/// `numbers` is empty for group double/triple, which define no combination
/// derivation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BetTicket {
    pub bet_type: BetType,
    pub position: Position,
    /// Stake as a currency amount. Exact in the payout formula; two-decimal
    /// rounding happens only at display time.
    pub stake: f64,
    pub hearts: Vec<Heart>,
    pub numbers: Vec<u32>,
    /// Draw period label; format is owned by the external collaborator.
    pub draw_period: String,
}

impl BetTicket {
    /// Check the ticket invariants before handing it across the boundary.
    pub fn validate(&self) -> Result<(), TicketInvariantError> {
        let need = self.bet_type.max_hearts();
        if self.hearts.len() != need {
            return Err(TicketInvariantError::HeartsLen {
                got: self.hearts.len(),
                need,
            });
        }
        if !self.stake.is_finite() || self.stake < 0.0 {
            return Err(TicketInvariantError::InvalidStake(self.stake));
        }
        if self.draw_period.is_empty() {
            return Err(TicketInvariantError::EmptyDrawPeriod);
        }
        if self.bet_type.digit_width().is_some() && self.numbers.is_empty() {
            return Err(TicketInvariantError::MissingNumbers(self.bet_type));
        }
        Ok(())
    }
}
