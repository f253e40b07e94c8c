//! Selection state machine.
//!
//! Accumulates heart picks for one bet and, once the bet type's arity is
//! reached, derives the numeric combination from a [`HeartMap`] snapshot.
//!
//! Arity and derivation per bet type:
//! - simple_group: main heart then pair heart (the pair may equal the main);
//!   combination = main*10 + pair
//! - dozen: two hearts, combination = first*10 + second
//! - hundred: three hearts, place values 100/10/1
//! - thousand: four hearts, place values 1000/100/10/1
//! - group_double / group_triple: two / three hearts; no combination
//!   derivation is defined upstream, so [`SelectionBuilder::derive`] refuses
//!   rather than inventing a number.
//!
//! Pushing past the arity is rejected and leaves the selection unchanged;
//! switching bet type or clearing empties it.

use crate::mapper::HeartMap;
use coracoes_types::{BetTicket, BetType, Combination, Heart, Position};
use thiserror::Error;

/// Selection-level failures. All recoverable; the caller surfaces a notice
/// and the selection stays usable.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Push past the bet type's arity. The selection is left unchanged.
    #[error("selection already holds {max} hearts for {bet_type:?}")]
    SelectionFull { bet_type: BetType, max: usize },
    /// Derivation requested before the selection is complete.
    #[error("selection holds {got} of {need} hearts")]
    SelectionIncomplete { got: usize, need: usize },
    /// Group double/triple accumulate hearts but define no combination rule.
    #[error("no combination derivation defined for {0:?}")]
    CombinationUndefined(BetType),
}

/// Result of an accepted push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    /// Heart recorded; `remaining` more are needed.
    Accepted { remaining: usize },
    /// Heart recorded and the selection reached its arity.
    Completed,
}

/// In-progress selection for one bet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionBuilder {
    bet_type: BetType,
    hearts: Vec<Heart>,
}

impl SelectionBuilder {
    /// Start an empty selection for `bet_type`.
    pub fn new(bet_type: BetType) -> Self {
        Self {
            bet_type,
            hearts: Vec::with_capacity(bet_type.max_hearts()),
        }
    }

    pub fn bet_type(&self) -> BetType {
        self.bet_type
    }

    /// Hearts picked so far, in pick order.
    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn is_complete(&self) -> bool {
        self.hearts.len() == self.bet_type.max_hearts()
    }

    /// Picks still needed to complete the selection.
    pub fn remaining(&self) -> usize {
        self.bet_type.max_hearts() - self.hearts.len()
    }

    /// The "main" heart of a simple-group selection (the first pick).
    pub fn main_heart(&self) -> Option<Heart> {
        self.hearts.first().copied()
    }

    /// The "pair" heart of a simple-group selection (the second pick).
    pub fn pair_heart(&self) -> Option<Heart> {
        self.hearts.get(1).copied()
    }

    /// Record a pick. Duplicates are legal; a push past the arity is rejected
    /// with the selection unchanged.
    pub fn push(&mut self, heart: Heart) -> Result<PushOutcome, SelectionError> {
        let max = self.bet_type.max_hearts();
        if self.hearts.len() >= max {
            return Err(SelectionError::SelectionFull {
                bet_type: self.bet_type,
                max,
            });
        }
        self.hearts.push(heart);
        let remaining = max - self.hearts.len();
        if remaining == 0 {
            Ok(PushOutcome::Completed)
        } else {
            Ok(PushOutcome::Accepted { remaining })
        }
    }

    /// Empty the selection, keeping the bet type.
    pub fn clear(&mut self) {
        self.hearts.clear();
    }

    /// Switch bet type. Always starts over with an empty selection.
    pub fn set_bet_type(&mut self, bet_type: BetType) {
        self.bet_type = bet_type;
        self.hearts.clear();
    }

    /// Derive the combination from a completed selection.
    ///
    /// Reads every digit from the single `map` snapshot, so the result is
    /// internally consistent even while the shared mapper keeps rotating.
    pub fn derive(&self, map: HeartMap) -> Result<Combination, SelectionError> {
        if self.bet_type.digit_width().is_none() {
            return Err(SelectionError::CombinationUndefined(self.bet_type));
        }
        if !self.is_complete() {
            return Err(SelectionError::SelectionIncomplete {
                got: self.hearts.len(),
                need: self.bet_type.max_hearts(),
            });
        }
        let digits: Vec<u8> = self.hearts.iter().map(|&h| map.digit_for(h)).collect();
        Ok(Combination::from_digits(&digits))
    }

    /// Package a completed selection into a submission ticket.
    pub fn ticket(
        &self,
        map: HeartMap,
        position: Position,
        stake: f64,
        draw_period: impl Into<String>,
    ) -> Result<BetTicket, SelectionError> {
        if !self.is_complete() {
            return Err(SelectionError::SelectionIncomplete {
                got: self.hearts.len(),
                need: self.bet_type.max_hearts(),
            });
        }
        let numbers = match self.derive(map) {
            Ok(combination) => vec![combination.value()],
            // Group double/triple submit hearts only.
            Err(SelectionError::CombinationUndefined(_)) => vec![],
            Err(err) => return Err(err),
        };
        Ok(BetTicket {
            bet_type: self.bet_type,
            position,
            stake,
            hearts: self.hearts.clone(),
            numbers,
            draw_period: draw_period.into(),
        })
    }
}
