//! Prize calculation.
//!
//! `stake x base multiplier x position factor`, exact multiplication with no
//! rounding; two-decimal currency rounding is the display layer's concern.
//! The same formula prices the pre-submission preview and the settled payout
//! of a winning bet.

use coracoes_types::{BetType, Position};

/// Payout for `stake` on `bet_type` at `position`.
///
/// Total over the domain: invalid bet types and positions are
/// unrepresentable, so there is no error path and no silently-wrong number.
pub fn potential_prize(bet_type: BetType, position: Position, stake: f64) -> f64 {
    stake * f64::from(bet_type.base_multiplier()) * position.factor()
}
