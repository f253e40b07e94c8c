//! Common types used throughout coracoes.
//!
//! The wagering domain: heart symbols, bet types, payout positions, derived
//! combinations, and the submission-time ticket handed to the external
//! persistence layer. All game logic lives in `coracoes-engine`; this crate
//! only defines the vocabulary and its invariants.

pub mod bet;
pub mod combination;
pub mod constants;
pub mod heart;
pub mod ticket;

pub use bet::{BetType, InvalidBetType, InvalidPosition, Position};
pub use combination::Combination;
pub use constants::*;
pub use heart::{Heart, InvalidHeart};
pub use ticket::{BetTicket, TicketInvariantError};
