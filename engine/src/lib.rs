//! Coracoes wagering engine.
//!
//! Pure, synchronous game logic behind the heart-lottery UI:
//! - [`mapper`]: the rotating heart-to-digit permutation.
//! - [`selection`]: the per-bet-type selection state machine and combination
//!   derivation.
//! - [`prize`]: the payout formula, used both for the pre-submission preview
//!   and by settlement after a draw.
//!
//! ## Consistency requirements
//! A combination derivation reads several hearts' digits; it must never mix
//! digits from two permutations. Take one [`HeartMap`] snapshot per
//! derivation and pass it through, rather than querying the shared mapper
//! digit by digit.

pub mod mapper;
pub mod prize;
pub mod selection;

pub use mapper::{spawn_rotation, HeartMap, HeartMapper};
pub use prize::potential_prize;
pub use selection::{PushOutcome, SelectionBuilder, SelectionError};
