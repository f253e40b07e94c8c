use std::time::Duration;

/// Number of heart symbols (one per decimal digit).
pub const HEART_COUNT: usize = 10;

/// Interval between heart-map rotations.
///
/// The mapper re-shuffles the heart/digit permutation on this cadence so
/// players cannot memorize a fixed assignment.
pub const MAP_ROTATION_INTERVAL: Duration = Duration::from_secs(3);

/// Largest selection any bet type accepts (thousand: four hearts).
pub const MAX_SELECTION_LEN: usize = 4;

/// Number of ranked payout positions.
pub const POSITION_COUNT: usize = 5;
