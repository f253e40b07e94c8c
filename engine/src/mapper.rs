//! Heart-to-digit mapper.
//!
//! Maintains a bijection between the ten hearts and the digits 0-9 and
//! re-randomizes it on a fixed cadence so players cannot memorize the
//! assignment.
//!
//! Replacement is a whole-map swap under the write lock: a reader holding a
//! [`HeartMap`] snapshot, or taking one, observes either the old or the new
//! permutation in full, never a mix.

use coracoes_types::{Heart, HEART_COUNT};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// One permutation of the digits 0-9, indexed by [`Heart::index`].
///
/// Invariant: the ten entries are always a permutation of {0,...,9}.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeartMap {
    digits: [u8; HEART_COUNT],
}

impl HeartMap {
    /// Uniform random permutation (Fisher-Yates via `SliceRandom::shuffle`)
    /// zipped against [`Heart::ALL`] in its stable order.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut digits: [u8; HEART_COUNT] = core::array::from_fn(|i| i as u8);
        digits.shuffle(rng);
        Self { digits }
    }

    /// Digit currently assigned to `heart` under this permutation.
    pub fn digit_for(self, heart: Heart) -> u8 {
        self.digits[heart.index()]
    }
}

impl Default for HeartMap {
    /// Identity assignment (red=0 ... white=9). Only a fallback; live maps
    /// start shuffled.
    fn default() -> Self {
        Self {
            digits: core::array::from_fn(|i| i as u8),
        }
    }
}

/// Shared owner of the current [`HeartMap`].
///
/// Inject an `Arc<HeartMapper>` wherever digits are needed instead of
/// reaching for module-global state; tests drive [`HeartMapper::regenerate`]
/// directly with a seeded RNG instead of waiting on the wall clock.
pub struct HeartMapper {
    current: RwLock<HeartMap>,
}

impl HeartMapper {
    /// Create a mapper holding a fresh random permutation.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            current: RwLock::new(HeartMap::shuffled(rng)),
        }
    }

    /// The current permutation, whole. Use one snapshot per combination
    /// derivation so all digits come from the same assignment.
    pub fn snapshot(&self) -> HeartMap {
        // A poisoned lock still holds a complete permutation; recover it
        // rather than surfacing an error from a total query.
        match self.current.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Digit currently assigned to `heart`. Total over the ten hearts.
    pub fn digit_for(&self, heart: Heart) -> u8 {
        self.snapshot().digit_for(heart)
    }

    /// Replace the permutation wholesale with a fresh uniform shuffle.
    pub fn regenerate(&self, rng: &mut impl Rng) {
        let next = HeartMap::shuffled(rng);
        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

/// Spawn the recurring rotation task.
///
/// Re-shuffles `mapper` every `interval` until the returned handle is
/// aborted or the runtime shuts down; each tick is instantaneous, so there is
/// nothing in-flight to cancel beyond the task itself.
pub fn spawn_rotation(mapper: Arc<HeartMapper>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rng = StdRng::from_entropy();
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately; skip it so the initial
        // permutation lives a full interval.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            mapper.regenerate(&mut rng);
            trace!("heart map rotated");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_permutation(map: HeartMap) -> bool {
        let mut seen = [false; HEART_COUNT];
        for heart in Heart::ALL {
            let digit = map.digit_for(heart) as usize;
            if digit >= HEART_COUNT || seen[digit] {
                return false;
            }
            seen[digit] = true;
        }
        true
    }

    #[test]
    fn test_shuffled_map_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(is_permutation(HeartMap::shuffled(&mut rng)));
        }
    }

    #[test]
    fn test_default_map_is_identity() {
        let map = HeartMap::default();
        for (idx, heart) in Heart::ALL.iter().enumerate() {
            assert_eq!(map.digit_for(*heart), idx as u8);
        }
    }

    #[test]
    fn test_regenerate_swaps_whole_map() {
        let mut rng = StdRng::seed_from_u64(42);
        let mapper = HeartMapper::new(&mut rng);
        assert!(is_permutation(mapper.snapshot()));

        mapper.regenerate(&mut rng);
        let after = mapper.snapshot();
        assert!(is_permutation(after));
        // Two snapshots with no regeneration in between are identical.
        assert_eq!(mapper.snapshot(), after);
    }

    #[test]
    fn test_regenerations_do_not_collapse() {
        // Statistical check: many regenerations should produce many distinct
        // permutations, not a small fixed subset.
        let mut rng = StdRng::seed_from_u64(1_234);
        let mapper = HeartMapper::new(&mut rng);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            mapper.regenerate(&mut rng);
            let snapshot = mapper.snapshot();
            seen.insert(Heart::ALL.map(|h| snapshot.digit_for(h)));
        }
        assert!(seen.len() > 150, "only {} distinct permutations", seen.len());
    }

    #[test]
    fn test_digit_for_matches_snapshot() {
        let mut rng = StdRng::seed_from_u64(9);
        let mapper = HeartMapper::new(&mut rng);
        let snapshot = mapper.snapshot();
        for heart in Heart::ALL {
            assert_eq!(mapper.digit_for(heart), snapshot.digit_for(heart));
        }
    }

    #[tokio::test]
    async fn test_rotation_task_keeps_map_live() {
        let mut rng = StdRng::seed_from_u64(5);
        let mapper = Arc::new(HeartMapper::new(&mut rng));
        let initial = mapper.snapshot();

        let handle = spawn_rotation(mapper.clone(), Duration::from_millis(5));
        let mut rotated = false;
        for _ in 0..100 {
            tokio::time::sleep(Duration::from_millis(5)).await;
            let snapshot = mapper.snapshot();
            assert!(is_permutation(snapshot));
            if snapshot != initial {
                rotated = true;
                break;
            }
        }
        handle.abort();
        assert!(rotated, "map never rotated away from its initial permutation");
    }

    proptest! {
        #[test]
        fn prop_every_seed_yields_a_permutation(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            prop_assert!(is_permutation(HeartMap::shuffled(&mut rng)));
        }
    }
}
