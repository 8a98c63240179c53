//! Dice sources.
//!
//! The engine never calls a global random function. Every roll goes
//! through a `DiceSource`, so games can be seeded, replayed, or scripted.
//!
//! - `GameRng`: seeded ChaCha8 die, the production source
//! - `FixedDice`: a scripted sequence, for tests and replays
//!
//! ## Usage
//!
//! ```
//! use ludo_engine::core::{DiceSource, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let value = rng.roll();
//! assert!((1..=6).contains(&value));
//!
//! // Same seed, same rolls
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng2.roll(), value);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// A source of die rolls.
///
/// Implementations must return a value in `1..=6`.
pub trait DiceSource {
    /// Roll the die once.
    fn roll(&mut self) -> u8;
}

/// Deterministic RNG for dice rolls.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// A scripted die that replays a fixed sequence, cycling when exhausted.
///
/// ```
/// use ludo_engine::core::{DiceSource, FixedDice};
///
/// let mut dice = FixedDice::new([6, 3]);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 3);
/// assert_eq!(dice.roll(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl FixedDice {
    /// Create a scripted die.
    ///
    /// # Panics
    ///
    /// If the sequence is empty or contains a value outside `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: Vec<u8> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "FixedDice needs at least one face");
        assert!(
            faces.iter().all(|f| (1..=DIE_FACES).contains(f)),
            "FixedDice faces must be in 1..=6"
        );
        Self { faces, cursor: 0 }
    }

    /// Number of rolls made so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for FixedDice {
    fn roll(&mut self) -> u8 {
        let value = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        value
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(), rng2.roll());
        }
    }

    #[test]
    fn test_rolls_in_range_and_cover_all_faces() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..1000 {
            let value = rng.roll();
            assert!((1..=6).contains(&value));
            seen[(value - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
        assert_ne!(forked1.seed, rng1.seed);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.roll();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [1, 2, 3];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_fixed_dice_cycles() {
        let mut dice = FixedDice::new([1, 2, 3]);
        let rolls: Vec<_> = (0..7).map(|_| dice.roll()).collect();

        assert_eq!(rolls, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(dice.rolls_made(), 7);
    }

    #[test]
    fn test_dice_source_through_reference() {
        fn roll_once<D: DiceSource>(mut dice: D) -> u8 {
            dice.roll()
        }

        let mut dice = FixedDice::new([4]);
        assert_eq!(roll_once(&mut dice), 4);
        assert_eq!(dice.rolls_made(), 1);

        let boxed: Box<dyn DiceSource> = Box::new(GameRng::new(1));
        assert!((1..=6).contains(&roll_once(boxed)));
    }

    #[test]
    #[should_panic(expected = "FixedDice faces must be in 1..=6")]
    fn test_fixed_dice_rejects_out_of_range() {
        let _ = FixedDice::new([0]);
    }

    #[test]
    #[should_panic(expected = "FixedDice needs at least one face")]
    fn test_fixed_dice_rejects_empty() {
        let _ = FixedDice::new(Vec::new());
    }
}
