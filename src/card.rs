//! Card values and card sources.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lowest card value a draw can produce by default.
pub const MIN_CARD: u8 = 2;

/// Highest card value a draw can produce by default.
///
/// Face cards and tens collapse into the 10/11 values, so there is no
/// separate rank or suit.
pub const MAX_CARD: u8 = 11;

/// A source of card values.
///
/// The game asks its source for one value per draw, passing the inclusive
/// range configured in [`TableOptions`](crate::TableOptions).
pub trait CardSource {
    /// Returns the next card value within `low..=high`.
    fn next_card(&mut self, low: u8, high: u8) -> u8;
}

/// Uniformly random card values from a seeded ChaCha8 generator.
#[derive(Debug, Clone)]
pub struct RandomCards {
    rng: ChaCha8Rng,
}

impl RandomCards {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Wraps an existing generator.
    #[must_use]
    pub const fn from_rng(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

impl CardSource for RandomCards {
    fn next_card(&mut self, low: u8, high: u8) -> u8 {
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed sequence of card values, wrapping around at the end.
///
/// Useful for reproducing a game exactly:
///
/// ```
/// use bjtable::{CardSource, ScriptedCards};
///
/// let mut cards = ScriptedCards::new([10, 9]);
/// assert_eq!(cards.next_card(2, 11), 10);
/// assert_eq!(cards.next_card(2, 11), 9);
/// assert_eq!(cards.next_card(2, 11), 10);
/// ```
///
/// Values outside the requested range are clamped into it. An empty script
/// always yields the low end of the range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCards {
    values: Vec<u8>,
    next: usize,
}

impl ScriptedCards {
    /// Creates a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }

    /// Returns how many values have been handed out so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.next
    }
}

impl CardSource for ScriptedCards {
    fn next_card(&mut self, low: u8, high: u8) -> u8 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(low, high)
    }
}
