//! Seat and hand representations.

use alloc::string::String;
use alloc::vec::Vec;

/// Status of a seat's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HandStatus {
    /// The player may still draw.
    Active,
    /// The player stood voluntarily.
    Stood,
    /// The hand went over the bust threshold.
    Bust,
    /// The hand reached the card limit and was stood automatically.
    Full,
}

impl HandStatus {
    /// Returns whether the seat is done for the game.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Sums card values into a hand total.
#[must_use]
pub fn hand_total(cards: &[u8]) -> u32 {
    cards.iter().map(|&c| u32::from(c)).sum()
}

/// A player's seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    /// Player name.
    name: String,
    /// Card values in draw order.
    cards: Vec<u8>,
    /// Current status of the hand.
    status: HandStatus,
}

impl Seat {
    /// Creates an empty, active seat.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Returns the player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the card values in draw order.
    #[must_use]
    pub fn cards(&self) -> &[u8] {
        &self.cards
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns whether the seat is done for the game.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Returns the hand total.
    #[must_use]
    pub fn total(&self) -> u32 {
        hand_total(&self.cards)
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no card has been drawn yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Adds a card and settles the status.
    ///
    /// Bust takes precedence over reaching the card limit. Finished seats
    /// ignore the card.
    pub(crate) fn add_card(&mut self, card: u8, bust_threshold: u32, max_cards: usize) {
        if self.is_finished() {
            return;
        }
        self.cards.push(card);

        if self.total() > bust_threshold {
            self.status = HandStatus::Bust;
        } else if self.cards.len() >= max_cards {
            self.status = HandStatus::Full;
        }
    }

    /// Stands the seat. A finished seat keeps its status.
    pub(crate) const fn stand(&mut self) {
        if !self.is_finished() {
            self.status = HandStatus::Stood;
        }
    }
}
