//! Game engine and table state.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use log::debug;

use crate::card::{CardSource, RandomCards};
use crate::error::{ActionError, ConfigError};
use crate::hand::Seat;
use crate::options::{TableConfig, TableOptions};
use crate::result::{PlayerStatus, TableReport};
use crate::sync::Mutex;

mod actions;
mod command;
mod showdown;
pub mod state;

pub use command::Command;
pub use state::GameState;

/// Seats and the turn pointer, guarded together so every transition is
/// atomic.
struct Table {
    /// Seats in turn order.
    seats: Vec<Seat>,
    /// Index of the seat whose turn it is.
    current: Option<usize>,
}

impl Table {
    /// Moves the turn to the first unfinished seat after `acted`, wrapping
    /// around once. Every seat is looked at exactly once.
    fn advance_from(&mut self, acted: usize) {
        let count = self.seats.len();
        self.current = (1..=count)
            .map(|step| (acted + step) % count)
            .find(|&index| !self.seats[index].is_finished());
    }

    fn current_name(&self) -> Option<String> {
        self.current
            .map(|index| self.seats[index].name().to_string())
    }

    fn all_finished(&self) -> bool {
        self.seats.iter().all(Seat::is_finished)
    }

    fn status_of(seat: &Seat) -> PlayerStatus {
        PlayerStatus {
            player: seat.name().to_string(),
            cards: seat.cards().to_vec(),
            total: seat.total(),
            status: seat.status(),
        }
    }
}

/// A card table that tracks hands, turn order and finished seats.
///
/// Only the configured dealer may change the table; everyone may read it.
/// Methods take `&self` and lock internally, so a `Game` can be shared
/// between threads.
///
/// # Example
///
/// ```
/// use bjtable::{Game, TableConfig};
///
/// let game = Game::new(TableConfig::new("Dealer", ["Alice", "Bob"]), 42)?;
/// assert_eq!(game.current_player().as_deref(), Some("Alice"));
///
/// game.stand("Dealer", "Alice")?;
/// assert_eq!(game.current_player().as_deref(), Some("Bob"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Game {
    /// Rule options.
    options: TableOptions,
    /// The only participant allowed to draw or stand for players.
    dealer: String,
    /// Seat index by player name.
    index: HashMap<String, usize>,
    /// Seats and turn pointer.
    table: Mutex<Table>,
    /// Where card values come from.
    source: Mutex<Box<dyn CardSource + Send>>,
}

impl Game {
    /// Opens a table whose cards come from a ChaCha8 generator seeded with
    /// `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: TableConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(config, RandomCards::new(seed))
    }

    /// Opens a table that draws from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no seats, a seat name repeats, the
    /// dealer holds a seat, the card range is empty or starts at zero, or the
    /// hand limit is zero.
    pub fn with_source(
        config: TableConfig,
        source: impl CardSource + Send + 'static,
    ) -> Result<Self, ConfigError> {
        let TableConfig {
            seats,
            dealer,
            options,
        } = config;

        if seats.is_empty() {
            return Err(ConfigError::NoSeats);
        }
        if options.min_card == 0 || options.min_card > options.max_card {
            return Err(ConfigError::InvalidCardRange {
                low: options.min_card,
                high: options.max_card,
            });
        }
        if options.max_cards == 0 {
            return Err(ConfigError::InvalidHandLimit);
        }

        let mut index = HashMap::with_capacity(seats.len());
        for (position, name) in seats.iter().enumerate() {
            if *name == dealer {
                return Err(ConfigError::DealerIsSeat(dealer));
            }
            if index.insert(name.clone(), position).is_some() {
                return Err(ConfigError::DuplicateSeat(name.clone()));
            }
        }

        debug!("opening table with dealer {dealer} and seats {seats:?}");

        Ok(Self {
            options,
            dealer,
            index,
            table: Mutex::new(Table {
                seats: seats.into_iter().map(Seat::new).collect(),
                current: Some(0),
            }),
            source: Mutex::new(Box::new(source)),
        })
    }

    /// Returns the rule options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the dealer's name.
    #[must_use]
    pub fn dealer(&self) -> &str {
        &self.dealer
    }

    /// Returns whether `name` is the dealer.
    #[must_use]
    pub fn is_dealer(&self, name: &str) -> bool {
        self.dealer == name
    }

    /// Returns whether `name` holds a seat.
    #[must_use]
    pub fn has_seat(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the seat names in turn order.
    pub fn seats(&self) -> Vec<String> {
        self.table
            .lock()
            .seats
            .iter()
            .map(|seat| seat.name().to_string())
            .collect()
    }

    /// Returns a copy of the named seat.
    pub fn seat(&self, name: &str) -> Option<Seat> {
        let index = *self.index.get(name)?;
        Some(self.table.lock().seats[index].clone())
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` once every seat is finished.
    pub fn current_player(&self) -> Option<String> {
        self.table.lock().current_name()
    }

    /// Returns whether every seat is finished.
    pub fn is_finished(&self) -> bool {
        self.table.lock().all_finished()
    }

    /// Returns the current game phase.
    pub fn state(&self) -> GameState {
        let table = self.table.lock();
        if table.all_finished() {
            GameState::AllFinished
        } else if table
            .seats
            .iter()
            .all(|seat| seat.is_empty() && !seat.is_finished())
        {
            GameState::Setup
        } else {
            GameState::InProgress
        }
    }

    /// Returns the named player's hand, total and status.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has no seat.
    pub fn player_status(&self, player: &str) -> Result<PlayerStatus, ActionError> {
        let index = self.seat_index(player)?;
        Ok(Table::status_of(&self.table.lock().seats[index]))
    }

    /// Returns every seat's hand and status, and whose turn it is.
    pub fn table_status(&self) -> TableReport {
        let table = self.table.lock();
        TableReport {
            seats: table.seats.iter().map(Table::status_of).collect(),
            current: table.current_name(),
        }
    }

    fn seat_index(&self, player: &str) -> Result<usize, ActionError> {
        self.index
            .get(player)
            .copied()
            .ok_or_else(|| ActionError::UnknownPlayer(player.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ScriptedCards;

    fn config() -> TableConfig {
        TableConfig::new("Dealer", ["A", "B", "C"])
    }

    #[test]
    fn advance_wraps_and_skips_finished_seats() {
        let mut table = Table {
            seats: ["A", "B", "C"]
                .into_iter()
                .map(|name| Seat::new(name.to_string()))
                .collect(),
            current: Some(2),
        };
        table.seats[2].stand();
        table.seats[0].stand();
        table.advance_from(2);
        assert_eq!(table.current, Some(1));

        table.seats[1].stand();
        table.advance_from(1);
        assert_eq!(table.current, None);
    }

    #[test]
    fn config_errors() {
        assert_eq!(
            Game::new(TableConfig::new("D", Vec::<String>::new()), 0).err(),
            Some(ConfigError::NoSeats)
        );
        assert_eq!(
            Game::new(TableConfig::new("D", ["A", "A"]), 0).err(),
            Some(ConfigError::DuplicateSeat("A".to_string()))
        );
        assert_eq!(
            Game::new(TableConfig::new("A", ["A", "B"]), 0).err(),
            Some(ConfigError::DealerIsSeat("A".to_string()))
        );
        let bad_range = config().with_options(TableOptions::default().with_card_range(9, 3));
        assert_eq!(
            Game::new(bad_range, 0).err(),
            Some(ConfigError::InvalidCardRange { low: 9, high: 3 })
        );
        let zero = config().with_options(TableOptions::default().with_card_range(0, 3));
        assert!(matches!(
            Game::new(zero, 0),
            Err(ConfigError::InvalidCardRange { .. })
        ));
        let no_cards = config().with_options(TableOptions::default().with_max_cards(0));
        assert_eq!(
            Game::new(no_cards, 0).err(),
            Some(ConfigError::InvalidHandLimit)
        );
    }

    #[test]
    fn fresh_table_starts_with_first_seat() {
        let game = Game::with_source(config(), ScriptedCards::new([5])).unwrap();
        assert_eq!(game.current_player().as_deref(), Some("A"));
        assert_eq!(game.state(), GameState::Setup);
        assert!(!game.is_finished());
        assert_eq!(game.seats(), ["A", "B", "C"]);
        assert!(game.has_seat("B"));
        assert!(!game.has_seat("Dealer"));
        assert!(game.is_dealer("Dealer"));
    }
}
