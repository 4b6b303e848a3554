//! Table configuration.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{MAX_CARD, MIN_CARD};

/// Totals strictly above this value bust.
pub const BUST_THRESHOLD: u32 = 21;

/// Number of cards after which a hand stands automatically.
pub const MAX_HAND_SIZE: usize = 3;

/// Text that ends a session once it shows up in a message.
pub const TERMINATION_MARKER: &str = "GAME OVER";

/// Rule options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_card_range(1, 10)
///     .with_bust_threshold(31)
///     .with_max_cards(5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Lowest card value, inclusive.
    pub min_card: u8,
    /// Highest card value, inclusive.
    pub max_card: u8,
    /// Totals strictly above this value bust.
    pub bust_threshold: u32,
    /// A hand stands automatically once it holds this many cards.
    pub max_cards: usize,
    /// Marker closing a winner report and ending the session.
    pub termination_marker: String,
    /// Whether draws and stands for seats other than the current one are
    /// rejected.
    pub enforce_turn_order: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            min_card: MIN_CARD,
            max_card: MAX_CARD,
            bust_threshold: BUST_THRESHOLD,
            max_cards: MAX_HAND_SIZE,
            termination_marker: TERMINATION_MARKER.to_string(),
            enforce_turn_order: false,
        }
    }
}

impl TableOptions {
    /// Sets the inclusive card value range.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_card_range(1, 13);
    /// assert_eq!((options.min_card, options.max_card), (1, 13));
    /// ```
    #[must_use]
    pub const fn with_card_range(mut self, min_card: u8, max_card: u8) -> Self {
        self.min_card = min_card;
        self.max_card = max_card;
        self
    }

    /// Sets the bust threshold.
    #[must_use]
    pub const fn with_bust_threshold(mut self, threshold: u32) -> Self {
        self.bust_threshold = threshold;
        self
    }

    /// Sets the hand size limit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_cards(5);
    /// assert_eq!(options.max_cards, 5);
    /// ```
    #[must_use]
    pub const fn with_max_cards(mut self, max_cards: usize) -> Self {
        self.max_cards = max_cards;
        self
    }

    /// Sets the termination marker.
    #[must_use]
    pub fn with_termination_marker(mut self, marker: impl Into<String>) -> Self {
        self.termination_marker = marker.into();
        self
    }

    /// Sets whether only the current seat may draw or stand.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_enforce_turn_order(true);
    /// assert!(options.enforce_turn_order);
    /// ```
    #[must_use]
    pub const fn with_enforce_turn_order(mut self, enforce: bool) -> Self {
        self.enforce_turn_order = enforce;
        self
    }
}

/// Everything needed to open a table: the seats in turn order, the dealer
/// and the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Seat names in turn order.
    pub seats: Vec<String>,
    /// Name of the only participant allowed to change the table.
    pub dealer: String,
    /// Rule options.
    pub options: TableOptions,
}

impl TableConfig {
    /// Creates a configuration with default options.
    ///
    /// ```
    /// use bjtable::TableConfig;
    ///
    /// let config = TableConfig::new("Dealer", ["Alice", "Bob"]);
    /// assert_eq!(config.seats, ["Alice", "Bob"]);
    /// ```
    pub fn new<S: Into<String>>(
        dealer: impl Into<String>,
        seats: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            seats: seats.into_iter().map(Into::into).collect(),
            dealer: dealer.into(),
            options: TableOptions::default(),
        }
    }

    /// Replaces the rule options.
    #[must_use]
    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }
}
