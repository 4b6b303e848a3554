//! Error types for table operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when building a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No seats were configured.
    #[error("a table needs at least one seat")]
    NoSeats,
    /// The same seat name was configured twice.
    #[error("seat name configured twice: {0}")]
    DuplicateSeat(String),
    /// The dealer also holds a seat.
    #[error("dealer {0} cannot also hold a seat")]
    DealerIsSeat(String),
    /// The card range is empty or starts at zero.
    #[error("invalid card range {low}..={high}")]
    InvalidCardRange {
        /// Lowest card value.
        low: u8,
        /// Highest card value.
        high: u8,
    },
    /// The hand size limit is zero.
    #[error("hand size limit must be at least one card")]
    InvalidHandLimit,
}

/// Errors that can occur during seat actions.
///
/// None of these are fatal: the table is left unchanged whenever one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The named player has no seat at the table.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    /// The player already stood, busted or reached the hand limit.
    #[error("{0} is already finished and cannot draw")]
    AlreadyFinished(String),
    /// The caller is not allowed to change the table.
    #[error("{0} is not the dealer and cannot change the table")]
    NotDealer(String),
    /// Turn order is enforced and it is someone else's turn.
    #[error("it is not {player}'s turn")]
    NotYourTurn {
        /// The player the action was for.
        player: String,
        /// The player whose turn it is.
        current: Option<String>,
    },
}

/// Errors returned when parsing a [`Command`](crate::Command) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// The input was blank.
    #[error("empty command")]
    Empty,
    /// The verb is not a known command.
    #[error("unknown command: {0}")]
    UnknownVerb(String),
    /// The command needs a player name.
    #[error("{0} needs a player name")]
    MissingPlayer(String),
}

/// Errors that can occur while driving a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The arbiter nominated someone with no registered participant.
    #[error("no participant registered as {0}")]
    UnknownParticipant(String),
    /// The session did not terminate within the step limit.
    #[error("session did not terminate within {0} steps")]
    StepLimit(usize),
}
