//! Game phase types.

/// Phase of a game, derived from its seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameState {
    /// Nobody has drawn or stood yet.
    Setup,
    /// At least one action happened and someone is still playing.
    InProgress,
    /// Every seat is finished; the winner can be announced.
    AllFinished,
}
