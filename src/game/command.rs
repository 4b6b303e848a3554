use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use log::debug;

use crate::error::ParseCommandError;

use super::Game;

/// A table command, as issued by a participant.
///
/// Commands parse from short text such as `draw Alice`, `hit Alice`,
/// `stand Alice`, `status Alice`, `table` or `winner`:
///
/// ```
/// use bjtable::Command;
///
/// let command: Command = "hit Alice".parse()?;
/// assert_eq!(command, Command::Draw("Alice".to_string()));
/// # Ok::<(), bjtable::ParseCommandError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Draw a card for the player.
    Draw(String),
    /// Stand the player.
    Stand(String),
    /// Report one player's hand.
    PlayerStatus(String),
    /// Report the whole table.
    TableStatus,
    /// Announce the winner and end the game.
    Winner,
}

impl Command {
    /// Returns whether the command changes the table.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(self, Self::Draw(_) | Self::Stand(_))
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCommandError::Empty);
        }
        let (verb, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let verb = verb.to_ascii_lowercase();
        let player = rest.trim();

        let named = |make: fn(String) -> Self| {
            if player.is_empty() {
                Err(ParseCommandError::MissingPlayer(verb.clone()))
            } else {
                Ok(make(player.to_string()))
            }
        };

        match verb.as_str() {
            "draw" | "hit" => named(Self::Draw),
            "stand" => named(Self::Stand),
            "status" => named(Self::PlayerStatus),
            "table" => Ok(Self::TableStatus),
            "winner" => Ok(Self::Winner),
            _ => Err(ParseCommandError::UnknownVerb(verb.clone())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draw(player) => write!(f, "draw {player}"),
            Self::Stand(player) => write!(f, "stand {player}"),
            Self::PlayerStatus(player) => write!(f, "status {player}"),
            Self::TableStatus => f.write_str("table"),
            Self::Winner => f.write_str("winner"),
        }
    }
}

impl Game {
    /// Runs `command` on behalf of `caller` and returns the result as text.
    ///
    /// Rejections are reported in the text rather than as errors, so the
    /// caller can relay the answer as-is. A winner announcement always ends
    /// with the termination marker.
    pub fn execute(&self, caller: &str, command: &Command) -> String {
        debug!("{caller} runs `{command}`");
        match command {
            Command::Draw(player) => match self.draw(caller, player) {
                Ok(outcome) => outcome.to_string(),
                Err(err) => err.to_string(),
            },
            Command::Stand(player) => match self.stand(caller, player) {
                Ok(outcome) => outcome.to_string(),
                Err(err) => err.to_string(),
            },
            Command::PlayerStatus(player) => match self.player_status(player) {
                Ok(status) => status.to_string(),
                Err(err) => err.to_string(),
            },
            Command::TableStatus => self.table_status().to_string(),
            Command::Winner => self.winner().to_string(),
        }
    }
}
