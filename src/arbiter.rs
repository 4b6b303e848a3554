//! Deciding who speaks next.
//!
//! An [`Arbiter`] looks at the latest message and the table and nominates
//! the next participant. It only routes: the table changes solely through
//! the dealer's commands.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::game::Game;

/// Words that mark a player message as a request for the dealer.
pub const ACTION_KEYWORDS: [&str; 6] = ["hit", "stand", "card", "hand", "deal", "draw"];

/// A message in the session history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Message {
    /// Who sent the message.
    pub speaker: String,
    /// The message text.
    pub content: String,
}

impl Message {
    /// Creates a message.
    pub fn new(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            content: content.into(),
        }
    }
}

/// Who should act next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nomination {
    /// The named participant acts next.
    Participant(String),
    /// The session is over.
    Terminate,
    /// No preference; the driver picks.
    Defer,
}

/// A turn-arbitration policy.
pub trait Arbiter {
    /// Nominates the next speaker given the latest message, if any.
    fn next_speaker(&self, last: Option<&Message>, game: &Game) -> Nomination;
}

/// The default policy: route player requests to the dealer, dealer
/// announcements to the current player, and stop on the termination marker.
///
/// Keyword and marker matches are case-insensitive substring matches.
#[derive(Debug, Clone)]
pub struct KeywordArbiter {
    keywords: Vec<String>,
}

impl Default for KeywordArbiter {
    fn default() -> Self {
        Self::new(ACTION_KEYWORDS)
    }
}

impl KeywordArbiter {
    /// Creates an arbiter with a custom keyword list.
    pub fn new<S: AsRef<str>>(keywords: impl IntoIterator<Item = S>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    fn current_or_dealer(game: &Game) -> Nomination {
        Nomination::Participant(
            game.current_player()
                .unwrap_or_else(|| game.dealer().to_string()),
        )
    }
}

impl Arbiter for KeywordArbiter {
    fn next_speaker(&self, last: Option<&Message>, game: &Game) -> Nomination {
        let dealer = || Nomination::Participant(game.dealer().to_string());

        let Some(last) = last else {
            return dealer();
        };

        let content = last.content.to_lowercase();
        let marker = game.options().termination_marker.to_lowercase();
        if !marker.is_empty() && content.contains(&marker) {
            return Nomination::Terminate;
        }

        if game.is_finished() || game.current_player().is_none() {
            return dealer();
        }

        if game.has_seat(&last.speaker)
            && self.keywords.iter().any(|k| content.contains(k.as_str()))
        {
            return dealer();
        }

        // Both a dealer message and the fallback hand the turn to the
        // current player.
        Self::current_or_dealer(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ScriptedCards;
    use crate::options::TableConfig;

    fn game() -> Game {
        Game::with_source(TableConfig::new("Dealer", ["A", "B"]), ScriptedCards::new([10])).unwrap()
    }

    fn pick(last: Option<Message>, game: &Game) -> Nomination {
        KeywordArbiter::default().next_speaker(last.as_ref(), game)
    }

    fn who(name: &str) -> Nomination {
        Nomination::Participant(name.to_string())
    }

    #[test]
    fn empty_history_goes_to_dealer() {
        assert_eq!(pick(None, &game()), who("Dealer"));
    }

    #[test]
    fn marker_terminates_regardless_of_speaker() {
        let game = game();
        assert_eq!(pick(Some(Message::new("A", "ok, game over")), &game), Nomination::Terminate);
        assert_eq!(
            pick(Some(Message::new("Dealer", "Winner: A\nGAME OVER")), &game),
            Nomination::Terminate
        );
        assert_eq!(
            pick(Some(Message::new("someone", "GaMe OvEr")), &game),
            Nomination::Terminate
        );
    }

    #[test]
    fn player_requests_go_to_dealer() {
        let game = game();
        assert_eq!(pick(Some(Message::new("A", "HIT me")), &game), who("Dealer"));
        assert_eq!(pick(Some(Message::new("B", "I'll stand")), &game), who("Dealer"));
        assert_eq!(pick(Some(Message::new("A", "nice weather")), &game), who("A"));
    }

    #[test]
    fn dealer_messages_go_to_current_player() {
        let game = game();
        assert_eq!(pick(Some(Message::new("Dealer", "A, your turn")), &game), who("A"));
        game.stand("Dealer", "A").unwrap();
        assert_eq!(pick(Some(Message::new("Dealer", "A stands")), &game), who("B"));
    }

    #[test]
    fn keywords_from_non_players_fall_back_to_current() {
        let game = game();
        assert_eq!(pick(Some(Message::new("observer", "deal me in")), &game), who("A"));
    }

    #[test]
    fn finished_table_goes_to_dealer() {
        let game = game();
        game.stand("Dealer", "A").unwrap();
        game.stand("Dealer", "B").unwrap();
        assert_eq!(pick(Some(Message::new("B", "thanks")), &game), who("Dealer"));
        assert_eq!(pick(Some(Message::new("Dealer", "all done")), &game), who("Dealer"));
    }

    #[test]
    fn custom_keywords() {
        let game = game();
        let arbiter = KeywordArbiter::new(["Fold"]);
        assert_eq!(
            arbiter.next_speaker(Some(&Message::new("A", "I FOLD")), &game),
            who("Dealer")
        );
        assert_eq!(
            arbiter.next_speaker(Some(&Message::new("A", "hit")), &game),
            who("A")
        );
    }
}
