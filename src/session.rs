//! A sequential driver for a table and its participants.
//!
//! Each step asks the arbiter who acts next, lets that participant reply,
//! runs the reply's command (if any) on the participant's behalf and records
//! the result in the history. Only one participant acts at a time.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use log::{debug, info};

use crate::arbiter::{Arbiter, KeywordArbiter, Message, Nomination};
use crate::error::SessionError;
use crate::game::{Command, Game, GameState};

/// Phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// Nobody has drawn or stood yet.
    Setup,
    /// The game is being played.
    InProgress,
    /// Every seat is finished and the result is pending.
    AllFinished,
    /// The termination marker was seen; nothing happens any more.
    Terminated,
}

/// What a participant says on its turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    /// Free text.
    pub content: String,
    /// A command to run against the table as this participant.
    pub command: Option<Command>,
}

impl Reply {
    /// A reply with text only.
    pub fn say(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            command: None,
        }
    }

    /// A reply that runs a command.
    pub fn command(content: impl Into<String>, command: Command) -> Self {
        Self {
            content: content.into(),
            command: Some(command),
        }
    }
}

/// Anyone taking part in a session: the dealer or a player.
pub trait Participant {
    /// The name the arbiter nominates this participant by.
    fn name(&self) -> &str;

    /// Produces this participant's reply.
    fn respond(&mut self, game: &Game, history: &[Message]) -> Reply;
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A participant spoke; the message was appended to the history.
    Spoke(Message),
    /// The session is over.
    Terminated,
}

/// A game, its message history and the arbiter routing between speakers.
pub struct Session<A = KeywordArbiter> {
    game: Game,
    arbiter: A,
    history: Vec<Message>,
    terminated: bool,
}

impl Session {
    /// Creates a session using the default [`KeywordArbiter`].
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self::with_arbiter(game, KeywordArbiter::default())
    }
}

impl<A: Arbiter> Session<A> {
    /// Creates a session using a custom arbiter.
    pub const fn with_arbiter(game: Game, arbiter: A) -> Self {
        Self {
            game,
            arbiter,
            history: Vec::new(),
            terminated: false,
        }
    }

    /// Returns the game.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the messages so far, oldest first.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Returns the current phase.
    pub fn phase(&self) -> SessionPhase {
        if self.terminated {
            return SessionPhase::Terminated;
        }
        match self.game.state() {
            GameState::Setup => SessionPhase::Setup,
            GameState::InProgress => SessionPhase::InProgress,
            GameState::AllFinished => SessionPhase::AllFinished,
        }
    }

    /// Adds a message to the history without asking anyone.
    ///
    /// Useful to seed the conversation with an opening line.
    pub fn push(&mut self, message: Message) {
        self.history.push(message);
    }

    /// Runs one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the nominee is not among `participants`.
    pub fn step(
        &mut self,
        participants: &mut [Box<dyn Participant>],
    ) -> Result<Step, SessionError> {
        if self.terminated {
            return Ok(Step::Terminated);
        }

        let name = match self.arbiter.next_speaker(self.history.last(), &self.game) {
            Nomination::Terminate => {
                info!("session terminated after {} messages", self.history.len());
                self.terminated = true;
                return Ok(Step::Terminated);
            }
            Nomination::Participant(name) => name,
            Nomination::Defer => self
                .game
                .current_player()
                .unwrap_or_else(|| self.game.dealer().to_string()),
        };

        let participant = participants
            .iter_mut()
            .find(|p| p.name() == name)
            .ok_or_else(|| SessionError::UnknownParticipant(name.clone()))?;

        let reply = participant.respond(&self.game, &self.history);
        let content = match &reply.command {
            Some(command) => {
                let result = self.game.execute(&name, command);
                if reply.content.is_empty() {
                    result
                } else {
                    format!("{}\n{result}", reply.content)
                }
            }
            None => reply.content,
        };

        debug!("{name}: {content}");
        let message = Message::new(name, content);
        self.history.push(message.clone());
        Ok(Step::Spoke(message))
    }

    /// Steps until the session terminates.
    ///
    /// Returns the number of messages added.
    ///
    /// # Errors
    ///
    /// Returns an error if a nominee is not among `participants`, or if the
    /// session is still going after `max_steps` messages.
    pub fn run(
        &mut self,
        participants: &mut [Box<dyn Participant>],
        max_steps: usize,
    ) -> Result<usize, SessionError> {
        for spoken in 0..=max_steps {
            if self.step(participants)? == Step::Terminated {
                return Ok(spoken);
            }
        }
        Err(SessionError::StepLimit(max_steps))
    }
}
