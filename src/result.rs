//! Outcome and report types.
//!
//! Every type here renders as the human-readable text handed back to the
//! participants through [`Game::execute`](crate::Game::execute).

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::hand::HandStatus;

struct Cards<'a>(&'a [u8]);

impl fmt::Display for Cards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

fn write_next(f: &mut fmt::Formatter<'_>, next: Option<&String>) -> fmt::Result {
    match next {
        Some(name) => write!(f, " Next up: {name}."),
        None => write!(f, " Everyone is done."),
    }
}

/// Result of a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DrawOutcome {
    /// The player who received the card.
    pub player: String,
    /// The card value drawn.
    pub card: u8,
    /// The full hand after the draw.
    pub cards: Vec<u8>,
    /// The hand total after the draw.
    pub total: u32,
    /// Whether the draw busted the hand.
    pub bust: bool,
    /// Whether the draw filled the hand to the card limit.
    pub full: bool,
    /// Whose turn it is after the draw.
    pub next: Option<String>,
}

impl DrawOutcome {
    /// Returns whether the draw ended the player's game.
    #[must_use]
    pub const fn finished(&self) -> bool {
        self.bust || self.full
    }
}

impl fmt::Display for DrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} drew a {}. Hand: {} (total: {}).",
            self.player,
            self.card,
            Cards(&self.cards),
            self.total
        )?;
        if self.bust {
            write!(f, " BUST!")?;
        } else if self.full {
            write!(f, " Maximum cards reached, standing.")?;
        }
        if self.finished() {
            write_next(f, self.next.as_ref())?;
        }
        Ok(())
    }
}

/// Result of a stand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StandOutcome {
    /// The player who stood.
    pub player: String,
    /// The final hand total.
    pub total: u32,
    /// Whose turn it is after the stand.
    pub next: Option<String>,
}

impl fmt::Display for StandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stands with {}.", self.player, self.total)?;
        write_next(f, self.next.as_ref())
    }
}

/// Snapshot of one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerStatus {
    /// The player name.
    pub player: String,
    /// The hand in draw order.
    pub cards: Vec<u8>,
    /// The hand total.
    pub total: u32,
    /// The hand status.
    pub status: HandStatus,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.status.is_finished() {
            "done"
        } else {
            "active"
        };
        write!(
            f,
            "{}: {} = {} ({state})",
            self.player,
            Cards(&self.cards),
            self.total
        )?;
        if self.status == HandStatus::Bust {
            write!(f, " (BUST)")?;
        }
        Ok(())
    }
}

/// Snapshot of the whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableReport {
    /// Every seat in turn order.
    pub seats: Vec<PlayerStatus>,
    /// Whose turn it is, if anyone's.
    pub current: Option<String>,
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table status:")?;
        for seat in &self.seats {
            writeln!(f, "  {seat}")?;
        }
        match &self.current {
            Some(name) => write!(f, "Current turn: {name}"),
            None => write!(f, "Game over"),
        }
    }
}

/// Final line for one seat in a winner report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeatSummary {
    /// The player name.
    pub player: String,
    /// The hand in draw order.
    pub cards: Vec<u8>,
    /// The hand total.
    pub total: u32,
    /// Whether the total is over the bust threshold.
    pub bust: bool,
}

/// Who won.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Verdict {
    /// A single player holds the best total.
    Winner {
        /// The winning player.
        player: String,
        /// The winning total.
        total: u32,
    },
    /// Several players share the best total.
    Tie {
        /// The tied players in turn order.
        players: Vec<String>,
        /// The shared total.
        total: u32,
    },
    /// Every player busted.
    NoWinner,
}

impl Verdict {
    /// Returns the winning players in turn order.
    #[must_use]
    pub fn winners(&self) -> Vec<&str> {
        match self {
            Self::Winner { player, .. } => alloc::vec![player.as_str()],
            Self::Tie { players, .. } => players.iter().map(String::as_str).collect(),
            Self::NoWinner => Vec::new(),
        }
    }
}

/// Final results of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WinnerReport {
    /// Every seat in turn order.
    pub seats: Vec<SeatSummary>,
    /// The verdict over the non-busted seats.
    pub verdict: Verdict,
    /// Whether every seat was finished when the report was made.
    pub complete: bool,
    /// The marker printed as the final line.
    pub marker: String,
}

impl fmt::Display for WinnerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final results:")?;
        for seat in &self.seats {
            write!(f, "  {}: {} = {}", seat.player, Cards(&seat.cards), seat.total)?;
            if seat.bust {
                write!(f, " (BUST)")?;
            }
            writeln!(f)?;
        }
        match &self.verdict {
            Verdict::Winner { player, total } => writeln!(f, "Winner: {player} with {total}!")?,
            Verdict::Tie { players, total } => {
                writeln!(f, "Tie between {} with {total}!", players.join(", "))?;
            }
            Verdict::NoWinner => writeln!(f, "No winner: every player busted.")?,
        }
        write!(f, "{}", self.marker)
    }
}
