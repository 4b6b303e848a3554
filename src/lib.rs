//! A turn-based multiplayer card table coordinator with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] that tracks each seat's hand, enforces
//! bust, stand and hand-limit rules, moves the turn between seats and
//! determines the winner. An [`Arbiter`] decides who speaks next from the
//! latest message, and a [`Session`] drives participants one at a time.
//!
//! Only the configured dealer may change the table.
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, ScriptedCards, TableConfig, Verdict};
//!
//! let config = TableConfig::new("Dealer", ["Alice", "Bob"]);
//! let game = Game::with_source(config, ScriptedCards::new([10, 9, 10, 4, 10]))?;
//!
//! game.draw("Dealer", "Alice")?;
//! game.draw("Dealer", "Alice")?;
//! game.stand("Dealer", "Alice")?;
//! for _ in 0..3 {
//!     game.draw("Dealer", "Bob")?;
//! }
//!
//! let report = game.winner();
//! assert_eq!(report.verdict, Verdict::Winner { player: "Alice".into(), total: 19 });
//! assert!(report.to_string().ends_with("GAME OVER"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod arbiter;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;
mod sync;

// Re-export main types
pub use arbiter::{ACTION_KEYWORDS, Arbiter, KeywordArbiter, Message, Nomination};
pub use card::{CardSource, MAX_CARD, MIN_CARD, RandomCards, ScriptedCards};
pub use error::{ActionError, ConfigError, ParseCommandError, SessionError};
pub use game::{Command, Game, GameState};
pub use hand::{HandStatus, Seat};
pub use options::{BUST_THRESHOLD, MAX_HAND_SIZE, TERMINATION_MARKER, TableConfig, TableOptions};
pub use result::{
    DrawOutcome, PlayerStatus, SeatSummary, StandOutcome, TableReport, Verdict, WinnerReport,
};
pub use session::{Participant, Reply, Session, SessionPhase, Step};
