use alloc::string::{String, ToString};
use alloc::vec::Vec;

use log::info;

use crate::result::{SeatSummary, Verdict, WinnerReport};

use super::Game;

impl Game {
    /// Determines the winner over the current hands.
    ///
    /// The best total at or under the bust threshold wins; equal best totals
    /// tie. Busted seats never win, even with the highest total, so a table
    /// where everyone busts has no winner.
    ///
    /// This can be called at any time. Before every seat is finished the
    /// verdict only reflects the hands so far and
    /// [`WinnerReport::complete`] is `false`.
    pub fn winner(&self) -> WinnerReport {
        let threshold = self.options.bust_threshold;

        let table = self.table.lock();
        let complete = table.all_finished();
        let seats: Vec<SeatSummary> = table
            .seats
            .iter()
            .map(|seat| {
                let total = seat.total();
                SeatSummary {
                    player: seat.name().to_string(),
                    cards: seat.cards().to_vec(),
                    total,
                    bust: total > threshold,
                }
            })
            .collect();
        drop(table);

        let best = seats.iter().filter(|s| !s.bust).map(|s| s.total).max();
        let verdict = match best {
            None => Verdict::NoWinner,
            Some(total) => {
                let mut players: Vec<String> = seats
                    .iter()
                    .filter(|s| !s.bust && s.total == total)
                    .map(|s| s.player.clone())
                    .collect();
                if players.len() == 1 {
                    Verdict::Winner {
                        player: players.swap_remove(0),
                        total,
                    }
                } else {
                    Verdict::Tie { players, total }
                }
            }
        };

        info!("verdict {verdict:?} (complete: {complete})");

        WinnerReport {
            seats,
            verdict,
            complete,
            marker: self.options.termination_marker.clone(),
        }
    }
}
