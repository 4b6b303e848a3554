use alloc::string::ToString;

use log::{debug, info, warn};

use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::result::{DrawOutcome, StandOutcome};

use super::{Game, Table};

impl Game {
    fn ensure_dealer(&self, caller: &str) -> Result<(), ActionError> {
        if self.is_dealer(caller) {
            Ok(())
        } else {
            warn!("{caller} tried to change the table without being the dealer");
            Err(ActionError::NotDealer(caller.to_string()))
        }
    }

    fn ensure_turn(&self, table: &Table, index: usize, player: &str) -> Result<(), ActionError> {
        if !self.options.enforce_turn_order || table.current == Some(index) {
            return Ok(());
        }
        let current = table.current_name();
        warn!("{player} acted out of turn (current: {current:?})");
        Err(ActionError::NotYourTurn {
            player: player.to_string(),
            current,
        })
    }

    /// Draws a card for `player`.
    ///
    /// The card is sampled from the configured range and appended to the
    /// player's hand. Going over the bust threshold or reaching the card
    /// limit finishes the player and passes the turn on; otherwise the same
    /// player keeps the turn and may draw again.
    ///
    /// # Errors
    ///
    /// Returns an error if `caller` is not the dealer, the player has no
    /// seat, the player is already finished, or turn order is enforced and
    /// it is not the player's turn. The table is unchanged in every case.
    pub fn draw(&self, caller: &str, player: &str) -> Result<DrawOutcome, ActionError> {
        self.ensure_dealer(caller)?;
        let index = self.seat_index(player)?;

        let mut table = self.table.lock();
        if table.seats[index].is_finished() {
            warn!("{player} is finished and cannot draw");
            return Err(ActionError::AlreadyFinished(player.to_string()));
        }
        self.ensure_turn(&table, index, player)?;

        let card = self
            .source
            .lock()
            .next_card(self.options.min_card, self.options.max_card);

        let seat = &mut table.seats[index];
        seat.add_card(card, self.options.bust_threshold, self.options.max_cards);
        let cards = seat.cards().to_vec();
        let total = seat.total();
        let status = seat.status();

        // A draw that leaves the player active keeps the turn where it is.
        if status.is_finished() {
            table.advance_from(index);
        }
        let next = table.current_name();
        drop(table);

        debug!("{player} drew {card}, hand {cards:?} = {total}");
        if status.is_finished() {
            info!("{player} finished with {total} ({status:?}), next: {next:?}");
        }

        Ok(DrawOutcome {
            player: player.to_string(),
            card,
            cards,
            total,
            bust: status == HandStatus::Bust,
            full: status == HandStatus::Full,
            next,
        })
    }

    /// Stands `player` and passes the turn on.
    ///
    /// Standing a finished player is allowed and keeps its status; the turn
    /// still moves on from that seat.
    ///
    /// # Errors
    ///
    /// Returns an error if `caller` is not the dealer, the player has no
    /// seat, or turn order is enforced and an unfinished player stands out
    /// of turn.
    pub fn stand(&self, caller: &str, player: &str) -> Result<StandOutcome, ActionError> {
        self.ensure_dealer(caller)?;
        let index = self.seat_index(player)?;

        let mut table = self.table.lock();
        if !table.seats[index].is_finished() {
            self.ensure_turn(&table, index, player)?;
        }

        table.seats[index].stand();
        let total = table.seats[index].total();
        table.advance_from(index);
        let next = table.current_name();
        drop(table);

        info!("{player} stands with {total}, next: {next:?}");

        Ok(StandOutcome {
            player: player.to_string(),
            total,
            next,
        })
    }
}
