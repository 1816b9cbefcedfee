use log::{debug, info};

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{MatchOutcome, StealOutcome, TurnStart};

use super::{Game, GameState};

impl Game {
    fn ensure_action_choice(&self) -> Result<usize, ActionError> {
        if self.state != GameState::ActionChoice {
            return Err(ActionError::InvalidState);
        }
        Ok(self.current)
    }

    fn selected_card(&self, seat: usize, hand_index: usize) -> Result<Card, ActionError> {
        self.players[seat]
            .hand()
            .get(hand_index)
            .ok_or(ActionError::InvalidHandIndex)
    }

    /// Starts the next player's turn and draws their opening card.
    ///
    /// Seats holding no cards are passed over once the draw pile is empty.
    /// Returns `None` when the game is over instead of starting a turn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if a turn is already active.
    pub fn start_turn(&mut self) -> Result<Option<TurnStart>, ActionError> {
        match self.state {
            GameState::ActionChoice => return Err(ActionError::InvalidState),
            GameState::GameOver => return Ok(None),
            GameState::TurnStart => {}
        }

        let Some(seat) = self.next_actor() else {
            self.finish();
            return Ok(None);
        };

        self.current = seat;
        self.next_seat = (seat + 1) % self.players.len();
        self.state = GameState::ActionChoice;
        debug!("player {seat} starts turn");

        let draw = self.draw_for(seat);
        Ok(Some(TurnStart { player: seat, draw }))
    }

    /// Puts a hand card on the center pile and ends the turn.
    ///
    /// Returns the discarded card.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is active or `hand_index` is outside the
    /// acting player's hand.
    pub fn discard(&mut self, hand_index: usize) -> Result<Card, ActionError> {
        let seat = self.ensure_action_choice()?;
        let card = self.players[seat]
            .hand_mut()
            .remove_at(hand_index)
            .ok_or(ActionError::InvalidHandIndex)?;

        self.center.push(card);
        debug!("player {seat} discarded {card}");
        self.end_turn();
        Ok(card)
    }

    /// Matches a hand card against the center pile.
    ///
    /// Every center card of the same rank moves to the acting player's
    /// earned pile, followed by the hand card itself, and the player draws
    /// again. Without a match nothing changes and the turn continues.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is active or `hand_index` is outside the
    /// acting player's hand.
    pub fn attempt_match(&mut self, hand_index: usize) -> Result<MatchOutcome, ActionError> {
        let seat = self.ensure_action_choice()?;
        let card = self.selected_card(seat, hand_index)?;

        let player = &mut self.players[seat];
        let collected = self.center.collect_matches(&card, player.earned_pile_mut());
        if collected == 0 {
            debug!("player {seat} found no match for {card}");
            return Ok(MatchOutcome::NoMatch { card });
        }

        player.earned_pile_mut().push(card);
        player.hand_mut().remove_at(hand_index);
        info!("player {seat} matched {card}, collecting {collected} center cards");

        let draw = self.draw_for(seat);
        let turn_ended = self.end_if_exhausted(seat, &draw);
        Ok(MatchOutcome::Matched {
            card,
            collected,
            draw,
            turn_ended,
        })
    }

    /// Steals another player's earned pile.
    ///
    /// Succeeds when the acting player holds a card matching the rank of the
    /// target's top earned card. The whole target pile moves onto the acting
    /// player's earned pile in its existing order, the matching hand card is
    /// placed on top, and the player draws again. An empty target pile never
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is active, `target` is not a seat, or
    /// `target` is the acting player.
    pub fn attempt_steal(&mut self, target: usize) -> Result<StealOutcome, ActionError> {
        let seat = self.ensure_action_choice()?;
        if target >= self.players.len() {
            return Err(ActionError::InvalidTarget);
        }
        if target == seat {
            return Err(ActionError::SelfTarget);
        }

        let matching = self.players[target]
            .top_earned()
            .and_then(|top| self.players[seat].hand().find_matching(&top));
        let Some(card) = matching else {
            debug!("player {seat} cannot steal from player {target}");
            return Ok(StealOutcome::NoMatch { target });
        };

        let Ok([thief, victim]) = self.players.get_disjoint_mut([seat, target]) else {
            return Err(ActionError::InvalidTarget);
        };
        let taken = victim.earned_pile().len();
        thief.earned_pile_mut().steal_from(victim.earned_pile_mut());
        thief.earned_pile_mut().push(card);
        thief.hand_mut().remove_matching(&card);
        info!("player {seat} stole {taken} cards from player {target} with {card}");

        let draw = self.draw_for(seat);
        let turn_ended = self.end_if_exhausted(seat, &draw);
        Ok(StealOutcome::Stole {
            target,
            card,
            taken,
            draw,
            turn_ended,
        })
    }
}
