//! Game engine and state management.

use alloc::vec::Vec;
use log::{debug, warn};

use crate::card::Card;
use crate::options::GameOptions;
use crate::pile::{Queue, Stack};
use crate::player::Player;
use crate::result::Draw;

mod actions;
mod deal;
mod runner;
mod scoring;
pub mod state;

pub use runner::{Controller, GameEvent, run_game};
pub use state::{Choice, GameState};

/// A card-matching game engine that owns every pile and runs the turns.
///
/// The game owns the draw pile, the center pile, and each player's hand
/// and earned pile. Cards only move between these containers, so the total
/// is always one full deck.
#[derive(Debug, Clone)]
pub struct Game {
    /// Undealt cards in play order.
    draw_pile: Queue<Card>,
    /// Cards not yet claimed by any player.
    center: Stack<Card>,
    /// Seats in turn order.
    players: Vec<Player>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Seat whose turn is active, or whose turn was last.
    current: usize,
    /// Seat that acts next; 0 marks the start of a round.
    next_seat: usize,
}

impl Game {
    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn draw_pile(&self) -> &Queue<Card> {
        &self.draw_pile
    }

    /// Returns the center pile.
    #[must_use]
    pub const fn center_pile(&self) -> &Stack<Card> {
        &self.center
    }

    /// Returns every player in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the seat whose turn is active.
    ///
    /// Returns `None` between turns and after the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<usize> {
        (self.state == GameState::ActionChoice).then_some(self.current)
    }

    /// Returns the number of cards remaining in the draw pile.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Counts cards across every container in the game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.center.len()
            + self.players.iter().map(Player::card_count).sum::<usize>()
    }

    /// Iterates over every card in the game: draw pile, center pile, then
    /// each player's hand and earned pile.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.draw_pile
            .iter()
            .chain(self.center.iter())
            .chain(self.players.iter().flat_map(|player| {
                player.hand().cards().iter().chain(player.earned_pile().iter())
            }))
    }

    /// Moves the top of the draw pile into `seat`'s hand.
    fn draw_for(&mut self, seat: usize) -> Draw {
        let Some(&card) = self.draw_pile.peek() else {
            return Draw::PileEmpty;
        };
        let Some(player) = self.players.get_mut(seat) else {
            return Draw::PileEmpty;
        };

        match player.hand_mut().add(card) {
            Ok(()) => {
                self.draw_pile.dequeue();
                debug!("player {seat} drew {card}");
                Draw::Card(card)
            }
            Err(err) => {
                warn!("player {seat} could not draw: {err}");
                Draw::HandFull(err)
            }
        }
    }

    /// Finds the seat that should act next without changing any state.
    ///
    /// While cards remain to be drawn every seat plays in turn. Once the
    /// draw pile is empty the current round is finished by the seats that
    /// still hold cards, and no new round starts.
    fn next_actor(&self) -> Option<usize> {
        if !self.draw_pile.is_empty() {
            return Some(self.next_seat);
        }
        if self.next_seat == 0 {
            return None;
        }
        (self.next_seat..self.players.len()).find(|&seat| !self.players[seat].hand().is_empty())
    }

    fn end_turn(&mut self) {
        debug!("player {} ends turn", self.current);
        self.state = GameState::TurnStart;
        if self.next_actor().is_none() {
            self.finish();
        }
    }

    /// Ends the turn early when a successful play left nothing to discard.
    fn end_if_exhausted(&mut self, seat: usize, draw: &Draw) -> bool {
        let exhausted = matches!(draw, Draw::PileEmpty) && self.players[seat].hand().is_empty();
        if exhausted {
            self.end_turn();
        }
        exhausted
    }
}
