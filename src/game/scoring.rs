use alloc::vec::Vec;

use log::info;

use crate::error::ResultError;
use crate::player::Player;
use crate::result::{GameResult, PlayerScore};

use super::{Game, GameState};

impl Game {
    pub(super) fn finish(&mut self) {
        if self.state == GameState::GameOver {
            return;
        }
        self.state = GameState::GameOver;
        let result = self.tally();
        info!(
            "game over: player {} wins with {} points",
            result.winner, result.winning_score
        );
    }

    /// Returns every player's current score in seat order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(Player::score).collect()
    }

    /// Scores every player and picks the winner.
    ///
    /// The highest score wins; on a tie the lowest seat reaching that score
    /// is kept.
    pub(super) fn tally(&self) -> GameResult {
        let scores: Vec<PlayerScore> = self
            .players
            .iter()
            .enumerate()
            .map(|(player, state)| PlayerScore {
                player,
                score: state.score(),
                earned: state.earned_pile().len(),
            })
            .collect();

        let mut winner: Option<&PlayerScore> = None;
        for entry in &scores {
            if winner.is_none_or(|best| entry.score > best.score) {
                winner = Some(entry);
            }
        }
        let (winner, winning_score) = winner.map_or((0, 0), |best| (best.player, best.score));

        GameResult {
            scores,
            winner,
            winning_score,
        }
    }

    /// Returns the final scores and winner.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::GameInProgress`] until the game is over.
    pub fn result(&self) -> Result<GameResult, ResultError> {
        if self.state != GameState::GameOver {
            return Err(ResultError::GameInProgress);
        }
        Ok(self.tally())
    }
}
