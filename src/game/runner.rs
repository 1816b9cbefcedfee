//! Synchronous driver that plays a whole game through a [`Controller`].

use crate::card::Card;
use crate::error::{ActionError, CapacityError, ConfigError};
use crate::options::GameOptions;
use crate::result::{Draw, GameResult, MatchOutcome, StealOutcome};

use super::{Choice, Game, GameState};

/// Something that happened during play, for a presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A turn began.
    TurnStarted {
        /// Seat index.
        player: usize,
    },
    /// A card was drawn into the acting player's hand.
    Drew {
        /// Seat index.
        player: usize,
        /// The drawn card.
        card: Card,
    },
    /// A draw was refused because the hand is full.
    DrawRefused {
        /// Seat index.
        player: usize,
        /// The capacity violation.
        error: CapacityError,
    },
    /// A hand card matched center cards.
    Matched {
        /// Seat index.
        player: usize,
        /// The hand card played.
        card: Card,
        /// Center cards collected.
        collected: usize,
    },
    /// A hand card matched nothing in the center pile.
    NoMatch {
        /// Seat index.
        player: usize,
        /// The hand card tried.
        card: Card,
    },
    /// An earned pile was stolen.
    Stole {
        /// Seat index of the thief.
        player: usize,
        /// Seat index of the victim.
        target: usize,
        /// The hand card that matched.
        card: Card,
        /// Cards taken.
        taken: usize,
    },
    /// A steal attempt found no matching card.
    StealFailed {
        /// Seat index of the thief.
        player: usize,
        /// Seat index of the target.
        target: usize,
    },
    /// A card went to the center pile.
    Discarded {
        /// Seat index.
        player: usize,
        /// The discarded card.
        card: Card,
    },
    /// A choice was refused; the player will be asked again.
    Rejected {
        /// Seat index.
        player: usize,
        /// Why the choice was refused.
        error: ActionError,
    },
    /// A turn ended.
    TurnEnded {
        /// Seat index.
        player: usize,
    },
    /// The game is over.
    GameOver(GameResult),
}

/// The decision-making side of a game: a console, a UI, or a test script.
///
/// [`Game::run`] calls [`choose`](Controller::choose) whenever the acting
/// player must decide, blocking until a choice comes back.
pub trait Controller {
    /// Picks the acting player's next move.
    fn choose(&mut self, game: &Game) -> Choice;

    /// Observes an event. The default ignores it.
    fn on_event(&mut self, game: &Game, event: &GameEvent) {
        let _ = (game, event);
    }
}

impl Game {
    /// Plays the game to completion.
    ///
    /// Refused choices are reported as [`GameEvent::Rejected`] and the same
    /// player is asked again; nothing ends the game early. If a turn is
    /// already active it is continued.
    pub fn run<C: Controller + ?Sized>(&mut self, controller: &mut C) -> GameResult {
        loop {
            if self.state == GameState::TurnStart {
                if let Ok(Some(turn)) = self.start_turn() {
                    controller.on_event(self, &GameEvent::TurnStarted {
                        player: turn.player,
                    });
                    self.report_draw(controller, turn.player, turn.draw);
                }
            }
            if self.state == GameState::GameOver {
                break;
            }
            self.play_choice(controller);
        }

        let result = self.tally();
        controller.on_event(self, &GameEvent::GameOver(result.clone()));
        result
    }

    fn play_choice<C: Controller + ?Sized>(&mut self, controller: &mut C) {
        let player = self.current;
        let choice = controller.choose(self);

        let turn_ended = match choice {
            Choice::Discard(index) => self.discard(index).map(|card| {
                controller.on_event(self, &GameEvent::Discarded { player, card });
                true
            }),
            Choice::Match(index) => self.attempt_match(index).map(|outcome| match outcome {
                MatchOutcome::Matched {
                    card,
                    collected,
                    draw,
                    turn_ended,
                } => {
                    controller.on_event(self, &GameEvent::Matched {
                        player,
                        card,
                        collected,
                    });
                    self.report_draw(controller, player, draw);
                    turn_ended
                }
                MatchOutcome::NoMatch { card } => {
                    controller.on_event(self, &GameEvent::NoMatch { player, card });
                    false
                }
            }),
            Choice::Steal(target) => self.attempt_steal(target).map(|outcome| match outcome {
                StealOutcome::Stole {
                    target,
                    card,
                    taken,
                    draw,
                    turn_ended,
                } => {
                    controller.on_event(self, &GameEvent::Stole {
                        player,
                        target,
                        card,
                        taken,
                    });
                    self.report_draw(controller, player, draw);
                    turn_ended
                }
                StealOutcome::NoMatch { target } => {
                    controller.on_event(self, &GameEvent::StealFailed { player, target });
                    false
                }
            }),
        };

        match turn_ended {
            Ok(true) => controller.on_event(self, &GameEvent::TurnEnded { player }),
            Ok(false) => {}
            Err(error) => controller.on_event(self, &GameEvent::Rejected { player, error }),
        }
    }

    fn report_draw<C: Controller + ?Sized>(&self, controller: &mut C, player: usize, draw: Draw) {
        match draw {
            Draw::Card(card) => controller.on_event(self, &GameEvent::Drew { player, card }),
            Draw::HandFull(error) => {
                controller.on_event(self, &GameEvent::DrawRefused { player, error });
            }
            Draw::PileEmpty => {}
        }
    }
}

/// Deals a new game and plays it to completion.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the options cannot seat a game.
pub fn run_game<C: Controller + ?Sized>(
    options: GameOptions,
    seed: u64,
    controller: &mut C,
) -> Result<GameResult, ConfigError> {
    let mut game = Game::new(options, seed)?;
    Ok(game.run(controller))
}
