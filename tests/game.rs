//! Game integration tests.

use std::collections::HashSet;

use matchpile::{
    ActionError, CapacityError, Card, Choice, ConfigError, Controller, DECK_SIZE, Draw, Game,
    GameEvent, GameOptions, GameState, MatchOutcome, Rank, ResultError, StealOutcome, Suit,
    standard_deck,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Builds a full deck that starts with `prefix` and continues in standard
/// order with every card not already used.
fn deck_starting_with(prefix: &[Card]) -> Vec<Card> {
    let mut deck = prefix.to_vec();
    deck.extend(standard_deck().into_iter().filter(|c| !prefix.contains(c)));
    deck
}

fn assert_conserved(game: &Game) {
    assert_eq!(game.total_cards(), DECK_SIZE);
    let unique: HashSet<Card> = game.all_cards().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

/// Player 0: 5C KC 2C 3C, player 1: KD 6C 7C 8C, center (bottom to top):
/// 5S KS 5H 9C. The draw pile then runs AC QC JC 10C 4C AS ...
fn scripted_game() -> Game {
    let deck = deck_starting_with(&[
        card(Rank::Five, Suit::Clubs),
        card(Rank::King, Suit::Clubs),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Eight, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
        card(Rank::King, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
    ]);
    Game::from_deck(GameOptions::default(), deck).unwrap()
}

fn earned(game: &Game, seat: usize) -> Vec<Card> {
    game.player(seat)
        .unwrap()
        .earned_pile()
        .iter()
        .copied()
        .collect()
}

#[test]
fn unshuffled_deal_follows_deck_order() {
    let options = GameOptions::default().with_shuffle(false);
    let game = Game::new(options, 0).unwrap();
    let deck = standard_deck();

    assert_eq!(game.player(0).unwrap().hand().cards(), &deck[0..4]);
    assert_eq!(game.player(1).unwrap().hand().cards(), &deck[4..8]);

    let center: Vec<Card> = game.center_pile().iter().copied().collect();
    let mut expected_center = deck[8..12].to_vec();
    expected_center.reverse();
    assert_eq!(center, expected_center);

    let draw: Vec<Card> = game.draw_pile().iter().copied().collect();
    assert_eq!(draw, deck[12..]);
    assert_eq!(game.state(), GameState::TurnStart);
    assert_conserved(&game);
}

#[test]
fn seeded_games_are_reproducible() {
    let a = Game::new(GameOptions::default().with_players(3), 7).unwrap();
    let b = Game::new(GameOptions::default().with_players(3), 7).unwrap();
    let c = Game::new(GameOptions::default().with_players(3), 8).unwrap();

    let order = |game: &Game| game.all_cards().copied().collect::<Vec<_>>();
    assert_eq!(order(&a), order(&b));
    assert_ne!(order(&a), order(&c));
    assert_conserved(&a);
}

#[test]
fn forced_discards_play_to_completion() {
    let options = GameOptions::default().with_shuffle(false);
    let mut game = Game::new(options, 0).unwrap();
    let mut turns = 0;

    while let Some(turn) = game.start_turn().unwrap() {
        assert_eq!(turn.player, turns % 2);
        assert!(matches!(turn.draw, Draw::Card(_)));
        assert_conserved(&game);

        game.discard(0).unwrap();
        assert_conserved(&game);
        turns += 1;
    }

    assert_eq!(turns, 40);
    assert!(game.is_over());
    assert_eq!(game.center_pile().len(), 44);

    let result = game.result().unwrap();
    assert_eq!(result.scores.len(), 2);
    assert_eq!(result.winner, 0);
    assert_eq!(result.winning_score, 0);
}

#[test]
fn match_collects_center_cards_and_draws_again() {
    let mut game = scripted_game();
    let turn = game.start_turn().unwrap().unwrap();
    assert_eq!(turn.player, 0);
    assert_eq!(turn.draw, Draw::Card(card(Rank::Ace, Suit::Clubs)));

    let outcome = game.attempt_match(0).unwrap();
    assert_eq!(
        outcome,
        MatchOutcome::Matched {
            card: card(Rank::Five, Suit::Clubs),
            collected: 2,
            draw: Draw::Card(card(Rank::Queen, Suit::Clubs)),
            turn_ended: false,
        }
    );
    assert_eq!(
        earned(&game, 0),
        vec![
            card(Rank::Five, Suit::Clubs),
            card(Rank::Five, Suit::Spades),
            card(Rank::Five, Suit::Hearts),
        ]
    );
    let center: Vec<Card> = game.center_pile().iter().copied().collect();
    assert_eq!(
        center,
        vec![card(Rank::Nine, Suit::Clubs), card(Rank::King, Suit::Spades)]
    );
    assert_eq!(game.state(), GameState::ActionChoice);
    assert_eq!(game.current_player(), Some(0));
    assert_conserved(&game);
}

#[test]
fn failed_match_changes_nothing() {
    let mut game = scripted_game();
    game.start_turn().unwrap();
    let hand_before = game.player(0).unwrap().hand().clone();
    let center_before = game.center_pile().len();

    let outcome = game.attempt_match(2).unwrap();
    assert_eq!(
        outcome,
        MatchOutcome::NoMatch {
            card: card(Rank::Two, Suit::Clubs)
        }
    );
    assert_eq!(game.player(0).unwrap().hand(), &hand_before);
    assert_eq!(game.center_pile().len(), center_before);
    assert_eq!(game.cards_remaining(), 39);
    assert_eq!(game.state(), GameState::ActionChoice);
}

#[test]
fn steal_takes_whole_pile_under_matching_card() {
    let mut game = scripted_game();
    game.start_turn().unwrap();
    game.attempt_match(0).unwrap();
    game.attempt_match(0).unwrap();
    assert_eq!(game.player(0).unwrap().score(), 35);
    assert_eq!(game.discard(0).unwrap(), card(Rank::Two, Suit::Clubs));
    assert_eq!(game.state(), GameState::TurnStart);

    let turn = game.start_turn().unwrap().unwrap();
    assert_eq!(turn.player, 1);

    let outcome = game.attempt_steal(0).unwrap();
    assert_eq!(
        outcome,
        StealOutcome::Stole {
            target: 0,
            card: card(Rank::King, Suit::Diamonds),
            taken: 5,
            draw: Draw::Card(card(Rank::Four, Suit::Clubs)),
            turn_ended: false,
        }
    );
    assert!(game.player(0).unwrap().earned_pile().is_empty());
    assert_eq!(
        earned(&game, 1),
        vec![
            card(Rank::King, Suit::Diamonds),
            card(Rank::King, Suit::Clubs),
            card(Rank::King, Suit::Spades),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Five, Suit::Spades),
            card(Rank::Five, Suit::Hearts),
        ]
    );
    assert_eq!(game.player(1).unwrap().score(), 45);
    assert!(
        game.player(1)
            .unwrap()
            .hand()
            .find_matching(&card(Rank::King, Suit::Hearts))
            .is_none()
    );
    assert_conserved(&game);
}

#[test]
fn steal_against_empty_pile_fails_cleanly() {
    let mut game = scripted_game();
    game.start_turn().unwrap();

    assert_eq!(
        game.attempt_steal(1).unwrap(),
        StealOutcome::NoMatch { target: 1 }
    );
    assert_eq!(game.state(), GameState::ActionChoice);
    assert_conserved(&game);
}

#[test]
fn invalid_selections_are_rejected_without_changes() {
    let mut game = scripted_game();

    assert_eq!(game.discard(0).unwrap_err(), ActionError::InvalidState);
    game.start_turn().unwrap();
    assert_eq!(game.start_turn().unwrap_err(), ActionError::InvalidState);

    assert_eq!(game.discard(5).unwrap_err(), ActionError::InvalidHandIndex);
    assert_eq!(
        game.attempt_match(9).unwrap_err(),
        ActionError::InvalidHandIndex
    );
    assert_eq!(game.attempt_steal(0).unwrap_err(), ActionError::SelfTarget);
    assert_eq!(game.attempt_steal(2).unwrap_err(), ActionError::InvalidTarget);

    assert_eq!(game.player(0).unwrap().hand().len(), 5);
    assert_eq!(game.state(), GameState::ActionChoice);
    assert_conserved(&game);
}

#[test]
fn config_errors_refuse_construction() {
    let too_few = GameOptions::default().with_players(1);
    assert_eq!(Game::new(too_few, 1).unwrap_err(), ConfigError::TooFewPlayers);

    let too_many = GameOptions::default().with_players(13);
    assert_eq!(
        Game::new(too_many, 1).unwrap_err(),
        ConfigError::TooManyPlayers
    );

    let no_room = GameOptions::default()
        .with_initial_hand(0)
        .with_hand_capacity(0);
    assert_eq!(
        Game::new(no_room, 1).unwrap_err(),
        ConfigError::ZeroHandCapacity
    );

    let oversized = GameOptions::default().with_initial_hand(11);
    assert_eq!(
        Game::new(oversized, 1).unwrap_err(),
        ConfigError::DealExceedsCapacity
    );

    let mut short = standard_deck();
    short.pop();
    assert_eq!(
        Game::from_deck(GameOptions::default(), short).unwrap_err(),
        ConfigError::InvalidDeck
    );

    let mut duplicated = standard_deck();
    duplicated[1] = duplicated[0];
    assert_eq!(
        Game::from_deck(GameOptions::default(), duplicated).unwrap_err(),
        ConfigError::InvalidDeck
    );
}

#[test]
fn full_table_deals_everything_and_ends_immediately() {
    let mut game = Game::new(GameOptions::default().with_players(12), 3).unwrap();
    assert_eq!(game.cards_remaining(), 0);
    assert!(game.is_over());
    assert_eq!(game.start_turn().unwrap(), None);
    assert_conserved(&game);
}

#[test]
fn result_requires_finished_game() {
    let game = scripted_game();
    assert_eq!(game.result().unwrap_err(), ResultError::GameInProgress);
}

#[test]
fn final_round_is_finished_without_draws() {
    let options = GameOptions::default().with_players(5).with_shuffle(false);
    let mut game = Game::new(options, 0).unwrap();
    assert_eq!(game.cards_remaining(), 28);

    let mut seats = Vec::new();
    while let Some(turn) = game.start_turn().unwrap() {
        seats.push((turn.player, turn.draw));
        game.discard(0).unwrap();
    }

    assert_eq!(seats.len(), 30);
    assert_eq!(seats[27], (2, Draw::Card(card(Rank::Two, Suit::Diamonds))));
    assert_eq!(seats[28], (3, Draw::PileEmpty));
    assert_eq!(seats[29], (4, Draw::PileEmpty));
    assert_eq!(game.player(3).unwrap().hand().len(), 3);
}

#[test]
fn empty_seats_get_no_turn_once_the_pile_is_gone() {
    let options = GameOptions::default()
        .with_players(3)
        .with_initial_hand(0)
        .with_initial_center(0)
        .with_shuffle(false);
    let mut game = Game::new(options, 0).unwrap();

    let mut turns = 0;
    while game.start_turn().unwrap().is_some() {
        game.discard(0).unwrap();
        turns += 1;
    }

    assert_eq!(turns, DECK_SIZE);
    assert_eq!(game.center_pile().len(), DECK_SIZE);
}

#[test]
fn emptied_hand_ends_the_turn_when_nothing_is_left_to_draw() {
    let options = GameOptions::default()
        .with_initial_hand(1)
        .with_initial_center(49)
        .with_shuffle(false);
    let mut game = Game::new(options, 0).unwrap();
    assert_eq!(game.cards_remaining(), 1);

    let turn = game.start_turn().unwrap().unwrap();
    assert_eq!(turn.player, 0);
    assert_eq!(turn.draw, Draw::Card(card(Rank::Two, Suit::Diamonds)));

    assert_eq!(
        game.attempt_match(0).unwrap(),
        MatchOutcome::Matched {
            card: card(Rank::Ace, Suit::Clubs),
            collected: 3,
            draw: Draw::PileEmpty,
            turn_ended: false,
        }
    );
    assert_eq!(game.state(), GameState::ActionChoice);

    assert_eq!(
        game.attempt_match(0).unwrap(),
        MatchOutcome::Matched {
            card: card(Rank::Two, Suit::Diamonds),
            collected: 3,
            draw: Draw::PileEmpty,
            turn_ended: true,
        }
    );
    assert_eq!(game.state(), GameState::TurnStart);
    assert_eq!(game.current_player(), None);
    assert!(game.player(0).unwrap().hand().is_empty());
    assert_eq!(game.player(0).unwrap().score(), 100);

    let turn = game.start_turn().unwrap().unwrap();
    assert_eq!(turn.player, 1);
    assert_eq!(turn.draw, Draw::PileEmpty);
    assert_eq!(game.discard(0).unwrap(), card(Rank::King, Suit::Clubs));

    assert!(game.is_over());
    assert_eq!(game.result().unwrap().winner, 0);
    assert_conserved(&game);
}

#[test]
fn full_hand_refuses_the_draw_and_keeps_the_card() {
    let options = GameOptions::default()
        .with_initial_hand(1)
        .with_hand_capacity(1)
        .with_shuffle(false);
    let mut game = Game::new(options.clone(), 0).unwrap();
    assert_eq!(game.cards_remaining(), 46);

    let refused = Draw::HandFull(CapacityError { capacity: 1 });
    let turn = game.start_turn().unwrap().unwrap();
    assert_eq!(turn.player, 0);
    assert_eq!(turn.draw, refused);
    assert_eq!(game.cards_remaining(), 46);
    assert_eq!(game.player(0).unwrap().hand().len(), 1);
    assert_eq!(game.discard(0).unwrap(), card(Rank::Ace, Suit::Clubs));

    assert_eq!(game.start_turn().unwrap().unwrap().draw, refused);
    game.discard(0).unwrap();

    let turn = game.start_turn().unwrap().unwrap();
    assert_eq!(turn.player, 0);
    assert_eq!(turn.draw, Draw::Card(card(Rank::Eight, Suit::Clubs)));
    assert_eq!(game.cards_remaining(), 45);
    assert_conserved(&game);

    let mut game = Game::new(options, 0).unwrap();
    let mut controller = Scripted {
        script: Vec::new(),
        events: Vec::new(),
    };
    game.run(&mut controller);

    assert_eq!(
        &controller.events[..6],
        &[
            GameEvent::TurnStarted { player: 0 },
            GameEvent::DrawRefused {
                player: 0,
                error: CapacityError { capacity: 1 },
            },
            GameEvent::Discarded {
                player: 0,
                card: card(Rank::Ace, Suit::Clubs),
            },
            GameEvent::TurnEnded { player: 0 },
            GameEvent::TurnStarted { player: 1 },
            GameEvent::DrawRefused {
                player: 1,
                error: CapacityError { capacity: 1 },
            },
        ]
    );
    assert!(game.is_over());
    assert_eq!(game.center_pile().len(), DECK_SIZE);
}

#[test]
fn empty_seats_after_the_last_draw_end_the_game() {
    let options = GameOptions::default()
        .with_players(3)
        .with_initial_hand(1)
        .with_initial_center(0)
        .with_hand_capacity(1)
        .with_shuffle(false);
    let mut game = Game::new(options, 0).unwrap();

    let mut seats = Vec::new();
    while let Some(turn) = game.start_turn().unwrap() {
        seats.push(turn.player);
        game.discard(0).unwrap();
    }

    assert_eq!(seats.len(), DECK_SIZE);
    assert_eq!(seats.last(), Some(&0));
    assert!(game.players().iter().all(|p| p.hand().is_empty()));
    assert_eq!(game.center_pile().len(), DECK_SIZE);
}

#[test]
fn winner_is_first_seat_with_the_highest_score() {
    let mut game = scripted_game();
    game.start_turn().unwrap();
    game.attempt_match(0).unwrap();

    while !game.is_over() {
        if game.state() == GameState::ActionChoice {
            game.discard(0).unwrap();
        } else {
            game.start_turn().unwrap();
        }
    }

    let result = game.result().unwrap();
    assert_eq!(result.winner, 0);
    assert_eq!(result.winning_score, 15);
    assert_eq!(result.scores[1].score, 0);
}

/// Plays greedily: match when the center has the rank, steal when an
/// opponent's top matches, otherwise discard the first card.
#[derive(Default)]
struct Greedy {
    events: Vec<GameEvent>,
}

impl Controller for Greedy {
    fn choose(&mut self, game: &Game) -> Choice {
        let me = game.current_player().unwrap();
        let hand = game.player(me).unwrap().hand();

        for (index, held) in hand.cards().iter().enumerate() {
            if game.center_pile().iter().any(|c| c.matches(held)) {
                return Choice::Match(index);
            }
        }
        for (seat, other) in game.players().iter().enumerate() {
            if seat == me {
                continue;
            }
            if let Some(top) = other.top_earned() {
                if hand.find_matching(&top).is_some() {
                    return Choice::Steal(seat);
                }
            }
        }
        Choice::Discard(0)
    }

    fn on_event(&mut self, game: &Game, event: &GameEvent) {
        assert_eq!(game.total_cards(), DECK_SIZE);
        self.events.push(event.clone());
    }
}

#[test]
fn run_plays_a_full_game_and_reports_the_result() {
    let mut game = Game::new(GameOptions::default().with_players(3), 2024).unwrap();
    let mut controller = Greedy::default();

    let result = game.run(&mut controller);

    assert!(game.is_over());
    assert_conserved(&game);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(result, game.result().unwrap());
    assert_eq!(
        controller.events.last(),
        Some(&GameEvent::GameOver(result.clone()))
    );
    let best = result.scores.iter().map(|s| s.score).max().unwrap();
    assert_eq!(result.winning_score, best);
    assert_eq!(
        result.winner,
        result.scores.iter().position(|s| s.score == best).unwrap()
    );
    assert!(
        controller
            .events
            .iter()
            .all(|event| !matches!(event, GameEvent::Rejected { .. }))
    );
}

/// Sends a fixed script of choices, then discards forever.
struct Scripted {
    script: Vec<Choice>,
    events: Vec<GameEvent>,
}

impl Controller for Scripted {
    fn choose(&mut self, _game: &Game) -> Choice {
        if self.script.is_empty() {
            Choice::Discard(0)
        } else {
            self.script.remove(0)
        }
    }

    fn on_event(&mut self, _game: &Game, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

#[test]
fn run_reprompts_after_rejected_choices() {
    let mut game = scripted_game();
    let mut controller = Scripted {
        script: vec![Choice::Discard(42), Choice::Steal(0), Choice::Match(2)],
        events: Vec::new(),
    };

    game.run(&mut controller);

    assert_eq!(
        &controller.events[..6],
        &[
            GameEvent::TurnStarted { player: 0 },
            GameEvent::Drew {
                player: 0,
                card: card(Rank::Ace, Suit::Clubs),
            },
            GameEvent::Rejected {
                player: 0,
                error: ActionError::InvalidHandIndex,
            },
            GameEvent::Rejected {
                player: 0,
                error: ActionError::SelfTarget,
            },
            GameEvent::NoMatch {
                player: 0,
                card: card(Rank::Two, Suit::Clubs),
            },
            GameEvent::Discarded {
                player: 0,
                card: card(Rank::Five, Suit::Clubs),
            },
        ]
    );
    assert_eq!(controller.events[6], GameEvent::TurnEnded { player: 0 });
    assert_eq!(
        controller
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver(_)))
            .count(),
        1
    );
}

#[test]
fn run_game_builds_and_plays() {
    let result =
        matchpile::run_game(GameOptions::default(), 11, &mut Greedy::default()).unwrap();
    assert_eq!(result.scores.len(), 2);

    let refused = matchpile::run_game(
        GameOptions::default().with_players(0),
        11,
        &mut Greedy::default(),
    );
    assert_eq!(refused.unwrap_err(), ConfigError::TooFewPlayers);
}
