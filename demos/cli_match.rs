//! CLI card-matching example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use matchpile::input::{self, ActionKind};
use matchpile::{Card, Choice, Controller, Game, GameEvent, GameOptions, MIN_PLAYERS, Stack};

fn main() {
    print_banner();

    let Some(players) = prompt_players() else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_players(players);
    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Cannot start game: {err}");
            return;
        }
    };

    game.run(&mut Console);
}

struct Console;

impl Controller for Console {
    fn choose(&mut self, game: &Game) -> Choice {
        let me = game.current_player().unwrap_or_default();
        let hand_len = game.player(me).map_or(0, |player| player.hand().len());

        print_table(game, me);

        loop {
            println!("Choose action:");
            println!("1. Make a move (match/steal)");
            println!("2. Put a card to center");
            let action = match input::parse_action(&prompt_line("Choice: ")) {
                Ok(action) => action,
                Err(err) => {
                    println!("{err}, try again.");
                    continue;
                }
            };

            match action {
                ActionKind::Discard => {
                    let line = prompt_line(&format!("Which card to put (1-{hand_len}): "));
                    match input::parse_hand_index(&line, hand_len) {
                        Ok(index) => return Choice::Discard(index),
                        Err(err) => println!("{err}, try again."),
                    }
                }
                ActionKind::Move => {
                    let last = input::player_letter(game.player_count() - 1).unwrap_or('a');
                    let line = prompt_line(&format!(
                        "Enter move (1-{hand_len} for hand, a-{last} for steal): "
                    ));
                    match input::parse_move(&line, hand_len, game.player_count(), me) {
                        Ok(choice) => return choice,
                        Err(err) => println!("{err}, try again."),
                    }
                }
            }
        }
    }

    fn on_event(&mut self, game: &Game, event: &GameEvent) {
        match event {
            GameEvent::TurnStarted { player } => {
                println!("\n==============================");
                println!("      PLAYER {} TURN", player + 1);
                println!("==============================");
            }
            GameEvent::Drew { card, .. } => println!("You drew: {card}"),
            GameEvent::DrawRefused { error, .. } => println!("Could not draw: {error}"),
            GameEvent::Matched { collected, .. } => {
                println!("{collected} cards matched and collected!");
            }
            GameEvent::NoMatch { .. } => {
                println!("No match found.");
                println!("No valid move made. Please try again or discard a card.");
            }
            GameEvent::Stole { target, .. } => {
                println!("Stolen earned pile from Player {}!", target + 1);
            }
            GameEvent::StealFailed { target, .. } => {
                println!("No match with top card of Player {}.", target + 1);
                println!("No valid move made. Please try again or discard a card.");
            }
            GameEvent::Discarded { card, .. } => println!("Put {card} to center."),
            GameEvent::Rejected { error, .. } => println!("{error}, try again."),
            GameEvent::TurnEnded { .. } => {}
            GameEvent::GameOver(result) => {
                println!("\nGame Over!");
                for entry in &result.scores {
                    println!("Player {} Score: {}", entry.player + 1, entry.score);
                }
                println!(
                    "Winner is Player {} with {} points!",
                    result.winner + 1,
                    result.winning_score
                );
                println!("Draw pile: {} cards", game.cards_remaining());
            }
        }
    }
}

fn print_banner() {
    println!("=========================================");
    println!("        WELCOME TO THE CARD MATCH GAME!");
    println!("=========================================");
    println!("Instructions:");
    println!("1. Match cards from your hand with center cards to earn them.");
    println!("2. Steal another player's earned pile if you have a card matching their top.");
    println!("3. No move? Discard a card to the center.");
    println!("4. Each round, draw a new card.");
    println!("5. Scoring:");
    println!("   - A = 20 pts");
    println!("   - K/Q/J = 10 pts");
    println!("   - Numbers = 5 pts");
    println!("=========================================\n");
}

fn prompt_players() -> Option<usize> {
    loop {
        let line = prompt_line(&format!("Enter number of players (min {MIN_PLAYERS}, q to quit): "));
        if line == "q" || line == "quit" {
            return None;
        }
        match line.parse::<usize>() {
            Ok(players) if players >= MIN_PLAYERS => return Some(players),
            _ => println!("Enter a valid number of players (minimum {MIN_PLAYERS})!"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => {
            println!("\nInput closed. Goodbye.");
            std::process::exit(0);
        }
        Ok(_) => {}
        Err(_) => return String::new(),
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game, me: usize) {
    println!("\nCenter cards:");
    print_pile(game.center_pile());

    if let Some(player) = game.player(me) {
        println!("Player's Hand:");
        for (index, card) in player.hand().cards().iter().enumerate() {
            println!("{}. {card}", index + 1);
        }
    }

    for (seat, player) in game.players().iter().enumerate() {
        let top = player
            .top_earned()
            .map_or_else(|| "(empty)".to_string(), |card| card.to_string());
        println!("Player {} Earned Pile: {top}", seat + 1);
    }
    println!("Draw pile: {} cards", game.cards_remaining());
}

fn print_pile(pile: &Stack<Card>) {
    if pile.is_empty() {
        println!("(empty)");
    }
    for (index, card) in pile.iter().enumerate() {
        println!("{}. {card}", index + 1);
    }
}
