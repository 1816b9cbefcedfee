//! Parsing of the shell's raw input into turn choices.
//!
//! A console front end asks two questions per decision: an action selector
//! (`1` to match or steal, `2` to discard), then either a 1-based hand
//! position or a player letter (`a` for the first seat). Everything is range
//! checked here so the engine only ever sees valid positions.

use crate::error::InputError;
use crate::game::Choice;

/// The first answer of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Match a hand card or steal a pile.
    Move,
    /// Put a card on the center pile.
    Discard,
}

/// Parses the action selector.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for blank input, [`InputError::NotANumber`]
/// for non-numeric input, and [`InputError::UnknownAction`] for any number
/// other than 1 or 2.
pub fn parse_action(input: &str) -> Result<ActionKind, InputError> {
    match parse_number(input)? {
        1 => Ok(ActionKind::Move),
        2 => Ok(ActionKind::Discard),
        _ => Err(InputError::UnknownAction),
    }
}

/// Parses a 1-based hand position and returns the 0-based index.
///
/// # Errors
///
/// Returns [`InputError::IndexOutOfRange`] unless the position is within
/// `1..=hand_len`.
pub fn parse_hand_index(input: &str, hand_len: usize) -> Result<usize, InputError> {
    let position = parse_number(input)?;
    if position == 0 || position > hand_len {
        return Err(InputError::IndexOutOfRange);
    }
    Ok(position - 1)
}

/// Parses a move: a 1-based hand position to match, or a player letter to
/// steal from.
///
/// # Errors
///
/// Returns an [`InputError`] if the position is out of range, the letter
/// does not name a seat, or it names `me`.
///
/// # Example
///
/// ```
/// use matchpile::{Choice, input::parse_move};
///
/// assert_eq!(parse_move("2", 5, 3, 0), Ok(Choice::Match(1)));
/// assert_eq!(parse_move("c", 5, 3, 0), Ok(Choice::Steal(2)));
/// ```
pub fn parse_move(
    input: &str,
    hand_len: usize,
    players: usize,
    me: usize,
) -> Result<Choice, InputError> {
    let input = input.trim();
    let first = input.chars().next().ok_or(InputError::Empty)?;

    if first.is_ascii_digit() {
        return parse_hand_index(input, hand_len).map(Choice::Match);
    }

    let mut chars = input.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(InputError::InvalidTarget);
    };
    let target = seat_for_letter(letter).ok_or(InputError::InvalidTarget)?;
    if target >= players {
        return Err(InputError::InvalidTarget);
    }
    if target == me {
        return Err(InputError::SelfTarget);
    }
    Ok(Choice::Steal(target))
}

/// Returns the letter that names `seat` (`a` for seat 0).
///
/// Seats past `z` have no letter.
#[must_use]
pub fn player_letter(seat: usize) -> Option<char> {
    (seat < 26).then(|| char::from(b'a' + seat as u8))
}

fn seat_for_letter(letter: char) -> Option<usize> {
    let letter = letter.to_ascii_lowercase();
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}

fn parse_number(input: &str) -> Result<usize, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    input.parse().map_err(|_| InputError::NotANumber)
}
