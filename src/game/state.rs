//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between turns; the next seat has not drawn yet.
    TurnStart,
    /// A turn is active and waiting for a match, steal, or discard.
    ActionChoice,
    /// The draw pile ran out and the final round has been played.
    GameOver,
}

/// A player's decision inside an active turn.
///
/// Hand positions and seats are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Put the card at this hand position on the center pile, ending the turn.
    Discard(usize),
    /// Match the card at this hand position against the center pile.
    Match(usize),
    /// Steal the earned pile of the player in this seat.
    Steal(usize),
}
