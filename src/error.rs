use thiserror::Error;

use crate::card::Card;
use crate::participant::ParticipantId;

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("participant index {0} is out of range")]
    InvalidParticipant(ParticipantId),
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// A strategy handed back a choice the rules do not allow. The game state is
/// left untouched when this is reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("{card} cannot be played on {top}")]
    IllegalCard { card: Card, top: Card },
}
