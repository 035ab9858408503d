use serde::{Deserialize, Serialize};

use crate::card::{Card, Color};
use crate::participant::ParticipantId;

/// Direction the turn pointer travels around the table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// +1 or -1.
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: ParticipantId },
}

/// Public portion of a participant's state that everyone at the table sees.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantView {
    pub id: ParticipantId,
    pub name: String,
    pub hand_size: usize,
    pub has_called_last_card: bool,
    pub is_current: bool,
}

/// Game snapshot from one participant's perspective, for renderers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub status: GameStatus,
    pub self_participant: ParticipantId,
    pub current_participant: ParticipantId,
    pub direction: Direction,
    pub top_card: Card,
    pub declared_color: Option<Color>,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub turns_played: usize,
    pub participants: Vec<ParticipantView>,
    pub hand: Vec<Card>,
}
