//! Rules engine for a shedding card game with wild cards and a last-card call,
//! with pluggable human and automated strategies.

pub mod card;
pub mod effect;
pub mod error;
pub mod game;
pub mod participant;
pub mod pile;
pub mod state;
pub mod strategies;
pub mod strategy;
pub mod visualize;

pub use crate::card::{Card, CardKind, Color, build_standard_deck};
pub use crate::effect::Effect;
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{
    Delivery, ForcedDraw, Game, GameBuilder, GameConfig, ParticipantSpec, TurnOutcome,
    start_match,
};
pub use crate::participant::{Participant, ParticipantId};
pub use crate::pile::{DiscardPile, DrawPile};
pub use crate::state::{Direction, GameStateView, GameStatus, ParticipantView};
pub use crate::strategies::registry::{label_for_spec, participant_from_spec};
pub use crate::strategies::{HeuristicStrategy, HumanStrategy, RandomStrategy};
pub use crate::strategy::{Strategy, legal_indices};
pub use crate::visualize::{VisualOptions, describe_outcome, render_state};
