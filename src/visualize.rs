use std::fmt::Write;

use crate::game::{Delivery, TurnOutcome};
use crate::state::{Direction, GameStateView, GameStatus};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_hand: bool,
    pub show_pile_sizes: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_hand: true,
            show_pile_sizes: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::InProgress => String::from("In progress"),
        GameStatus::Won { winner } => format!("Finished (winner: {})", name_of(state, winner)),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(out, "Turns played: {}", state.turns_played);
    let direction = match state.direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    };
    let _ = writeln!(out, "Direction: {direction}");
    let _ = write!(out, "Top card: {}", state.top_card);
    if let Some(color) = state.declared_color {
        let _ = write!(out, " (declared color: {color})");
    }
    let _ = writeln!(out);
    if options.show_pile_sizes {
        let _ = writeln!(
            out,
            "Draw pile: {} | Discard pile: {}",
            state.draw_pile_count, state.discard_pile_count
        );
    }
    let _ = writeln!(out, "Participants:");
    for participant in &state.participants {
        let marker = if participant.is_current { '>' } else { ' ' };
        let you = if participant.id == state.self_participant {
            " (You)"
        } else {
            ""
        };
        let called = if participant.has_called_last_card {
            " [last card!]"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            " {marker} {}{you}: {} card(s){called}",
            participant.name, participant.hand_size
        );
    }
    if options.show_hand {
        let hand: Vec<String> = state.hand.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "Hand: {}", hand.join(", "));
    }
    out
}

fn name_of(state: &GameStateView, id: usize) -> String {
    state
        .participants
        .get(id)
        .map(|participant| participant.name.clone())
        .unwrap_or_else(|| format!("Participant {id}"))
}

fn shortfall_note(delivery: Delivery) -> String {
    if delivery.is_complete() {
        String::new()
    } else {
        format!(" (only {} of {} available)", delivery.delivered, delivery.requested)
    }
}

/// One line per event of a turn, named from the post-turn snapshot.
pub fn describe_outcome(state: &GameStateView, outcome: &TurnOutcome) -> String {
    let mut out = String::new();
    let actor = name_of(state, outcome.participant);
    if let Some(drew) = outcome.drew_cards {
        if drew.delivered == 0 {
            let _ = writeln!(out, "{actor} tried to draw, but no cards are left.");
        } else {
            let _ = writeln!(out, "{actor} draws a card.");
        }
    }
    if let Some(card) = outcome.played_card {
        let from = if outcome.played_drawn_card {
            " straight from the pile"
        } else {
            ""
        };
        let _ = writeln!(out, "{actor} plays {card}{from}.");
    }
    if outcome.called_last_card {
        let _ = writeln!(out, "{actor} calls last card!");
    }
    if let Some(penalty) = outcome.penalty {
        let _ = writeln!(
            out,
            "{actor} forgot to call last card and draws {} penalty card(s){}.",
            penalty.delivered,
            shortfall_note(penalty)
        );
    }
    if let Some(color) = outcome.declared_color {
        let _ = writeln!(out, "New color: {color}.");
    }
    if outcome.direction_reversed {
        let _ = writeln!(out, "Direction reversed.");
    }
    if let Some(forced) = outcome.forced_draw {
        let _ = writeln!(
            out,
            "{} has to draw {} card(s){}.",
            name_of(state, forced.target),
            forced.delivery.delivered,
            shortfall_note(forced.delivery)
        );
    }
    if let Some(skipped) = outcome.skipped {
        let _ = writeln!(out, "{} is skipped.", name_of(state, skipped));
    }
    if let Some(winner) = outcome.winner {
        let _ = writeln!(out, "{} wins!", name_of(state, winner));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Color};
    use crate::state::ParticipantView;

    fn view() -> GameStateView {
        GameStateView {
            status: GameStatus::InProgress,
            self_participant: 0,
            current_participant: 0,
            direction: Direction::Clockwise,
            top_card: Card::number(Color::Red, 5),
            declared_color: None,
            draw_pile_count: 40,
            discard_pile_count: 3,
            turns_played: 2,
            participants: vec![
                ParticipantView {
                    id: 0,
                    name: String::from("Ann"),
                    hand_size: 2,
                    has_called_last_card: false,
                    is_current: true,
                },
                ParticipantView {
                    id: 1,
                    name: String::from("Bot"),
                    hand_size: 1,
                    has_called_last_card: true,
                    is_current: false,
                },
            ],
            hand: vec![Card::number(Color::Red, 1), Card::Wild],
        }
    }

    #[test]
    fn default_rendering_shows_hand_and_piles() {
        let text = render_state(&view());
        assert!(text.contains("Hand: Red 1, Wild"));
        assert!(text.contains("Draw pile: 40 | Discard pile: 3"));
        assert!(text.contains(" > Ann (You): 2 card(s)"));
        assert!(text.contains("Bot: 1 card(s) [last card!]"));
    }

    #[test]
    fn options_hide_hand_and_piles() {
        let options = VisualOptions {
            show_hand: false,
            show_pile_sizes: false,
        };
        let text = render_state_with_options(&view(), options);
        assert!(!text.contains("Hand:"));
        assert!(!text.contains("Draw pile:"));
        assert!(text.contains("Top card: Red 5"));
    }
}
