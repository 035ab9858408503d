use crate::card::{Card, CardKind};

/// What a played card does to turn order and to the next participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Effect {
    /// The next participant loses their turn.
    pub skip_next: bool,
    /// Play direction flips.
    pub reverse: bool,
    /// Cards the next participant is forced to draw.
    pub forced_draw: usize,
    /// The acting participant declares a color.
    pub declare_color: bool,
}

impl Effect {
    /// Effect of `card` at a table of `participant_count` seats. A reverse
    /// between two participants doubles as a skip.
    pub fn for_card(card: &Card, participant_count: usize) -> Self {
        match card.kind() {
            CardKind::Number => Effect::default(),
            CardKind::Skip => Effect {
                skip_next: true,
                ..Effect::default()
            },
            CardKind::Reverse => Effect {
                reverse: true,
                skip_next: participant_count == 2,
                ..Effect::default()
            },
            CardKind::DrawTwo => Effect {
                skip_next: true,
                forced_draw: 2,
                ..Effect::default()
            },
            CardKind::Wild => Effect {
                declare_color: true,
                ..Effect::default()
            },
            CardKind::WildDrawFour => Effect {
                skip_next: true,
                forced_draw: 4,
                declare_color: true,
                ..Effect::default()
            },
        }
    }

    /// True when the card changes nothing beyond the discard pile.
    pub fn is_none(&self) -> bool {
        *self == Effect::default()
    }
}
