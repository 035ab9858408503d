use crate::card::{Card, Color};

/// Decision interface consulted by the game on a participant's behalf.
///
/// Implementations only see their own hand plus the public top card and
/// declared color; they never mutate game state.
pub trait Strategy {
    /// Index of a legal card in `hand`, or `None` to draw instead.
    fn choose_card_index(
        &mut self,
        hand: &[Card],
        top: &Card,
        declared_color: Option<Color>,
    ) -> Option<usize>;

    /// Color to declare after playing a wild card.
    fn choose_color(&mut self, hand: &[Card]) -> Color;

    /// Whether to play a legal card that was just drawn.
    fn confirm_play_drawn_card(&mut self, card: &Card) -> bool;

    /// Whether to call "last card" after playing down to a single card.
    fn confirm_call_last_card(&mut self) -> bool;
}

/// Indices of every card in `hand` that may follow `top`.
pub fn legal_indices(hand: &[Card], top: &Card, declared_color: Option<Color>) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| card.can_follow(top, declared_color))
        .map(|(index, _)| index)
        .collect()
}
