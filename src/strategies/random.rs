use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Color};
use crate::strategy::{Strategy, legal_indices};

/// Baseline strategy that samples uniformly from the legal cards. It always
/// plays a drawn card when allowed and never forgets to call.
pub struct RandomStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn choose_card_index(
        &mut self,
        hand: &[Card],
        top: &Card,
        declared_color: Option<Color>,
    ) -> Option<usize> {
        legal_indices(hand, top, declared_color)
            .choose(&mut self.rng)
            .copied()
    }

    fn choose_color(&mut self, _hand: &[Card]) -> Color {
        *Color::ALL
            .choose(&mut self.rng)
            .expect("color list is not empty")
    }

    fn confirm_play_drawn_card(&mut self, _card: &Card) -> bool {
        true
    }

    fn confirm_call_last_card(&mut self) -> bool {
        true
    }
}
