use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardKind, Color};
use crate::strategy::{Strategy, legal_indices};

/// Chance that the automated player remembers to call its last card.
pub const DEFAULT_CALL_PROBABILITY: f64 = 0.9;

/// Hand size at or below which wild cards are let go.
const WILD_RELEASE_HAND_SIZE: usize = 3;

/// Rule-based automated player.
///
/// In plain English:
/// - Hold wild cards back until the hand is down to three cards or fewer.
/// - Otherwise prefer disruptive cards (skip, reverse, draw-two) over plain numbers.
/// - Pick uniformly at random within the preferred group.
/// - Declare whichever color it holds the most of.
/// - Always play a legal card fresh from the pile.
pub struct HeuristicStrategy<R: Rng> {
    rng: R,
    call_probability: f64,
}

impl<R: Rng> HeuristicStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self::with_call_probability(rng, DEFAULT_CALL_PROBABILITY)
    }

    /// Probabilities outside 0..=1 are clamped; NaN falls back to
    /// [`DEFAULT_CALL_PROBABILITY`].
    pub fn with_call_probability(rng: R, call_probability: f64) -> Self {
        let call_probability = if call_probability.is_nan() {
            DEFAULT_CALL_PROBABILITY
        } else {
            call_probability.clamp(0.0, 1.0)
        };
        Self {
            rng,
            call_probability,
        }
    }
}

/// Color with the highest count in `hand`; ties go to the earlier color in
/// [`Color::ALL`].
pub fn dominant_color(hand: &[Card]) -> Color {
    let mut best = Color::ALL[0];
    let mut best_count = 0;
    for color in Color::ALL {
        let count = hand.iter().filter(|card| card.color() == Some(color)).count();
        if count > best_count {
            best = color;
            best_count = count;
        }
    }
    best
}

impl<R: Rng> Strategy for HeuristicStrategy<R> {
    fn choose_card_index(
        &mut self,
        hand: &[Card],
        top: &Card,
        declared_color: Option<Color>,
    ) -> Option<usize> {
        let legal = legal_indices(hand, top, declared_color);
        if legal.is_empty() {
            return None;
        }
        let (wild, rest): (Vec<usize>, Vec<usize>) =
            legal.iter().partition(|&&index| hand[index].is_wild());
        let (number, action): (Vec<usize>, Vec<usize>) = rest
            .into_iter()
            .partition(|&index| hand[index].kind() == CardKind::Number);

        let pool = if hand.len() <= WILD_RELEASE_HAND_SIZE && !wild.is_empty() {
            &wild
        } else if !action.is_empty() {
            &action
        } else if !number.is_empty() {
            &number
        } else {
            &legal
        };
        pool.choose(&mut self.rng).copied()
    }

    fn choose_color(&mut self, hand: &[Card]) -> Color {
        dominant_color(hand)
    }

    fn confirm_play_drawn_card(&mut self, _card: &Card) -> bool {
        true
    }

    fn confirm_call_last_card(&mut self) -> bool {
        self.rng.gen_bool(self.call_probability)
    }
}
