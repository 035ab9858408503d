use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, build_standard_deck};

/// Face-down pile the participants draw from. The last element is the top.
#[derive(Clone, Debug, Default)]
pub struct DrawPile {
    cards: Vec<Card>,
}

impl DrawPile {
    /// Full 108-card deck, unshuffled.
    pub fn standard() -> Self {
        Self::from_cards(build_standard_deck())
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes the top card, or `None` when the pile is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Puts a card underneath everything else.
    pub fn insert_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Moves every discard except the current top into this pile and
    /// reshuffles. With one discard or fewer nothing moves. Returns the number
    /// of cards now available to draw.
    pub fn refill_from<R: Rng + ?Sized>(&mut self, history: &mut DiscardPile, rng: &mut R) -> usize {
        let recycled = history.take_all_but_top();
        if recycled.is_empty() {
            return self.cards.len();
        }
        self.cards.extend(recycled);
        self.cards.shuffle(rng);
        self.cards.len()
    }
}

/// Played cards, oldest first. The last element is the card every play is
/// checked against.
#[derive(Clone, Debug, Default)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn take_all_but_top(&mut self) -> Vec<Card> {
        if self.cards.len() <= 1 {
            return Vec::new();
        }
        let top = self.cards.split_off(self.cards.len() - 1);
        std::mem::replace(&mut self.cards, top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Color, DECK_SIZE};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(mut cards: Vec<Card>) -> Vec<String> {
        let mut keys: Vec<String> = cards.drain(..).map(|c| format!("{c:?}")).collect();
        keys.sort();
        keys
    }

    proptest! {
        #[test]
        fn drawing_a_shuffled_pile_preserves_composition(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pile = DrawPile::standard();
            pile.shuffle(&mut rng);
            let mut drawn = Vec::with_capacity(DECK_SIZE);
            while let Some(card) = pile.draw() {
                drawn.push(card);
            }
            prop_assert_eq!(drawn.len(), DECK_SIZE);
            prop_assert_eq!(sorted(drawn), sorted(build_standard_deck()));
        }
    }

    #[test]
    fn draw_from_empty_pile_yields_none() {
        let mut pile = DrawPile::from_cards(vec![Card::Wild]);
        assert_eq!(pile.draw(), Some(Card::Wild));
        assert_eq!(pile.draw(), None);
        assert!(pile.is_empty());
    }

    #[test]
    fn draw_takes_from_the_end() {
        let mut pile = DrawPile::from_cards(vec![Card::number(Color::Red, 1), Card::number(Color::Red, 2)]);
        assert_eq!(pile.draw(), Some(Card::number(Color::Red, 2)));
        pile.insert_bottom(Card::Wild);
        assert_eq!(pile.cards(), &[Card::Wild, Card::number(Color::Red, 1)]);
    }

    #[test]
    fn refill_with_single_discard_is_noop() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pile = DrawPile::from_cards(vec![Card::Wild, Card::Wild]);
        let mut history = DiscardPile::new();
        assert_eq!(pile.refill_from(&mut history, &mut rng), 2);
        history.push(Card::number(Color::Blue, 5));
        assert_eq!(pile.refill_from(&mut history, &mut rng), 2);
        assert_eq!(history.len(), 1);
        assert_eq!(history.top(), Some(&Card::number(Color::Blue, 5)));
    }

    #[test]
    fn refill_moves_all_but_top() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pile = DrawPile::default();
        let mut history = DiscardPile::new();
        for rank in 0..6 {
            history.push(Card::number(Color::Green, rank));
        }
        assert_eq!(pile.refill_from(&mut history, &mut rng), 5);
        assert_eq!(history.len(), 1);
        assert_eq!(history.top(), Some(&Card::number(Color::Green, 5)));
        let moved = sorted(pile.cards().to_vec());
        let expected = sorted((0..5).map(|r| Card::number(Color::Green, r)).collect());
        assert_eq!(moved, expected);
    }
}
