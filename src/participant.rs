use crate::card::Card;
use crate::pile::DrawPile;
use crate::strategy::Strategy;

/// Zero-based seat of a participant within the game.
pub type ParticipantId = usize;

/// A seat at the table: hand, last-card call state and the strategy that
/// decides for it.
///
/// `has_called_last_card` and `just_reached_one_card` are only ever changed by
/// [`Participant::draw_into_hand`], [`Participant::play_from_hand`],
/// [`Participant::call_last_card`] and the game's post-play check.
pub struct Participant {
    name: String,
    hand: Vec<Card>,
    has_called_last_card: bool,
    just_reached_one_card: bool,
    strategy: Box<dyn Strategy>,
}

impl Participant {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            has_called_last_card: false,
            just_reached_one_card: false,
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn has_called_last_card(&self) -> bool {
        self.has_called_last_card
    }

    pub fn just_reached_one_card(&self) -> bool {
        self.just_reached_one_card
    }

    /// Splits the participant into its read-only hand and mutable strategy so
    /// the strategy can be consulted without touching the hand.
    pub(crate) fn decide(&mut self) -> (&[Card], &mut dyn Strategy) {
        (&self.hand, self.strategy.as_mut())
    }

    /// Draws one card into the hand. Going above one card forfeits any call
    /// made and any pending call obligation.
    pub fn draw_into_hand(&mut self, pile: &mut DrawPile) -> Option<Card> {
        let card = pile.draw()?;
        self.receive(card);
        Some(card)
    }

    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.push(card);
        if self.hand.len() > 1 {
            self.has_called_last_card = false;
            self.just_reached_one_card = false;
        }
    }

    /// Removes the card at `index`. Playing the second-to-last card is the one
    /// moment the call obligation is earned.
    pub fn play_from_hand(&mut self, index: usize) -> Option<Card> {
        if index >= self.hand.len() {
            return None;
        }
        if self.hand.len() == 2 {
            self.just_reached_one_card = true;
        }
        Some(self.hand.remove(index))
    }

    /// Declares the last card. Ignored unless exactly one card is held.
    pub fn call_last_card(&mut self) -> bool {
        if self.hand.len() != 1 {
            return false;
        }
        self.has_called_last_card = true;
        true
    }

    /// Post-play check: true when the participant owes the penalty. The
    /// obligation is consumed either way, and any stale call state is dropped
    /// once the hand is no longer a single card.
    pub(crate) fn settle_last_card(&mut self) -> bool {
        if self.hand.len() != 1 {
            self.has_called_last_card = false;
            self.just_reached_one_card = false;
            return false;
        }
        let owes = !self.has_called_last_card && self.just_reached_one_card;
        self.just_reached_one_card = false;
        owes
    }
}

impl std::fmt::Debug for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("has_called_last_card", &self.has_called_last_card)
            .field("just_reached_one_card", &self.just_reached_one_card)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Color;
    use crate::strategies::RandomStrategy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn participant(hand: &[Card]) -> Participant {
        let mut p = Participant::new("test", Box::new(RandomStrategy::new(StdRng::seed_from_u64(1))));
        for card in hand {
            p.hand.push(*card);
        }
        p
    }

    fn red(rank: u8) -> Card {
        Card::number(Color::Red, rank)
    }

    #[test]
    fn playing_from_two_earns_the_obligation() {
        let mut p = participant(&[red(1), red(2)]);
        assert_eq!(p.play_from_hand(0), Some(red(1)));
        assert!(p.just_reached_one_card());
    }

    #[test]
    fn playing_from_three_or_one_does_not_earn() {
        let mut p = participant(&[red(1), red(2), red(3)]);
        p.play_from_hand(2);
        assert!(!p.just_reached_one_card());

        let mut single = participant(&[red(1)]);
        single.play_from_hand(0);
        assert!(!single.just_reached_one_card());
    }

    #[test]
    fn out_of_range_play_leaves_hand_alone() {
        let mut p = participant(&[red(1), red(2)]);
        assert_eq!(p.play_from_hand(5), None);
        assert_eq!(p.hand_size(), 2);
        assert!(!p.just_reached_one_card());
    }

    #[test]
    fn call_only_accepted_with_one_card() {
        let mut p = participant(&[red(1), red(2)]);
        assert!(!p.call_last_card());
        assert!(!p.has_called_last_card());
        p.play_from_hand(0);
        assert!(p.call_last_card());
        assert!(p.has_called_last_card());
    }

    #[test]
    fn drawing_above_one_clears_call_state() {
        let mut p = participant(&[red(1), red(2)]);
        p.play_from_hand(0);
        p.call_last_card();
        let mut pile = DrawPile::from_cards(vec![red(9)]);
        assert_eq!(p.draw_into_hand(&mut pile), Some(red(9)));
        assert!(!p.has_called_last_card());
        assert!(!p.just_reached_one_card());
    }

    #[test]
    fn drawing_from_empty_pile_keeps_call_state() {
        let mut p = participant(&[red(1), red(2)]);
        p.play_from_hand(0);
        p.call_last_card();
        let mut pile = DrawPile::default();
        assert_eq!(p.draw_into_hand(&mut pile), None);
        assert!(p.has_called_last_card());
    }

    #[test]
    fn settle_consumes_the_obligation_once() {
        let mut p = participant(&[red(1), red(2)]);
        p.play_from_hand(0);
        assert!(p.settle_last_card());
        assert!(!p.settle_last_card());
    }

    #[test]
    fn settle_with_call_owes_nothing_and_keeps_call() {
        let mut p = participant(&[red(1), red(2)]);
        p.play_from_hand(0);
        p.call_last_card();
        assert!(!p.settle_last_card());
        assert!(p.has_called_last_card());
    }
}
