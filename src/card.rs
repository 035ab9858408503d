use std::fmt;

use serde::{Deserialize, Serialize};

pub const MAX_RANK: u8 = 9;
pub const DECK_SIZE: usize = 108;
pub const WILD_COPIES: usize = 4;
pub const ACTION_COPIES: usize = 2;

/// One of the four suits. Wild cards carry no color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// Enumeration order; also the tie-break order when picking a color.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Discriminant of a card without its color or rank.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    #[inline]
    pub fn is_wild(self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDrawFour)
    }

    /// Skip, reverse and draw-two.
    #[inline]
    pub fn is_colored_action(self) -> bool {
        matches!(self, CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo)
    }
}

/// A single card. The rank lives only on number cards, so a rankless number
/// card cannot be expressed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Card {
    Number { color: Color, rank: u8 },
    Skip(Color),
    Reverse(Color),
    DrawTwo(Color),
    Wild,
    WildDrawFour,
}

impl Card {
    /// Builds a number card. Panics when `rank` exceeds [`MAX_RANK`].
    pub fn number(color: Color, rank: u8) -> Self {
        assert!(rank <= MAX_RANK, "card rank {rank} is out of range 0..={MAX_RANK}");
        Card::Number { color, rank }
    }

    /// `None` for wild cards.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        match *self {
            Card::Number { color, .. }
            | Card::Skip(color)
            | Card::Reverse(color)
            | Card::DrawTwo(color) => Some(color),
            Card::Wild | Card::WildDrawFour => None,
        }
    }

    #[inline]
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Number { .. } => CardKind::Number,
            Card::Skip(_) => CardKind::Skip,
            Card::Reverse(_) => CardKind::Reverse,
            Card::DrawTwo(_) => CardKind::DrawTwo,
            Card::Wild => CardKind::Wild,
            Card::WildDrawFour => CardKind::WildDrawFour,
        }
    }

    #[inline]
    pub fn rank(&self) -> Option<u8> {
        match self {
            Card::Number { rank, .. } => Some(*rank),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.kind().is_wild()
    }

    /// Whether this card may be played onto `top`, given the color declared by
    /// the last wild (if any).
    pub fn can_follow(&self, top: &Card, declared_color: Option<Color>) -> bool {
        if self.is_wild() {
            return true;
        }
        let color = self.color();
        if declared_color.is_some() && color == declared_color {
            return true;
        }
        if color.is_some() && color == top.color() {
            return true;
        }
        if let (Some(rank), Some(top_rank)) = (self.rank(), top.rank()) {
            if rank == top_rank {
                return true;
            }
        }
        let kind = self.kind();
        kind == top.kind() && kind != CardKind::Number
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number { color, rank } => write!(f, "{color} {rank}"),
            Card::Skip(color) => write!(f, "{color} Skip"),
            Card::Reverse(color) => write!(f, "{color} Reverse"),
            Card::DrawTwo(color) => write!(f, "{color} Draw Two"),
            Card::Wild => f.write_str("Wild"),
            Card::WildDrawFour => f.write_str("Wild Draw Four"),
        }
    }
}

/// Builds the 108-card deck in deterministic order (unshuffled).
pub fn build_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        deck.push(Card::number(color, 0));
        for rank in 1..=MAX_RANK {
            deck.push(Card::number(color, rank));
            deck.push(Card::number(color, rank));
        }
        for _ in 0..ACTION_COPIES {
            deck.push(Card::Skip(color));
            deck.push(Card::Reverse(color));
            deck.push(Card::DrawTwo(color));
        }
    }
    for _ in 0..WILD_COPIES {
        deck.push(Card::Wild);
        deck.push(Card::WildDrawFour);
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_color() -> impl Strategy<Value = Color> {
        prop::sample::select(Color::ALL.to_vec())
    }

    fn any_card() -> impl Strategy<Value = Card> {
        prop_oneof![
            (any_color(), 0..=MAX_RANK).prop_map(|(c, r)| Card::number(c, r)),
            any_color().prop_map(Card::Skip),
            any_color().prop_map(Card::Reverse),
            any_color().prop_map(Card::DrawTwo),
            Just(Card::Wild),
            Just(Card::WildDrawFour),
        ]
    }

    proptest! {
        #[test]
        fn numbers_follow_on_color_or_rank(
            c1 in any_color(),
            c2 in any_color(),
            r1 in 0..=MAX_RANK,
            r2 in 0..=MAX_RANK
        ) {
            let candidate = Card::number(c1, r1);
            let top = Card::number(c2, r2);
            prop_assert_eq!(candidate.can_follow(&top, None), c1 == c2 || r1 == r2);
        }

        #[test]
        fn wild_cards_always_follow(
            top in any_card(),
            declared in prop::option::of(any_color())
        ) {
            prop_assert!(Card::Wild.can_follow(&top, declared));
            prop_assert!(Card::WildDrawFour.can_follow(&top, declared));
        }

        #[test]
        fn declared_color_admits_matching_suit(
            candidate in any_card(),
            declared in any_color()
        ) {
            if candidate.color() == Some(declared) {
                prop_assert!(candidate.can_follow(&Card::Wild, Some(declared)));
            }
        }
    }

    #[test]
    fn same_action_kind_follows_across_colors() {
        assert!(Card::Skip(Color::Red).can_follow(&Card::Skip(Color::Blue), None));
        assert!(Card::Reverse(Color::Green).can_follow(&Card::Reverse(Color::Yellow), None));
        assert!(Card::DrawTwo(Color::Red).can_follow(&Card::DrawTwo(Color::Green), None));
        assert!(!Card::Skip(Color::Red).can_follow(&Card::Reverse(Color::Blue), None));
    }

    #[test]
    fn action_does_not_follow_number_of_other_color() {
        let top = Card::number(Color::Blue, 3);
        assert!(!Card::Skip(Color::Red).can_follow(&top, None));
        assert!(Card::Skip(Color::Blue).can_follow(&top, None));
    }

    #[test]
    fn declared_color_overrides_wild_top() {
        let top = Card::Wild;
        assert!(Card::number(Color::Green, 4).can_follow(&top, Some(Color::Green)));
        assert!(!Card::number(Color::Red, 4).can_follow(&top, Some(Color::Green)));
    }

    #[test]
    fn standard_deck_composition() {
        let deck = build_standard_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let numbers = deck.iter().filter(|c| c.kind() == CardKind::Number).count();
        let actions = deck.iter().filter(|c| c.kind().is_colored_action()).count();
        let wilds = deck.iter().filter(|c| c.is_wild()).count();
        assert_eq!(numbers, 19 * 4);
        assert_eq!(actions, 2 * 4 * 3);
        assert_eq!(wilds, 8);
        for color in Color::ALL {
            let zeros = deck
                .iter()
                .filter(|c| **c == Card::number(color, 0))
                .count();
            assert_eq!(zeros, 1);
            for rank in 1..=MAX_RANK {
                let copies = deck
                    .iter()
                    .filter(|c| **c == Card::number(color, rank))
                    .count();
                assert_eq!(copies, 2);
            }
        }
        assert_eq!(deck.iter().filter(|c| **c == Card::Wild).count(), 4);
        assert_eq!(deck.iter().filter(|c| **c == Card::WildDrawFour).count(), 4);
    }

    #[test]
    #[should_panic]
    fn number_rank_out_of_range_panics() {
        let _ = Card::number(Color::Red, 10);
    }

    #[test]
    fn display_names() {
        assert_eq!(Card::number(Color::Red, 7).to_string(), "Red 7");
        assert_eq!(Card::DrawTwo(Color::Blue).to_string(), "Blue Draw Two");
        assert_eq!(Card::WildDrawFour.to_string(), "Wild Draw Four");
    }
}
