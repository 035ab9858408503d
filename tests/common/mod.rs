#![allow(dead_code)]

use std::collections::VecDeque;

use unobot::{Card, Color, Game, GameBuilder, Strategy, legal_indices};

pub fn r(rank: u8) -> Card {
    Card::number(Color::Red, rank)
}

pub fn b(rank: u8) -> Card {
    Card::number(Color::Blue, rank)
}

pub fn g(rank: u8) -> Card {
    Card::number(Color::Green, rank)
}

pub fn y(rank: u8) -> Card {
    Card::number(Color::Yellow, rank)
}

/// Orders a deck so that participant `i` is dealt `hands[i]` (in order), the
/// opening card follows, and later draws come out as listed in `draws`.
pub fn stacked_deck(hands: &[Vec<Card>], opening: Card, draws: &[Card]) -> Vec<Card> {
    let mut sequence: Vec<Card> = hands.iter().flatten().copied().collect();
    sequence.push(opening);
    sequence.extend_from_slice(draws);
    sequence.reverse();
    sequence
}

/// Game with one scripted strategy per hand. Every hand must be the same size.
pub fn stacked_game(
    hands: &[Vec<Card>],
    opening: Card,
    draws: &[Card],
    strategies: Vec<Scripted>,
) -> Game {
    assert_eq!(hands.len(), strategies.len());
    let hand_size = hands[0].len();
    assert!(hands.iter().all(|hand| hand.len() == hand_size));
    let mut builder = GameBuilder::new()
        .with_hand_size(hand_size)
        .with_deck(stacked_deck(hands, opening, draws));
    for (index, strategy) in strategies.into_iter().enumerate() {
        builder = builder.participant(format!("P{index}"), Box::new(strategy));
    }
    builder.build().expect("stacked deck deals cleanly")
}

/// Strategy fed from queues. Once a queue runs dry it falls back to: first
/// legal card, play drawn cards, always call, declare red.
#[derive(Default)]
pub struct Scripted {
    picks: VecDeque<Option<usize>>,
    play_drawn: VecDeque<bool>,
    calls: VecDeque<bool>,
    colors: VecDeque<Color>,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick(mut self, choice: Option<usize>) -> Self {
        self.picks.push_back(choice);
        self
    }

    pub fn play_drawn(mut self, answer: bool) -> Self {
        self.play_drawn.push_back(answer);
        self
    }

    pub fn call(mut self, answer: bool) -> Self {
        self.calls.push_back(answer);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.colors.push_back(color);
        self
    }
}

impl Strategy for Scripted {
    fn choose_card_index(
        &mut self,
        hand: &[Card],
        top: &Card,
        declared_color: Option<Color>,
    ) -> Option<usize> {
        self.picks
            .pop_front()
            .unwrap_or_else(|| legal_indices(hand, top, declared_color).first().copied())
    }

    fn choose_color(&mut self, _hand: &[Card]) -> Color {
        self.colors.pop_front().unwrap_or(Color::Red)
    }

    fn confirm_play_drawn_card(&mut self, _card: &Card) -> bool {
        self.play_drawn.pop_front().unwrap_or(true)
    }

    fn confirm_call_last_card(&mut self) -> bool {
        self.calls.pop_front().unwrap_or(true)
    }
}
