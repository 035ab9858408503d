use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::card::{Card, Color};
use crate::effect::Effect;
use crate::error::{GameError, InvalidAction};
use crate::participant::{Participant, ParticipantId};
use crate::pile::{DiscardPile, DrawPile};
use crate::state::{Direction, GameStateView, GameStatus, ParticipantView};
use crate::strategy::Strategy;

const DEFAULT_SEED: u64 = 0x0C01_0125_5EED_F00D;

pub const DEFAULT_HAND_SIZE: usize = 7;
pub const MIN_PARTICIPANTS: usize = 2;
pub const MAX_PARTICIPANTS: usize = 10;
/// Cards drawn for failing to call the last card.
pub const PENALTY_CARDS: usize = 2;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub hand_size: usize,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// A seat to fill when the game starts.
pub struct ParticipantSpec {
    pub name: String,
    pub strategy: Box<dyn Strategy>,
}

impl ParticipantSpec {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

/// Builder that enables deterministic deck injection for testing.
pub struct GameBuilder {
    config: GameConfig,
    participants: Vec<ParticipantSpec>,
    deck: Option<Vec<Card>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            participants: Vec::new(),
            deck: None,
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn participant(mut self, name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        self.participants.push(ParticipantSpec::new(name, strategy));
        self
    }

    pub fn participants(mut self, specs: impl IntoIterator<Item = ParticipantSpec>) -> Self {
        self.participants.extend(specs);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    /// Use `deck` as the draw pile, unshuffled. The last card is drawn first.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Shuffles a standard deck, deals every participant in and turns over the
/// opening card.
pub fn start_match(participants: Vec<ParticipantSpec>, config: GameConfig) -> Result<Game, GameError> {
    GameBuilder::new()
        .with_config(config)
        .participants(participants)
        .build()
}

/// Cards requested from the draw pile versus cards actually handed over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub requested: usize,
    pub delivered: usize,
}

impl Delivery {
    pub fn shortfall(&self) -> usize {
        self.requested - self.delivered
    }

    pub fn is_complete(&self) -> bool {
        self.delivered == self.requested
    }
}

/// Cards pushed onto another participant by a draw-two or wild-draw-four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedDraw {
    pub target: ParticipantId,
    pub delivery: Delivery,
}

/// Everything that happened during one call to [`Game::execute_turn`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub participant: ParticipantId,
    /// Set when the participant drew instead of playing from hand.
    pub drew_cards: Option<Delivery>,
    pub played_card: Option<Card>,
    pub played_drawn_card: bool,
    pub called_last_card: bool,
    pub penalty: Option<Delivery>,
    pub declared_color: Option<Color>,
    pub direction_reversed: bool,
    pub forced_draw: Option<ForcedDraw>,
    pub skipped: Option<ParticipantId>,
    pub winner: Option<ParticipantId>,
}

impl TurnOutcome {
    fn new(participant: ParticipantId) -> Self {
        Self {
            participant,
            drew_cards: None,
            played_card: None,
            played_drawn_card: false,
            called_last_card: false,
            penalty: None,
            declared_color: None,
            direction_reversed: false,
            forced_draw: None,
            skipped: None,
            winner: None,
        }
    }

    /// True when any draw this turn handed over fewer cards than requested.
    pub fn has_shortfall(&self) -> bool {
        let short = |delivery: Option<Delivery>| delivery.is_some_and(|d| !d.is_complete());
        short(self.drew_cards) || short(self.penalty) || short(self.forced_draw.map(|f| f.delivery))
    }
}

/// The match state machine: owns the piles, the seats and the turn pointer.
pub struct Game {
    config: GameConfig,
    status: GameStatus,
    current: ParticipantId,
    direction: Direction,
    declared_color: Option<Color>,
    participants: Vec<Participant>,
    draw_pile: DrawPile,
    discard_pile: DiscardPile,
    turns_played: usize,
    rng: StdRng,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. })
    }

    pub fn winner(&self) -> Option<ParticipantId> {
        match self.status {
            GameStatus::Won { winner } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    pub fn current_participant(&self) -> ParticipantId {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn declared_color(&self) -> Option<Color> {
        self.declared_color
    }

    pub fn top_card(&self) -> &Card {
        self.discard_pile
            .top()
            .expect("discard pile always holds the opening card")
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: ParticipantId) -> Result<&Participant, GameError> {
        self.participants
            .get(id)
            .ok_or(GameError::InvalidParticipant(id))
    }

    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    pub fn state_view(&self, perspective: ParticipantId) -> Result<GameStateView, GameError> {
        let hand = self.participant(perspective)?.hand().to_vec();
        let participants = self
            .participants
            .iter()
            .enumerate()
            .map(|(id, participant)| ParticipantView {
                id,
                name: participant.name().to_string(),
                hand_size: participant.hand_size(),
                has_called_last_card: participant.has_called_last_card(),
                is_current: id == self.current,
            })
            .collect();
        Ok(GameStateView {
            status: self.status,
            self_participant: perspective,
            current_participant: self.current,
            direction: self.direction,
            top_card: *self.top_card(),
            declared_color: self.declared_color,
            draw_pile_count: self.draw_pile.len(),
            discard_pile_count: self.discard_pile.len(),
            turns_played: self.turns_played,
            participants,
            hand,
        })
    }

    /// Runs one full turn for the current participant: decision, play or
    /// draw, last-card check, card effect, win check and turn advance.
    pub fn execute_turn(&mut self) -> Result<TurnOutcome, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let actor = self.current;
        assert!(
            actor < self.participants.len(),
            "current participant {actor} is out of range"
        );
        let top = *self.top_card();
        let declared = self.declared_color;
        let mut outcome = TurnOutcome::new(actor);

        let choice = {
            let (hand, strategy) = self.participants[actor].decide();
            strategy.choose_card_index(hand, &top, declared)
        };

        let played = match choice {
            Some(index) => {
                self.validate_choice(actor, index, &top, declared)?;
                let card = self.participants[actor]
                    .play_from_hand(index)
                    .expect("validated hand index");
                Some(card)
            }
            None => self.draw_for_turn(actor, &top, declared, &mut outcome),
        };

        if let Some(card) = played {
            self.resolve_play(actor, card, &mut outcome);
        }

        self.turns_played += 1;

        if self.participants[actor].hand().is_empty() {
            self.status = GameStatus::Won { winner: actor };
            outcome.winner = Some(actor);
            info!(
                participant = self.participants[actor].name(),
                turns = self.turns_played,
                "game won"
            );
            return Ok(outcome);
        }

        self.current = self.next_index(actor);
        if outcome.skipped.is_some() {
            self.current = self.next_index(self.current);
        }
        Ok(outcome)
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder {
            config,
            participants,
            deck,
        } = builder;
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&participants.len()) {
            return Err(GameError::InvalidConfiguration(
                "participants must be between 2 and 10",
            ));
        }
        if config.hand_size == 0 {
            return Err(GameError::InvalidConfiguration("hand size must be positive"));
        }
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut draw_pile = match deck {
            Some(deck) => DrawPile::from_cards(deck),
            None => {
                let mut pile = DrawPile::standard();
                pile.shuffle(&mut rng);
                pile
            }
        };
        let dealt = config.hand_size.checked_mul(participants.len());
        if dealt.is_none_or(|dealt| draw_pile.len() <= dealt) {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal hands",
            ));
        }

        let mut seats = Vec::with_capacity(participants.len());
        for spec in participants {
            let mut participant = Participant::new(spec.name, spec.strategy);
            for _ in 0..config.hand_size {
                participant
                    .draw_into_hand(&mut draw_pile)
                    .ok_or(GameError::InvalidConfiguration(
                        "deck exhausted while dealing hands",
                    ))?;
            }
            seats.push(participant);
        }
        debug!(
            participants = seats.len(),
            hand_size = config.hand_size,
            "hands dealt"
        );

        let opening = Self::draw_opening_card(&mut draw_pile, &mut rng)?;
        let mut discard_pile = DiscardPile::new();
        discard_pile.push(opening);
        info!(card = %opening, participants = seats.len(), "game started");

        Ok(Game {
            config,
            status: GameStatus::InProgress,
            current: 0,
            direction: Direction::Clockwise,
            declared_color: None,
            participants: seats,
            draw_pile,
            discard_pile,
            turns_played: 0,
            rng,
        })
    }

    /// Wild cards never open the discard pile: they go back underneath and
    /// the pile is reshuffled before drawing again.
    fn draw_opening_card(pile: &mut DrawPile, rng: &mut StdRng) -> Result<Card, GameError> {
        loop {
            let card = pile.draw().ok_or(GameError::InvalidConfiguration(
                "deck exhausted before the opening card",
            ))?;
            if !card.is_wild() {
                return Ok(card);
            }
            if pile.cards().iter().all(Card::is_wild) {
                return Err(GameError::InvalidConfiguration(
                    "deck holds no card that can open the discard pile",
                ));
            }
            debug!(card = %card, "wild opening card returned to the pile");
            pile.insert_bottom(card);
            pile.shuffle(rng);
        }
    }

    fn validate_choice(
        &self,
        actor: ParticipantId,
        index: usize,
        top: &Card,
        declared: Option<Color>,
    ) -> Result<(), GameError> {
        let card = self.participants[actor]
            .hand()
            .get(index)
            .ok_or(InvalidAction::HandIndex(index))?;
        if !card.can_follow(top, declared) {
            return Err(InvalidAction::IllegalCard {
                card: *card,
                top: *top,
            }
            .into());
        }
        Ok(())
    }

    /// Draw branch: one card, which may be played straight away when legal.
    fn draw_for_turn(
        &mut self,
        actor: ParticipantId,
        top: &Card,
        declared: Option<Color>,
        outcome: &mut TurnOutcome,
    ) -> Option<Card> {
        let delivery = self.deliver(actor, 1);
        outcome.drew_cards = Some(delivery);
        if delivery.delivered == 0 {
            return None;
        }
        let participant = &mut self.participants[actor];
        let index = participant.hand_size() - 1;
        let drawn = participant.hand()[index];
        debug!(participant = participant.name(), card = %drawn, "drew a card");
        if !drawn.can_follow(top, declared) {
            return None;
        }
        let (_, strategy) = participant.decide();
        if !strategy.confirm_play_drawn_card(&drawn) {
            return None;
        }
        outcome.played_drawn_card = true;
        participant.play_from_hand(index)
    }

    /// Play branch: discard, last-card call and check, then the card's effect.
    fn resolve_play(&mut self, actor: ParticipantId, card: Card, outcome: &mut TurnOutcome) {
        self.discard_pile.push(card);
        self.declared_color = None;
        outcome.played_card = Some(card);
        debug!(
            participant = self.participants[actor].name(),
            card = %card,
            remaining = self.participants[actor].hand_size(),
            "played a card"
        );

        let participant = &mut self.participants[actor];
        if participant.hand_size() == 1 {
            let (_, strategy) = participant.decide();
            if strategy.confirm_call_last_card() && participant.call_last_card() {
                outcome.called_last_card = true;
                info!(participant = participant.name(), "called last card");
            }
        }
        if participant.settle_last_card() {
            info!(participant = participant.name(), "missed the last-card call");
            outcome.penalty = Some(self.deliver(actor, PENALTY_CARDS));
        }

        let effect = Effect::for_card(&card, self.participants.len());
        if effect.is_none() {
            return;
        }
        let next = self.next_index(actor);
        if effect.reverse {
            self.direction = self.direction.reversed();
            outcome.direction_reversed = true;
            debug!(direction = ?self.direction, "direction reversed");
        }
        if effect.declare_color {
            let participant = &mut self.participants[actor];
            let (hand, strategy) = participant.decide();
            let color = strategy.choose_color(hand);
            self.declared_color = Some(color);
            outcome.declared_color = Some(color);
            debug!(participant = participant.name(), color = %color, "color declared");
        }
        if effect.forced_draw > 0 {
            let delivery = self.deliver(next, effect.forced_draw);
            outcome.forced_draw = Some(ForcedDraw {
                target: next,
                delivery,
            });
        }
        if effect.skip_next {
            outcome.skipped = Some(next);
            debug!(participant = self.participants[next].name(), "turn skipped");
        }
    }

    /// Hands up to `count` cards to `target`, refilling from the discard pile
    /// whenever the draw pile runs dry. Stops early once nothing is left.
    pub(crate) fn deliver(&mut self, target: ParticipantId, count: usize) -> Delivery {
        let mut delivered = 0;
        while delivered < count {
            if self.draw_pile.is_empty() {
                let available = self
                    .draw_pile
                    .refill_from(&mut self.discard_pile, &mut self.rng);
                debug!(available, "draw pile refilled from discards");
            }
            if self.participants[target]
                .draw_into_hand(&mut self.draw_pile)
                .is_none()
            {
                break;
            }
            delivered += 1;
        }
        let delivery = Delivery {
            requested: count,
            delivered,
        };
        if !delivery.is_complete() {
            warn!(
                participant = self.participants[target].name(),
                requested = count,
                delivered,
                "not enough cards left to draw"
            );
        }
        delivery
    }

    fn next_index(&self, from: ParticipantId) -> ParticipantId {
        let count = self.participants.len() as isize;
        (from as isize + self.direction.step()).rem_euclid(count) as usize
    }
}
