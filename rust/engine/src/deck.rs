use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, DeckKind};
use crate::errors::GameError;
use crate::hand::Hand;

/// Face-down pile players draw from. Owns the RNG for the whole match, so one
/// seed reproduces every round's deal.
#[derive(Debug, Clone)]
pub struct DrawPile {
    kind: DeckKind,
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl DrawPile {
    /// Builds the full deck in suit-major order; call [`DrawPile::shuffle`] before dealing.
    pub fn new_with_seed(seed: u64, kind: DeckKind) -> Self {
        Self {
            kind,
            cards: full_deck(kind),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Rebuilds the full deck and applies a uniform random permutation.
    pub fn shuffle(&mut self) {
        self.cards = full_deck(self.kind);
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn draw_card(&mut self) -> Result<Card, GameError> {
        let c = *self.cards.get(self.position).ok_or(GameError::DeckEmpty)?;
        self.position += 1;
        Ok(c)
    }

    /// Deals up to `size` cards from the top; stops early if the pile runs out.
    pub fn deal_hand(&mut self, size: usize) -> Hand {
        let mut hand = Hand::default();
        for _ in 0..size {
            match self.draw_card() {
                Ok(c) => hand.add_card(c),
                Err(_) => break,
            }
        }
        hand
    }

    /// Pulls a specific card out of the pile, wherever it sits.
    pub(crate) fn take(&mut self, card: Card) -> bool {
        match self.cards().iter().position(|&c| c == card) {
            Some(i) => {
                self.cards.remove(self.position + i);
                true
            }
            None => false,
        }
    }

    /// Returns cards to the bottom of the pile.
    pub(crate) fn put_back(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Cards still in the pile, top first.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}
