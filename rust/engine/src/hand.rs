use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::cards::{all_suits, Card, DeckKind, Suit};
use crate::errors::GameError;
use crate::rules::HAND_SIZE;

/// Minimum number of cards in a run or a set.
pub const MIN_GROUP_SIZE: usize = 3;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Consecutive numbers of one suit
    Run,
    /// Same number, distinct suits
    Set,
}

/// A meld found in a hand. Groups returned by [`Hand::valid_groups`] may
/// share cards with each other.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub kind: GroupKind,
    pub cards: Vec<Card>,
}

/// Cards held by one player, in the order they were received.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn has_card(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remove_card(&mut self, card: Card) -> Result<(), GameError> {
        let idx = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(GameError::CardNotInHand(card))?;
        self.cards.remove(idx);
        Ok(())
    }

    /// Copy of this hand with one card taken out.
    pub fn without(&self, card: Card) -> Result<Hand, GameError> {
        let mut h = self.clone();
        h.remove_card(card)?;
        Ok(h)
    }

    /// All runs followed by all sets.
    pub fn valid_groups(&self, kind: DeckKind) -> Vec<Group> {
        let mut groups = self.find_runs(kind);
        groups.extend(self.find_sets());
        groups
    }

    // Greedy: from every start index in a suit's sorted cards, extend while the
    // next card follows. Overlapping runs are all returned.
    fn find_runs(&self, kind: DeckKind) -> Vec<Group> {
        let mut runs = Vec::new();
        for suit in all_suits() {
            let mut cards = self.cards_of_suit(suit);
            if cards.len() < MIN_GROUP_SIZE {
                continue;
            }
            cards.sort_unstable_by_key(|c| c.number);

            for i in 0..=cards.len() - MIN_GROUP_SIZE {
                let mut run = vec![cards[i]];
                for &next in &cards[i + 1..] {
                    let last = run[run.len() - 1];
                    if kind.successor(last.number) == Some(next.number) {
                        run.push(next);
                    } else {
                        break;
                    }
                }
                if run.len() >= MIN_GROUP_SIZE {
                    runs.push(Group {
                        kind: GroupKind::Run,
                        cards: run,
                    });
                }
            }
        }
        runs
    }

    fn find_sets(&self) -> Vec<Group> {
        let mut by_number: BTreeMap<u8, Vec<Card>> = BTreeMap::new();
        for &c in &self.cards {
            by_number.entry(c.number).or_default().push(c);
        }

        let mut sets = Vec::new();
        for (_, cards) in by_number {
            if cards.len() < MIN_GROUP_SIZE {
                continue;
            }
            let suits: HashSet<Suit> = cards.iter().map(|c| c.suit).collect();
            if suits.len() == cards.len() {
                sets.push(Group {
                    kind: GroupKind::Set,
                    cards,
                });
            }
        }
        sets
    }

    fn cards_of_suit(&self, suit: Suit) -> Vec<Card> {
        self.cards.iter().copied().filter(|c| c.suit == suit).collect()
    }

    /// Seven cards of a single suit forming one unbroken run.
    pub fn is_chinchon(&self, kind: DeckKind) -> bool {
        if self.cards.len() != HAND_SIZE {
            return false;
        }
        let suit = self.cards[0].suit;
        if self.cards.iter().any(|c| c.suit != suit) {
            return false;
        }
        let mut numbers: Vec<u8> = self.cards.iter().map(|c| c.number).collect();
        numbers.sort_unstable();
        numbers
            .windows(2)
            .all(|w| kind.successor(w[0]) == Some(w[1]))
    }

    /// Cards not covered by any of `groups`, in hand order.
    pub fn ungrouped_cards(&self, groups: &[Group]) -> Vec<Card> {
        let grouped: HashSet<Card> = groups
            .iter()
            .flat_map(|g| g.cards.iter().copied())
            .collect();
        self.cards
            .iter()
            .copied()
            .filter(|c| !grouped.contains(c))
            .collect()
    }

    /// Sum of penalty values of the cards outside every group. A card claimed
    /// by several groups still counts zero.
    pub fn penalty_points(&self, groups: &[Group]) -> u32 {
        self.ungrouped_cards(groups)
            .iter()
            .map(Card::penalty_value)
            .sum()
    }

    /// Exactly seven cards with at most one left out of the groups.
    pub fn can_close(&self, kind: DeckKind) -> bool {
        if self.cards.len() != HAND_SIZE {
            return false;
        }
        let groups = self.valid_groups(kind);
        self.ungrouped_cards(&groups).len() <= 1
    }
}
