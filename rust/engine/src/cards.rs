use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four suits of the Spanish deck.
/// Serialized with the Spanish suit names clients already speak.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Oros (coins)
    #[serde(rename = "oro")]
    Coins,
    /// Copas (cups)
    #[serde(rename = "copa")]
    Cups,
    /// Espadas (swords)
    #[serde(rename = "espada")]
    Swords,
    /// Bastos (clubs)
    #[serde(rename = "basto")]
    Clubs,
}

impl Suit {
    pub fn as_str(self) -> &'static str {
        match self {
            Suit::Coins => "oro",
            Suit::Cups => "copa",
            Suit::Swords => "espada",
            Suit::Clubs => "basto",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single playing card. Value type: two cards are the same card iff suit and number match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// Face number, 1 through 12
    pub number: u8,
}

impl Card {
    pub fn new(suit: Suit, number: u8) -> Self {
        Self { suit, number }
    }

    /// Points this card costs its holder when it is left out of every group.
    /// Number cards count their face value, 10 and above count 10.
    pub fn penalty_value(&self) -> u32 {
        if self.number < 10 {
            u32::from(self.number)
        } else {
            10
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.number, self.suit)
    }
}

/// Which cards make up the deck a match is played with.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckKind {
    /// All numbers 1 through 12 in every suit (48 cards).
    #[default]
    Spanish48,
    /// 8s and 9s removed (40 cards). 7 and 10 are adjacent in runs.
    Spanish40,
}

impl DeckKind {
    /// Card numbers present in this deck, in run order.
    pub fn numbers(self) -> &'static [u8] {
        match self {
            DeckKind::Spanish48 => &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
            DeckKind::Spanish40 => &[1, 2, 3, 4, 5, 6, 7, 10, 11, 12],
        }
    }

    pub fn size(self) -> usize {
        all_suits().len() * self.numbers().len()
    }

    /// The number that follows `number` in a run, if any.
    pub fn successor(self, number: u8) -> Option<u8> {
        let numbers = self.numbers();
        let pos = numbers.iter().position(|&n| n == number)?;
        numbers.get(pos + 1).copied()
    }

    pub fn parse(s: &str) -> Option<DeckKind> {
        match s.to_ascii_lowercase().as_str() {
            "spanish48" | "spanish_48" | "48" => Some(DeckKind::Spanish48),
            "spanish40" | "spanish_40" | "40" => Some(DeckKind::Spanish40),
            _ => None,
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Coins, Suit::Cups, Suit::Swords, Suit::Clubs]
}

/// Every card of the given deck in suit-major order (unshuffled).
pub fn full_deck(kind: DeckKind) -> Vec<Card> {
    let mut v = Vec::with_capacity(kind.size());
    for &s in &all_suits() {
        for &n in kind.numbers() {
            v.push(Card::new(s, n));
        }
    }
    v
}
