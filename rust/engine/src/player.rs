use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Seat index of a player: 0 or 1.
pub type PlayerId = usize;

/// Number of seats in a match.
pub const PLAYER_COUNT: usize = 2;

pub fn opponent_of(player_id: PlayerId) -> PlayerId {
    if player_id == 0 {
        1
    } else {
        0
    }
}

/// One seat's hand and cumulative penalty score.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Cards currently held
    hand: Hand,
    /// Penalty points accumulated over finished rounds; never decreases
    score: u32,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_penalty(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
