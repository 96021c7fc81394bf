use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::hand::Hand;
use crate::player::PlayerId;

/// Records a single action applied during a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionLog {
    /// Player whose turn it was when the action ran
    #[serde(rename = "playerID")]
    pub player_id: PlayerId,
    /// The action applied
    pub action: Action,
}

/// Complete record of one round: the deal, the moves, and the outcome.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundLog {
    /// Each player's hand as dealt, indexed by player id
    pub hands_dealt: Vec<Hand>,
    /// Player with fewer penalty points; `None` on a tie or before scoring
    #[serde(rename = "winnerPlayerID")]
    pub winner_player_id: Option<PlayerId>,
    #[serde(rename = "loserPlayerID")]
    pub loser_player_id: Option<PlayerId>,
    /// Penalty points each player earned this round, once scored
    pub penalty_points: Option<[u32; 2]>,
    #[serde(rename = "closedByPlayerID")]
    pub closed_by_player_id: Option<PlayerId>,
    /// The round ended with a chinchón, which also ends the match
    pub was_chinchon: bool,
    /// Applied actions in order; confirmations are not recorded
    pub actions_log: Vec<ActionLog>,
}

impl RoundLog {
    pub fn new(hands_dealt: Vec<Hand>) -> Self {
        Self {
            hands_dealt,
            ..Self::default()
        }
    }

    pub fn last_action(&self) -> Option<&ActionLog> {
        self.actions_log.last()
    }
}
