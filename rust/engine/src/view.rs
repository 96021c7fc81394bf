use serde::{Deserialize, Serialize};

use crate::actions::{Action, ActionRule};
use crate::cards::Card;
use crate::errors::GameError;
use crate::game::GameState;
use crate::logger::ActionLog;
use crate::player::{opponent_of, PlayerId, PLAYER_COUNT};

/// What one player is allowed to see of a match.
/// The opponent's hand is reduced to its size.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientGameState {
    pub round_number: usize,
    #[serde(rename = "turnPlayerID")]
    pub turn_player_id: PlayerId,

    #[serde(rename = "you")]
    pub you_player_id: PlayerId,
    #[serde(rename = "them")]
    pub them_player_id: PlayerId,
    pub your_score: u32,
    pub their_score: u32,

    pub your_hand: Vec<Card>,
    pub their_hand_size: usize,
    pub top_discard_card: Option<Card>,
    pub draw_pile_size: usize,

    /// Legal moves of the viewer only
    pub possible_actions: Vec<Action>,

    pub is_game_ended: bool,
    pub is_round_finished: bool,

    #[serde(rename = "winnerPlayerID")]
    pub winner_player_id: Option<PlayerId>,
    #[serde(rename = "loserPlayerID")]
    pub loser_player_id: Option<PlayerId>,

    /// Most recent entry of the current round's action log, for narration
    pub last_action_log: Option<ActionLog>,

    pub rule_max_points: u32,
    pub has_drawn_card: bool,
}

impl GameState {
    /// Redacted projection of the match for `viewer`.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidPlayer`] when `viewer` is not a seat of this match.
    pub fn to_client_game_state(&self, viewer: PlayerId) -> Result<ClientGameState, GameError> {
        if viewer >= PLAYER_COUNT {
            return Err(GameError::InvalidPlayer(viewer));
        }
        let them = opponent_of(viewer);

        let possible_actions = self
            .calculate_possible_actions()
            .into_iter()
            .filter(|a| a.player_id() == viewer)
            .collect();

        Ok(ClientGameState {
            round_number: self.round_number,
            turn_player_id: self.turn_player_id,
            you_player_id: viewer,
            them_player_id: them,
            your_score: self.players[viewer].score(),
            their_score: self.players[them].score(),
            your_hand: self.players[viewer].hand().cards().to_vec(),
            their_hand_size: self.players[them].hand().len(),
            top_discard_card: self.discard_pile.last().copied(),
            draw_pile_size: self.draw_pile.remaining(),
            possible_actions,
            is_game_ended: self.is_game_ended,
            is_round_finished: self.is_round_finished,
            winner_player_id: self.winner_player_id,
            loser_player_id: self.loser_player_id,
            last_action_log: self
                .current_round_log()
                .and_then(|log| log.last_action())
                .cloned(),
            rule_max_points: self.rule_max_points,
            has_drawn_card: self.has_drawn_card,
        })
    }
}
