//! Message shapes exchanged with a transport layer. The transport itself
//! (framing, connections) lives outside this crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::actions::Action;
use crate::codec::{self, decode_action};
use crate::errors::GameError;
use crate::player::PlayerId;
use crate::view::ClientGameState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    /// Server announces which seat the connection plays
    Hello {
        #[serde(rename = "playerID")]
        player_id: PlayerId,
    },
    /// Server pushes the redacted state to one player
    HeresGameState {
        #[serde(rename = "gameState")]
        game_state: Box<ClientGameState>,
    },
    /// Client asks for a fresh state push
    GimmeGameState,
    /// Client submits a move
    Action { action: Action },
}

impl Message {
    pub fn hello(player_id: PlayerId) -> Self {
        Message::Hello { player_id }
    }

    pub fn heres_game_state(game_state: ClientGameState) -> Self {
        Message::HeresGameState {
            game_state: Box::new(game_state),
        }
    }

    pub fn action(action: Action) -> Self {
        Message::Action { action }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        codec::serialize(self)
    }

    /// Decodes a message. Envelope failures (bad JSON, unknown `type`, missing
    /// payload) are [`GameError::MalformedMessage`]; embedded actions keep the
    /// codec's error kinds, so an unknown action name still surfaces as
    /// [`GameError::UnknownAction`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        let mut value: Value =
            serde_json::from_slice(bytes).map_err(|e| GameError::MalformedMessage(e.to_string()))?;
        if value.get("type").and_then(Value::as_str) == Some("action") {
            let action = value
                .get_mut("action")
                .map(Value::take)
                .ok_or_else(|| GameError::MalformedMessage("missing action".into()))?;
            return decode_action(action).map(Message::action);
        }
        serde_json::from_value(value).map_err(|e| GameError::MalformedMessage(e.to_string()))
    }
}
