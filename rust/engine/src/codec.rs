//! JSON codec for actions and states.
//!
//! Actions are discriminated documents keyed by `name`. Decoding peeks the
//! discriminator, looks it up in [`REGISTRY`], then decodes the remaining
//! fields into the matching shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::actions::{
    Action, CLOSE_ROUND, CONFIRM_ROUND_FINISHED, DISCARD_CARD, DRAW_FROM_DECK, DRAW_FROM_DISCARD,
};
use crate::errors::GameError;

type Decoder = fn(Value) -> Result<Action, serde_json::Error>;

/// Discriminator to decoder table.
pub const REGISTRY: &[(&str, Decoder)] = &[
    (DRAW_FROM_DECK, decode_draw_from_deck),
    (DRAW_FROM_DISCARD, decode_draw_from_discard),
    (DISCARD_CARD, decode_discard_card),
    (CLOSE_ROUND, decode_close_round),
    (CONFIRM_ROUND_FINISHED, decode_confirm_round_finished),
];

fn decode_draw_from_deck(v: Value) -> Result<Action, serde_json::Error> {
    serde_json::from_value(v).map(Action::DrawFromDeck)
}

fn decode_draw_from_discard(v: Value) -> Result<Action, serde_json::Error> {
    serde_json::from_value(v).map(Action::DrawFromDiscard)
}

fn decode_discard_card(v: Value) -> Result<Action, serde_json::Error> {
    serde_json::from_value(v).map(Action::DiscardCard)
}

fn decode_close_round(v: Value) -> Result<Action, serde_json::Error> {
    serde_json::from_value(v).map(Action::CloseRound)
}

fn decode_confirm_round_finished(v: Value) -> Result<Action, serde_json::Error> {
    serde_json::from_value(v).map(Action::ConfirmRoundFinished)
}

/// Decodes an already-parsed action document.
pub fn decode_action(value: Value) -> Result<Action, GameError> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| GameError::MalformedAction("missing action name".into()))?
        .to_string();
    let (_, decode) = REGISTRY
        .iter()
        .find(|(n, _)| *n == name)
        .ok_or(GameError::UnknownAction(name))?;
    decode(value).map_err(|e| GameError::MalformedAction(e.to_string()))
}

/// Parses raw bytes received from a client into an action.
///
/// # Errors
///
/// [`GameError::MalformedAction`] for invalid JSON or fields that do not fit
/// the named shape, [`GameError::UnknownAction`] for an unregistered name.
///
/// # Examples
///
/// ```
/// use chinchon_engine::actions::Action;
/// use chinchon_engine::codec::deserialize_action;
///
/// let action = deserialize_action(br#"{"name":"draw_from_deck","playerID":1}"#).unwrap();
/// assert_eq!(action, Action::draw_from_deck(1));
/// ```
pub fn deserialize_action(bytes: &[u8]) -> Result<Action, GameError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| GameError::MalformedAction(e.to_string()))?;
    decode_action(value)
}

pub fn serialize_action(action: &Action) -> Result<Vec<u8>, GameError> {
    serialize(action)
}

/// Encodes any engine value (action, state, client view, message) as JSON bytes.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, GameError> {
    serde_json::to_vec(value).map_err(|e| GameError::Serialization(e.to_string()))
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_action(value).map_err(serde::de::Error::custom)
    }
}
