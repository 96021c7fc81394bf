use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Action not possible: {action}")]
    ActionNotPossible { action: String },
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotYourTurn { expected: usize, actual: usize },
    #[error("Game is ended")]
    GameEnded,
    #[error("Deck is empty")]
    DeckEmpty,
    #[error("Discard pile is empty")]
    DiscardPileEmpty,
    #[error("Card not in hand: {0}")]
    CardNotInHand(Card),
    #[error("Invalid player id: {0}")]
    InvalidPlayer(usize),
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("Malformed action: {0}")]
    MalformedAction(String),
    #[error("Malformed message: {0}")]
    MalformedMessage(String),
    #[error("Card not available: {0}")]
    CardUnavailable(Card),
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
