//! Moves a player can submit.
//!
//! Each move kind is its own struct carrying only the fields it needs, and
//! implements [`ActionRule`]. [`Action`] closes the set so moves can be stored,
//! compared and sent over the wire as discriminated documents (see
//! [`crate::codec`]).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::GameState;
use crate::player::PlayerId;

pub const DRAW_FROM_DECK: &str = "draw_from_deck";
pub const DRAW_FROM_DISCARD: &str = "draw_from_discard";
pub const DISCARD_CARD: &str = "discard_card";
pub const CLOSE_ROUND: &str = "close_round";
pub const CONFIRM_ROUND_FINISHED: &str = "confirm_round_finished";

/// Capabilities every move kind exposes to the orchestrator.
pub trait ActionRule: fmt::Display {
    /// Stable discriminator used on the wire.
    fn name(&self) -> &'static str;

    fn player_id(&self) -> PlayerId;

    /// Pure precondition check against the current state.
    fn is_possible(&self, g: &GameState) -> bool;

    /// Re-checks the precondition, then applies the move.
    ///
    /// # Errors
    ///
    /// [`GameError::ActionNotPossible`] when the precondition fails; pile and
    /// hand errors when the state is inconsistent.
    fn run(&self, g: &mut GameState) -> Result<(), GameError>;

    /// Whether a successful run passes the turn to the opponent.
    fn yields_turn(&self, g: &GameState) -> bool;

    /// Hook to precompute derived fields before the move is offered.
    fn enrich(&mut self, _g: &GameState) {}

    fn priority(&self) -> i32 {
        0
    }

    /// Whether a higher-priority move keeps lower-priority ones in the legal set.
    fn allow_lower_priority(&self) -> bool {
        false
    }
}

fn not_possible(action: &dyn ActionRule) -> GameError {
    GameError::ActionNotPossible {
        action: action.to_string(),
    }
}

// Shared by every in-round move: round running and it is this player's turn.
fn is_turn_of(g: &GameState, player_id: PlayerId) -> bool {
    !g.is_round_finished && !g.is_game_ended && player_id == g.turn_player_id
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DrawFromDeck {
    #[serde(rename = "playerID")]
    pub player_id: PlayerId,
}

impl ActionRule for DrawFromDeck {
    fn name(&self) -> &'static str {
        DRAW_FROM_DECK
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        is_turn_of(g, self.player_id) && !g.has_drawn_card && !g.draw_pile.is_empty()
    }

    fn run(&self, g: &mut GameState) -> Result<(), GameError> {
        if !self.is_possible(g) {
            return Err(not_possible(self));
        }
        let card = g.draw_pile.draw_card()?;
        g.players[self.player_id].hand_mut().add_card(card);
        g.has_drawn_card = true;
        Ok(())
    }

    fn yields_turn(&self, _g: &GameState) -> bool {
        false
    }
}

impl fmt::Display for DrawFromDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} draws from deck", self.player_id)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DrawFromDiscard {
    #[serde(rename = "playerID")]
    pub player_id: PlayerId,
}

impl ActionRule for DrawFromDiscard {
    fn name(&self) -> &'static str {
        DRAW_FROM_DISCARD
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        is_turn_of(g, self.player_id) && !g.has_drawn_card && !g.discard_pile.is_empty()
    }

    fn run(&self, g: &mut GameState) -> Result<(), GameError> {
        if !self.is_possible(g) {
            return Err(not_possible(self));
        }
        let card = g.discard_pile.pop().ok_or(GameError::DiscardPileEmpty)?;
        g.players[self.player_id].hand_mut().add_card(card);
        g.has_drawn_card = true;
        Ok(())
    }

    fn yields_turn(&self, _g: &GameState) -> bool {
        false
    }
}

impl fmt::Display for DrawFromDiscard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} draws from discard pile", self.player_id)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DiscardCard {
    #[serde(rename = "playerID")]
    pub player_id: PlayerId,
    pub card: Card,
}

impl ActionRule for DiscardCard {
    fn name(&self) -> &'static str {
        DISCARD_CARD
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        is_turn_of(g, self.player_id)
            && g.has_drawn_card
            && g.players[self.player_id].hand().has_card(self.card)
    }

    fn run(&self, g: &mut GameState) -> Result<(), GameError> {
        if !self.is_possible(g) {
            return Err(not_possible(self));
        }
        g.players[self.player_id].hand_mut().remove_card(self.card)?;
        g.discard_pile.push(self.card);
        Ok(())
    }

    fn yields_turn(&self, _g: &GameState) -> bool {
        true
    }
}

impl fmt::Display for DiscardCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} discards {}", self.player_id, self.card)
    }
}

/// Ends the round: `card` goes face up on the discard pile and the remaining
/// seven cards must leave at most one ungrouped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CloseRound {
    #[serde(rename = "playerID")]
    pub player_id: PlayerId,
    pub card: Card,
}

impl ActionRule for CloseRound {
    fn name(&self) -> &'static str {
        CLOSE_ROUND
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        is_turn_of(g, self.player_id)
            && g.has_drawn_card
            && g.can_close_discarding(self.player_id, self.card)
    }

    fn run(&self, g: &mut GameState) -> Result<(), GameError> {
        if !self.is_possible(g) {
            return Err(not_possible(self));
        }
        g.players[self.player_id].hand_mut().remove_card(self.card)?;
        g.discard_pile.push(self.card);
        g.close_round(Some(self.player_id));
        Ok(())
    }

    fn yields_turn(&self, _g: &GameState) -> bool {
        true
    }
}

impl fmt::Display for CloseRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {} closes the round discarding {}",
            self.player_id, self.card
        )
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ConfirmRoundFinished {
    #[serde(rename = "playerID")]
    pub player_id: PlayerId,
}

impl ActionRule for ConfirmRoundFinished {
    fn name(&self) -> &'static str {
        CONFIRM_ROUND_FINISHED
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn is_possible(&self, g: &GameState) -> bool {
        g.is_round_finished
            && !g.is_game_ended
            && matches!(g.round_finished_confirmed.get(self.player_id), Some(false))
    }

    fn run(&self, g: &mut GameState) -> Result<(), GameError> {
        if !self.is_possible(g) {
            return Err(not_possible(self));
        }
        g.round_finished_confirmed[self.player_id] = true;
        Ok(())
    }

    fn yields_turn(&self, _g: &GameState) -> bool {
        false
    }
}

impl fmt::Display for ConfirmRoundFinished {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} confirms round finished", self.player_id)
    }
}

/// The closed set of moves. Serializes as the variant's fields plus a `name`
/// discriminator; decoding goes through [`crate::codec`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(tag = "name")]
pub enum Action {
    #[serde(rename = "draw_from_deck")]
    DrawFromDeck(DrawFromDeck),
    #[serde(rename = "draw_from_discard")]
    DrawFromDiscard(DrawFromDiscard),
    #[serde(rename = "discard_card")]
    DiscardCard(DiscardCard),
    #[serde(rename = "close_round")]
    CloseRound(CloseRound),
    #[serde(rename = "confirm_round_finished")]
    ConfirmRoundFinished(ConfirmRoundFinished),
}

impl Action {
    pub fn draw_from_deck(player_id: PlayerId) -> Self {
        Action::DrawFromDeck(DrawFromDeck { player_id })
    }

    pub fn draw_from_discard(player_id: PlayerId) -> Self {
        Action::DrawFromDiscard(DrawFromDiscard { player_id })
    }

    pub fn discard_card(player_id: PlayerId, card: Card) -> Self {
        Action::DiscardCard(DiscardCard { player_id, card })
    }

    pub fn close_round(player_id: PlayerId, card: Card) -> Self {
        Action::CloseRound(CloseRound { player_id, card })
    }

    pub fn confirm_round_finished(player_id: PlayerId) -> Self {
        Action::ConfirmRoundFinished(ConfirmRoundFinished { player_id })
    }

    /// Card carried by the move, for the kinds that carry one.
    pub fn card(&self) -> Option<Card> {
        match self {
            Action::DiscardCard(a) => Some(a.card),
            Action::CloseRound(a) => Some(a.card),
            _ => None,
        }
    }

    pub fn is_confirmation(&self) -> bool {
        matches!(self, Action::ConfirmRoundFinished(_))
    }

    fn rule(&self) -> &dyn ActionRule {
        match self {
            Action::DrawFromDeck(a) => a,
            Action::DrawFromDiscard(a) => a,
            Action::DiscardCard(a) => a,
            Action::CloseRound(a) => a,
            Action::ConfirmRoundFinished(a) => a,
        }
    }

    fn rule_mut(&mut self) -> &mut dyn ActionRule {
        match self {
            Action::DrawFromDeck(a) => a,
            Action::DrawFromDiscard(a) => a,
            Action::DiscardCard(a) => a,
            Action::CloseRound(a) => a,
            Action::ConfirmRoundFinished(a) => a,
        }
    }
}

impl ActionRule for Action {
    fn name(&self) -> &'static str {
        self.rule().name()
    }

    fn player_id(&self) -> PlayerId {
        self.rule().player_id()
    }

    fn is_possible(&self, g: &GameState) -> bool {
        self.rule().is_possible(g)
    }

    fn run(&self, g: &mut GameState) -> Result<(), GameError> {
        self.rule().run(g)
    }

    fn yields_turn(&self, g: &GameState) -> bool {
        self.rule().yields_turn(g)
    }

    fn enrich(&mut self, g: &GameState) {
        self.rule_mut().enrich(g)
    }

    fn priority(&self) -> i32 {
        self.rule().priority()
    }

    fn allow_lower_priority(&self) -> bool {
        self.rule().allow_lower_priority()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.rule(), f)
    }
}
