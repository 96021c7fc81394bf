//! # chinchon-ai: Bot players for Chinchón
//!
//! Bots see exactly what a remote client sees, a [`ClientGameState`], and
//! answer with an [`Action`] from its legal-move set.
//!
//! ## Core Components
//!
//! - [`Bot`] - Trait defining the interface for bot decision-making
//! - [`baseline`] - Seeded baseline bot for testing and simulation
//! - [`create_bot`] - Factory for bots by name
//! - [`play_match`] - Drives two bots against one [`GameState`]
//!
//! ## Quick Start
//!
//! ```rust
//! use chinchon_ai::{create_bot, play_match};
//! use chinchon_engine::config::GameOptions;
//! use chinchon_engine::game::GameState;
//!
//! let mut game = GameState::new(GameOptions::default().with_seed(3));
//! let mut bots = [
//!     create_bot("baseline", 1).unwrap(),
//!     create_bot("baseline", 2).unwrap(),
//! ];
//! let outcome = play_match(&mut game, &mut bots, 200, |_| {}).unwrap();
//! assert!(outcome.actions_applied > 0);
//! ```

use chinchon_engine::actions::Action;
use chinchon_engine::errors::GameError;
use chinchon_engine::game::GameState;
use chinchon_engine::player::PlayerId;
use chinchon_engine::view::ClientGameState;

pub mod baseline;

/// A player that picks moves from its redacted view of the match.
pub trait Bot {
    /// Chooses the next move, or `None` when the view offers no legal move.
    fn choose_action(&mut self, state: &ClientGameState) -> Option<Action>;

    fn name(&self) -> &str;
}

/// Creates a bot by type name. Returns `None` for unknown names.
///
/// Supported: `"baseline"`.
pub fn create_bot(kind: &str, seed: u64) -> Option<Box<dyn Bot>> {
    match kind {
        "baseline" => Some(Box::new(baseline::BaselineBot::new(seed))),
        _ => None,
    }
}

/// Summary of a driven match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub actions_applied: usize,
    pub rounds_played: usize,
    pub ended: bool,
    pub winner: Option<PlayerId>,
}

/// Alternates bots on `game` until the match ends, a bot has nothing to play,
/// or `max_actions` moves were applied. `inspect` sees the state after every
/// applied move.
///
/// # Errors
///
/// Any rejection from [`GameState::run_action`]; a bot choosing from its own
/// legal-move set should never cause one.
pub fn play_match<F>(
    game: &mut GameState,
    bots: &mut [Box<dyn Bot>; 2],
    max_actions: usize,
    mut inspect: F,
) -> Result<MatchOutcome, GameError>
where
    F: FnMut(&GameState),
{
    let mut applied = 0;
    while applied < max_actions && !game.is_game_ended() {
        let turn = game.turn_player_id();
        let view = game.to_client_game_state(turn)?;
        let Some(action) = bots[turn].choose_action(&view) else {
            tracing::debug!(player = turn, bot = bots[turn].name(), "bot has no move");
            break;
        };
        game.run_action(action)?;
        applied += 1;
        inspect(game);
    }

    Ok(MatchOutcome {
        actions_applied: applied,
        rounds_played: game.round_number(),
        ended: game.is_game_ended(),
        winner: game.winner_player_id(),
    })
}
