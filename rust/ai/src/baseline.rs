//! Baseline bot: closes whenever it can, confirms finished rounds, and
//! otherwise plays a uniformly random legal move.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::Bot;
use chinchon_engine::actions::Action;
use chinchon_engine::view::ClientGameState;

pub struct BaselineBot {
    rng: ChaCha20Rng,
}

impl BaselineBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Bot for BaselineBot {
    fn choose_action(&mut self, state: &ClientGameState) -> Option<Action> {
        let actions = &state.possible_actions;
        if actions.is_empty() {
            return None;
        }
        if let Some(close) = actions.iter().find(|a| matches!(a, Action::CloseRound(_))) {
            return Some(*close);
        }
        if let Some(confirm) = actions.iter().find(|a| a.is_confirmation()) {
            return Some(*confirm);
        }
        let idx = self.rng.random_range(0..actions.len());
        Some(actions[idx])
    }

    fn name(&self) -> &str {
        "BaselineBot"
    }
}
