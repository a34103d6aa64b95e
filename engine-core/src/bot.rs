//! The `Bot` trait and a uniform-random baseline bot.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::game::{ActionsAndProbs, State};
use crate::player::Action;

/// Errors surfaced by a bot's `step`.
#[derive(Debug, Error)]
pub enum StepError {
    /// The searched position has no legal moves. Bots must only be stepped
    /// on non-terminal decision states, so reaching this is a caller bug.
    #[error("no legal moves available in the searched position")]
    NoLegalMoves,
}

/// Anything that can pick an action for the player to move.
///
/// `step` returns the bot's policy over legal actions together with the
/// action it actually chose. Callers must not step a bot on terminal or
/// chance states; chance transitions are sampled by the caller.
pub trait Bot {
    fn step(&mut self, state: &dyn State) -> Result<(ActionsAndProbs, Action), StepError>;
}

/// Baseline bot that plays uniformly at random over legal actions.
pub struct UniformRandomBot {
    rng: ChaCha20Rng,
}

impl UniformRandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Bot for UniformRandomBot {
    fn step(&mut self, state: &dyn State) -> Result<(ActionsAndProbs, Action), StepError> {
        let actions = state.legal_actions();
        if actions.is_empty() {
            return Err(StepError::NoLegalMoves);
        }
        let prob = 1.0 / actions.len() as f64;
        let policy = actions.iter().map(|&action| (action, prob)).collect();
        let choice = actions[self.rng.gen_range(0..actions.len())];
        Ok((policy, choice))
    }
}
