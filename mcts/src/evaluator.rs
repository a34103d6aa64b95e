//! Evaluator trait for position evaluation.
//!
//! The evaluator supplies the two estimates the search consumes: a
//! per-player value for a non-terminal position, and a prior distribution
//! over the position's moves. A neural network would implement this trait;
//! the crate ships a random-rollout evaluator that needs no model.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use engine_core::{sample_chance_outcome, ActionsAndProbs, State};

/// Supplies value estimates and priors to the search.
///
/// Methods take `&mut self` so an implementation can own its RNG or other
/// scratch state; the search calls it repeatedly within one `step`.
pub trait Evaluator {
    /// Value estimate for each player, in the same units as the game's
    /// returns. Only called on non-terminal states.
    fn evaluate(&mut self, state: &dyn State) -> Vec<f64>;

    /// Prior distribution over the state's legal moves, summing to 1. For
    /// chance states, the declared chance distribution. Enumeration order
    /// carries no meaning.
    fn prior(&mut self, state: &dyn State) -> ActionsAndProbs;
}

/// Evaluator that estimates values by playing uniformly random games to
/// the end, and returns uniform priors.
pub struct RandomRolloutEvaluator {
    n_rollouts: u32,
    rng: ChaCha20Rng,
}

impl RandomRolloutEvaluator {
    /// `n_rollouts` independent playouts are averaged per evaluation.
    ///
    /// # Panics
    ///
    /// Panics if `n_rollouts` is 0.
    pub fn new(n_rollouts: u32, seed: u64) -> Self {
        assert!(n_rollouts >= 1, "need at least one rollout per evaluation");
        Self {
            n_rollouts,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Evaluator for RandomRolloutEvaluator {
    fn evaluate(&mut self, state: &dyn State) -> Vec<f64> {
        let mut result: Vec<f64> = Vec::new();
        for _ in 0..self.n_rollouts {
            let mut working_state = state.clone_boxed();
            while !working_state.is_terminal() {
                let action = if working_state.is_chance_node() {
                    let outcomes = working_state.chance_outcomes();
                    sample_chance_outcome(&outcomes, self.rng.gen::<f64>())
                } else {
                    let actions = working_state.legal_actions();
                    actions[self.rng.gen_range(0..actions.len())]
                };
                working_state.apply_action(action);
            }

            let returns = working_state.returns();
            if result.is_empty() {
                result = returns;
            } else {
                assert_eq!(
                    returns.len(),
                    result.len(),
                    "game changed its player count mid-rollout"
                );
                for (total, r) in result.iter_mut().zip(returns) {
                    *total += r;
                }
            }
        }

        for total in &mut result {
            *total /= f64::from(self.n_rollouts);
        }
        result
    }

    fn prior(&mut self, state: &dyn State) -> ActionsAndProbs {
        if state.is_chance_node() {
            state.chance_outcomes()
        } else {
            let actions = state.legal_actions();
            let prob = 1.0 / actions.len() as f64;
            actions.into_iter().map(|action| (action, prob)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_tictactoe::TicTacToe;

    use engine_core::Game;

    #[test]
    fn test_rollout_values_are_zero_sum_and_bounded() {
        let game = TicTacToe;
        let state = game.new_initial_state();
        let mut evaluator = RandomRolloutEvaluator::new(20, 3);

        let values = evaluator.evaluate(state.as_ref());
        assert_eq!(values.len(), 2);
        assert!((values[0] + values[1]).abs() < 1e-9);
        for v in values {
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_rollout_from_forced_win_is_exact() {
        // Fill the board down to one empty cell, (0,2), with no line made;
        // X's only move completes the top row, so every rollout is the
        // same one-move win.
        let game = TicTacToe;
        let mut state = game.new_initial_state();
        for action in [0, 3, 1, 4, 5, 6, 7, 8] {
            state.apply_action(action);
        }
        let mut evaluator = RandomRolloutEvaluator::new(5, 3);

        let values = evaluator.evaluate(state.as_ref());
        assert_eq!(values, vec![1.0, -1.0]);
    }

    #[test]
    fn test_uniform_prior_over_legal_actions() {
        let game = TicTacToe;
        let mut state = game.new_initial_state();
        state.apply_action(4);
        let mut evaluator = RandomRolloutEvaluator::new(1, 3);

        let prior = evaluator.prior(state.as_ref());
        assert_eq!(prior.len(), 8);
        let sum: f64 = prior.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        for (action, p) in prior {
            assert_ne!(action, 4);
            assert!((p - 1.0 / 8.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_estimates() {
        let game = TicTacToe;
        let state = game.new_initial_state();
        let mut a = RandomRolloutEvaluator::new(10, 42);
        let mut b = RandomRolloutEvaluator::new(10, 42);

        assert_eq!(a.evaluate(state.as_ref()), b.evaluate(state.as_ref()));
    }
}
