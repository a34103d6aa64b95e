//! Sampling from declared chance distributions.

use crate::game::ActionsAndProbs;
use crate::player::Action;

/// Sample one outcome from a chance distribution using a uniform draw
/// `z` in `[0, 1)`.
///
/// Linear scan over the cumulative distribution: the first outcome whose
/// cumulative probability exceeds `z` is chosen, so zero-probability
/// outcomes are never sampled. If accumulated rounding error lets the scan
/// fall through past the end, the last outcome is chosen; the index is
/// clamped rather than allowed to run out of range.
///
/// # Panics
///
/// Panics if `outcomes` is empty.
pub fn sample_chance_outcome(outcomes: &ActionsAndProbs, z: f64) -> Action {
    assert!(!outcomes.is_empty(), "cannot sample from an empty distribution");
    let mut sum = 0.0;
    for &(action, prob) in outcomes {
        sum += prob;
        if z < sum {
            return action;
        }
    }
    outcomes[outcomes.len() - 1].0
}
