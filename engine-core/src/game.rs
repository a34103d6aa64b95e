//! The `Game` and `State` traits consumed by search algorithms.
//!
//! Both traits are object safe: search code holds `&dyn Game` and
//! `Box<dyn State>` so one search implementation serves every game. States
//! are treated as values cloned on descent; a state handed to a searcher is
//! never mutated.

use crate::player::{Action, PlayerId};

/// A distribution over actions, as `(action, probability)` pairs.
pub type ActionsAndProbs = Vec<(Action, f64)>;

/// How control passes between players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dynamics {
    /// One player moves at a time.
    Sequential,
    /// All players move at once.
    Simultaneous,
}

/// When the game hands out rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardModel {
    /// Returns are only defined at terminal states.
    Terminal,
    /// Rewards accrue during play.
    Intermediate,
}

/// Structural properties of a game, used by consumers to check their own
/// preconditions before playing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameType {
    pub dynamics: Dynamics,
    pub reward_model: RewardModel,
}

/// A position in a game.
///
/// Implementations come in three flavors at runtime: ordinary player-turn
/// states, chance states (`current_player()` is [`PlayerId::Chance`]), and
/// terminal states. The flavor determines which methods are meaningful:
/// `chance_outcomes` only on chance states, `returns` only at terminal
/// states.
pub trait State {
    /// Deep copy, sufficient for independent descent and rollouts.
    fn clone_boxed(&self) -> Box<dyn State>;

    /// Whose turn it is, or the chance sentinel.
    fn current_player(&self) -> PlayerId;

    /// Whether the game is over in this position.
    fn is_terminal(&self) -> bool;

    /// Whether this position's transitions are decided by chance.
    fn is_chance_node(&self) -> bool {
        self.current_player() == PlayerId::Chance
    }

    /// Legal actions in this position, in a stable order. At chance nodes
    /// these are the declared outcomes.
    fn legal_actions(&self) -> Vec<Action>;

    /// The outcome distribution at a chance node; probabilities sum to 1.
    /// Empty for non-chance states.
    fn chance_outcomes(&self) -> ActionsAndProbs {
        Vec::new()
    }

    /// Advance the position by one action (or sampled chance outcome).
    fn apply_action(&mut self, action: Action);

    /// Per-player returns. Only meaningful at terminal states.
    fn returns(&self) -> Vec<f64>;

    /// Human-readable action name, for diagnostics.
    fn action_to_string(&self, player: PlayerId, action: Action) -> String;

    /// Human-readable rendering of the position, for diagnostics.
    fn state_string(&self) -> String;
}

/// A game description. Cheap to hold by reference; all per-position data
/// lives in [`State`].
pub trait Game: Send + Sync {
    /// Stable identifier, e.g. `"tictactoe"`.
    fn name(&self) -> &'static str;

    /// Number of seats; the length of every returns vector.
    fn num_players(&self) -> usize;

    /// The supremum over any single player's return at any terminal state.
    fn max_utility(&self) -> f64;

    /// Structural properties of the game.
    fn game_type(&self) -> GameType;

    /// A fresh state at the game's starting position.
    fn new_initial_state(&self) -> Box<dyn State>;
}
