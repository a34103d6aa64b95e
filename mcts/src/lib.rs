//! Monte Carlo Tree Search with PUCT selection and an optional solver.
//!
//! This crate provides a game-agnostic MCTS bot that works with any game
//! implementing the `engine-core` traits, including games with chance
//! events.
//!
//! # Overview
//!
//! Each simulation runs four phases:
//!
//! 1. **Selection**: descend from the root, taking the child with the best
//!    PUCT score at decision nodes and sampling the declared distribution
//!    at chance nodes
//! 2. **Expansion**: the first descent through a node creates one child per
//!    action in the evaluator's prior
//! 3. **Evaluation**: terminal frontiers report exact returns; others are
//!    estimated by the [`Evaluator`] (by default, random rollouts)
//! 4. **Backup**: returns are added to the statistics of every node on the
//!    visit path
//!
//! With [`MctsConfig::solve`] enabled, backup also propagates *proven*
//! outcomes: a terminal value climbs the tree while the proof rules hold
//! (a decision node is proven when all children are, or when one child
//! reaches the game's maximum utility; a chance node only when every
//! outcome agrees), and the search stops as soon as the root is proven.
//!
//! # Usage
//!
//! ```rust,ignore
//! use engine_core::{Bot, Game, PlayerId};
//! use games_tictactoe::TicTacToe;
//! use mcts::{MctsBot, MctsConfig, RandomRolloutEvaluator};
//!
//! let game = TicTacToe;
//! let evaluator = RandomRolloutEvaluator::new(10, 0);
//! let config = MctsConfig::default()
//!     .with_max_simulations(10_000)
//!     .with_solve(true);
//!
//! let mut bot = MctsBot::new(&game, PlayerId::Player(0), evaluator, config)?;
//! let state = game.new_initial_state();
//! let (policy, action) = bot.step(state.as_ref())?;
//! ```
//!
//! Two searches with identical seed, configuration, and game produce
//! bit-identical trees; the bot's RNG persists across `step` calls.

pub mod config;
pub mod evaluator;
pub mod node;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use evaluator::{Evaluator, RandomRolloutEvaluator};
pub use node::{NodeId, SearchNode};
pub use search::{MctsBot, MctsError};
pub use tree::SearchTree;
