//! Core traits and types for turn-based game engines
//!
//! This crate provides the fundamental abstractions shared by games and the
//! search algorithms that play them:
//! - `Game`: a game description (players, utility bounds, game type)
//! - `State`: a position, with move generation and application
//! - `PlayerId`: seat numbering with an explicit chance sentinel
//! - `Bot`: anything that can pick an action for the player to move
//! - `sample_chance_outcome`: shared sampling over declared distributions
//!
//! Games with stochastic transitions surface them as *chance nodes*: states
//! whose current player is [`PlayerId::Chance`] and whose transitions carry
//! a declared probability distribution. Callers (and search algorithms)
//! resolve those transitions by sampling rather than by asking a bot.

pub mod bot;
pub mod chance;
pub mod game;
pub mod player;

// Re-export main types for convenience
pub use bot::{Bot, StepError, UniformRandomBot};
pub use chance::sample_chance_outcome;
pub use game::{ActionsAndProbs, Dynamics, Game, GameType, RewardModel, State};
pub use player::{Action, PlayerId, INVALID_ACTION};
