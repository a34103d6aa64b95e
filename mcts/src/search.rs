//! The search itself: PUCT descent, backup, and the `MctsBot` orchestrator.
//!
//! Each simulation descends from the root to a frontier node (terminal, or
//! never visited), evaluates it, and walks the visit path backwards
//! accumulating statistics. With `solve` enabled the walk also
//! back-propagates proven game-theoretic outcomes: terminal values climb
//! the tree as long as the proof rules hold, letting the search stop early
//! once the root's value is known exactly.

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{info, trace};

use engine_core::{
    sample_chance_outcome, Action, ActionsAndProbs, Bot, Dynamics, Game, PlayerId, RewardModel,
    State, StepError,
};

use crate::config::MctsConfig;
use crate::evaluator::Evaluator;
use crate::node::{player_return, NodeId, SearchNode};
use crate::tree::SearchTree;

/// Errors from bot construction.
#[derive(Debug, Error)]
pub enum MctsError {
    #[error("game must have sequential turns and terminal rewards")]
    UnsupportedGame,
}

/// Monte Carlo Tree Search bot.
///
/// Owns its configuration, RNG, and evaluator; each `step` builds a fresh
/// tree, runs up to `max_simulations` simulations, and plays the best root
/// child. The RNG persists across steps.
pub struct MctsBot<E: Evaluator> {
    config: MctsConfig,
    evaluator: E,
    /// Seat this bot plays; diagnostic only, the search reads the player
    /// to move from the state.
    player: PlayerId,
    max_utility: f64,
    rng: ChaCha20Rng,
    memory_used: usize,
}

impl<E: Evaluator> MctsBot<E> {
    /// Create a bot for `game`, playing as `player`.
    ///
    /// Fails unless the game has sequential turns and terminal-only
    /// rewards; the backup discipline is meaningless otherwise.
    pub fn new(
        game: &dyn Game,
        player: PlayerId,
        evaluator: E,
        config: MctsConfig,
    ) -> Result<Self, MctsError> {
        let game_type = game.game_type();
        if game_type.dynamics != Dynamics::Sequential
            || game_type.reward_model != RewardModel::Terminal
        {
            return Err(MctsError::UnsupportedGame);
        }
        Ok(Self {
            rng: ChaCha20Rng::seed_from_u64(config.seed),
            max_utility: game.max_utility(),
            player,
            evaluator,
            config,
            memory_used: 0,
        })
    }

    /// Run a full search from `state` and return the tree, for callers that
    /// want more than the chosen action. `step` is a thin wrapper over this.
    pub fn search(&mut self, state: &dyn State) -> SearchTree {
        self.memory_used = 0;
        let mut tree = SearchTree::new(state.current_player());
        let mut visit_path: Vec<NodeId> = Vec::with_capacity(64);

        for _ in 0..self.config.max_simulations {
            visit_path.clear();
            let working_state = self.apply_tree_policy(&mut tree, state, &mut visit_path);

            let frontier = visit_path[visit_path.len() - 1];
            let (returns, solved) = if working_state.is_terminal() {
                let returns = working_state.returns();
                self.memory_used += returns.len() * std::mem::size_of::<f64>();
                tree.get_mut(frontier).outcome = Some(returns.clone());
                (returns, self.config.solve)
            } else {
                (self.evaluator.evaluate(working_state.as_ref()), false)
            };

            self.backup(&mut tree, &visit_path, &returns, solved);

            trace!(
                frontier = frontier.0,
                depth = visit_path.len(),
                nodes = tree.len(),
                "simulation complete"
            );

            let root_proven = tree.get(tree.root()).outcome.is_some();
            let over_memory =
                self.config.max_memory != 0 && self.memory_used >= self.config.max_memory;
            if root_proven || over_memory {
                break;
            }
        }

        tree
    }

    /// Descend from the root until reaching a terminal state or a node that
    /// has never been visited, expanding each node on first descent through
    /// it. Returns the state at the frontier; the traversed nodes
    /// (including root and frontier) are appended to `visit_path`.
    fn apply_tree_policy(
        &mut self,
        tree: &mut SearchTree,
        state: &dyn State,
        visit_path: &mut Vec<NodeId>,
    ) -> Box<dyn State> {
        let root = tree.root();
        visit_path.push(root);
        let mut working_state = state.clone_boxed();
        let mut current = root;

        // The root is expanded on the very first simulation so that even a
        // one-simulation search has a child to return.
        while !working_state.is_terminal()
            && (tree.get(current).explore_count > 0
                || (current == root && !tree.get(current).is_expanded()))
        {
            if !tree.get(current).is_expanded() {
                // First descent through this node: create one child per
                // action in the evaluator's prior. Shuffling removes the
                // bias move-generation order would give equal-prior moves.
                let mut prior = self.evaluator.prior(working_state.as_ref());
                prior.shuffle(&mut self.rng);
                let player = working_state.current_player();
                let mut children = Vec::with_capacity(prior.len());
                for (action, prob) in prior {
                    children.push(tree.allocate(SearchNode::new(action, player, prob)));
                }
                self.memory_used += children.len() * std::mem::size_of::<SearchNode>();
                tree.get_mut(current).children = children;
                if !tree.get(current).is_expanded() {
                    break;
                }
            }

            let chosen = if working_state.is_chance_node() {
                // Descend according to the declared distribution. Every
                // declared outcome has a child, since expansion used the
                // same distribution.
                let outcomes = working_state.chance_outcomes();
                let sampled = sample_chance_outcome(&outcomes, self.rng.gen::<f64>());
                match tree
                    .get(current)
                    .children
                    .iter()
                    .find(|&&child| tree.get(child).action == sampled)
                {
                    Some(&child) => child,
                    None => unreachable!("sampled chance outcome missing from expanded children"),
                }
            } else {
                let parent_count = tree.get(current).explore_count;
                let mut best = NodeId(u32::MAX);
                let mut best_value = f64::NEG_INFINITY;
                for &child in &tree.get(current).children {
                    let value = tree.get(child).value(parent_count, self.config.uct_c);
                    if value > best_value {
                        best_value = value;
                        best = child;
                    }
                }
                best
            };

            working_state.apply_action(tree.get(chosen).action);
            current = chosen;
            visit_path.push(current);
        }

        working_state
    }

    /// Walk the visit path from the frontier back to the root, adding the
    /// simulation's returns to each node's statistics. While `solved` holds,
    /// also try to prove each expanded ancestor; once a node fails to prove,
    /// proving stops for the rest of the walk but statistics continue.
    fn backup(
        &mut self,
        tree: &mut SearchTree,
        visit_path: &[NodeId],
        returns: &[f64],
        mut solved: bool,
    ) {
        for &node_id in visit_path.iter().rev() {
            {
                let node = tree.get_mut(node_id);
                node.total_reward += player_return(returns, node.player);
                node.explore_count += 1;
            }

            if solved && tree.get(node_id).is_expanded() {
                let child_player = tree.get(tree.get(node_id).children[0]).player;
                let proven = if child_player == PlayerId::Chance {
                    proven_chance_outcome(tree, node_id)
                } else {
                    self.proven_decision_outcome(tree, node_id, child_player)
                };
                match proven {
                    Some(outcome) => {
                        self.memory_used += outcome.len() * std::mem::size_of::<f64>();
                        tree.get_mut(node_id).outcome = Some(outcome);
                    }
                    None => solved = false,
                }
            }
        }
    }

    /// A decision node is proven when all children are, or when its best
    /// child already reaches the game's maximum utility: one unbeatable
    /// reply is enough to call the node won without waiting on siblings.
    fn proven_decision_outcome(
        &self,
        tree: &SearchTree,
        id: NodeId,
        player: PlayerId,
    ) -> Option<Vec<f64>> {
        let mut best: Option<&Vec<f64>> = None;
        let mut all_solved = true;
        for &child in &tree.get(id).children {
            match tree.get(child).outcome.as_ref() {
                None => all_solved = false,
                Some(outcome) => {
                    let better = best.map_or(true, |current| {
                        player_return(outcome, player) > player_return(current, player)
                    });
                    if better {
                        best = Some(outcome);
                    }
                }
            }
        }
        let best = best?;
        if all_solved || player_return(best, player) == self.max_utility {
            Some(best.clone())
        } else {
            None
        }
    }
}

/// A chance node is proven only when every outcome leads to the same proven
/// value; averaging differing outcomes by probability would make the proof
/// an expectation rather than exact.
fn proven_chance_outcome(tree: &SearchTree, id: NodeId) -> Option<Vec<f64>> {
    let children = &tree.get(id).children;
    let first = tree.get(children[0]).outcome.as_ref()?;
    for &child in &children[1..] {
        if tree.get(child).outcome.as_ref() != Some(first) {
            return None;
        }
    }
    Some(first.clone())
}

impl<E: Evaluator> Bot for MctsBot<E> {
    fn step(&mut self, state: &dyn State) -> Result<(ActionsAndProbs, Action), StepError> {
        let start = Instant::now();
        let tree = self.search(state);
        let root = tree.root();
        let best = tree.best_child(root).ok_or(StepError::NoLegalMoves)?;
        let action = tree.get(best).action;

        if self.config.verbose {
            let seconds = start.elapsed().as_secs_f64();
            let sims = tree.get(root).explore_count;
            info!(
                player = %self.player,
                sims,
                seconds,
                sims_per_s = f64::from(sims) / seconds.max(1e-9),
                tree_nodes = tree.len(),
                memory_kb = self.memory_used / 1024,
                "search finished"
            );
            info!("root:\n{}", tree.node_string(root, state));
            info!("children:\n{}", tree.children_string(root, state));

            let mut chosen_state = state.clone_boxed();
            chosen_state.apply_action(action);
            info!(
                "children of chosen:\n{}",
                tree.children_string(best, chosen_state.as_ref())
            );
        }

        Ok((vec![(action, 1.0)], action))
    }
}
