//! Search tree with arena allocation.
//!
//! Nodes live in a contiguous arena and reference each other by `NodeId`
//! index. The arena only ever grows during a search, so ids stay valid for
//! the whole backup walk, and parent→child edges form a strict tree: every
//! node is pushed exactly once, as a child of exactly one parent.

use std::cmp::Ordering;

use engine_core::{PlayerId, State, INVALID_ACTION};

use crate::node::{player_return, NodeId, SearchNode};

/// Search tree rooted at the position a search was started from.
#[derive(Debug)]
pub struct SearchTree {
    /// Arena storing all nodes.
    nodes: Vec<SearchNode>,

    /// Root node index (always 0 after initialization).
    root: NodeId,
}

impl SearchTree {
    /// Create a tree holding only a root for the given player to move.
    pub fn new(root_player: PlayerId) -> Self {
        let root = SearchNode::new(INVALID_ACTION, root_player, 1.0);
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The best child of `id` under the final ordering, preferring the
    /// first-created child on exact ties. `None` if `id` has no children.
    pub fn best_child(&self, id: NodeId) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        for &child in &self.get(id).children {
            best = match best {
                None => Some(child),
                Some(current)
                    if self.get(child).compare_final(self.get(current)) == Ordering::Greater =>
                {
                    Some(child)
                }
                keep => keep,
            };
        }
        best
    }

    /// One-line diagnostic summary of a node. `state` is the position at
    /// the node's parent, used to name the incoming action.
    pub fn node_string(&self, id: NodeId, state: &dyn State) -> String {
        let node = self.get(id);
        let action = if node.action == INVALID_ACTION {
            "none".to_string()
        } else {
            state.action_to_string(node.player, node.action)
        };
        let outcome = node
            .outcome
            .as_ref()
            .map_or_else(|| "none".to_string(), |outcome| {
                format!("{:4.1}", player_return(outcome, node.player))
            });
        format!(
            "{:>8}: player: {}, prior: {:.3}, value: {:6.3}, sims: {:5}, outcome: {}, {:3} children",
            action,
            node.player,
            node.prior,
            node.mean_reward(),
            node.explore_count,
            outcome,
            node.children.len()
        )
    }

    /// Diagnostic summary of a node's children, best first. `state` is the
    /// position at node `id`.
    pub fn children_string(&self, id: NodeId, state: &dyn State) -> String {
        let mut children = self.get(id).children.clone();
        children.sort_by(|&a, &b| self.get(b).compare_final(self.get(a)));
        children
            .iter()
            .map(|&child| self.node_string(child, state))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::Player(0);

    fn add_child(tree: &mut SearchTree, parent: NodeId, node: SearchNode) -> NodeId {
        let id = tree.allocate(node);
        tree.get_mut(parent).children.push(id);
        id
    }

    #[test]
    fn test_new_tree_has_only_a_root() {
        let tree = SearchTree::new(P0);
        assert_eq!(tree.len(), 1);
        let root = tree.get(tree.root());
        assert_eq!(root.action, INVALID_ACTION);
        assert_eq!(root.player, P0);
        assert!((root.prior - 1.0).abs() < 1e-12);
        assert!(!root.is_expanded());
    }

    #[test]
    fn test_allocate_extends_arena() {
        let mut tree = SearchTree::new(P0);
        let root = tree.root();
        let a = add_child(&mut tree, root, SearchNode::new(0, P0, 0.5));
        let b = add_child(&mut tree, root, SearchNode::new(1, P0, 0.5));

        assert_eq!(tree.len(), 3);
        assert_eq!(a, NodeId(1));
        assert_eq!(b, NodeId(2));
        assert_eq!(tree.get(tree.root()).children, vec![a, b]);
    }

    #[test]
    fn test_best_child_by_visits() {
        let mut tree = SearchTree::new(P0);
        let root = tree.root();
        let a = add_child(&mut tree, root, SearchNode::new(0, P0, 0.5));
        let b = add_child(&mut tree, root, SearchNode::new(1, P0, 0.5));
        tree.get_mut(a).explore_count = 3;
        tree.get_mut(b).explore_count = 8;

        assert_eq!(tree.best_child(tree.root()), Some(b));
    }

    #[test]
    fn test_best_child_proven_win_beats_visits() {
        let mut tree = SearchTree::new(P0);
        let root = tree.root();
        let a = add_child(&mut tree, root, SearchNode::new(0, P0, 0.5));
        let b = add_child(&mut tree, root, SearchNode::new(1, P0, 0.5));
        tree.get_mut(a).explore_count = 100;
        tree.get_mut(b).explore_count = 2;
        tree.get_mut(b).outcome = Some(vec![1.0, -1.0]);

        assert_eq!(tree.best_child(tree.root()), Some(b));
    }

    #[test]
    fn test_best_child_tie_keeps_first() {
        let mut tree = SearchTree::new(P0);
        let root = tree.root();
        let a = add_child(&mut tree, root, SearchNode::new(0, P0, 0.5));
        let _b = add_child(&mut tree, root, SearchNode::new(1, P0, 0.5));

        assert_eq!(tree.best_child(tree.root()), Some(a));
    }

    #[test]
    fn test_best_child_of_leaf_is_none() {
        let tree = SearchTree::new(P0);
        assert_eq!(tree.best_child(tree.root()), None);
    }
}
