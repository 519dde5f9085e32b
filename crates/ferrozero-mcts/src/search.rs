//! The search driver: UCT selection, policy-guided expansion, batched
//! evaluation, and signed backup.

use tracing::debug;

use crate::backend::Backend;
use crate::error::SearchError;
use crate::evaluator::Evaluator;
use crate::node::{Node, NodeId};
use crate::policy::Policy;

/// Tunable search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Number of simulations to run.
    pub simulations: u32,
    /// UCT exploration constant.
    pub exploration: f64,
    /// How many leaves to queue before calling the evaluator.
    pub batch_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            simulations: 1000,
            exploration: 1.4,
            batch_size: 32,
        }
    }
}

/// Monte-Carlo tree searcher.
///
/// Owns nothing between calls: each [`search`](Searcher::search) builds a
/// fresh tree, runs the configured number of simulations, and frees the
/// tree when it returns.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Searcher {
        Searcher { config }
    }

    /// Return the search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search from `root` and return the most-visited root move.
    ///
    /// Each simulation selects a leaf by UCT, expands one untried move
    /// chosen by `policy`, and queues the resulting state. Whenever
    /// `batch_size` leaves are pending they are scored through `evaluator`
    /// in queue order and backed up with the sign flipping at every ply.
    /// A final flush drains the residue before the root decision.
    ///
    /// # Errors
    ///
    /// [`SearchError::TerminalRoot`] when `root` has no legal moves,
    /// [`SearchError::NoSimulations`] for a zero simulation budget, and
    /// the contract violations of `policy` and `evaluator`.
    pub fn search<B, P, E>(
        &self,
        backend: &B,
        root: B::State,
        policy: &mut P,
        evaluator: &mut E,
    ) -> Result<B::Move, SearchError>
    where
        B: Backend,
        P: Policy<B>,
        E: Evaluator<B>,
    {
        self.run(backend, root, policy, evaluator).map(|(_, mv)| mv)
    }

    /// Like [`search`](Searcher::search), but also hands back the finished
    /// tree so callers (and tests) can inspect the statistics.
    fn run<B, P, E>(
        &self,
        backend: &B,
        root: B::State,
        policy: &mut P,
        evaluator: &mut E,
    ) -> Result<(Tree<B::State, B::Move>, B::Move), SearchError>
    where
        B: Backend,
        P: Policy<B>,
        E: Evaluator<B>,
    {
        let root_moves = backend.legal_moves(&root);
        if root_moves.is_empty() {
            return Err(SearchError::TerminalRoot);
        }
        if self.config.simulations == 0 {
            return Err(SearchError::NoSimulations);
        }

        let mut tree = Tree::new(root, root_moves);
        let mut pending: Vec<NodeId> = Vec::new();

        for _ in 0..self.config.simulations {
            let selected = tree.select(self.config.exploration);
            let leaf = if tree.nodes[selected].untried.is_empty() {
                // Terminal: the position itself is re-queued for scoring.
                selected
            } else {
                tree.expand(selected, backend, policy)?
            };
            pending.push(leaf);

            if pending.len() >= self.config.batch_size {
                flush::<B, E>(&mut tree, &mut pending, evaluator)?;
            }
        }
        flush::<B, E>(&mut tree, &mut pending, evaluator)?;

        let best = tree.most_visited_root_move();
        debug!(
            simulations = self.config.simulations,
            nodes = tree.nodes.len(),
            "search finished"
        );
        // The root has at least one child after a nonzero simulation count.
        best.map(|mv| (tree, mv)).ok_or(SearchError::NoSimulations)
    }
}

/// Score all pending leaves in queue order and back their values up.
fn flush<B, E>(
    tree: &mut Tree<B::State, B::Move>,
    pending: &mut Vec<NodeId>,
    evaluator: &mut E,
) -> Result<(), SearchError>
where
    B: Backend,
    E: Evaluator<B>,
{
    if pending.is_empty() {
        return Ok(());
    }

    let states: Vec<B::State> = pending
        .iter()
        .map(|&id| tree.nodes[id].state.clone())
        .collect();
    let values = evaluator.evaluate(&states);
    if values.len() != states.len() {
        return Err(SearchError::ValueCountMismatch {
            expected: states.len(),
            got: values.len(),
        });
    }
    debug!(batch = states.len(), "evaluated leaf batch");

    for (&leaf, &value) in pending.iter().zip(&values) {
        tree.backup(leaf, value);
    }
    pending.clear();
    Ok(())
}

/// The arena holding every node of one search.
struct Tree<S, M> {
    nodes: Vec<Node<S, M>>,
}

/// The root always sits at index 0.
const ROOT: NodeId = 0;

impl<S: Clone, M: Clone + PartialEq> Tree<S, M> {
    fn new(state: S, moves: Vec<M>) -> Self {
        Tree {
            nodes: vec![Node::new(state, moves, None, 0)],
        }
    }

    /// Walk down from the root: stop at the first node with an untried
    /// action, otherwise descend into the existing child with the highest
    /// UCT score. A terminal node is its own leaf.
    fn select(&self, exploration: f64) -> NodeId {
        let mut id = ROOT;
        loop {
            let node = &self.nodes[id];
            if !node.untried.is_empty() {
                return id;
            }

            let mut best: Option<(NodeId, f64)> = None;
            for (action, child) in node.children.iter().enumerate() {
                let Some(child_id) = *child else {
                    continue;
                };
                let score = uct(node, action, exploration);
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((child_id, score));
                }
            }

            match best {
                Some((child_id, _)) => id = child_id,
                None => return id,
            }
        }
    }

    /// Expand one untried action of `id`, chosen by the policy, and return
    /// the new child.
    fn expand<B, P>(
        &mut self,
        id: NodeId,
        backend: &B,
        policy: &mut P,
    ) -> Result<NodeId, SearchError>
    where
        B: Backend<State = S, Move = M>,
        P: Policy<B>,
    {
        let node = &self.nodes[id];
        let candidates: Vec<M> = node
            .untried
            .iter()
            .map(|&action| node.moves[action].clone())
            .collect();

        let choice = policy.pick(&candidates);
        let slot = candidates
            .iter()
            .position(|mv| *mv == choice)
            .ok_or(SearchError::ForeignPolicyMove)?;

        let action = self.nodes[id].untried.remove(slot);
        let mv = self.nodes[id].moves[action].clone();
        let child_state = backend.apply(&self.nodes[id].state, &mv);
        let child_moves = backend.legal_moves(&child_state);

        let child_id = self.nodes.len();
        self.nodes
            .push(Node::new(child_state, child_moves, Some(id), action));
        self.nodes[id].children[action] = Some(child_id);
        Ok(child_id)
    }

    /// Propagate a leaf value toward the root, negating at each step.
    ///
    /// The value is read from the leaf state's side-to-move perspective,
    /// so a parent's edge accumulates the negated child value: what is
    /// good for the child's mover is bad for the parent's.
    fn backup(&mut self, leaf: NodeId, value: f64) {
        let mut id = leaf;
        let mut value = value;
        loop {
            self.nodes[id].visits += 1;
            let Some(parent) = self.nodes[id].parent else {
                break;
            };
            let action = self.nodes[id].parent_action;
            let node = &mut self.nodes[parent];
            node.edge_visits[action] += 1;
            node.edge_totals[action] -= value;
            node.edge_means[action] =
                node.edge_totals[action] / f64::from(node.edge_visits[action]);
            id = parent;
            value = -value;
        }
    }

    /// The root move whose child collected the most visits; ties go to the
    /// first such move.
    fn most_visited_root_move(&self) -> Option<M> {
        let root = &self.nodes[ROOT];
        let mut best: Option<(usize, u32)> = None;
        for (action, child) in root.children.iter().enumerate() {
            let Some(child_id) = *child else {
                continue;
            };
            let visits = self.nodes[child_id].visits;
            if best.is_none_or(|(_, most)| visits > most) {
                best = Some((action, visits));
            }
        }
        best.map(|(action, _)| root.moves[action].clone())
    }
}

/// Upper confidence bound for action `a` at `node`: unvisited actions are
/// infinitely attractive, visited ones balance their mean value against an
/// exploration bonus that shrinks as the edge is visited.
fn uct<S, M>(node: &Node<S, M>, action: usize, exploration: f64) -> f64 {
    let edge_visits = node.edge_visits[action];
    if edge_visits == 0 {
        return f64::INFINITY;
    }
    node.edge_means[action]
        + exploration * (f64::from(node.visits).ln() / f64::from(edge_visits)).sqrt()
}
