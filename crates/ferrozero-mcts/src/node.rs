//! Search tree nodes, stored in an index-based arena.

/// Index of a node within its [`Tree`](crate::search) arena.
pub(crate) type NodeId = usize;

/// One position in the search tree.
///
/// Per-action statistics are parallel arrays over the node's move list,
/// which is fixed at construction. `untried` holds the indices of moves
/// that have not been expanded into children yet; a terminal position has
/// an empty move list and therefore nothing to try. Parent links are
/// arena indices, so backup can walk upward without aliasing the arena.
pub(crate) struct Node<S, M> {
    /// The position at this node.
    pub state: S,
    /// Legal moves at `state`, fixed at construction.
    pub moves: Vec<M>,
    /// Visit count per action.
    pub edge_visits: Vec<u32>,
    /// Cumulative signed value per action.
    pub edge_totals: Vec<f64>,
    /// Mean value per action, kept equal to `edge_totals / edge_visits`.
    pub edge_means: Vec<f64>,
    /// Child node per action, present once the action has been expanded.
    pub children: Vec<Option<NodeId>>,
    /// Indices of actions not yet expanded.
    pub untried: Vec<usize>,
    /// Parent node; `None` at the root.
    pub parent: Option<NodeId>,
    /// The action index on the parent that produced this node.
    pub parent_action: usize,
    /// Node-total visit count.
    pub visits: u32,
}

impl<S, M> Node<S, M> {
    /// Create a node with zeroed statistics and every action untried.
    pub fn new(state: S, moves: Vec<M>, parent: Option<NodeId>, parent_action: usize) -> Self {
        let n = moves.len();
        Node {
            state,
            moves,
            edge_visits: vec![0; n],
            edge_totals: vec![0.0; n],
            edge_means: vec![0.0; n],
            children: vec![None; n],
            untried: (0..n).collect(),
            parent,
            parent_action,
            visits: 0,
        }
    }

    /// A node is terminal when its position had no legal moves.
    pub fn is_terminal(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn fresh_node_has_everything_untried() {
        let node: Node<(), u8> = Node::new((), vec![1, 2, 3], None, 0);
        assert_eq!(node.untried, vec![0, 1, 2]);
        assert_eq!(node.edge_visits, vec![0, 0, 0]);
        assert_eq!(node.children, vec![None, None, None]);
        assert_eq!(node.visits, 0);
        assert!(!node.is_terminal());
    }

    #[test]
    fn empty_move_list_is_terminal() {
        let node: Node<(), u8> = Node::new((), Vec::new(), Some(0), 4);
        assert!(node.is_terminal());
        assert!(node.untried.is_empty());
        assert_eq!(node.parent, Some(0));
        assert_eq!(node.parent_action, 4);
    }
}
