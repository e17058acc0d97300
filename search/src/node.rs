//! Search node, arena handle, and frontier ordering key.

use ordered_float::OrderedFloat;

/// Edge and path cost.
pub type Cost = f64;

/// Stable handle to a node in a search arena.
///
/// Nodes are never removed from the arena individually, so a `NodeId`
/// stays valid for the lifetime of the owning [`crate::state::SearchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable record of one discovered state.
///
/// `g` is the cost of the single edge that produced this node, not the
/// cumulative cost. The cumulative cost is memoized at construction as
/// `predecessor.total_cost + g`, which equals the sum of `g` along the
/// predecessor chain (see [`path_cost`]).
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Arena handle of this node.
    pub id: NodeId,
    /// The discovered state.
    pub state: S,
    /// Action that produced this node (`None` for the start node).
    pub action: Option<A>,
    /// Edge cost from the predecessor.
    pub g: Cost,
    /// Heuristic estimate from `state` to a goal.
    pub h: Cost,
    /// Back-reference used for path reconstruction (`None` for the start node).
    pub predecessor: Option<NodeId>,
    /// Number of actions from the start node.
    pub depth: u32,
    total_cost: Cost,
}

impl<S, A> SearchNode<S, A> {
    /// The synthetic start node: no action, zero costs, no predecessor.
    #[must_use]
    pub fn root(id: NodeId, state: S) -> Self {
        Self {
            id,
            state,
            action: None,
            g: 0.0,
            h: 0.0,
            predecessor: None,
            depth: 0,
            total_cost: 0.0,
        }
    }

    /// A node reached from `predecessor` by applying `action`.
    #[must_use]
    pub fn successor(
        id: NodeId,
        state: S,
        action: A,
        g: Cost,
        h: Cost,
        predecessor: &SearchNode<S, A>,
    ) -> Self {
        Self {
            id,
            state,
            action: Some(action),
            g,
            h,
            predecessor: Some(predecessor.id),
            depth: predecessor.depth + 1,
            total_cost: predecessor.total_cost + g,
        }
    }

    /// Cumulative path cost from the start node (0 for the start node).
    #[must_use]
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Estimated total cost through this node: `total_cost() + h`.
    #[must_use]
    pub fn priority(&self) -> Cost {
        self.total_cost + self.h
    }

    /// Whether this is the synthetic start node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.predecessor.is_none()
    }
}

/// Frontier ordering key: `(priority, slot)`.
///
/// Lower priority first; ties go to the lower slot sequence number, which is
/// the order a linear scan of the frontier would encounter them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PriorityKey {
    pub priority: OrderedFloat<Cost>,
    pub slot: u64,
}

impl PriorityKey {
    #[must_use]
    pub fn new(priority: Cost, slot: u64) -> Self {
        Self {
            priority: OrderedFloat(priority),
            slot,
        }
    }
}

/// Sum of `g` along the predecessor chain of `id`, walking back to the root.
///
/// The root's own `g` is excluded, so this is 0 for the start node. `None`
/// if `id` or any predecessor is not in `nodes`.
pub(crate) fn walked_cost<S, A>(nodes: &[SearchNode<S, A>], id: NodeId) -> Option<Cost> {
    let mut cost = 0.0;
    let mut current = nodes.get(id.index())?;
    while let Some(prev) = current.predecessor {
        cost += current.g;
        current = nodes.get(prev.index())?;
    }
    Some(cost)
}

/// Trace the predecessor chain from `id` back to the root, returning node
/// handles in root-to-`id` order. `id` must come from `nodes`.
pub(crate) fn reconstruct_path<S, A>(nodes: &[SearchNode<S, A>], id: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(id);
    while let Some(node_id) = current {
        path.push(node_id);
        current = nodes[node_id.index()].predecessor;
    }
    path.reverse();
    path
}

/// Collect the actions along the path from the root to `id`.
///
/// Skips the root's absent action.
pub(crate) fn reconstruct_actions<S, A: Clone>(nodes: &[SearchNode<S, A>], id: NodeId) -> Vec<A> {
    reconstruct_path(nodes, id)
        .into_iter()
        .filter_map(|node_id| nodes[node_id.index()].action.clone())
        .collect()
}
