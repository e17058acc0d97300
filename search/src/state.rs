//! Per-search session: node arena, frontier, settled set, and result path.
//!
//! `SearchState` is an aggregate the step function mutates; it holds no
//! algorithm logic. It owns every node created for the search in a flat
//! arena, so dropping it frees each node exactly once.

use std::collections::BTreeMap;

use crate::frontier::Frontier;
use crate::node::{self, Cost, NodeId, SearchNode};
use crate::policy::{FrontierMode, SearchPolicy};
use crate::search::StepResult;
use crate::trace::SearchTrace;

/// Counters maintained by the step function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Steps that settled a node.
    pub steps: u64,
    /// Nodes allocated in the arena, including the start node.
    pub nodes_created: u64,
    /// Frontier entries replaced by a cheaper route.
    pub replacements: u64,
    /// Candidates dropped because the frontier already held a route at least
    /// as cheap.
    pub discarded_candidates: u64,
    /// Successors skipped because their state was already settled.
    pub settled_skips: u64,
    /// Actions rejected by the legality guard.
    pub illegal_actions: u64,
    /// Settlements that overwrote an existing entry for the same state.
    pub settled_overwrites: u64,
}

/// Frontier and visited bookkeeping for one search.
#[derive(Debug, Clone)]
pub struct SearchState<S, A> {
    start: S,
    pub(crate) nodes: Vec<SearchNode<S, A>>,
    pub(crate) frontier: Frontier<S>,
    pub(crate) settled: BTreeMap<S, NodeId>,
    pub(crate) path: Vec<A>,
    pub(crate) outcome: Option<StepResult>,
    pub(crate) goal: Option<NodeId>,
    pub(crate) stats: SearchStats,
    pub(crate) trace: Option<SearchTrace>,
}

impl<S: Ord + Clone, A> SearchState<S, A> {
    /// Start a search at `start` with a linear-scan frontier and no trace.
    #[must_use]
    pub fn new(start: S) -> Self {
        Self::with_mode(start, FrontierMode::LinearScan, false)
    }

    /// Start a search configured by `policy`.
    #[must_use]
    pub fn with_policy(start: S, policy: &SearchPolicy) -> Self {
        Self::with_mode(start, policy.frontier, policy.record_trace)
    }

    fn with_mode(start: S, mode: FrontierMode, record_trace: bool) -> Self {
        let root = SearchNode::root(NodeId(0), start.clone());
        let mut frontier = Frontier::new(mode);
        frontier.push(start.clone(), root.id, root.priority());
        Self {
            start,
            nodes: vec![root],
            frontier,
            settled: BTreeMap::new(),
            path: Vec::new(),
            outcome: None,
            goal: None,
            stats: SearchStats {
                nodes_created: 1,
                ..SearchStats::default()
            },
            trace: record_trace.then(SearchTrace::default),
        }
    }

    /// The start state.
    #[must_use]
    pub fn start(&self) -> &S {
        &self.start
    }

    /// Actions from start to goal. Empty until the search is `Found`, and
    /// empty when the start state itself is a goal.
    #[must_use]
    pub fn path(&self) -> &[A] {
        &self.path
    }

    /// Take ownership of the path, leaving it empty.
    pub fn take_path(&mut self) -> Vec<A> {
        std::mem::take(&mut self.path)
    }

    /// The terminal result, once the search has concluded.
    #[must_use]
    pub fn outcome(&self) -> Option<StepResult> {
        self.outcome
    }

    /// Whether a terminal result has been reached.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.outcome.is_some()
    }

    /// The settled goal node, when `Found`.
    #[must_use]
    pub fn goal_node(&self) -> Option<&SearchNode<S, A>> {
        self.goal.map(|id| &self.nodes[id.index()])
    }

    /// Cumulative cost of the found path.
    #[must_use]
    pub fn path_cost(&self) -> Option<Cost> {
        self.goal_node().map(SearchNode::total_cost)
    }

    /// Cost of the node `id` recomputed by walking its predecessor chain.
    /// Always equal to its memoized [`SearchNode::total_cost`]; `None` if
    /// `id` was not created by this search.
    #[must_use]
    pub fn walked_cost(&self, id: NodeId) -> Option<Cost> {
        node::walked_cost(&self.nodes, id)
    }

    /// A node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SearchNode<S, A>> {
        self.nodes.get(id.index())
    }

    /// Every node created for this search, indexed by [`NodeId`].
    #[must_use]
    pub fn nodes(&self) -> &[SearchNode<S, A>] {
        &self.nodes
    }

    /// Frontier nodes in scan order.
    pub fn frontier_nodes(&self) -> impl Iterator<Item = &SearchNode<S, A>> {
        self.frontier
            .node_ids()
            .into_iter()
            .map(|id| &self.nodes[id.index()])
    }

    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    #[must_use]
    pub fn frontier_high_water(&self) -> u64 {
        self.frontier.high_water()
    }

    #[must_use]
    pub fn settled_len(&self) -> usize {
        self.settled.len()
    }

    #[must_use]
    pub fn is_settled(&self, state: &S) -> bool {
        self.settled.contains_key(state)
    }

    #[must_use]
    pub fn in_frontier(&self, state: &S) -> bool {
        self.frontier.contains(state)
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The expansion trace, if the policy enabled recording.
    #[must_use]
    pub fn trace(&self) -> Option<&SearchTrace> {
        self.trace.as_ref()
    }

    pub(crate) fn alloc(&mut self, node: SearchNode<S, A>) -> NodeId {
        let id = node.id;
        debug_assert_eq!(id.index(), self.nodes.len());
        self.nodes.push(node);
        self.stats.nodes_created += 1;
        id
    }

    pub(crate) fn next_id(&self) -> NodeId {
        NodeId(self.nodes.len())
    }
}
