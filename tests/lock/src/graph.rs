//! Weighted digraph domain with a reference shortest-path oracle.
//!
//! Actions are edges. An edge is legal only from its own tail, so the
//! ordered action list is the whole edge list and the legality guard picks
//! out the outgoing edges of the current node.

use std::collections::BTreeSet;

use wayfinder_search::{Action, Cost, SearchDomain};

/// A directed edge `from -> to` with a non-negative cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: u32,
    pub to: u32,
    pub cost: Cost,
}

impl Edge {
    #[must_use]
    pub fn new(from: u32, to: u32, cost: Cost) -> Self {
        Self { from, to, cost }
    }
}

impl Action<u32> for Edge {
    fn apply(&self, state: &u32) -> u32 {
        if *state == self.from {
            self.to
        } else {
            *state
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeightedGraph {
    pub nodes: u32,
    pub edges: Vec<Edge>,
    pub goals: BTreeSet<u32>,
    /// Per-node estimate; all zero unless set.
    pub heuristic: Vec<Cost>,
}

impl WeightedGraph {
    #[must_use]
    pub fn new(nodes: u32, edges: Vec<Edge>, goals: impl IntoIterator<Item = u32>) -> Self {
        Self {
            nodes,
            edges,
            goals: goals.into_iter().collect(),
            heuristic: vec![0.0; nodes as usize],
        }
    }

    /// Replace the heuristic with `scale` times the exact distance to the
    /// nearest goal. Any `scale` in `[0, 1]` gives a consistent heuristic.
    /// Nodes that cannot reach a goal get the largest finite distance.
    #[must_use]
    pub fn with_scaled_exact_heuristic(mut self, scale: Cost) -> Self {
        let to_goal = self.distances_to_goals();
        let ceiling = to_goal.iter().flatten().copied().fold(0.0, Cost::max);
        self.heuristic = to_goal
            .into_iter()
            .map(|d| d.unwrap_or(ceiling) * scale)
            .collect();
        self
    }

    /// Shortest distance from `start` to every node (Bellman-Ford).
    #[must_use]
    pub fn distances_from(&self, start: u32) -> Vec<Option<Cost>> {
        let mut dist = vec![None; self.nodes as usize];
        dist[start as usize] = Some(0.0);
        self.relax(&mut dist, |e| (e.from, e.to));
        dist
    }

    /// Cheapest cost from `start` to any goal, if one is reachable.
    #[must_use]
    pub fn optimal_cost(&self, start: u32) -> Option<Cost> {
        let dist = self.distances_from(start);
        self.goals
            .iter()
            .filter_map(|&g| dist[g as usize])
            .min_by(Cost::total_cmp)
    }

    /// Cost of `path` from `start`, or `None` if some edge does not leave the
    /// node the path has reached.
    #[must_use]
    pub fn walk(&self, start: u32, path: &[Edge]) -> Option<(u32, Cost)> {
        let mut at = start;
        let mut cost = 0.0;
        for edge in path {
            if edge.from != at {
                return None;
            }
            at = edge.to;
            cost += edge.cost;
        }
        Some((at, cost))
    }

    fn distances_to_goals(&self) -> Vec<Option<Cost>> {
        let mut dist = vec![None; self.nodes as usize];
        for &g in &self.goals {
            dist[g as usize] = Some(0.0);
        }
        self.relax(&mut dist, |e| (e.to, e.from));
        dist
    }

    fn relax(&self, dist: &mut [Option<Cost>], direction: impl Fn(&Edge) -> (u32, u32)) {
        for _ in 0..self.nodes {
            let mut changed = false;
            for edge in &self.edges {
                let (a, b) = direction(edge);
                if let Some(da) = dist[a as usize] {
                    let candidate = da + edge.cost;
                    if !matches!(dist[b as usize], Some(db) if db <= candidate) {
                        dist[b as usize] = Some(candidate);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
    }
}

impl SearchDomain for WeightedGraph {
    type State = u32;
    type Action = Edge;

    fn is_goal(&self, state: &u32) -> bool {
        self.goals.contains(state)
    }

    fn actions(&self) -> &[Edge] {
        &self.edges
    }

    fn g_cost(&self, _state: &u32, edge: &Edge) -> Cost {
        edge.cost
    }

    fn h_cost(&self, state: &u32) -> Cost {
        self.heuristic[*state as usize]
    }

    fn is_legal(&self, state: &u32, edge: &Edge) -> bool {
        *state == edge.from
    }
}
