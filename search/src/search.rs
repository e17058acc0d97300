//! The resumable A* step function and its driving loop.
//!
//! [`step`] performs exactly one expansion. Callers either loop on it
//! themselves (bounding work per call however they like) or use [`run`],
//! which loops until the search concludes or the policy's step budget for
//! that call is spent. A budget-limited `SearchState` can be run again and
//! continues where it stopped.

use crate::contract::{Action, FnDomain, SearchDomain};
use crate::error::SearchError;
use crate::node::{reconstruct_actions, Cost, NodeId, SearchNode};
use crate::policy::SearchPolicy;
use crate::state::SearchState;
use crate::trace::{CandidateOutcome, CandidateRecord, ExpandEvent, Termination};

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Not concluded and the frontier is non-empty; call again.
    Continue,
    /// A goal state was settled and the path is populated. Terminal.
    Found,
    /// The frontier emptied without reaching a goal. Terminal.
    Exhausted,
}

impl StepResult {
    /// Whether this result ends the search.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Result of a [`run`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A goal was reached; read the path from the state.
    Found,
    /// No route to a goal exists.
    Exhausted,
    /// `max_steps` steps were taken without concluding. The state is intact
    /// and may be run again.
    BudgetExhausted,
}

/// One expansion step over a [`SearchDomain`].
///
/// 1. An empty frontier on entry concludes the search as
///    [`StepResult::Exhausted`].
/// 2. The lowest-priority frontier node (first in scan order on ties) is
///    removed and settled under its state. An existing settlement for the
///    same state is overwritten.
/// 3. If it satisfies the goal test the path is rebuilt and the search
///    concludes as [`StepResult::Found`].
/// 4. Otherwise every legal action, in domain order, yields a successor.
///    Settled successors are skipped: the settled set is final, which is only
///    optimal for consistent heuristics with non-negative costs. A successor
///    already in the frontier has its entry replaced only by a strictly
///    cheaper route; otherwise a new frontier entry is created.
/// 5. If the expansion leaves the frontier empty, the same call concludes
///    the search as [`StepResult::Exhausted`].
///
/// Once concluded, further calls return the same terminal result without
/// doing any work.
pub fn step<D: SearchDomain>(
    state: &mut SearchState<D::State, D::Action>,
    domain: &D,
) -> StepResult {
    if let Some(outcome) = state.outcome {
        return outcome;
    }

    let Some((settled_state, current_id)) = state.frontier.pop_best() else {
        return conclude_exhausted(state);
    };

    let step_index = state.stats.steps;
    state.stats.steps += 1;

    let overwrote_settled = state
        .settled
        .insert(settled_state, current_id)
        .is_some();
    if overwrote_settled {
        state.stats.settled_overwrites += 1;
        tracing::warn!(
            node = current_id.index(),
            "settled state overwritten by a later settlement"
        );
    }

    let current = &state.nodes[current_id.index()];
    let (priority, total_cost) = (current.priority(), current.total_cost());
    tracing::debug!(
        step = step_index,
        node = current_id.index(),
        depth = current.depth,
        priority,
        total_cost,
        frontier = state.frontier.len(),
        "settled node"
    );

    if domain.is_goal(&current.state) {
        state.path = reconstruct_actions(&state.nodes, current_id);
        state.goal = Some(current_id);
        state.outcome = Some(StepResult::Found);
        tracing::info!(
            steps = state.stats.steps,
            path_len = state.path.len(),
            total_cost,
            nodes = state.nodes.len(),
            "goal reached"
        );
        let path_len = state.path.len();
        if let Some(trace) = state.trace.as_mut() {
            trace.expansions.push(ExpandEvent {
                step: step_index,
                node: current_id.index(),
                priority,
                total_cost,
                overwrote_settled,
                goal: true,
                candidates: Vec::new(),
            });
            trace.termination = Some(Termination::Found {
                node: current_id.index(),
                path_len,
                total_cost,
            });
        }
        return StepResult::Found;
    }

    let current_state = current.state.clone();
    let mut candidates = Vec::new();

    for (action_index, action) in domain.actions().iter().enumerate() {
        let outcome = expand_candidate(state, domain, current_id, &current_state, action);
        tracing::trace!(action_index, ?outcome, "candidate");
        candidates.push(CandidateRecord {
            action_index,
            outcome,
        });
    }

    if let Some(trace) = state.trace.as_mut() {
        trace.expansions.push(ExpandEvent {
            step: step_index,
            node: current_id.index(),
            priority,
            total_cost,
            overwrote_settled,
            goal: false,
            candidates,
        });
    }

    if state.frontier.is_empty() {
        return conclude_exhausted(state);
    }
    StepResult::Continue
}

fn expand_candidate<D: SearchDomain>(
    state: &mut SearchState<D::State, D::Action>,
    domain: &D,
    current_id: NodeId,
    current_state: &D::State,
    action: &D::Action,
) -> CandidateOutcome {
    if !domain.is_legal(current_state, action) {
        state.stats.illegal_actions += 1;
        return CandidateOutcome::Illegal;
    }

    let successor = action.apply(current_state);
    if state.settled.contains_key(&successor) {
        state.stats.settled_skips += 1;
        return CandidateOutcome::AlreadySettled;
    }

    let g = domain.g_cost(current_state, action);
    let candidate_total = state.nodes[current_id.index()].total_cost() + g;

    if let Some(existing) = state.frontier.get(&successor) {
        let existing_total = state.nodes[existing.index()].total_cost();
        if candidate_total >= existing_total {
            state.stats.discarded_candidates += 1;
            return CandidateOutcome::Discarded {
                total_cost: candidate_total,
            };
        }
        let frontier_key = successor.clone();
        let node = new_successor(state, domain, current_id, successor, action, g);
        let priority = node.priority();
        let id = state.alloc(node);
        // `get` just found the entry, so `replace` cannot miss.
        let replaced = state
            .frontier
            .replace(&frontier_key, id, priority)
            .unwrap_or(existing);
        state.stats.replacements += 1;
        return CandidateOutcome::replaced(id, replaced);
    }

    let node = new_successor(state, domain, current_id, successor, action, g);
    let priority = node.priority();
    let frontier_key = node.state.clone();
    let id = state.alloc(node);
    state.frontier.push(frontier_key, id, priority);
    CandidateOutcome::inserted(id)
}

fn new_successor<D: SearchDomain>(
    state: &SearchState<D::State, D::Action>,
    domain: &D,
    current_id: NodeId,
    successor: D::State,
    action: &D::Action,
    g: Cost,
) -> SearchNode<D::State, D::Action> {
    let h = domain.h_cost(&successor);
    SearchNode::successor(
        state.next_id(),
        successor,
        action.clone(),
        g,
        h,
        &state.nodes[current_id.index()],
    )
}

fn conclude_exhausted<S, A>(state: &mut SearchState<S, A>) -> StepResult {
    state.outcome = Some(StepResult::Exhausted);
    tracing::info!(
        steps = state.stats.steps,
        nodes = state.nodes.len(),
        "frontier exhausted without reaching a goal"
    );
    if let Some(trace) = state.trace.as_mut() {
        trace.termination = Some(Termination::Exhausted);
    }
    StepResult::Exhausted
}

/// One expansion step over plain functions.
///
/// Equivalent to [`step`] with the functions wrapped in a [`FnDomain`]:
/// `is_goal` tests for a goal, `actions` are tried in order, `g_cost` prices
/// an edge, `h_cost` estimates remaining cost, and `is_legal` guards which
/// actions may be applied.
pub fn advance<S, A, G, C, H, L>(
    state: &mut SearchState<S, A>,
    is_goal: G,
    actions: &[A],
    g_cost: C,
    h_cost: H,
    is_legal: L,
) -> StepResult
where
    S: Ord + Clone,
    A: Action<S> + Clone,
    G: Fn(&S) -> bool,
    C: Fn(&S, &A) -> Cost,
    H: Fn(&S) -> Cost,
    L: Fn(&S, &A) -> bool,
{
    let domain = FnDomain::new(is_goal, actions, g_cost, h_cost, is_legal);
    step(state, &domain)
}

/// Step until the search concludes or `policy.max_steps` steps have been
/// taken in this call.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
/// No steps are taken in that case.
pub fn run<D: SearchDomain>(
    state: &mut SearchState<D::State, D::Action>,
    domain: &D,
    policy: &SearchPolicy,
) -> Result<RunOutcome, SearchError> {
    policy.validate()?;

    let mut taken: u64 = 0;
    loop {
        if policy.max_steps.is_some_and(|max| taken >= max) {
            tracing::debug!(taken, "step budget spent; search left resumable");
            return Ok(RunOutcome::BudgetExhausted);
        }
        taken += 1;
        match step(state, domain) {
            StepResult::Continue => {}
            StepResult::Found => return Ok(RunOutcome::Found),
            StepResult::Exhausted => return Ok(RunOutcome::Exhausted),
        }
    }
}

/// Build a search at `start` configured by `policy` and [`run`] it.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
pub fn search<D: SearchDomain>(
    start: D::State,
    domain: &D,
    policy: &SearchPolicy,
) -> Result<(SearchState<D::State, D::Action>, RunOutcome), SearchError> {
    let mut state = SearchState::with_policy(start, policy);
    let outcome = run(&mut state, domain, policy)?;
    Ok((state, outcome))
}
