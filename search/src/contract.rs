//! Domain contract: what a caller supplies to drive a search.

use std::marker::PhantomData;

use crate::node::Cost;

/// A pure state transition.
///
/// Any `Fn(&S) -> S` is an action, so closures and function pointers can be
/// used directly; domains with a fixed action set typically implement this
/// on an enum.
pub trait Action<S> {
    /// Produce the successor of `state`. Must not have side effects.
    fn apply(&self, state: &S) -> S;
}

impl<S, F> Action<S> for F
where
    F: Fn(&S) -> S,
{
    fn apply(&self, state: &S) -> S {
        self(state)
    }
}

/// Trait for domains that can be searched.
///
/// # Contract
///
/// Every method must be a pure, terminating function of its arguments.
/// `g_cost` must be non-negative. `State`'s `Ord` must be consistent with its
/// `Eq`. None of this is checked; violations give wrong (but non-panicking)
/// search results.
pub trait SearchDomain {
    /// A point in the search space. Opaque to the engine beyond ordering.
    type State: Ord + Clone;
    /// A transition between states.
    type Action: Action<Self::State> + Clone;

    /// Goal test.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Candidate actions, tried in this order on every expansion.
    fn actions(&self) -> &[Self::Action];

    /// Cost of applying `action` to `state`. Only called for legal actions.
    fn g_cost(&self, state: &Self::State, action: &Self::Action) -> Cost;

    /// Heuristic estimate from `state` to a goal.
    ///
    /// Admissibility is not enforced: an overestimating heuristic makes the
    /// search greedy and the returned path may not be the cheapest.
    fn h_cost(&self, state: &Self::State) -> Cost;

    /// Whether `action` may be applied to `state`.
    fn is_legal(&self, state: &Self::State, action: &Self::Action) -> bool;
}

/// A [`SearchDomain`] assembled from plain functions.
pub struct FnDomain<'a, S, A, G, C, H, L> {
    actions: &'a [A],
    is_goal: G,
    g_cost: C,
    h_cost: H,
    is_legal: L,
    _state: PhantomData<fn(&S)>,
}

impl<'a, S, A, G, C, H, L> FnDomain<'a, S, A, G, C, H, L>
where
    S: Ord + Clone,
    A: Action<S> + Clone,
    G: Fn(&S) -> bool,
    C: Fn(&S, &A) -> Cost,
    H: Fn(&S) -> Cost,
    L: Fn(&S, &A) -> bool,
{
    #[must_use]
    pub fn new(is_goal: G, actions: &'a [A], g_cost: C, h_cost: H, is_legal: L) -> Self {
        Self {
            actions,
            is_goal,
            g_cost,
            h_cost,
            is_legal,
            _state: PhantomData,
        }
    }
}

impl<S, A, G, C, H, L> SearchDomain for FnDomain<'_, S, A, G, C, H, L>
where
    S: Ord + Clone,
    A: Action<S> + Clone,
    G: Fn(&S) -> bool,
    C: Fn(&S, &A) -> Cost,
    H: Fn(&S) -> Cost,
    L: Fn(&S, &A) -> bool,
{
    type State = S;
    type Action = A;

    fn is_goal(&self, state: &S) -> bool {
        (self.is_goal)(state)
    }

    fn actions(&self) -> &[A] {
        self.actions
    }

    fn g_cost(&self, state: &S, action: &A) -> Cost {
        (self.g_cost)(state, action)
    }

    fn h_cost(&self, state: &S) -> Cost {
        (self.h_cost)(state)
    }

    fn is_legal(&self, state: &S, action: &A) -> bool {
        (self.is_legal)(state, action)
    }
}
