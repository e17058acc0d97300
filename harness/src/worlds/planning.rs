//! `ResourcePlanning`: goal-oriented action planning over four resources.
//!
//! The state is a vector of `(TIME, ENERGY, MONEY, FOOD)`. Actions trade
//! resources against each other; an action is legal only if no resource goes
//! negative afterwards and no amount overflows. The cost of an action is the time it takes plus the
//! energy it burns (energy gains are free). The heuristic is zero, so the
//! search is Dijkstra and the plan is the cheapest one.

use std::fmt;
use std::fmt::Write as _;

use wayfinder_search::{Action, Cost, SearchDomain};

use crate::contract::SearchWorld;

/// Index of each resource in [`Resources`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Time = 0,
    Energy = 1,
    Money = 2,
    Food = 3,
}

/// Resource amounts, indexed by [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resources(pub [i32; 4]);

impl Resources {
    #[must_use]
    pub const fn new(time: i32, energy: i32, money: i32, food: i32) -> Self {
        Self([time, energy, money, food])
    }

    #[must_use]
    pub fn get(&self, resource: Resource) -> i32 {
        self.0[resource as usize]
    }

    fn checked_add(mut self, resource: Resource, amount: i32) -> Option<Self> {
        let slot = &mut self.0[resource as usize];
        *slot = slot.checked_add(amount)?;
        Some(self)
    }

    fn saturating_add(mut self, resource: Resource, amount: i32) -> Self {
        let slot = &mut self.0[resource as usize];
        *slot = slot.saturating_add(amount);
        self
    }

    /// Whether every resource is non-negative.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.0.iter().all(|&v| v >= 0)
    }
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [time, energy, money, food] = self.0;
        write!(f, "({time}, {energy}, {money}, {food})")
    }
}

/// The demonstration start: 2000 time, no energy or money, 5 food.
pub const DEMO_START: Resources = Resources::new(2000, 0, 0, 5);

/// Money needed to satisfy the demonstration goal.
pub const DEMO_MONEY_GOAL: i32 = 2000;

/// An action in the planning domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    /// -60 time, -400 energy, +100 money.
    Work,
    /// -15 time, -1 food, +1200 energy.
    Eat,
    /// -30 time, -100 energy, -100 money, +7 food.
    BuyFood,
}

impl PlanAction {
    /// All actions in expansion order.
    pub const ALL: [PlanAction; 3] = [PlanAction::Work, PlanAction::Eat, PlanAction::BuyFood];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Eat => "Eat",
            Self::BuyFood => "Buy food",
        }
    }

    /// Resource deltas of this action, in application order.
    #[must_use]
    pub fn deltas(self) -> &'static [(Resource, i32)] {
        match self {
            Self::Work => &[
                (Resource::Time, -60),
                (Resource::Energy, -400),
                (Resource::Money, 100),
            ],
            Self::Eat => &[
                (Resource::Time, -15),
                (Resource::Food, -1),
                (Resource::Energy, 1200),
            ],
            Self::BuyFood => &[
                (Resource::Time, -30),
                (Resource::Energy, -100),
                (Resource::Money, -100),
                (Resource::Food, 7),
            ],
        }
    }

    /// The successor of `state`, or `None` if any amount would overflow.
    #[must_use]
    pub fn checked_apply(self, state: &Resources) -> Option<Resources> {
        self.deltas()
            .iter()
            .try_fold(*state, |now, &(resource, amount)| now.checked_add(resource, amount))
    }
}

impl Action<Resources> for PlanAction {
    /// Saturates at the `i32` bounds. Such successors are never legal, so
    /// the search only sees them through [`PlanAction::checked_apply`].
    fn apply(&self, state: &Resources) -> Resources {
        self.deltas()
            .iter()
            .fold(*state, |now, &(resource, amount)| now.saturating_add(resource, amount))
    }
}

/// Plan from a start state until money reaches a target.
#[derive(Debug, Clone)]
pub struct PlanningWorld {
    start: Resources,
    money_goal: i32,
}

impl PlanningWorld {
    #[must_use]
    pub fn new(start: Resources, money_goal: i32) -> Self {
        Self { start, money_goal }
    }

    /// Start `(2000, 0, 0, 5)`, goal `MONEY >= 2000`.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(DEMO_START, DEMO_MONEY_GOAL)
    }

    #[must_use]
    pub fn money_goal(&self) -> i32 {
        self.money_goal
    }

    /// States visited by applying `path` from the start, including the start.
    #[must_use]
    pub fn replay(&self, path: &[PlanAction]) -> Vec<Resources> {
        let mut states = Vec::with_capacity(path.len() + 1);
        states.push(self.start);
        let mut now = self.start;
        for action in path {
            now = action.apply(&now);
            states.push(now);
        }
        states
    }
}

impl SearchDomain for PlanningWorld {
    type State = Resources;
    type Action = PlanAction;

    fn is_goal(&self, state: &Resources) -> bool {
        state.get(Resource::Money) >= self.money_goal
    }

    fn actions(&self) -> &[PlanAction] {
        &PlanAction::ALL
    }

    fn g_cost(&self, state: &Resources, action: &PlanAction) -> Cost {
        let next = action.apply(state);
        let spent = |resource| f64::from(state.get(resource)) - f64::from(next.get(resource));
        spent(Resource::Time) + spent(Resource::Energy).max(0.0)
    }

    fn h_cost(&self, _state: &Resources) -> Cost {
        0.0
    }

    fn is_legal(&self, state: &Resources, action: &PlanAction) -> bool {
        matches!(action.checked_apply(state), Some(next) if next.is_feasible())
    }
}

impl SearchWorld for PlanningWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "resource_planning"
    }

    fn start(&self) -> Resources {
        self.start
    }

    fn describe(&self) -> serde_json::Value {
        serde_json::json!({
            "actions": PlanAction::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
            "money_goal": self.money_goal,
            "start": self.start.0,
        })
    }

    fn action_name(&self, action: &PlanAction) -> String {
        action.name().to_string()
    }

    fn render(&self, path: &[PlanAction]) -> String {
        let mut out = String::new();
        if path.is_empty() && !self.is_goal(&self.start) {
            out.push_str("Path not found!\n");
            return out;
        }
        let _ = writeln!(out, "Path found ({} actions):", path.len());
        let mut now = self.start;
        for action in path {
            let next = action.apply(&now);
            let _ = writeln!(out, "{now} - {} -> {next}", action.name());
            now = next;
        }
        out
    }
}
