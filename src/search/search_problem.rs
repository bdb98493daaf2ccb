use std::fmt::Debug;
use std::hash::Hash;

pub type Cost = f64;

/// Cost reported by [`SearchProblem::actions_cost`] for a sequence containing
/// an illegal move.
pub const ILLEGAL_COST: Cost = 999_999.0;

/// A state reachable in one step, the action leading to it and its step cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: Cost) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// A search problem as seen by the search engines. Successor generation must
/// be a pure function of the state: calling [`SearchProblem::successor_states`]
/// twice on the same state yields the same successors.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug + PartialEq;

    fn starting_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn successor_states(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of executing `actions` from the starting state, or
    /// [`ILLEGAL_COST`] if any of them is illegal.
    fn actions_cost(&self, actions: &[Self::Action]) -> Cost;
}
