use std::{fmt::Debug, hash::Hash};

/// A finite Markov decision process.
pub trait Mdp {
    type State: Clone + Eq + Hash + Ord + Debug;
    type Action: Clone + Eq + Hash + Ord + Debug;

    /// Every state, terminal ones included.
    fn states(&self) -> Vec<Self::State>;

    fn start_state(&self) -> Self::State;

    /// Empty for terminal states.
    fn possible_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Successor states paired with their probability. Probabilities are
    /// positive and sum to one.
    fn transition_states_and_probs(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Vec<(Self::State, f64)>;

    fn reward(&self, state: &Self::State, action: &Self::Action, next_state: &Self::State) -> f64;

    fn is_terminal(&self, state: &Self::State) -> bool;
}
