//! Learning from rewards: value iteration plans offline over a known MDP,
//! Q-learning agents learn from transitions observed while playing.

mod episode;
mod feature_extractor;
mod gridworld;
mod mdp;
mod parameters;
mod q_function;
mod q_learning;
mod value_iteration;

pub use episode::run_episode;
pub use feature_extractor::{FeatureExtractor, IdentityExtractor};
pub use gridworld::{
    GridAction, GridState, GridWorld, Tuning, BOOK_GRID, BRIDGE_GRID, CLIFF_GRID, DEFAULT_NOISE,
    DISCOUNT_GRID,
};
pub use mdp::Mdp;
pub use parameters::LearningParameters;
pub use q_function::{LinearQFunction, QFunction, QTable};
pub use q_learning::{ApproximateQAgent, QLearningAgent, TabularQAgent};
pub use value_iteration::ValueIterationAgent;
