pub mod distance;
pub mod frontier;
pub mod grid;
pub mod heuristics;
pub mod problem_formulations;
pub mod search_engines;
mod search_node;
mod search_problem;
mod search_space;
mod search_statistics;
pub mod tree_search;
mod validate;
mod verbosity;

pub use heuristics::{Heuristic, HeuristicValue};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_problem::{Cost, SearchProblem, Successor, ILLEGAL_COST};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use validate::validate;
pub use verbosity::Verbosity;
