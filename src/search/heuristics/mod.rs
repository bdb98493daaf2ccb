mod heuristic;
mod nearest_objective;
mod position;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicValue, PositionHeuristicName};
pub use nearest_objective::{corners_heuristic, food_heuristic};
pub use position::{euclidean_heuristic, manhattan_heuristic};
pub use zero_heuristic::{null_heuristic, ZeroHeuristic};
