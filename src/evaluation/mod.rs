//! Hand-weighted linear evaluation: named features, weight vectors and the
//! agents that pick the action whose features score best.

pub mod capture;
mod feature;
mod feature_map;
mod linear;
pub mod pacman;

pub use feature::Feature;
pub use feature_map::{FeatureMap, FeatureVector, Weights};
pub use linear::{choose_best_action, validate_weights, weights_from_table, LinearEvaluator};
pub use pacman::{better_evaluation, PacmanGameState, ReflexAgent};
