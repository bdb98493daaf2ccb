//! One-ply evaluation for the single Pacman game: the reflex agent and the
//! state evaluation used at the leaves of a tree search. Both are linear in
//! three features: avoiding the closest ghost, approaching the closest food
//! and the game score.

use crate::{
    error::ConfigError,
    evaluation::{
        linear::{choose_best_action, validate_weights},
        Feature, FeatureVector, LinearEvaluator, Weights,
    },
    search::{
        distance::{manhattan, nearest_by_manhattan, DistanceOracle},
        grid::{Direction, Grid, Position},
        tree_search::GameState,
    },
};
use rand::{rngs::SmallRng, SeedableRng};

/// Game state of the single agent Pacman game. Pacman is agent 0, ghosts are
/// agents 1 and up.
pub trait PacmanGameState: GameState<Action = Direction> {
    fn pacman_position(&self) -> Position;

    fn ghost_positions(&self) -> Vec<Position>;

    fn food(&self) -> &Grid<bool>;

    fn distances(&self) -> &dyn DistanceOracle;
}

pub const PACMAN_FEATURES: &[Feature] = &[
    Feature::GhostAvoidance,
    Feature::FoodAttraction,
    Feature::Score,
];

/// Distances of zero are replaced by this before taking reciprocals.
const MIN_DISTANCE: f64 = 0.001;

fn reciprocal(distance: f64) -> f64 {
    if distance == 0. {
        1. / MIN_DISTANCE
    } else {
        1. / distance
    }
}

/// Ghost avoidance uses the Manhattan distance to the closest ghost and is 1
/// when there are no ghosts. Food attraction picks the closest food by
/// Manhattan distance and measures the maze distance to it; with no food left
/// that distance is zero.
fn proximity_features(
    position: Position,
    ghosts: &[Position],
    food: &Grid<bool>,
    distances: &dyn DistanceOracle,
) -> FeatureVector {
    let mut features = FeatureVector::new();

    let ghost_avoidance = ghosts
        .iter()
        .map(|&ghost| manhattan(position, ghost))
        .min()
        .map_or(1., |distance| 1. - reciprocal(distance as f64));
    features.set(Feature::GhostAvoidance, ghost_avoidance);

    let closest_food = nearest_by_manhattan(position, food.as_list()).unwrap_or(position);
    let food_distance = distances
        .maze_distance(position, closest_food)
        .map_or(f64::INFINITY, |distance| distance as f64);
    features.set(Feature::FoodAttraction, reciprocal(food_distance));

    features
}

/// Chooses the action whose successor scores best, one ply deep. Ghosts are
/// looked up in the successor, food in the current state, so eating a pellet
/// is not penalised by the next pellet being further away.
#[derive(Debug)]
pub struct ReflexAgent {
    weights: Weights,
    rng: SmallRng,
}

impl Default for ReflexAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl ReflexAgent {
    pub fn new() -> Self {
        Self {
            weights: Self::default_weights(),
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn default_weights() -> Weights {
        [(Feature::GhostAvoidance, 1.), (Feature::FoodAttraction, 1.)]
            .into_iter()
            .collect()
    }

    pub fn with_weights(mut self, weights: Weights) -> Result<Self, ConfigError> {
        validate_weights("reflex", PACMAN_FEATURES, &weights)?;
        self.weights = weights;
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn get_action<S: PacmanGameState>(&mut self, state: &S) -> Option<Direction> {
        let Self { weights, rng } = self;
        let evaluator = ReflexEvaluator { weights };
        choose_best_action(&evaluator, state, 0, rng)
    }

    pub fn evaluation_function<S: PacmanGameState>(&self, state: &S, action: &Direction) -> f64 {
        ReflexEvaluator {
            weights: &self.weights,
        }
        .evaluate(state, action)
    }
}

struct ReflexEvaluator<'a> {
    weights: &'a Weights,
}

impl<S: PacmanGameState> LinearEvaluator<S> for ReflexEvaluator<'_> {
    fn name(&self) -> &'static str {
        "reflex"
    }

    fn feature_names(&self) -> &'static [Feature] {
        PACMAN_FEATURES
    }

    fn features(&self, state: &S, action: &Direction) -> FeatureVector {
        let successor = state.generate_successor(0, action);
        proximity_features(
            successor.pacman_position(),
            &successor.ghost_positions(),
            state.food(),
            state.distances(),
        )
    }

    fn weights(&self) -> &Weights {
        self.weights
    }
}

pub fn better_evaluation_weights() -> Weights {
    [
        (Feature::GhostAvoidance, 0.1),
        (Feature::FoodAttraction, 0.8),
        (Feature::Score, 0.1),
    ]
    .into_iter()
    .collect()
}

pub fn better_evaluation_features<S: PacmanGameState>(state: &S) -> FeatureVector {
    let mut features = proximity_features(
        state.pacman_position(),
        &state.ghost_positions(),
        state.food(),
        state.distances(),
    );
    features.set(Feature::Score, state.score());
    features
}

/// A state evaluation for tree search leaves:
/// `0.1 * (1 - 1 / ghost) + 0.8 * (1 / food) + 0.1 * score`.
pub fn better_evaluation<S: PacmanGameState>(state: &S) -> f64 {
    better_evaluation_features(state).dot(&better_evaluation_weights())
}
