use crate::{
    error::ConfigError,
    evaluation::{
        capture::{
            features::{movement, Outlook},
            CaptureAgent, CaptureGameState,
        },
        choose_best_action, validate_weights, Feature, FeatureVector, LinearEvaluator, Weights,
    },
    search::grid::Direction,
};
use rand::{rngs::SmallRng, SeedableRng};

pub const DEFENSE_FEATURES: &[Feature] = &[
    Feature::OnDefense,
    Feature::NumInvaders,
    Feature::InvaderDistance,
    Feature::EnemyDistance,
    Feature::Stop,
    Feature::Reverse,
];

/// Stays home and hunts down visible invaders.
#[derive(Debug)]
pub struct DefenseAgent {
    evaluator: DefenseEvaluator,
    rng: SmallRng,
}

#[derive(Debug)]
struct DefenseEvaluator {
    index: usize,
    weights: Weights,
}

impl DefenseAgent {
    pub fn new(index: usize) -> Self {
        Self {
            evaluator: DefenseEvaluator {
                index,
                weights: Self::default_weights(),
            },
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn default_weights() -> Weights {
        [
            (Feature::NumInvaders, -1000.),
            (Feature::OnDefense, 150.),
            (Feature::InvaderDistance, -100.),
            (Feature::Stop, 0.),
            (Feature::Reverse, 0.),
            (Feature::EnemyDistance, -10.),
        ]
        .into_iter()
        .collect()
    }

    pub fn with_weights(mut self, weights: Weights) -> Result<Self, ConfigError> {
        validate_weights("defense", DEFENSE_FEATURES, &weights)?;
        self.evaluator.weights = weights;
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn features<S: CaptureGameState>(&self, state: &S, action: Direction) -> FeatureVector {
        self.evaluator.features(state, &action)
    }

    pub fn evaluate<S: CaptureGameState>(&self, state: &S, action: Direction) -> f64 {
        self.evaluator.evaluate(state, &action)
    }
}

impl<S: CaptureGameState> LinearEvaluator<S> for DefenseEvaluator {
    fn name(&self) -> &'static str {
        "defense"
    }

    fn feature_names(&self) -> &'static [Feature] {
        DEFENSE_FEATURES
    }

    fn features(&self, state: &S, action: &Direction) -> FeatureVector {
        let mut features = FeatureVector::new();
        let successor = state.generate_successor(self.index, action);
        if let Some(outlook) = Outlook::new(&successor, self.index) {
            outlook.defense(&mut features);
        }
        movement(state, self.index, *action, &mut features);
        features
    }

    fn weights(&self) -> &Weights {
        &self.weights
    }
}

impl<S: CaptureGameState> CaptureAgent<S> for DefenseAgent {
    fn index(&self) -> usize {
        self.evaluator.index
    }

    fn choose_action(&mut self, state: &S) -> Option<Direction> {
        choose_best_action(&self.evaluator, state, self.evaluator.index, &mut self.rng)
    }
}
