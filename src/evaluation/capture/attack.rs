use crate::{
    error::ConfigError,
    evaluation::{
        capture::{features::Outlook, CaptureAgent, CaptureGameState},
        choose_best_action, validate_weights, Feature, FeatureVector, LinearEvaluator, Weights,
    },
    search::grid::Direction,
};
use rand::{rngs::SmallRng, SeedableRng};

pub const ATTACK_FEATURES: &[Feature] = &[
    Feature::SuccessorScore,
    Feature::DistanceToFood,
    Feature::GuardDistance,
    Feature::AllyDistance,
    Feature::DistanceToCapsule,
];

/// Raids the opponents' half: eat food, keep away from defenders, pick up
/// capsules on the way.
#[derive(Debug)]
pub struct AttackAgent {
    evaluator: AttackEvaluator,
    rng: SmallRng,
}

#[derive(Debug)]
struct AttackEvaluator {
    index: usize,
    weights: Weights,
}

impl AttackAgent {
    pub fn new(index: usize) -> Self {
        Self {
            evaluator: AttackEvaluator {
                index,
                weights: Self::default_weights(),
            },
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn default_weights() -> Weights {
        [
            (Feature::SuccessorScore, 100.),
            (Feature::DistanceToFood, -1.),
            (Feature::GuardDistance, 0.75),
            (Feature::AllyDistance, 0.),
            (Feature::DistanceToCapsule, -0.2),
        ]
        .into_iter()
        .collect()
    }

    pub fn with_weights(mut self, weights: Weights) -> Result<Self, ConfigError> {
        validate_weights("attack", ATTACK_FEATURES, &weights)?;
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

impl<S: CaptureGameState> LinearEvaluator<S> for AttackEvaluator {
    fn name(&self) -> &'static str {
        "attack"
    }

    fn feature_names(&self) -> &'static [Feature] {
        ATTACK_FEATURES
    }

    fn features(&self, state: &S, action: &Direction) -> FeatureVector {
        let mut features = FeatureVector::new();
        let successor = state.generate_successor(self.index, action);
        let Some(outlook) = Outlook::new(&successor, self.index) else {
            return features;
        };

        outlook.successor_score(&mut features);
        outlook.distance_to_food(&mut features);
        outlook.guards(
            &mut features,
            |state: &S, agent| state.is_ghost(agent),
            false,
        );
        outlook.distance_to_capsule(&mut features);
        outlook.ally_distance(&mut features);
        features
    }

    fn weights(&self) -> &Weights {
        &self.weights
    }
}

impl<S: CaptureGameState> CaptureAgent<S> for AttackAgent {
    fn index(&self) -> usize {
        self.evaluator.index
    }

    fn choose_action(&mut self, state: &S) -> Option<Direction> {
        choose_best_action(&self.evaluator, state, self.evaluator.index, &mut self.rng)
    }
}
