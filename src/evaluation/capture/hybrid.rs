use crate::{
    error::ConfigError,
    evaluation::{
        capture::{
            features::{movement, Outlook},
            CaptureAgent, CaptureGameState,
        },
        choose_best_action, validate_weights, Feature, FeatureVector, LinearEvaluator, Weights,
    },
    search::grid::{Direction, Position},
};
use rand::{rngs::SmallRng, SeedableRng};
use tracing::debug;

pub const HYBRID_FEATURES: &[Feature] = &[
    Feature::SuccessorScore,
    Feature::DistanceToFood,
    Feature::NumGuards,
    Feature::GuardDistance,
    Feature::AllyDistance,
    Feature::ScaredDistance,
    Feature::DistanceToCapsule,
    Feature::OnDefense,
    Feature::InvaderDistance,
    Feature::NumInvaders,
    Feature::EnemyDistance,
    Feature::Stop,
    Feature::Reverse,
];

/// Computes every capture feature and switches between an offensive and a
/// defensive weight table. The mode flips each time the agent is found on
/// its starting cell, which is where it respawns after being eaten.
#[derive(Debug)]
pub struct HybridAgent {
    evaluator: HybridEvaluator,
    offense: Weights,
    defense: Weights,
    start: Option<Position>,
    rng: SmallRng,
}

#[derive(Debug)]
struct HybridEvaluator {
    index: usize,
    defensive: bool,
    weights: Weights,
}

fn table(entries: &[(Feature, f64)]) -> Weights {
    let mut weights: Weights = HYBRID_FEATURES
        .iter()
        .map(|&feature| (feature, 0.))
        .collect();
    for &(feature, weight) in entries {
        weights.set(feature, weight);
    }
    weights
}

impl HybridAgent {
    pub fn new(index: usize) -> Self {
        let offense = Self::default_offense_weights();
        Self {
            evaluator: HybridEvaluator {
                index,
                defensive: false,
                weights: offense.clone(),
            },
            offense,
            defense: Self::default_defense_weights(),
            start: None,
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn default_offense_weights() -> Weights {
        table(&[
            (Feature::SuccessorScore, 100.),
            (Feature::DistanceToFood, -1.),
            (Feature::GuardDistance, 0.7),
            (Feature::ScaredDistance, -10.),
            (Feature::DistanceToCapsule, -0.5),
        ])
    }

    pub fn default_defense_weights() -> Weights {
        table(&[
            (Feature::OnDefense, -1000.),
            (Feature::InvaderDistance, 100.),
            (Feature::NumInvaders, -100.),
            (Feature::EnemyDistance, -10.),
        ])
    }

    pub fn with_weights(mut self, offense: Weights, defense: Weights) -> Result<Self, ConfigError> {
        validate_weights("hybrid-offense", HYBRID_FEATURES, &offense)?;
        validate_weights("hybrid-defense", HYBRID_FEATURES, &defense)?;
        self.offense = offense;
        self.defense = defense;
        self.apply_mode();
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn is_defensive(&self) -> bool {
        self.evaluator.defensive
    }

    pub fn weights(&self) -> &Weights {
        &self.evaluator.weights
    }

    pub fn features<S: CaptureGameState>(&self, state: &S, action: Direction) -> FeatureVector {
        self.evaluator.features(state, &action)
    }

    fn apply_mode(&mut self) {
        self.evaluator.weights = if self.evaluator.defensive {
            self.defense.clone()
        } else {
            self.offense.clone()
        };
    }
}

impl<S: CaptureGameState> LinearEvaluator<S> for HybridEvaluator {
    fn name(&self) -> &'static str {
        if self.defensive {
            "hybrid-defense"
        } else {
            "hybrid-offense"
        }
    }

    fn feature_names(&self) -> &'static [Feature] {
        HYBRID_FEATURES
    }

    fn features(&self, state: &S, action: &Direction) -> FeatureVector {
        let mut features = FeatureVector::new();
        let successor = state.generate_successor(self.index, action);
        if let Some(outlook) = Outlook::new(&successor, self.index) {
            outlook.successor_score(&mut features);
            outlook.distance_to_food(&mut features);
            outlook.guards(
                &mut features,
                |state: &S, agent| state.is_brave_ghost(agent),
                true,
            );
            outlook.distance_to_capsule(&mut features);
            outlook.ally_distance(&mut features);
            outlook.scared_distance(&mut features);
            outlook.defense(&mut features);
        }
        movement(state, self.index, *action, &mut features);
        features
    }

    fn weights(&self) -> &Weights {
        &self.weights
    }
}

impl<S: CaptureGameState> CaptureAgent<S> for HybridAgent {
    fn index(&self) -> usize {
        self.evaluator.index
    }

    fn register_initial_state(&mut self, state: &S) {
        self.start = state.agent_position(self.evaluator.index);
    }

    fn choose_action(&mut self, state: &S) -> Option<Direction> {
        let index = self.evaluator.index;
        if self.start.is_some() && state.agent_position(index) == self.start {
            self.evaluator.defensive = !self.evaluator.defensive;
            self.apply_mode();
            debug!(
                agent = index,
                defensive = self.evaluator.defensive,
                "switched mode"
            );
        }
        choose_best_action(&self.evaluator, state, index, &mut self.rng)
    }
}
