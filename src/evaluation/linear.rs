use crate::{
    error::ConfigError,
    evaluation::{Feature, FeatureVector, Weights},
    search::tree_search::GameState,
};
use rand::{seq::IndexedRandom, Rng};
use std::{collections::BTreeMap, str::FromStr, time::Instant};
use tracing::debug;

/// Scores an action as the inner product of its features and a weight
/// vector. Features are recomputed for every action considered, nothing is
/// cached across turns.
pub trait LinearEvaluator<S: GameState> {
    /// Name used in configuration and logs.
    fn name(&self) -> &'static str;

    /// The features this evaluator produces and accepts weights for.
    fn feature_names(&self) -> &'static [Feature];

    fn features(&self, state: &S, action: &S::Action) -> FeatureVector;

    fn weights(&self) -> &Weights;

    fn evaluate(&self, state: &S, action: &S::Action) -> f64 {
        let features = self.features(state, action);
        debug_assert!(
            features
                .keys()
                .all(|key| self.feature_names().contains(key)),
            "{} produced an undeclared feature",
            self.name()
        );
        features.dot(self.weights())
    }
}

/// Evaluate every legal action of `agent` and pick uniformly at random among
/// those achieving the maximum. `None` when the agent cannot move.
pub fn choose_best_action<S, E, R>(
    evaluator: &E,
    state: &S,
    agent: usize,
    rng: &mut R,
) -> Option<S::Action>
where
    S: GameState,
    E: LinearEvaluator<S> + ?Sized,
    R: Rng + ?Sized,
{
    let actions = state.legal_actions(agent);

    let start = Instant::now();
    let values: Vec<f64> = actions
        .iter()
        .map(|action| evaluator.evaluate(state, action))
        .collect();
    debug!(
        agent,
        evaluator = evaluator.name(),
        evaluation_time = start.elapsed().as_secs_f64(),
        "evaluated actions"
    );

    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let best_actions: Vec<&S::Action> = actions
        .iter()
        .zip(values.iter())
        .filter(|&(_, &value)| value == max_value)
        .map(|(action, _)| action)
        .collect();
    best_actions.choose(rng).map(|&action| action.clone())
}

/// Check that every weighted feature is one the agent declares.
pub fn validate_weights(
    agent: &str,
    allowed: &[Feature],
    weights: &Weights,
) -> Result<(), ConfigError> {
    match weights.keys().find(|key| !allowed.contains(key)) {
        Some(feature) => Err(ConfigError::UnknownFeature {
            agent: agent.to_string(),
            feature: feature.to_string(),
        }),
        None => Ok(()),
    }
}

/// Overlay a table of named weights on `defaults`. Names must parse as a
/// [`Feature`] declared by the agent.
pub fn weights_from_table(
    agent: &str,
    allowed: &[Feature],
    mut defaults: Weights,
    table: &BTreeMap<String, f64>,
) -> Result<Weights, ConfigError> {
    for (name, &weight) in table {
        let feature = Feature::from_str(name)
            .ok()
            .filter(|feature| allowed.contains(feature))
            .ok_or_else(|| ConfigError::UnknownFeature {
                agent: agent.to_string(),
                feature: name.clone(),
            })?;
        defaults.set(feature, weight);
    }
    Ok(defaults)
}
