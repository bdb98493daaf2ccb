use crate::{evaluation::FeatureMap, learning::FeatureExtractor};
use std::{collections::HashMap, fmt::Debug, hash::Hash, marker::PhantomData};
use tracing::info;

/// The estimate of `Q(s, a)` a learning agent owns. `update` moves the
/// estimate towards `target` with learning rate `alpha`.
pub trait QFunction<S, A> {
    fn q_value(&self, state: &S, action: &A) -> f64;

    fn update(&mut self, state: &S, action: &A, target: f64, alpha: f64);

    /// Report what has been learned so far.
    fn log_learned(&self) {}
}

/// Q-values stored per state and action, zero until first updated.
#[derive(Debug, Clone)]
pub struct QTable<S, A> {
    values: HashMap<(S, A), f64>,
}

impl<S, A> Default for QTable<S, A> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<S, A> QTable<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S, A> QFunction<S, A> for QTable<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    fn q_value(&self, state: &S, action: &A) -> f64 {
        self.values
            .get(&(state.clone(), action.clone()))
            .copied()
            .unwrap_or(0.)
    }

    fn update(&mut self, state: &S, action: &A, target: f64, alpha: f64) {
        let entry = self
            .values
            .entry((state.clone(), action.clone()))
            .or_insert(0.);
        *entry += alpha * (target - *entry);
    }

    fn log_learned(&self) {
        info!(entries = self.values.len(), "learned q-values");
    }
}

/// `Q(s, a) = w · f(s, a)` for the features `f` of an extractor. Every
/// update moves each weight by `alpha * (target - Q(s, a)) * f_i(s, a)`.
#[derive(Debug, Clone)]
pub struct LinearQFunction<S, A, X: FeatureExtractor<S, A>> {
    extractor: X,
    weights: FeatureMap<X::Key>,
    marker: PhantomData<fn(&S, &A)>,
}

impl<S, A, X: FeatureExtractor<S, A>> LinearQFunction<S, A, X> {
    pub fn new(extractor: X) -> Self {
        Self {
            extractor,
            weights: FeatureMap::new(),
            marker: PhantomData,
        }
    }

    pub fn weights(&self) -> &FeatureMap<X::Key> {
        &self.weights
    }
}

impl<S, A, X: FeatureExtractor<S, A>> QFunction<S, A> for LinearQFunction<S, A, X> {
    fn q_value(&self, state: &S, action: &A) -> f64 {
        self.extractor.features(state, action).dot(&self.weights)
    }

    fn update(&mut self, state: &S, action: &A, target: f64, alpha: f64) {
        let features = self.extractor.features(state, action);
        let difference = target - features.dot(&self.weights);
        for (key, value) in features.iter() {
            self.weights.add(key.clone(), alpha * difference * value);
        }
    }

    fn log_learned(&self) {
        for (feature, weight) in self.weights.iter() {
            info!(?feature, weight, "learned weight");
        }
    }
}
