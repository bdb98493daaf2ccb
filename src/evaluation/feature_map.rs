use crate::evaluation::Feature;
use std::collections::BTreeMap;

/// A sparse mapping from feature keys to values in which every key not
/// present reads as zero. Keys are kept ordered so sums and logs are
/// reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMap<K: Ord> {
    values: BTreeMap<K, f64>,
}

/// Feature values computed for one state and action.
pub type FeatureVector = FeatureMap<Feature>;

/// Weights of a linear evaluator, indexed like [`FeatureVector`].
pub type Weights = FeatureMap<Feature>;

impl<K: Ord> Default for FeatureMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FeatureMap<K> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> f64 {
        self.values.get(key).copied().unwrap_or(0.)
    }

    pub fn set(&mut self, key: K, value: f64) {
        self.values.insert(key, value);
    }

    pub fn add(&mut self, key: K, delta: f64) {
        *self.values.entry(key).or_insert(0.) += delta;
    }

    pub fn contains(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    /// The inner product, summed in key order.
    pub fn dot(&self, other: &Self) -> f64 {
        self.values
            .iter()
            .map(|(key, value)| value * other.get(key))
            .sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.values.iter().map(|(key, &value)| (key, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Ord> FromIterator<(K, f64)> for FeatureMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn missing_keys_read_as_zero() {
        let mut features = FeatureVector::new();
        assert_eq!(features.get(&Feature::Stop), 0.);
        features.add(Feature::Stop, 1.);
        features.add(Feature::Stop, 1.);
        assert_eq!(features.get(&Feature::Stop), 2.);
        assert!(!features.contains(&Feature::Reverse));
    }

    #[test]
    fn dot_product_ignores_missing_weights() {
        let features: FeatureVector = [(Feature::SuccessorScore, 2.), (Feature::DistanceToFood, 3.)]
            .into_iter()
            .collect();
        let weights: Weights = [(Feature::SuccessorScore, 100.), (Feature::Stop, -5.)]
            .into_iter()
            .collect();
        assert_approx_eq!(features.dot(&weights), 200.);
        assert_approx_eq!(weights.dot(&features), 200.);
    }
}
