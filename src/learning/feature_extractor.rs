use crate::evaluation::FeatureMap;
use std::fmt::Debug;

/// Turns a state and action into the features an approximate Q-function is
/// linear in.
pub trait FeatureExtractor<S, A> {
    type Key: Ord + Clone + Debug;

    fn features(&self, state: &S, action: &A) -> FeatureMap<Self::Key>;
}

/// One indicator feature per state and action pair, which makes approximate
/// Q-learning behave exactly like the tabular kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityExtractor;

impl<S, A> FeatureExtractor<S, A> for IdentityExtractor
where
    S: Ord + Clone + Debug,
    A: Ord + Clone + Debug,
{
    type Key = (S, A);

    fn features(&self, state: &S, action: &A) -> FeatureMap<(S, A)> {
        [((state.clone(), action.clone()), 1.)].into_iter().collect()
    }
}
