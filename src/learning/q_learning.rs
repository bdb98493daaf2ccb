//! Q-learning agents. The agent owns its Q-function for its whole lifetime
//! and learns from the transitions the host reports while playing episodes.

use crate::learning::{
    FeatureExtractor, LearningParameters, LinearQFunction, Mdp, QFunction, QTable,
};
use rand::{rngs::SmallRng, seq::IndexedRandom, Rng, SeedableRng};
use std::{fmt, hash::Hash};
use tracing::{debug, info};

pub struct QLearningAgent<S, A, Q> {
    legal_actions: Box<dyn Fn(&S) -> Vec<A>>,
    parameters: LearningParameters,
    q_function: Q,
    rng: SmallRng,
    episodes_so_far: usize,
    episode_rewards: f64,
    accumulated_train_rewards: f64,
    accumulated_test_rewards: f64,
}

pub type TabularQAgent<S, A> = QLearningAgent<S, A, QTable<S, A>>;

pub type ApproximateQAgent<S, A, X> = QLearningAgent<S, A, LinearQFunction<S, A, X>>;

impl<S, A, Q: fmt::Debug> fmt::Debug for QLearningAgent<S, A, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QLearningAgent")
            .field("parameters", &self.parameters)
            .field("q_function", &self.q_function)
            .field("episodes_so_far", &self.episodes_so_far)
            .finish()
    }
}

impl<S, A> TabularQAgent<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    pub fn tabular(
        legal_actions: impl Fn(&S) -> Vec<A> + 'static,
        parameters: LearningParameters,
    ) -> Self {
        Self::new(legal_actions, parameters, QTable::new())
    }
}

impl<S, A: Clone, X: FeatureExtractor<S, A>> ApproximateQAgent<S, A, X> {
    pub fn approximate(
        legal_actions: impl Fn(&S) -> Vec<A> + 'static,
        parameters: LearningParameters,
        extractor: X,
    ) -> Self {
        Self::new(legal_actions, parameters, LinearQFunction::new(extractor))
    }
}

impl<S, A, Q> QLearningAgent<S, A, Q>
where
    A: Clone,
    Q: QFunction<S, A>,
{
    pub fn new(
        legal_actions: impl Fn(&S) -> Vec<A> + 'static,
        parameters: LearningParameters,
        q_function: Q,
    ) -> Self {
        Self {
            legal_actions: Box::new(legal_actions),
            parameters,
            q_function,
            rng: SmallRng::from_os_rng(),
            episodes_so_far: 0,
            episode_rewards: 0.,
            accumulated_train_rewards: 0.,
            accumulated_test_rewards: 0.,
        }
    }

    /// An agent acting in `mdp`, whose legal actions are the MDP's.
    pub fn for_mdp<M>(mdp: &M, parameters: LearningParameters, q_function: Q) -> Self
    where
        M: Mdp<State = S, Action = A> + Clone + 'static,
        S: 'static,
        A: 'static,
    {
        let mdp = mdp.clone();
        Self::new(
            move |state: &S| mdp.possible_actions(state),
            parameters,
            q_function,
        )
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn parameters(&self) -> &LearningParameters {
        &self.parameters
    }

    pub fn q_function(&self) -> &Q {
        &self.q_function
    }

    pub fn legal_actions(&self, state: &S) -> Vec<A> {
        (self.legal_actions)(state)
    }

    pub fn q_value(&self, state: &S, action: &A) -> f64 {
        self.q_function.q_value(state, action)
    }

    /// `max_a Q(state, a)`, or zero when no action is legal.
    pub fn value(&self, state: &S) -> f64 {
        self.legal_actions(state)
            .iter()
            .map(|action| self.q_value(state, action))
            .reduce(f64::max)
            .unwrap_or(0.)
    }

    /// The action with the highest Q-value. On a tie with the running best,
    /// a coin flip decides, so later actions in a long tie are favoured.
    pub fn policy(&mut self, state: &S) -> Option<A> {
        let mut best: Option<(A, f64)> = None;
        for action in self.legal_actions(state) {
            let q_value = self.q_value(state, &action);
            best = match best {
                Some((_, value)) if q_value > value => Some((action, q_value)),
                Some((_, value)) if q_value == value && self.rng.random_bool(0.5) => {
                    Some((action, q_value))
                }
                None => Some((action, q_value)),
                keep => keep,
            };
        }
        best.map(|(action, _)| action)
    }

    /// Explore with probability epsilon, otherwise follow the policy.
    pub fn action(&mut self, state: &S) -> Option<A> {
        let actions = self.legal_actions(state);
        if actions.is_empty() {
            return None;
        }
        if self.rng.random_bool(self.parameters.epsilon.clamp(0., 1.)) {
            actions.choose(&mut self.rng).cloned()
        } else {
            self.policy(state)
        }
    }

    /// Learn from one transition: `Q(s, a)` moves towards
    /// `reward + discount * V(next_state)`.
    pub fn update(&mut self, state: &S, action: &A, next_state: &S, reward: f64) {
        let target = reward + self.parameters.discount * self.value(next_state);
        self.q_function
            .update(state, action, target, self.parameters.alpha);
    }

    pub fn start_episode(&mut self) {
        self.episode_rewards = 0.;
        debug!(episode = self.episodes_so_far + 1, "starting episode");
    }

    /// Called by the host after every step of an episode.
    pub fn observe_transition(&mut self, state: &S, action: &A, next_state: &S, reward: f64) {
        self.episode_rewards += reward;
        self.update(state, action, next_state, reward);
    }

    pub fn stop_episode(&mut self) {
        if self.is_in_training() {
            self.accumulated_train_rewards += self.episode_rewards;
        } else {
            self.accumulated_test_rewards += self.episode_rewards;
        }
        self.episodes_so_far += 1;
        debug!(
            episode = self.episodes_so_far,
            rewards = self.episode_rewards,
            "finished episode"
        );

        if self.episodes_so_far >= self.parameters.num_training {
            self.parameters.epsilon = 0.;
            self.parameters.alpha = 0.;
        }
        if self.episodes_so_far == self.parameters.num_training {
            info!(
                episodes = self.episodes_so_far,
                average_rewards = self.accumulated_train_rewards / self.episodes_so_far as f64,
                "training complete"
            );
            self.q_function.log_learned();
        }
    }

    pub fn is_in_training(&self) -> bool {
        self.episodes_so_far < self.parameters.num_training
    }

    pub fn episodes_so_far(&self) -> usize {
        self.episodes_so_far
    }

    pub fn episode_rewards(&self) -> f64 {
        self.episode_rewards
    }

    pub fn accumulated_train_rewards(&self) -> f64 {
        self.accumulated_train_rewards
    }

    pub fn accumulated_test_rewards(&self) -> f64 {
        self.accumulated_test_rewards
    }
}
