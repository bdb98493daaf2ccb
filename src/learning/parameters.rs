use serde::{Deserialize, Serialize};

/// Hyper-parameters of a Q-learning agent. Once `num_training` episodes have
/// been played the agent stops exploring and learning, i.e. `epsilon` and
/// `alpha` drop to zero.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LearningParameters {
    /// Learning rate
    pub alpha: f64,
    /// Exploration probability
    pub epsilon: f64,
    /// Reward discount factor
    pub discount: f64,
    pub num_training: usize,
}

impl Default for LearningParameters {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            epsilon: 0.05,
            discount: 0.8,
            num_training: 10,
        }
    }
}

impl LearningParameters {
    /// Settings for learning agents that play pacman.
    pub fn pacman() -> Self {
        Self {
            alpha: 0.2,
            epsilon: 0.05,
            discount: 0.8,
            num_training: 0,
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn with_epsilon(self, epsilon: f64) -> Self {
        Self { epsilon, ..self }
    }

    pub fn with_discount(self, discount: f64) -> Self {
        Self { discount, ..self }
    }

    pub fn with_num_training(self, num_training: usize) -> Self {
        Self {
            num_training,
            ..self
        }
    }
}
