//! Agent configuration read from TOML. Every section is optional and falls
//! back to the defaults below:
//!
//! ```toml
//! [tree]
//! kind = "alpha-beta"
//! depth = 3
//!
//! [learning]
//! alpha = 0.2
//! epsilon = 0.05
//! discount = 0.8
//! num-training = 100
//!
//! [value-iteration]
//! discount = 0.9
//! iterations = 100
//!
//! [weights.attack]
//! distance-to-food = -2.0
//! ```

use crate::{
    error::ConfigError,
    evaluation::{
        capture::{
            AttackAgent, DefenseAgent, HybridAgent, ATTACK_FEATURES, DEFENSE_FEATURES,
            HYBRID_FEATURES,
        },
        pacman::PACMAN_FEATURES,
        weights_from_table, ReflexAgent, Weights,
    },
    learning::LearningParameters,
    search::tree_search::{GameState, MultiAgentSearchAgent, TreeSearchKind, DEFAULT_TREE_DEPTH},
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AgentConfig {
    pub tree: TreeConfig,
    pub learning: LearningParameters,
    pub value_iteration: ValueIterationConfig,
    pub weights: WeightTables,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TreeConfig {
    pub kind: TreeSearchKind,
    pub depth: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            kind: TreeSearchKind::default(),
            depth: DEFAULT_TREE_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ValueIterationConfig {
    pub discount: f64,
    pub iterations: usize,
}

impl Default for ValueIterationConfig {
    fn default() -> Self {
        Self {
            discount: 0.9,
            iterations: 100,
        }
    }
}

/// Per-agent weight overrides, keyed by kebab-case feature name. Features
/// not listed keep the agent's default weight.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WeightTables {
    pub attack: BTreeMap<String, f64>,
    pub defense: BTreeMap<String, f64>,
    pub hybrid_offense: BTreeMap<String, f64>,
    pub hybrid_defense: BTreeMap<String, f64>,
    pub reflex: BTreeMap<String, f64>,
}

impl WeightTables {
    pub fn attack(&self) -> Result<Weights, ConfigError> {
        weights_from_table(
            "attack",
            ATTACK_FEATURES,
            AttackAgent::default_weights(),
            &self.attack,
        )
    }

    pub fn defense(&self) -> Result<Weights, ConfigError> {
        weights_from_table(
            "defense",
            DEFENSE_FEATURES,
            DefenseAgent::default_weights(),
            &self.defense,
        )
    }

    pub fn hybrid_offense(&self) -> Result<Weights, ConfigError> {
        weights_from_table(
            "hybrid-offense",
            HYBRID_FEATURES,
            HybridAgent::default_offense_weights(),
            &self.hybrid_offense,
        )
    }

    pub fn hybrid_defense(&self) -> Result<Weights, ConfigError> {
        weights_from_table(
            "hybrid-defense",
            HYBRID_FEATURES,
            HybridAgent::default_defense_weights(),
            &self.hybrid_defense,
        )
    }

    pub fn reflex(&self) -> Result<Weights, ConfigError> {
        weights_from_table(
            "reflex",
            PACMAN_FEATURES,
            ReflexAgent::default_weights(),
            &self.reflex,
        )
    }
}

impl AgentConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded agent config");
        Ok(config)
    }

    /// Parse and check that every weight table names known features and that
    /// rates and discounts lie within `[0, 1]`.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        unit_interval("learning.alpha", config.learning.alpha)?;
        unit_interval("learning.epsilon", config.learning.epsilon)?;
        unit_interval("learning.discount", config.learning.discount)?;
        unit_interval("value-iteration.discount", config.value_iteration.discount)?;
        config.weights.attack()?;
        config.weights.defense()?;
        config.weights.hybrid_offense()?;
        config.weights.hybrid_defense()?;
        config.weights.reflex()?;
        Ok(config)
    }

    pub fn tree_agent<S: GameState + 'static>(&self) -> MultiAgentSearchAgent<S> {
        MultiAgentSearchAgent::new(self.tree.kind, self.tree.depth)
    }

    pub fn reflex_agent(&self) -> Result<ReflexAgent, ConfigError> {
        ReflexAgent::new().with_weights(self.weights.reflex()?)
    }

    pub fn hybrid_agent(&self, index: usize) -> Result<HybridAgent, ConfigError> {
        let offense = self.weights.hybrid_offense()?;
        let defense = self.weights.hybrid_defense()?;
        HybridAgent::new(index).with_weights(offense, defense)
    }
}

/// NaN fails both comparisons and is rejected along with out-of-range values.
fn unit_interval(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0. ..=1.).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name: name.to_string(),
            value,
        })
    }
}
