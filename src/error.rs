use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("the frontier was exhausted without reaching a goal")]
    NoPathFound,
    #[error("illegal move {action} in state {state}")]
    IllegalMove { action: String, state: String },
    #[error("plan does not reach a goal, final state is {state}")]
    GoalNotReached { state: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("agent {agent} has no feature named {feature}")]
    UnknownFeature { agent: String, feature: String },
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfRange { name: String, value: f64 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("line {line} has {found} columns, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown character {ch:?} at line {line}, column {column}")]
    UnknownCharacter {
        ch: char,
        line: usize,
        column: usize,
    },
    #[error("unknown cell {token:?} at line {line}, column {column}")]
    UnknownToken {
        token: String,
        line: usize,
        column: usize,
    },
    #[error("layout has no start cell")]
    MissingStart,
    #[error("layout has no food to use as goal")]
    NoFood,
}
