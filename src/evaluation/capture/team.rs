use crate::{
    config::AgentConfig,
    error::ConfigError,
    evaluation::capture::{AttackAgent, CaptureAgent, CaptureGameState, DefenseAgent},
};

/// The team fielded in capture games: an attacker and a defender.
pub fn create_team<S: CaptureGameState>(
    first: usize,
    second: usize,
) -> Vec<Box<dyn CaptureAgent<S>>> {
    vec![
        Box::new(AttackAgent::new(first)),
        Box::new(DefenseAgent::new(second)),
    ]
}

/// [`create_team`] with the weight overrides of `config`.
pub fn create_configured_team<S: CaptureGameState>(
    first: usize,
    second: usize,
    config: &AgentConfig,
) -> Result<Vec<Box<dyn CaptureAgent<S>>>, ConfigError> {
    let attack = AttackAgent::new(first).with_weights(config.weights.attack()?)?;
    let defense = DefenseAgent::new(second).with_weights(config.weights.defense()?)?;
    Ok(vec![Box::new(attack), Box::new(defense)])
}
