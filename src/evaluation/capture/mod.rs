//! Agents for the two-team capture game. Each team defends food on its own
//! half of the board and scores by eating the opponents' food; an agent is a
//! pacman while on the opponents' half and a ghost at home.

mod attack;
mod defense;
mod features;
mod hybrid;
mod team;

pub use attack::{AttackAgent, ATTACK_FEATURES};
pub use defense::{DefenseAgent, DEFENSE_FEATURES};
pub use hybrid::{HybridAgent, HYBRID_FEATURES};
pub use team::{create_configured_team, create_team};

use crate::search::{
    distance::DistanceOracle,
    grid::{Direction, Grid, Position},
    tree_search::GameState,
};

/// What a capture agent can observe of the game.
pub trait CaptureGameState: GameState<Action = Direction> {
    /// `None` while the agent is out of sight.
    fn agent_position(&self, agent: usize) -> Option<Position>;

    /// Heading of the agent's last move.
    fn agent_direction(&self, agent: usize) -> Direction;

    fn is_pacman(&self, agent: usize) -> bool;

    /// Remaining moves during which the agent, as a ghost, can be eaten.
    fn scared_timer(&self, agent: usize) -> u32;

    /// All members of the agent's team, the agent included.
    fn team(&self, agent: usize) -> Vec<usize>;

    fn opponents(&self, agent: usize) -> Vec<usize>;

    /// Score from the point of view of the agent's team.
    fn team_score(&self, agent: usize) -> f64;

    /// Food the agent's team is trying to eat.
    fn food_to_eat(&self, agent: usize) -> Grid<bool>;

    fn capsules_to_eat(&self, agent: usize) -> Vec<Position>;

    fn distances(&self) -> &dyn DistanceOracle;

    fn is_ghost(&self, agent: usize) -> bool {
        !self.is_pacman(agent)
    }

    fn is_scared_ghost(&self, agent: usize) -> bool {
        self.is_ghost(agent) && self.scared_timer(agent) > 0
    }

    fn is_brave_ghost(&self, agent: usize) -> bool {
        self.is_ghost(agent) && self.scared_timer(agent) == 0
    }
}

/// A member of a capture team. The host calls
/// [`CaptureAgent::register_initial_state`] once before the first move.
pub trait CaptureAgent<S: CaptureGameState> {
    fn index(&self) -> usize;

    fn register_initial_state(&mut self, _state: &S) {}

    /// `None` when the agent has no legal action.
    fn choose_action(&mut self, state: &S) -> Option<Direction>;
}
