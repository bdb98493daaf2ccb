mod agent_role;
mod game_state;
mod multi_agent;
mod tree_search;

pub use agent_role::AgentRole;
pub use game_state::{score_evaluation, GameState};
pub use multi_agent::{MultiAgentSearchAgent, DEFAULT_TREE_DEPTH};
pub use tree_search::{TreeSearchKind, TreeValue};
