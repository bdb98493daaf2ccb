use crate::search::tree_search::TreeSearchKind;

/// How a node of the game tree combines the values of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentRole {
    Maximizer,
    Minimizer,
    Chance,
}

impl AgentRole {
    /// Agent 0 maximises; every other agent minimises, or is a chance node
    /// under expectimax.
    pub fn of(agent: usize, kind: TreeSearchKind) -> Self {
        match (agent, kind) {
            (0, _) => AgentRole::Maximizer,
            (_, TreeSearchKind::Expectimax) => AgentRole::Chance,
            _ => AgentRole::Minimizer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_by_agent_index() {
        assert_eq!(
            AgentRole::of(0, TreeSearchKind::Expectimax),
            AgentRole::Maximizer
        );
        assert_eq!(
            AgentRole::of(2, TreeSearchKind::Minimax),
            AgentRole::Minimizer
        );
        assert_eq!(
            AgentRole::of(2, TreeSearchKind::AlphaBeta),
            AgentRole::Minimizer
        );
        assert_eq!(
            AgentRole::of(1, TreeSearchKind::Expectimax),
            AgentRole::Chance
        );
    }
}
