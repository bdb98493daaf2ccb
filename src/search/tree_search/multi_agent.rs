use crate::search::tree_search::{
    score_evaluation, tree_search::TreeWalk, GameState, TreeSearchKind, TreeValue,
};
use rand::{rngs::SmallRng, SeedableRng};
use std::fmt;
use tracing::debug;

pub const DEFAULT_TREE_DEPTH: usize = 2;

/// An agent choosing its moves by game tree search from the point of view of
/// agent 0.
pub struct MultiAgentSearchAgent<S> {
    kind: TreeSearchKind,
    depth: usize,
    evaluation: Box<dyn Fn(&S) -> f64>,
    rng: SmallRng,
    generated_nodes: usize,
}

impl<S> fmt::Debug for MultiAgentSearchAgent<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiAgentSearchAgent")
            .field("kind", &self.kind)
            .field("depth", &self.depth)
            .field("generated_nodes", &self.generated_nodes)
            .finish_non_exhaustive()
    }
}

impl<S: GameState + 'static> MultiAgentSearchAgent<S> {
    /// A tree search agent evaluating leaves by the game score.
    pub fn new(kind: TreeSearchKind, depth: usize) -> Self {
        Self {
            kind,
            depth,
            evaluation: Box::new(score_evaluation::<S>),
            rng: SmallRng::from_os_rng(),
            generated_nodes: 0,
        }
    }

    pub fn with_evaluation(mut self, evaluation: impl Fn(&S) -> f64 + 'static) -> Self {
        self.evaluation = Box::new(evaluation);
        self
    }

    /// Seed the generator used to report actions at chance nodes.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn kind(&self) -> TreeSearchKind {
        self.kind
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of successor states generated by the last search.
    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    /// The value of `state` for agent 0 and the action achieving it.
    pub fn evaluate_root(&mut self, state: &S) -> TreeValue<S::Action> {
        let mut walk = TreeWalk::new(
            self.kind,
            self.depth,
            state.num_agents(),
            self.evaluation.as_ref(),
            &mut self.rng,
        );
        let result = walk.search(state);
        self.generated_nodes = walk.generated_nodes();
        debug!(
            kind = ?self.kind,
            depth = self.depth,
            value = result.value,
            generated_nodes = self.generated_nodes,
            "tree search finished"
        );
        result
    }

    /// `None` only when agent 0 has no legal action or the game is over.
    pub fn get_action(&mut self, state: &S) -> Option<S::Action> {
        self.evaluate_root(state).action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn agent(kind: TreeSearchKind, depth: usize) -> MultiAgentSearchAgent<TreeGame> {
        MultiAgentSearchAgent::new(kind, depth).with_seed(0)
    }

    #[test]
    fn minimax_on_the_textbook_tree() {
        let game = textbook_tree();
        let mut minimax = agent(TreeSearchKind::Minimax, 1);
        let result = minimax.evaluate_root(&game);
        assert_approx_eq!(result.value, 3.);
        assert_eq!(result.action, Some("left"));
        assert_eq!(minimax.generated_nodes(), 12);
    }

    #[test]
    fn alpha_beta_matches_minimax_with_fewer_nodes() {
        let game = textbook_tree();
        let mut minimax = agent(TreeSearchKind::Minimax, 1);
        let mut alpha_beta = agent(TreeSearchKind::AlphaBeta, 1);
        let expected = minimax.evaluate_root(&game);
        let result = alpha_beta.evaluate_root(&game);
        assert_eq!(result, expected);
        assert_eq!(alpha_beta.generated_nodes(), 10);
        assert!(alpha_beta.generated_nodes() <= minimax.generated_nodes());
    }

    #[test]
    fn alpha_beta_matches_minimax_on_deeper_trees() {
        for game in [three_agent_tree(), two_round_tree()] {
            let mut minimax = agent(TreeSearchKind::Minimax, 2);
            let mut alpha_beta = agent(TreeSearchKind::AlphaBeta, 2);
            let expected = minimax.evaluate_root(&game);
            let result = alpha_beta.evaluate_root(&game);
            assert_approx_eq!(result.value, expected.value);
            assert_eq!(result.action, expected.action);
            assert!(alpha_beta.generated_nodes() <= minimax.generated_nodes());
        }
    }

    #[test]
    fn expectimax_averages_chance_nodes() {
        let game = textbook_tree();
        let mut expectimax = agent(TreeSearchKind::Expectimax, 1);
        let result = expectimax.evaluate_root(&game);
        assert_approx_eq!(result.value, 23. / 3.);
        assert_eq!(result.action, Some("left"));
    }

    #[test]
    fn expectimax_with_two_chance_agents() {
        // left: mean(mean(1, 3), mean(5, 7)) = 4
        // right: mean(mean(0, 10), mean(2, 2)) = 3.5
        let game = three_agent_tree();
        let mut expectimax = agent(TreeSearchKind::Expectimax, 1);
        let result = expectimax.evaluate_root(&game);
        assert_approx_eq!(result.value, 4.);
        assert_eq!(result.action, Some("left"));
    }

    #[test]
    fn minimax_with_two_minimizers() {
        // left: min(min(1, 3), min(5, 7)) = 1
        // right: min(min(0, 10), min(2, 2)) = 0
        let game = three_agent_tree();
        let mut minimax = agent(TreeSearchKind::Minimax, 1);
        let result = minimax.evaluate_root(&game);
        assert_approx_eq!(result.value, 1.);
        assert_eq!(result.action, Some("left"));
    }

    #[test]
    fn depth_limit_evaluates_inner_nodes() {
        // one round deep, the second round is never looked at
        let game = two_round_tree();
        let mut shallow = agent(TreeSearchKind::Minimax, 1);
        let result = shallow.evaluate_root(&game);
        assert_approx_eq!(result.value, 4.);
        assert_eq!(result.action, Some("right"));

        let mut deep = agent(TreeSearchKind::Minimax, 2);
        let result = deep.evaluate_root(&game);
        assert_approx_eq!(result.value, 6.);
        assert_eq!(result.action, Some("left"));
    }

    #[test]
    fn ties_keep_the_first_action() {
        let game = tied_tree();
        for kind in [TreeSearchKind::Minimax, TreeSearchKind::AlphaBeta] {
            let mut searcher = agent(kind, 1);
            assert_eq!(searcher.get_action(&game), Some("first"));
        }
    }

    #[test]
    fn stuck_agents_are_leaves() {
        let game = stuck_tree();
        let mut minimax = agent(TreeSearchKind::Minimax, 3);
        let result = minimax.evaluate_root(&game);
        assert_approx_eq!(result.value, 7.);
        assert_eq!(result.action, None);
        assert_eq!(minimax.generated_nodes(), 0);
    }

    #[test]
    fn custom_evaluation() {
        let game = textbook_tree();
        let mut minimax =
            agent(TreeSearchKind::Minimax, 1).with_evaluation(|state: &TreeGame| -state.score());
        // the minimizer now picks the largest leaf of each subtree
        let result = minimax.evaluate_root(&game);
        assert_approx_eq!(result.value, -6.);
        assert_eq!(result.action, Some("middle"));
    }
}
