use std::fmt::Debug;

/// A multi-agent game as seen by the tree search. Agent 0 is always the
/// maximising agent; the state is only ever explored through
/// [`GameState::generate_successor`], never mutated.
pub trait GameState: Sized {
    type Action: Clone + Debug + PartialEq;

    fn num_agents(&self) -> usize;

    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    fn generate_successor(&self, agent: usize, action: &Self::Action) -> Self;

    fn is_over(&self) -> bool;

    fn score(&self) -> f64;
}

/// The default static evaluation: the game score.
pub fn score_evaluation<S: GameState>(state: &S) -> f64 {
    state.score()
}
