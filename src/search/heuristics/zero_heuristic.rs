use crate::search::{Heuristic, HeuristicValue, SearchProblem};

/// The trivial heuristic. A* with it behaves like uniform cost search.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &P) -> HeuristicValue {
        (0.).into()
    }
}

/// [`ZeroHeuristic`] as a plain function.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> HeuristicValue {
    (0.).into()
}
