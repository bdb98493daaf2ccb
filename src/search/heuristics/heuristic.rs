use crate::search::{
    heuristics::{euclidean_heuristic, manhattan_heuristic, ZeroHeuristic},
    problem_formulations::PositionSearchProblem,
    SearchProblem,
};
use ordered_float::OrderedFloat;

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimate of the remaining cost from a state to the nearest goal. A*
/// returns optimal plans only if the estimate never exceeds the true cost and
/// is zero on goals; neither property is checked at runtime.
pub trait Heuristic<P: SearchProblem> {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: FnMut(&P::State, &P) -> HeuristicValue,
{
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue {
        self(state, problem)
    }
}

/// Heuristics available for plain position problems.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum PositionHeuristicName {
    #[clap(name = "zero", help = "The zero heuristic.")]
    ZeroHeuristic,
    #[clap(help = "Manhattan distance to the goal.")]
    Manhattan,
    #[clap(help = "Straight line distance to the goal.")]
    Euclidean,
}

impl PositionHeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<PositionSearchProblem>> {
        match self {
            PositionHeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
            PositionHeuristicName::Manhattan => Box::new(manhattan_heuristic),
            PositionHeuristicName::Euclidean => Box::new(euclidean_heuristic),
        }
    }
}
