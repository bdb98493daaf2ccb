use crate::search::{
    distance::{euclidean, manhattan},
    grid::Position,
    problem_formulations::PositionSearchProblem,
    HeuristicValue,
};

pub fn manhattan_heuristic(state: &Position, problem: &PositionSearchProblem) -> HeuristicValue {
    (manhattan(*state, problem.goal()) as f64).into()
}

pub fn euclidean_heuristic(state: &Position, problem: &PositionSearchProblem) -> HeuristicValue {
    euclidean(*state, problem.goal()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::grid::Grid;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn distances_to_the_goal() {
        let problem = PositionSearchProblem::new(
            Grid::new(5, 5, false),
            Position::new(0, 0),
            Position::new(3, 4),
        );
        let start = Position::new(0, 0);
        assert_approx_eq!(manhattan_heuristic(&start, &problem).into_inner(), 7.);
        assert_approx_eq!(euclidean_heuristic(&start, &problem).into_inner(), 5.);
        assert_approx_eq!(
            manhattan_heuristic(&problem.goal(), &problem).into_inner(),
            0.
        );
    }
}
