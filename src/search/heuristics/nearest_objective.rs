//! Heuristics for the multi-objective problems: the true maze distance to the
//! unmet objective that is closest by Manhattan distance. Reaching one
//! objective never costs more than reaching all of them, so both are
//! admissible.

use crate::search::{
    distance::{nearest_by_manhattan, DistanceOracle},
    grid::Position,
    problem_formulations::{CornersProblem, CornersState, FoodSearchProblem, FoodState},
    HeuristicValue,
};
use ordered_float::Float;

/// Zero when no objective is left, infinite when the chosen one is
/// unreachable.
fn maze_distance_to_nearest(
    distances: &dyn DistanceOracle,
    from: Position,
    objectives: impl IntoIterator<Item = Position>,
) -> HeuristicValue {
    let target = nearest_by_manhattan(from, objectives).unwrap_or(from);
    match distances.maze_distance(from, target) {
        Some(distance) => (distance as f64).into(),
        None => HeuristicValue::infinity(),
    }
}

pub fn corners_heuristic(state: &CornersState, problem: &CornersProblem) -> HeuristicValue {
    let unvisited = problem
        .corners()
        .iter()
        .zip(state.visited)
        .filter(|&(_, visited)| !visited)
        .map(|(&corner, _)| corner);
    maze_distance_to_nearest(problem.distances(), state.position, unvisited)
}

pub fn food_heuristic(state: &FoodState, problem: &FoodSearchProblem) -> HeuristicValue {
    maze_distance_to_nearest(problem.distances(), state.position, state.food.as_list())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{grid::Layout, SearchProblem};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn corners_heuristic_measures_the_nearest_corner() {
        let layout = Layout::from_text(OPEN_CORNERS_TEXT).unwrap();
        let problem = CornersProblem::new(layout.walls, &layout.food, layout.agent_start.unwrap());
        let start = problem.starting_state();
        assert_approx_eq!(corners_heuristic(&start, &problem).into_inner(), 2.);

        let done = CornersState {
            position: Position::new(4, 1),
            visited: [true; 4],
        };
        assert_approx_eq!(corners_heuristic(&done, &problem).into_inner(), 0.);
    }

    #[test]
    fn food_heuristic_uses_maze_distance() {
        let layout = Layout::from_text(DETOUR_MAZE_TEXT).unwrap();
        let problem =
            FoodSearchProblem::new(layout.walls, layout.food, layout.agent_start.unwrap());
        let start = problem.starting_state();
        assert_approx_eq!(food_heuristic(&start, &problem).into_inner(), 6.);
    }
}
