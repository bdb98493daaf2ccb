use crate::search::{
    grid::{Direction, Grid, Position},
    Cost, SearchProblem, Successor, ILLEGAL_COST,
};

/// Reach whichever food cell is closest. Same state space as a position
/// problem, only the goal test differs.
#[derive(Debug, Clone)]
pub struct AnyFoodSearchProblem {
    walls: Grid<bool>,
    food: Grid<bool>,
    start: Position,
}

impl AnyFoodSearchProblem {
    pub fn new(walls: Grid<bool>, food: Grid<bool>, start: Position) -> Self {
        Self { walls, food, start }
    }

    pub fn food(&self) -> &Grid<bool> {
        &self.food
    }
}

impl SearchProblem for AnyFoodSearchProblem {
    type State = Position;
    type Action = Direction;

    fn starting_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        self.food.is_set(*state)
    }

    fn successor_states(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        Direction::CARDINAL
            .iter()
            .map(|&direction| (direction, state.step(direction)))
            .filter(|&(_, next)| !self.walls.is_blocked(next))
            .map(|(direction, next)| Successor::new(next, direction, 1.))
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> Cost {
        let mut position = self.start;
        for &action in actions {
            position = position.step(action);
            if self.walls.is_blocked(position) {
                return ILLEGAL_COST;
            }
        }
        actions.len() as Cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::grid::Layout;
    use crate::test_utils::*;

    #[test]
    fn any_food_cell_is_a_goal() {
        let layout = Layout::from_text(TINY_MAZE_TEXT).unwrap();
        let problem = AnyFoodSearchProblem::new(layout.walls, layout.food, Position::new(1, 5));
        assert!(problem.is_goal(&Position::new(1, 1)));
        assert!(!problem.is_goal(&Position::new(1, 5)));
    }
}
