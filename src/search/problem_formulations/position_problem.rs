use crate::{
    error::LayoutError,
    search::{
        grid::{Direction, Grid, Layout, Position},
        Cost, SearchProblem, Successor, ILLEGAL_COST,
    },
};

/// Cost of stepping onto a position.
pub type CostFn = fn(Position) -> Cost;

pub fn unit_cost(_position: Position) -> Cost {
    1.
}

/// Stepping onto column `x` costs `0.5^x`, which makes eastern routes cheap.
pub fn stay_east_cost(position: Position) -> Cost {
    0.5_f64.powi(position.x)
}

/// Stepping onto column `x` costs `2^x`, which makes western routes cheap.
pub fn stay_west_cost(position: Position) -> Cost {
    2_f64.powi(position.x)
}

/// Reach a single goal cell. States are positions.
#[derive(Debug, Clone)]
pub struct PositionSearchProblem {
    walls: Grid<bool>,
    start: Position,
    goal: Position,
    cost_fn: CostFn,
}

impl PositionSearchProblem {
    pub fn new(walls: Grid<bool>, start: Position, goal: Position) -> Self {
        Self::with_cost_fn(walls, start, goal, unit_cost)
    }

    pub fn with_cost_fn(
        walls: Grid<bool>,
        start: Position,
        goal: Position,
        cost_fn: CostFn,
    ) -> Self {
        Self {
            walls,
            start,
            goal,
            cost_fn,
        }
    }

    /// Walk from the layout's start to its first food cell, in column order.
    pub fn from_layout(layout: &Layout) -> Result<Self, LayoutError> {
        let start = layout.agent_start.ok_or(LayoutError::MissingStart)?;
        let goal = layout
            .food
            .as_list()
            .first()
            .copied()
            .ok_or(LayoutError::NoFood)?;
        Ok(Self::new(layout.walls.clone(), start, goal))
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn walls(&self) -> &Grid<bool> {
        &self.walls
    }
}

impl SearchProblem for PositionSearchProblem {
    type State = Position;
    type Action = Direction;

    fn starting_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successor_states(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        Direction::CARDINAL
            .iter()
            .map(|&direction| (direction, state.step(direction)))
            .filter(|&(_, next)| !self.walls.is_blocked(next))
            .map(|(direction, next)| Successor::new(next, direction, (self.cost_fn)(next)))
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> Cost {
        let mut position = self.start;
        let mut cost = 0.;
        for &action in actions {
            position = position.step(action);
            if self.walls.is_blocked(position) {
                return ILLEGAL_COST;
            }
            cost += (self.cost_fn)(position);
        }
        cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn tiny_maze_problem() -> PositionSearchProblem {
        let layout = Layout::from_text(TINY_MAZE_TEXT).unwrap();
        PositionSearchProblem::new(layout.walls, Position::new(1, 5), Position::new(1, 1))
    }

    #[test]
    fn from_layout_walks_to_the_first_food() {
        let layout = Layout::from_text(TINY_MAZE_TEXT).unwrap();
        let problem = PositionSearchProblem::from_layout(&layout).unwrap();
        assert_eq!(problem.starting_state(), Position::new(1, 5));
        assert_eq!(problem.goal(), Position::new(1, 1));
    }

    #[test]
    fn from_layout_without_food_has_no_goal() {
        let layout = Layout::from_text("%%%%\n%P %\n%%%%\n").unwrap();
        assert_eq!(
            PositionSearchProblem::from_layout(&layout).unwrap_err(),
            LayoutError::NoFood
        );
    }

    #[test]
    fn successors_skip_walls() {
        let problem = tiny_maze_problem();
        let successors = problem.successor_states(&Position::new(1, 5));
        let actions: Vec<Direction> = successors.iter().map(|s| s.action).collect();
        assert_eq!(actions, vec![Direction::South, Direction::East]);
        assert!(successors.iter().all(|s| s.cost == 1.));
    }

    #[test]
    fn successors_are_idempotent() {
        let problem = tiny_maze_problem();
        let state = Position::new(3, 3);
        assert_eq!(
            problem.successor_states(&state),
            problem.successor_states(&state)
        );
    }

    #[test]
    fn actions_cost_counts_steps() {
        let problem = tiny_maze_problem();
        assert_approx_eq!(problem.actions_cost(&[Direction::South; 4]), 4.);
        assert_approx_eq!(problem.actions_cost(&[]), 0.);
    }

    #[test]
    fn actions_cost_of_walking_into_a_wall_is_illegal() {
        let problem = tiny_maze_problem();
        assert_eq!(
            problem.actions_cost(&[Direction::South, Direction::East]),
            ILLEGAL_COST
        );
    }

    #[test]
    fn custom_cost_functions() {
        let layout = Layout::from_text(TINY_MAZE_TEXT).unwrap();
        let problem = PositionSearchProblem::with_cost_fn(
            layout.walls,
            Position::new(1, 5),
            Position::new(3, 5),
            stay_west_cost,
        );
        assert_approx_eq!(
            problem.actions_cost(&[Direction::East, Direction::East]),
            4. + 8.
        );
        assert_approx_eq!(stay_east_cost(Position::new(2, 0)), 0.25);
    }
}
