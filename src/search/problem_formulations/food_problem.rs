use crate::search::{
    distance::{DistanceOracle, MazeDistances},
    grid::{Direction, Grid, Position},
    Cost, SearchProblem, Successor, ILLEGAL_COST,
};
use std::rc::Rc;

/// A position together with the food still left on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodState {
    pub position: Position,
    pub food: Grid<bool>,
}

/// Eat every food pellet.
#[derive(Debug, Clone)]
pub struct FoodSearchProblem {
    walls: Grid<bool>,
    start: FoodState,
    distances: Rc<dyn DistanceOracle>,
}

impl FoodSearchProblem {
    pub fn new(walls: Grid<bool>, food: Grid<bool>, start: Position) -> Self {
        let distances = Rc::new(MazeDistances::new(walls.clone()));
        Self::with_distances(walls, food, start, distances)
    }

    pub fn with_distances(
        walls: Grid<bool>,
        mut food: Grid<bool>,
        start: Position,
        distances: Rc<dyn DistanceOracle>,
    ) -> Self {
        if food.is_set(start) {
            food.set(start, false);
        }
        Self {
            walls,
            start: FoodState {
                position: start,
                food,
            },
            distances,
        }
    }

    pub fn distances(&self) -> &dyn DistanceOracle {
        self.distances.as_ref()
    }
}

impl SearchProblem for FoodSearchProblem {
    type State = FoodState;
    type Action = Direction;

    fn starting_state(&self) -> FoodState {
        self.start.clone()
    }

    fn is_goal(&self, state: &FoodState) -> bool {
        state.food.count() == 0
    }

    fn successor_states(&self, state: &FoodState) -> Vec<Successor<FoodState, Direction>> {
        Direction::CARDINAL
            .iter()
            .map(|&direction| (direction, state.position.step(direction)))
            .filter(|&(_, next)| !self.walls.is_blocked(next))
            .map(|(direction, next)| {
                let mut food = state.food.clone();
                if food.is_set(next) {
                    food.set(next, false);
                }
                let successor = FoodState {
                    position: next,
                    food,
                };
                Successor::new(successor, direction, 1.)
            })
            .collect()
    }

    fn actions_cost(&self, actions: &[Direction]) -> Cost {
        let mut position = self.start.position;
        for &action in actions {
            position = position.step(action);
            if self.walls.is_blocked(position) {
                return ILLEGAL_COST;
            }
        }
        actions.len() as Cost
    }
}
