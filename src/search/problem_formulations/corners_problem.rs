use crate::search::{
    distance::{DistanceOracle, MazeDistances},
    grid::{Direction, Grid, Position},
    Cost, SearchProblem, Successor, ILLEGAL_COST,
};
use std::rc::Rc;
use tracing::warn;

/// A position together with which of the four corners have been visited, in
/// the order of [`CornersProblem::corners`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CornersState {
    pub position: Position,
    pub visited: [bool; 4],
}

/// Visit the four inner corners of the maze.
#[derive(Debug, Clone)]
pub struct CornersProblem {
    walls: Grid<bool>,
    start: Position,
    corners: [Position; 4],
    distances: Rc<dyn DistanceOracle>,
}

impl CornersProblem {
    pub fn new(walls: Grid<bool>, food: &Grid<bool>, start: Position) -> Self {
        let distances = Rc::new(MazeDistances::new(walls.clone()));
        Self::with_distances(walls, food, start, distances)
    }

    pub fn with_distances(
        walls: Grid<bool>,
        food: &Grid<bool>,
        start: Position,
        distances: Rc<dyn DistanceOracle>,
    ) -> Self {
        let top = walls.height() as i32 - 2;
        let right = walls.width() as i32 - 2;
        let corners = [
            Position::new(1, 1),
            Position::new(1, top),
            Position::new(right, 1),
            Position::new(right, top),
        ];
        for corner in corners {
            if !food.is_set(corner) {
                warn!(corner = %corner, "no food in corner");
            }
        }
        Self {
            walls,
            start,
            corners,
            distances,
        }
    }

    pub fn corners(&self) -> &[Position; 4] {
        &self.corners
    }

    pub fn distances(&self) -> &dyn DistanceOracle {
        self.distances.as_ref()
    }

    fn visit(&self, position: Position, mut visited: [bool; 4]) -> [bool; 4] {
        for (flag, &corner) in visited.iter_mut().zip(self.corners.iter()) {
            *flag |= corner == position;
        }
        visited
    }
}

impl SearchProblem for CornersProblem {
    type State = CornersState;
    type Action = Direction;

    /// The start position counts as visited if it is a corner.
    fn starting_state(&self) -> CornersState {
        CornersState {
            position: self.start,
            visited: self.visit(self.start, [false; 4]),
        }
    }

    fn is_goal(&self, state: &CornersState) -> bool {
        state.visited.iter().all(|&visited| visited)
    }

    fn successor_states(&self, state: &CornersState) -> Vec<Successor<CornersState, Direction>> {
        Direction::CARDINAL
            .iter()
            .map(|&direction| (direction, state.position.step(direction)))
            .filter(|&(_, next)| !self.walls.is_blocked(next))
            .map(|(direction, next)| {
                let successor = CornersState {
                    position: next,
                    visited: self.visit(next, state.visited),
                };
                Successor::new(successor, direction, 1.)
            })
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
