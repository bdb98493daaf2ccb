use crate::{
    error::SearchError,
    search::{
        grid::{Direction, Grid, Position},
        problem_formulations::AnyFoodSearchProblem,
        search_engines::breadth_first_search,
    },
};
use tracing::{debug, info};

/// Eats all the food greedily: walk to the closest remaining pellet with
/// breadth-first search, then repeat from there. Fast, but not optimal.
#[derive(Debug, Clone)]
pub struct ClosestDotSearch {
    walls: Grid<bool>,
    food: Grid<bool>,
    start: Position,
}

impl ClosestDotSearch {
    pub fn new(walls: Grid<bool>, mut food: Grid<bool>, start: Position) -> Self {
        if food.is_set(start) {
            food.set(start, false);
        }
        Self { walls, food, start }
    }

    /// The path to the nearest food from `position`, given what is left.
    pub fn find_path_to_closest_dot(
        &self,
        position: Position,
        food: &Grid<bool>,
    ) -> Result<Vec<Direction>, SearchError> {
        let problem = AnyFoodSearchProblem::new(self.walls.clone(), food.clone(), position);
        breadth_first_search(&problem)
    }

    /// Concatenated segments until no food remains. Every segment is replayed
    /// against the walls before the next one is planned.
    pub fn find_path(&self) -> Result<Vec<Direction>, SearchError> {
        let mut actions = vec![];
        let mut position = self.start;
        let mut food = self.food.clone();

        while food.count() > 0 {
            let segment = self.find_path_to_closest_dot(position, &food)?;
            debug!(from = %position, steps = segment.len(), "planned segment");
            for action in segment {
                let next = position.step(action);
                if self.walls.is_blocked(next) {
                    return Err(SearchError::IllegalMove {
                        action: action.to_string(),
                        state: position.to_string(),
                    });
                }
                position = next;
                if food.is_set(position) {
                    food.set(position, false);
                }
                actions.push(action);
            }
        }

        info!(path_cost = actions.len(), "closest dot search finished");
        Ok(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::grid::Layout;
    use crate::test_utils::*;

    #[test]
    fn eats_all_the_food() {
        let layout = Layout::from_text(OPEN_CORNERS_TEXT).unwrap();
        let start = layout.agent_start.unwrap();
        let search = ClosestDotSearch::new(layout.walls.clone(), layout.food.clone(), start);
        let path = search.find_path().unwrap();

        let mut position = start;
        let mut food = layout.food.clone();
        for action in &path {
            position = position.step(*action);
            assert!(!layout.is_wall(position));
            food.set(position, false);
        }
        assert_eq!(food.count(), 0);
    }

    #[test]
    fn unreachable_food_fails() {
        let layout = Layout::from_text(WALLED_OFF_FOOD_TEXT).unwrap();
        let search = ClosestDotSearch::new(
            layout.walls.clone(),
            layout.food.clone(),
            layout.agent_start.unwrap(),
        );
        assert!(matches!(search.find_path(), Err(SearchError::NoPathFound)));
    }
}
