//! Distances on the grid. [`manhattan`] is the cheap estimate, the maze
//! distance is the true shortest path length respecting walls.

use crate::search::{
    grid::{Grid, Position},
    problem_formulations::PositionSearchProblem,
    search_engines::{SearchEngine, BFS},
};
use lru::LruCache;
use std::{cell::RefCell, fmt::Debug, num::NonZeroUsize};
use tracing::trace;

pub fn manhattan(a: Position, b: Position) -> usize {
    a.x.abs_diff(b.x) as usize + a.y.abs_diff(b.y) as usize
}

pub fn euclidean(a: Position, b: Position) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// The target with the smallest Manhattan distance from `from`. When several
/// targets tie, the one appearing last wins.
pub fn nearest_by_manhattan(
    from: Position,
    targets: impl IntoIterator<Item = Position>,
) -> Option<Position> {
    targets
        .into_iter()
        .fold(None, |nearest: Option<(Position, usize)>, target| {
            let distance = manhattan(from, target);
            match nearest {
                Some((_, best)) if distance > best => nearest,
                _ => Some((target, distance)),
            }
        })
        .map(|(target, _)| target)
}

/// The distance collaborator consumed by heuristics and evaluation functions.
pub trait DistanceOracle: Debug {
    fn manhattan(&self, a: Position, b: Position) -> usize {
        manhattan(a, b)
    }

    /// Length of the shortest path between `a` and `b`, or `None` when no
    /// path exists (including when either end is a wall).
    fn maze_distance(&self, a: Position, b: Position) -> Option<usize>;
}

const DEFAULT_CACHE_SIZE: usize = 4096;

/// Maze distances answered by breadth-first search over the walls, memoised in
/// an LRU cache. Distances are symmetric so both orderings share an entry.
#[derive(Debug)]
pub struct MazeDistances {
    walls: Grid<bool>,
    cache: RefCell<LruCache<(Position, Position), Option<usize>>>,
}

impl MazeDistances {
    pub fn new(walls: Grid<bool>) -> Self {
        Self::with_capacity(walls, DEFAULT_CACHE_SIZE)
    }

    pub fn with_capacity(walls: Grid<bool>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::MIN.saturating_add(capacity.saturating_sub(1));
        Self {
            walls,
            cache: RefCell::new(LruCache::new(capacity)),
        }
    }

    pub fn walls(&self) -> &Grid<bool> {
        &self.walls
    }

    fn is_open(&self, position: Position) -> bool {
        !self.walls.is_blocked(position)
    }

    fn compute(&self, a: Position, b: Position) -> Option<usize> {
        if !self.is_open(a) || !self.is_open(b) {
            return None;
        }
        let problem = PositionSearchProblem::new(self.walls.clone(), a, b);
        let (result, _) = BFS::new().search(&problem);
        result.into_result().ok().map(|path| path.len())
    }
}

impl DistanceOracle for MazeDistances {
    fn maze_distance(&self, a: Position, b: Position) -> Option<usize> {
        let key = if a <= b { (a, b) } else { (b, a) };
        if let Some(&distance) = self.cache.borrow_mut().get(&key) {
            return distance;
        }
        let distance = self.compute(a, b);
        trace!(from = %a, to = %b, ?distance, "computed maze distance");
        self.cache.borrow_mut().put(key, distance);
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::grid::Layout;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Position::new(1, 1), Position::new(4, 5)), 7);
        assert_eq!(manhattan(Position::new(4, 5), Position::new(1, 1)), 7);
        assert_eq!(manhattan(Position::new(2, 2), Position::new(2, 2)), 0);
    }

    #[test]
    fn nearest_prefers_the_last_tied_target() {
        let from = Position::new(2, 2);
        let targets = [
            Position::new(5, 5),
            Position::new(2, 4),
            Position::new(0, 2),
            Position::new(4, 4),
        ];
        assert_eq!(
            nearest_by_manhattan(from, targets),
            Some(Position::new(0, 2))
        );
        assert_eq!(nearest_by_manhattan(from, []), None);
    }

    #[test]
    fn euclidean_distance() {
        assert_approx_eq!(euclidean(Position::new(0, 0), Position::new(3, 4)), 5.0);
    }

    #[test]
    fn maze_distance_respects_walls() {
        let layout = Layout::from_text(DETOUR_MAZE_TEXT).unwrap();
        let distances = MazeDistances::new(layout.walls.clone());
        let start = Position::new(1, 1);
        let goal = Position::new(3, 1);
        assert_eq!(distances.manhattan(start, goal), 2);
        assert_eq!(distances.maze_distance(start, goal), Some(6));
        // second lookup is served from the cache, in either order
        assert_eq!(distances.maze_distance(goal, start), Some(6));
    }

    #[test]
    fn maze_distance_to_self_is_zero() {
        let layout = Layout::from_text(TINY_MAZE_TEXT).unwrap();
        let distances = MazeDistances::new(layout.walls.clone());
        let position = Position::new(1, 5);
        assert_eq!(distances.maze_distance(position, position), Some(0));
    }

    #[test]
    fn maze_distance_into_a_wall_is_none() {
        let layout = Layout::from_text(TINY_MAZE_TEXT).unwrap();
        let distances = MazeDistances::with_capacity(layout.walls.clone(), 0);
        assert_eq!(
            distances.maze_distance(Position::new(1, 5), Position::new(0, 0)),
            None
        );
    }
}
