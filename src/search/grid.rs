//! Grid primitives shared by the search problems, the game-state
//! collaborators and the gridworld MDP: positions, compass directions, a
//! dense two dimensional [`Grid`] and an in-memory maze [`Layout`].

use crate::error::LayoutError;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter};

/// A cell of the grid. `y` grows upwards, so `(0, 0)` is the bottom left
/// corner of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position reached by moving one step in `direction`. Moving with
    /// [`Direction::Stop`] returns the position itself.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Deserialize,
    Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// The four moving directions, in the order successors are generated.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }

    /// The two directions at a right angle to this one.
    pub fn perpendicular(&self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::East, Direction::West],
            Direction::East | Direction::West => [Direction::North, Direction::South],
            Direction::Stop => [Direction::Stop, Direction::Stop],
        }
    }
}

/// A dense `width` x `height` grid addressed as `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        let (x, y) = (usize::try_from(position.x).ok()?, usize::try_from(position.y).ok()?);
        (x < self.width && y < self.height).then_some(x * self.height + y)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    /// Returns `None` for positions outside the grid.
    pub fn get(&self, position: Position) -> Option<&T> {
        self.index(position).map(|index| &self.cells[index])
    }

    /// # Panics
    ///
    /// Panics if `position` lies outside the grid.
    pub fn set(&mut self, position: Position, value: T) {
        let index = self
            .index(position)
            .unwrap_or_else(|| panic!("Position {} is outside the grid", position));
        self.cells[index] = value;
    }

    /// All positions of the grid, column by column.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        iproduct!(0..self.width, 0..self.height).map(|(x, y)| Position::new(x as i32, y as i32))
    }
}

impl Grid<bool> {
    /// Positions holding `true`, column by column.
    pub fn as_list(&self) -> Vec<Position> {
        self.positions()
            .filter(|&position| self.is_set(position))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Whether `position` holds `true`. Positions outside the grid read as
    /// `false`.
    pub fn is_set(&self, position: Position) -> bool {
        self.get(position).copied().unwrap_or(false)
    }

    /// Read as a wall grid: positions outside the grid block movement too.
    pub fn is_blocked(&self, position: Position) -> bool {
        !self.contains(position) || self.is_set(position)
    }
}

/// An in-memory maze: walls, food, capsules and agent start positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub walls: Grid<bool>,
    pub food: Grid<bool>,
    pub capsules: Vec<Position>,
    pub agent_start: Option<Position>,
    pub ghost_starts: Vec<Position>,
}

impl Layout {
    /// Parse a layout from its textual form. The first line is the top row:
    ///
    /// - `%` wall
    /// - `.` food
    /// - `o` capsule
    /// - `P` agent start
    /// - `G` ghost start
    /// - ` ` or `_` empty cell, including trailing ones
    pub fn from_text(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let height = rows.len();
        let width = rows[0].chars().count();
        let mut walls = Grid::new(width, height, false);
        let mut food = Grid::new(width, height, false);
        let mut capsules = vec![];
        let mut agent_start = None;
        let mut ghost_starts = vec![];

        for (line, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(LayoutError::Ragged {
                    line: line + 1,
                    expected: width,
                    found: row.chars().count(),
                });
            }
            let y = (height - 1 - line) as i32;
            for (x, ch) in row.chars().enumerate() {
                let position = Position::new(x as i32, y);
                match ch {
                    '%' => walls.set(position, true),
                    '.' => food.set(position, true),
                    'o' => capsules.push(position),
                    'P' => agent_start = Some(position),
                    'G' => ghost_starts.push(position),
                    ' ' | '_' => {}
                    _ => {
                        return Err(LayoutError::UnknownCharacter {
                            ch,
                            line: line + 1,
                            column: x + 1,
                        })
                    }
                }
            }
        }

        Ok(Self {
            walls,
            food,
            capsules,
            agent_start,
            ghost_starts,
        })
    }

    pub fn width(&self) -> usize {
        self.walls.width()
    }

    pub fn height(&self) -> usize {
        self.walls.height()
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.walls.is_blocked(position)
    }
}
