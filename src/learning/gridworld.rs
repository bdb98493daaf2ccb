//! The gridworld MDP: an agent walks a grid of open cells, walls and exit
//! cells. Moves succeed with probability `1 - noise` and otherwise slip to
//! one of the two perpendicular directions. From an exit cell the only
//! action is [`GridAction::Exit`], which pays the cell's value and ends in
//! the single absorbing [`GridState::Terminal`].

use crate::{
    error::LayoutError,
    learning::Mdp,
    search::grid::{Direction, Grid, Position},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GridState {
    Cell(Position),
    Terminal,
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridState::Cell(position) => write!(f, "{}", position),
            GridState::Terminal => write!(f, "terminal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum GridAction {
    North,
    South,
    East,
    West,
    Exit,
}

impl GridAction {
    const MOVES: [GridAction; 4] = [
        GridAction::North,
        GridAction::South,
        GridAction::East,
        GridAction::West,
    ];

    fn direction(&self) -> Option<Direction> {
        match self {
            GridAction::North => Some(Direction::North),
            GridAction::South => Some(Direction::South),
            GridAction::East => Some(Direction::East),
            GridAction::West => Some(Direction::West),
            GridAction::Exit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Open,
    Wall,
    Exit(f64),
}

/// Discount, noise and living reward that steer value iteration towards a
/// particular policy on the bridge and discount grids.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Tuning {
    pub discount: f64,
    pub noise: f64,
    pub living_reward: f64,
}

impl Tuning {
    /// Bridge grid: cross to the far exit.
    pub const CROSS_BRIDGE: Tuning = Tuning::new(0.9, 0.0, 0.0);
    /// Discount grid: close exit, along the cliff.
    pub const CLOSE_EXIT_RISKING_CLIFF: Tuning = Tuning::new(0.9, 0.2, -2.0);
    /// Discount grid: close exit, away from the cliff.
    pub const CLOSE_EXIT_AVOIDING_CLIFF: Tuning = Tuning::new(0.5, 0.2, -2.0);
    /// Discount grid: distant exit, along the cliff.
    pub const DISTANT_EXIT_RISKING_CLIFF: Tuning = Tuning::new(0.9, 0.0, -1.0);
    /// Discount grid: distant exit, away from the cliff.
    pub const DISTANT_EXIT_AVOIDING_CLIFF: Tuning = Tuning::new(0.9, 0.2, 0.0);
    /// Discount grid: never leave.
    pub const AVOID_EXITS: Tuning = Tuning::new(0.9, 0.2, 10.0);

    pub const fn new(discount: f64, noise: f64, living_reward: f64) -> Self {
        Self {
            discount,
            noise,
            living_reward,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridWorld {
    cells: Grid<Cell>,
    start: Position,
    noise: f64,
    living_reward: f64,
}

pub const DEFAULT_NOISE: f64 = 0.2;

pub const BOOK_GRID: &str = "
.  .  .  1
.  #  . -1
S  .  .  .
";

pub const BRIDGE_GRID: &str = "
#  -100 -100 -100 -100 -100  #
1   S    .    .    .    .    10
#  -100 -100 -100 -100 -100  #
";

pub const DISCOUNT_GRID: &str = "
.    .    .    .    .
.    #    .    .    .
.    #    1    #    10
S    .    .    .    .
-10  -10  -10  -10  -10
";

pub const CLIFF_GRID: &str = "
.     .     .     .     .
8     S     .     .     10
-100  -100  -100  -100  -100
";

impl GridWorld {
    /// Parse a grid given as whitespace separated cells, top row first:
    ///
    /// - `.` open cell
    /// - `#` wall
    /// - `S` the start, an open cell
    /// - a number is an exit paying that amount
    pub fn from_text(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<&str>> = text
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let height = rows.len();
        let width = rows[0].len();
        let mut cells = Grid::new(width, height, Cell::Open);
        let mut start = None;
        for (line, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LayoutError::Ragged {
                    line: line + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            let y = (height - 1 - line) as i32;
            for (x, &token) in row.iter().enumerate() {
                let position = Position::new(x as i32, y);
                let cell = match token {
                    "." | "_" => Cell::Open,
                    "#" => Cell::Wall,
                    "S" => {
                        start = Some(position);
                        Cell::Open
                    }
                    _ => token.parse().map(Cell::Exit).map_err(|_| {
                        LayoutError::UnknownToken {
                            token: token.to_string(),
                            line: line + 1,
                            column: x + 1,
                        }
                    })?,
                };
                cells.set(position, cell);
            }
        }

        Ok(Self {
            cells,
            start: start.ok_or(LayoutError::MissingStart)?,
            noise: DEFAULT_NOISE,
            living_reward: 0.,
        })
    }

    fn preset(text: &str) -> Self {
        Self::from_text(text).unwrap_or_else(|error| panic!("Invalid built-in grid: {}", error))
    }

    pub fn book() -> Self {
        Self::preset(BOOK_GRID)
    }

    pub fn bridge() -> Self {
        Self::preset(BRIDGE_GRID)
    }

    pub fn discount() -> Self {
        Self::preset(DISCOUNT_GRID)
    }

    pub fn cliff() -> Self {
        Self::preset(CLIFF_GRID)
    }

    pub fn with_noise(self, noise: f64) -> Self {
        Self { noise, ..self }
    }

    pub fn with_living_reward(self, living_reward: f64) -> Self {
        Self {
            living_reward,
            ..self
        }
    }

    /// Apply the noise and living reward of `tuning`. The discount belongs to
    /// the solver.
    pub fn tuned(self, tuning: Tuning) -> Self {
        self.with_noise(tuning.noise)
            .with_living_reward(tuning.living_reward)
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn noise(&self) -> f64 {
        self.noise
    }

    pub fn living_reward(&self) -> f64 {
        self.living_reward
    }

    pub fn is_wall(&self, position: Position) -> bool {
        matches!(self.cells.get(position), None | Some(Cell::Wall))
    }

    /// The payoff of an exit cell.
    pub fn exit_value(&self, position: Position) -> Option<f64> {
        match self.cells.get(position) {
            Some(&Cell::Exit(value)) => Some(value),
            _ => None,
        }
    }

    /// Where a move in `direction` ends up; blocked moves stay put.
    fn destination(&self, from: Position, direction: Direction) -> Position {
        let to = from.step(direction);
        if self.is_wall(to) {
            from
        } else {
            to
        }
    }
}

impl Mdp for GridWorld {
    type State = GridState;
    type Action = GridAction;

    fn states(&self) -> Vec<GridState> {
        let mut states: Vec<GridState> = self
            .cells
            .positions()
            .filter(|&position| !self.is_wall(position))
            .map(GridState::Cell)
            .collect();
        states.push(GridState::Terminal);
        states
    }

    fn start_state(&self) -> GridState {
        GridState::Cell(self.start)
    }

    fn possible_actions(&self, state: &GridState) -> Vec<GridAction> {
        match *state {
            GridState::Terminal => vec![],
            GridState::Cell(position) if self.exit_value(position).is_some() => {
                vec![GridAction::Exit]
            }
            GridState::Cell(_) => GridAction::MOVES.to_vec(),
        }
    }

    /// Outcomes with probability zero are left out, outcomes landing on the
    /// same cell are merged.
    fn transition_states_and_probs(
        &self,
        state: &GridState,
        action: &GridAction,
    ) -> Vec<(GridState, f64)> {
        let GridState::Cell(position) = *state else {
            return vec![];
        };
        let Some(direction) = action.direction() else {
            return vec![(GridState::Terminal, 1.)];
        };

        let [left, right] = direction.perpendicular();
        let outcomes = [
            (direction, 1. - self.noise),
            (left, self.noise / 2.),
            (right, self.noise / 2.),
        ];
        let mut transitions: Vec<(GridState, f64)> = vec![];
        for (direction, probability) in outcomes {
            if probability <= 0. {
                continue;
            }
            let next = GridState::Cell(self.destination(position, direction));
            match transitions.iter_mut().find(|(state, _)| *state == next) {
                Some((_, total)) => *total += probability,
                None => transitions.push((next, probability)),
            }
        }
        transitions
    }

    fn reward(&self, state: &GridState, _action: &GridAction, _next_state: &GridState) -> f64 {
        match *state {
            GridState::Terminal => 0.,
            GridState::Cell(position) => self.exit_value(position).unwrap_or(self.living_reward),
        }
    }

    fn is_terminal(&self, state: &GridState) -> bool {
        *state == GridState::Terminal
    }
}
