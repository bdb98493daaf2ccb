use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Every feature a linear evaluator can produce. Configuration files and
/// logs refer to features by their kebab-case name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Deserialize,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// Team score after the move
    SuccessorScore,
    /// Maze distance to the closest food left to eat
    DistanceToFood,
    /// Number of visible defenders that can eat us
    NumGuards,
    /// Maze distance to the closest visible defender
    GuardDistance,
    /// Maze distance to the closest capsule left to eat
    DistanceToCapsule,
    /// Maze distance to the closest teammate
    AllyDistance,
    /// Maze distance to the closest scared defender
    ScaredDistance,
    /// 1 while on our own side of the board
    OnDefense,
    /// Number of visible opponents on our side
    NumInvaders,
    /// Maze distance to the closest visible invader
    InvaderDistance,
    /// Maze distance to the closest visible opponent
    EnemyDistance,
    /// 1 if the action is to stop
    Stop,
    /// 1 if the action reverses the current heading
    Reverse,
    /// `1 - 1 / d` for the Manhattan distance `d` to the closest ghost
    GhostAvoidance,
    /// `1 / d` for the maze distance `d` to the closest food
    FoodAttraction,
    /// Game score
    Score,
}
