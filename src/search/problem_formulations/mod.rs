mod any_food_problem;
mod closest_dot;
mod corners_problem;
mod food_problem;
mod position_problem;

pub use any_food_problem::AnyFoodSearchProblem;
pub use closest_dot::ClosestDotSearch;
pub use corners_problem::{CornersProblem, CornersState};
pub use food_problem::{FoodSearchProblem, FoodState};
pub use position_problem::{
    stay_east_cost, stay_west_cost, unit_cost, CostFn, PositionSearchProblem,
};
