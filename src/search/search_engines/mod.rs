mod astar;
mod bfs;
mod dfs;
mod graph_search;
mod search_engine;
mod ucs;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use search_engine::{
    a_star_search, breadth_first_search, depth_first_search, uniform_cost_search, SearchEngine,
    SearchEngineName, SearchResult,
};
pub use ucs::UCS;
