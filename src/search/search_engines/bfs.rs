//! Breadth first search

use crate::search::{
    frontier::Queue,
    search_engines::{graph_search::graph_search, SearchEngine, SearchResult},
    SearchProblem, SearchStatistics,
};
use ordered_float::OrderedFloat;

#[derive(Debug, Clone, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for BFS {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        graph_search(problem, &mut Queue::new(), |_, _, _| OrderedFloat(0.))
    }
}
