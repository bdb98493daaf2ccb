//! Depth first search

use crate::search::{
    frontier::Stack,
    search_engines::{graph_search::graph_search, SearchEngine, SearchResult},
    SearchProblem, SearchStatistics,
};
use ordered_float::OrderedFloat;

#[derive(Debug, Clone, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for DFS {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        graph_search(problem, &mut Stack::new(), |_, _, _| OrderedFloat(0.))
    }
}
