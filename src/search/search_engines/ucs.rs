//! Uniform cost search

use crate::search::{
    frontier::PriorityFrontier,
    search_engines::{graph_search::graph_search, SearchEngine, SearchResult},
    SearchProblem, SearchStatistics,
};

#[derive(Debug, Clone, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for UCS {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        graph_search(problem, &mut PriorityFrontier::new(), |_, g, _| g)
    }
}
