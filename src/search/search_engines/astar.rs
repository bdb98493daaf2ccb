//! A* search

use crate::search::{
    frontier::PriorityFrontier,
    search_engines::{graph_search::graph_search, SearchEngine, SearchResult},
    Heuristic, SearchProblem, SearchStatistics,
};
use std::fmt;

/// A* orders the frontier by `g + h`. Plans are optimal only if the heuristic
/// is admissible and no cheaper route to an already queued state exists.
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<H> fmt::Debug for AStar<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AStar").finish_non_exhaustive()
    }
}

impl<P: SearchProblem, H: Heuristic<P>> SearchEngine<P> for AStar<H> {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        let heuristic = &mut self.heuristic;
        graph_search(
            problem,
            &mut PriorityFrontier::new(),
            |state, g, statistics| {
                let h = heuristic.evaluate(state, problem);
                statistics.register_heuristic_value(h);
                g + h
            },
        )
    }
}
