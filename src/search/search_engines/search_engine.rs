use crate::{
    error::SearchError,
    search::{
        search_engines::{AStar, BFS, DFS, UCS},
        Heuristic, SearchProblem, SearchStatistics,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search was successful
    Success(Vec<A>),
    /// The frontier was exhausted without reaching a goal
    NoPathFound,
}

impl<A> SearchResult<A> {
    pub fn into_result(self) -> Result<Vec<A>, SearchError> {
        match self {
            SearchResult::Success(plan) => Ok(plan),
            SearchResult::NoPathFound => Err(SearchError::NoPathFound),
        }
    }
}

pub trait SearchEngine<P: SearchProblem> {
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Depth first search.")]
    Dfs,
    #[clap(help = "Breadth first search.")]
    Bfs,
    #[clap(help = "Uniform cost search.")]
    Ucs,
    #[clap(help = "A* search, the only engine using the heuristic.")]
    Astar,
}

impl SearchEngineName {
    pub fn create<P: SearchProblem + 'static>(
        &self,
        mut heuristic: Box<dyn Heuristic<P>>,
    ) -> Box<dyn SearchEngine<P>> {
        match self {
            SearchEngineName::Dfs => Box::new(DFS::new()),
            SearchEngineName::Bfs => Box::new(BFS::new()),
            SearchEngineName::Ucs => Box::new(UCS::new()),
            SearchEngineName::Astar => Box::new(AStar::new(
                move |state: &P::State, problem: &P| heuristic.evaluate(state, problem),
            )),
        }
    }
}

pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Result<Vec<P::Action>, SearchError> {
    DFS::new().search(problem).0.into_result()
}

pub fn breadth_first_search<P: SearchProblem>(
    problem: &P,
) -> Result<Vec<P::Action>, SearchError> {
    BFS::new().search(problem).0.into_result()
}

pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Result<Vec<P::Action>, SearchError> {
    UCS::new().search(problem).0.into_result()
}

pub fn a_star_search<P: SearchProblem>(
    problem: &P,
    heuristic: impl Heuristic<P>,
) -> Result<Vec<P::Action>, SearchError> {
    AStar::new(heuristic).search(problem).0.into_result()
}
