//! The search loop shared by every engine. Engines differ only in the
//! frontier they use and the priority they give a newly generated state.
//!
//! A state is marked visited when it is first inserted into the frontier, not
//! when it is expanded. Once queued it is never queued again, even if a
//! cheaper path to it turns up later, so UCS and A* may return a costlier
//! plan on graphs with several unequal routes to the same state.

use crate::search::{
    frontier::Frontier, search_engines::SearchResult, HeuristicValue, NodeId, SearchProblem,
    SearchSpace, SearchStatistics, Successor,
};
use ordered_float::OrderedFloat;

pub(super) fn graph_search<P, F, G>(
    problem: &P,
    frontier: &mut F,
    mut priority: G,
) -> (SearchResult<P::Action>, SearchStatistics)
where
    P: SearchProblem,
    F: Frontier<NodeId>,
    G: FnMut(&P::State, HeuristicValue, &mut SearchStatistics) -> HeuristicValue,
{
    let mut statistics = SearchStatistics::new();
    let initial_state = problem.starting_state();
    let root_priority = priority(&initial_state, OrderedFloat(0.), &mut statistics);
    let mut search_space = SearchSpace::new(initial_state);
    let root_node = search_space.get_root_node_mut();
    root_node.open(OrderedFloat(0.));
    frontier.push(root_node.get_node_id(), root_priority);

    while let Some(node_id) = frontier.pop() {
        let node = search_space.get_node_mut(node_id);
        node.close();
        let g_value = node.get_g();
        statistics.increment_expanded_nodes();

        let state = search_space.get_state(node_id);
        if problem.is_goal(state) {
            statistics.finalise_search();
            return (
                SearchResult::Success(search_space.extract_plan(node_id)),
                statistics,
            );
        }

        let successors = problem.successor_states(state);
        statistics.increment_generated_successors(successors.len());
        let mut new_nodes = 0;
        for Successor {
            state: child,
            action,
            cost,
        } in successors
        {
            if search_space.contains(&child) {
                continue;
            }
            let child_g = g_value + cost;
            let child_priority = priority(&child, child_g, &mut statistics);
            if let Some(child_id) = search_space.insert_if_new(child, action, node_id, child_g) {
                frontier.push(child_id, child_priority);
                new_nodes += 1;
            }
        }
        statistics.increment_generated_nodes(new_nodes);
    }

    statistics.finalise_search();
    (SearchResult::NoPathFound, statistics)
}
