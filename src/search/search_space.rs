use crate::search::{HeuristicValue, NodeId, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};
use std::{collections::HashMap, hash::Hash};

/// A [`SearchSpace`] owns the nodes and states of one search call. A state is
/// registered the first time it is inserted and never again, which makes the
/// registered set the visited set of a graph search: it only grows, and
/// membership alone is enough to skip a state.
#[derive(Debug)]
pub struct SearchSpace<S: Hash + Eq, A> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
    registered_states: HashMap<S, NodeId>,
}

impl<S: Hash + Eq + Clone, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_states = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_states.insert(initial_state.clone(), root_node_id);
        nodes.push(SearchNode::new_without_parent(root_node_id));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_states,
        }
    }

    pub fn contains(&self, state: &S) -> bool {
        self.registered_states.contains_key(state)
    }

    /// Register `state` as a child of `parent_id` and open it with the given
    /// g-value. Returns `None` if the state was registered before, in which
    /// case nothing changes, even if `g` is cheaper than the recorded cost.
    pub fn insert_if_new(
        &mut self,
        state: S,
        action: A,
        parent_id: NodeId,
        g: HeuristicValue,
    ) -> Option<NodeId> {
        if self.registered_states.contains_key(&state) {
            return None;
        }
        let node_id = NodeId::new(self.nodes.len());
        let mut node = SearchNode::new_with_parent(node_id, parent_id, action);
        node.open(g);
        self.nodes.push(node);
        self.registered_states.insert(state.clone(), node_id);
        self.states.push(state);
        Some(node_id)
    }

    pub fn root_node_id(&self) -> NodeId {
        self.root_node_id
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode<A> {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<A> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    /// Walk the parent ids from `goal_id` back to the root and return the
    /// actions in start-to-goal order. The root carries no action.
    pub fn extract_plan(&self, goal_id: NodeId) -> Vec<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while NO_NODE != current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                steps.push(action.clone());
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        steps
    }

    pub fn len(&self) -> usize {
        self.registered_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_states.is_empty()
    }
}
