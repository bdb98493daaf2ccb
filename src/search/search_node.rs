use crate::search::HeuristicValue;
use ordered_float::Float;

/// Index of a node inside a [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node is in the closed list
    Closed,
}

/// A [`SearchNode`] is a node in the search tree. It contains information
/// about the state specific to the search, such as the accumulated path cost
/// and the parent node. Nodes form a tree through their parent ids; a state is
/// only ever given one node, so no back edges exist.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    /// Unique identifier of the node
    node_id: NodeId,
    /// Status of the node
    status: SearchNodeStatus,
    /// G-value of the node, i.e. the accumulated cost to reach this node.
    g: HeuristicValue,
    /// Action that led to this node, `None` for the root
    action: Option<A>,
    /// Parent node
    parent_id: NodeId,
}

impl<A> SearchNode<A> {
    /// Create a new search node with no parent. This should only be used for
    /// the root node of the search space. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            g: HeuristicValue::infinity(),
            action: None,
            parent_id: NO_NODE,
        }
    }

    /// Create a new search node with a parent. This should be used for all
    /// nodes that are not the root node.
    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId, action: A) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            g: HeuristicValue::infinity(),
            action: Some(action),
            parent_id,
        }
    }

    pub fn open(&mut self, g: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }
}
