use crate::graph::{Cost, NodeId};

/// Reasons an edge insertion is rejected.
///
/// A rejected insertion never modifies the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EdgeError {
    /// Both endpoints are the same node.
    #[error("edge {node} -> {node} is a self-loop")]
    SelfLoop { node: NodeId },
    /// An endpoint is not in `0..node_count`.
    #[error("node {node} is out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: NodeId, node_count: usize },
    /// Weights must be non-negative.
    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight { from: NodeId, to: NodeId, weight: Cost },
}
