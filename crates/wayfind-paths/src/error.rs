use wayfind_graph::NodeId;

/// Errors returned by [`PathFinder`](crate::PathFinder) queries.
///
/// Failing to find a path is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start or end node is not in `0..node_count`.
    #[error("node {node} is out of range (network has {node_count} nodes)")]
    NodeOutOfRange { node: NodeId, node_count: usize },
}
