use wayfind_graph::{Edge, Graph, NodeId};

/// A weighted directed topology that can be searched.
pub trait Network {
    /// Number of nodes; valid node indices are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Append the outgoing edges of `node` into `buf`. The caller clears
    /// `buf` before calling. Weights must be non-negative.
    fn neighbors(&self, node: NodeId, buf: &mut Vec<Edge>);
}

impl Network for Graph {
    #[inline]
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    #[inline]
    fn neighbors(&self, node: NodeId, buf: &mut Vec<Edge>) {
        buf.extend_from_slice(Graph::neighbors(self, node));
    }
}

impl<N: Network + ?Sized> Network for &N {
    #[inline]
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    #[inline]
    fn neighbors(&self, node: NodeId, buf: &mut Vec<Edge>) {
        (**self).neighbors(node, buf)
    }
}
