use std::fmt;

use crate::EdgeError;

/// Dense node index in `0..node_count`.
pub type NodeId = usize;

/// Edge weight and accumulated path cost.
pub type Cost = i32;

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// An outgoing edge, stored in the adjacency list of its source node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: NodeId,
    pub weight: Cost,
}

impl Edge {
    #[inline]
    pub const fn new(to: NodeId, weight: Cost) -> Self {
        Self { to, weight }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-> {} ({})", self.to, self.weight)
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Weighted directed graph over a fixed set of nodes.
///
/// Each node owns its outgoing edges in insertion order. There is at most one
/// edge per ordered pair `(from, to)`; self-loops and negative weights are
/// rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Create a graph and insert every edge with [`set_edge`](Self::set_edge).
    ///
    /// Stops at the first invalid edge and returns its error.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, EdgeError>
    where
        I: IntoIterator<Item = (NodeId, NodeId, Cost)>,
    {
        let mut graph = Self::new(node_count);
        for (from, to, weight) in edges {
            graph.set_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Like [`from_edges`](Self::from_edges), but keeps going past invalid
    /// edges and hands them back to the caller.
    pub fn from_edges_lossy<I>(node_count: usize, edges: I) -> (Self, Vec<EdgeError>)
    where
        I: IntoIterator<Item = (NodeId, NodeId, Cost)>,
    {
        let mut graph = Self::new(node_count);
        let mut rejected = Vec::new();
        for (from, to, weight) in edges {
            if let Err(e) = graph.set_edge(from, to, weight) {
                rejected.push(e);
            }
        }
        (graph, rejected)
    }

    /// Insert the edge `from -> to`, or overwrite its weight if it exists.
    ///
    /// Returns the previous weight when an existing edge was updated. On error
    /// the graph is left unchanged.
    pub fn set_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: Cost,
    ) -> Result<Option<Cost>, EdgeError> {
        if let Err(e) = self.validate(from, to, weight) {
            log::warn!("rejected edge {from} -> {to} with weight {weight}: {e}");
            return Err(e);
        }

        let list = &mut self.adjacency[from];
        match list.iter_mut().find(|e| e.to == to) {
            Some(edge) => Ok(Some(std::mem::replace(&mut edge.weight, weight))),
            None => {
                list.push(Edge::new(to, weight));
                self.edge_count += 1;
                Ok(None)
            }
        }
    }

    /// Insert `a -> b` and `b -> a` with the same weight.
    ///
    /// Both directions are validated before either is applied.
    pub fn set_undirected(&mut self, a: NodeId, b: NodeId, weight: Cost) -> Result<(), EdgeError> {
        self.validate(a, b, weight)?;
        self.set_edge(a, b, weight)?;
        self.set_edge(b, a, weight)?;
        Ok(())
    }

    /// Check an edge against the insertion rules without applying it.
    ///
    /// Rules are checked in order: self-loop, `from` in range, `to` in range,
    /// non-negative weight.
    pub fn validate(&self, from: NodeId, to: NodeId, weight: Cost) -> Result<(), EdgeError> {
        if from == to {
            return Err(EdgeError::SelfLoop { node: from });
        }
        for node in [from, to] {
            if !self.contains(node) {
                return Err(EdgeError::NodeOutOfRange {
                    node,
                    node_count: self.node_count(),
                });
            }
        }
        if weight < 0 {
            return Err(EdgeError::NegativeWeight { from, to, weight });
        }
        Ok(())
    }

    /// Outgoing edges of `node` in insertion order.
    ///
    /// Out-of-range nodes have no edges.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        self.neighbors(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
    }

    /// Whether `node` is a valid index for this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All edges as `(from, to, weight)`, by source node then insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Cost)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, list)| list.iter().map(move |e| (from, e.to, e.weight)))
    }
}
