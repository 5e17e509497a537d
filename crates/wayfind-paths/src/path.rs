use std::fmt;

use wayfind_graph::{Cost, Edge, NodeId};

use crate::traits::Network;

/// A route found by the search: node indices from source to target inclusive,
/// plus its total cost.
///
/// A `Path` always holds at least one node. A search from a node to itself
/// yields the single-node path with cost 0.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPath")
)]
pub struct Path {
    nodes: Vec<NodeId>,
    cost: Cost,
}

impl Path {
    pub(crate) fn new(nodes: Vec<NodeId>, cost: Cost) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes, cost }
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Total weight of the edges along the path.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    #[inline]
    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    #[inline]
    pub fn end(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes, endpoints included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges traversed.
    #[inline]
    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

/// Unchecked wire form of [`Path`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPath {
    nodes: Vec<NodeId>,
    cost: Cost,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPath> for Path {
    type Error = &'static str;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        if raw.nodes.is_empty() {
            return Err("path must contain at least one node");
        }
        Ok(Self::new(raw.nodes, raw.cost))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, " (cost {})", self.cost)
    }
}

impl IntoIterator for Path {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Sum the edge weights along `nodes`.
///
/// Returns `None` if a consecutive pair has no edge or the sum overflows. An
/// empty or single-node sequence costs 0.
pub fn path_cost<N: Network>(net: &N, nodes: &[NodeId]) -> Option<Cost> {
    let mut buf: Vec<Edge> = Vec::with_capacity(8);
    let mut total: Cost = 0;
    for pair in nodes.windows(2) {
        buf.clear();
        net.neighbors(pair[0], &mut buf);
        let edge = buf.iter().find(|e| e.to == pair[1])?;
        total = total.checked_add(edge.weight)?;
    }
    Some(total)
}
