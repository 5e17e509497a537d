use wayfind_graph::{Cost, Edge, NodeId};

use crate::options::UNREACHABLE;
use crate::path::Path;
use crate::traits::Network;

const NO_PARENT: usize = usize::MAX;

/// Working state of a single search: tentative distances, parent links and
/// the settled set. Allocated fresh per query.
pub(crate) struct Labels {
    pub(crate) distance: Vec<Cost>,
    pub(crate) parent: Vec<usize>,
    pub(crate) settled: Vec<bool>,
    nbuf: Vec<Edge>,
}

impl Labels {
    pub(crate) fn new(node_count: usize, start: NodeId) -> Self {
        let mut distance = vec![UNREACHABLE; node_count];
        distance[start] = 0;
        Self {
            distance,
            parent: vec![NO_PARENT; node_count],
            settled: vec![false; node_count],
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Relax every outgoing edge of `current`, calling `improved` for each
    /// node whose distance decreased.
    ///
    /// Candidates above `limit`, or that overflow, are skipped. Edges into
    /// settled nodes and negative-weight edges are never followed, so parent
    /// links always form a tree rooted at the start node.
    pub(crate) fn relax<N: Network>(
        &mut self,
        net: &N,
        current: NodeId,
        limit: Cost,
        mut improved: impl FnMut(NodeId, Cost),
    ) {
        let base = self.distance[current];
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        net.neighbors(current, &mut nbuf);

        for edge in nbuf.iter() {
            if edge.weight < 0 {
                log::warn!(
                    "ignoring negative-weight edge {current} -> {} ({})",
                    edge.to,
                    edge.weight
                );
                continue;
            }
            if self.settled.get(edge.to).copied().unwrap_or(true) {
                continue;
            }
            let Some(candidate) = base.checked_add(edge.weight) else {
                continue;
            };
            if candidate > limit {
                continue;
            }
            let Some(slot) = self.distance.get_mut(edge.to) else {
                continue;
            };
            if candidate < *slot {
                *slot = candidate;
                self.parent[edge.to] = current;
                improved(edge.to, candidate);
            }
        }

        self.nbuf = nbuf;
    }

    /// Follow parent links back from `end` and return the source-to-target
    /// path.
    pub(crate) fn path_to(&self, end: NodeId) -> Path {
        let mut nodes = Vec::new();
        let mut ci = end;
        while ci != NO_PARENT {
            nodes.push(ci);
            ci = self.parent[ci];
        }
        nodes.reverse();
        Path::new(nodes, self.distance[end])
    }

    pub(crate) fn into_distances(self) -> Vec<Cost> {
        self.distance
    }
}
