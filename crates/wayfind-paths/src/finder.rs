use wayfind_graph::{Cost, NodeId};

use crate::error::SearchError;
use crate::labels::Labels;
use crate::options::{SearchOptions, Strategy};
use crate::path::Path;
use crate::traits::Network;
use crate::{heap, scan};

/// Single-source shortest-path search with an inclusive cost ceiling.
///
/// A `PathFinder` only carries its [`SearchOptions`]; each query allocates
/// fresh working state, so one finder can serve any number of networks and
/// concurrent readers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PathFinder {
    options: SearchOptions,
}

impl PathFinder {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Finder with the default strategy and the given ceiling.
    pub fn with_limit(limit: Cost) -> Self {
        Self::new(SearchOptions::default().with_limit(limit))
    }

    #[inline]
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Compute the lowest-cost path from `start` to `end`.
    ///
    /// Returns `Ok(None)` when `end` cannot be reached without exceeding the
    /// ceiling. Among equal-cost candidates, the node with the lowest index is
    /// settled first, which makes the returned path deterministic.
    pub fn find_path<N: Network>(
        &self,
        net: &N,
        start: NodeId,
        end: NodeId,
    ) -> Result<Option<Path>, SearchError> {
        check_node(net, start)?;
        check_node(net, end)?;

        let limit = self.options.limit;
        let mut labels = Labels::new(net.node_count(), start);
        if !self.run(net, &mut labels, start, Some(end)) {
            log::debug!("no path found from {start} to {end} within distance limit {limit}");
            return Ok(None);
        }

        let path = labels.path_to(end);
        log::debug!(
            "path {start} -> {end}: {} hops, cost {}",
            path.hops(),
            path.cost()
        );
        Ok(Some(path))
    }

    /// Node sequence from `start` to `end`, empty when there is no path.
    ///
    /// A thin wrapper over [`find_path`](Self::find_path) for callers that
    /// branch on emptiness; the trivial path `[start]` is never empty.
    pub fn route<N: Network>(
        &self,
        net: &N,
        start: NodeId,
        end: NodeId,
    ) -> Result<Vec<NodeId>, SearchError> {
        Ok(self
            .find_path(net, start, end)?
            .map(Path::into_nodes)
            .unwrap_or_default())
    }

    /// Cost of the cheapest path from `start` to every node.
    ///
    /// Runs the search to exhaustion under the same ceiling. Nodes that cannot
    /// be reached hold [`UNREACHABLE`](crate::UNREACHABLE).
    pub fn distance_map<N: Network>(
        &self,
        net: &N,
        start: NodeId,
    ) -> Result<Vec<Cost>, SearchError> {
        check_node(net, start)?;
        let mut labels = Labels::new(net.node_count(), start);
        self.run(net, &mut labels, start, None);
        Ok(labels.into_distances())
    }

    fn run<N: Network>(
        &self,
        net: &N,
        labels: &mut Labels,
        start: NodeId,
        end: Option<NodeId>,
    ) -> bool {
        let limit = self.options.limit;
        match self.options.strategy {
            Strategy::LinearScan => scan::search(net, labels, end, limit),
            Strategy::BinaryHeap => heap::search(net, labels, start, end, limit),
        }
    }
}

fn check_node<N: Network>(net: &N, node: NodeId) -> Result<(), SearchError> {
    let node_count = net.node_count();
    if node >= node_count {
        return Err(SearchError::NodeOutOfRange { node, node_count });
    }
    Ok(())
}
