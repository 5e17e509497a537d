//! Binary-heap selection: O(log V) per queue operation.
//!
//! Entries are ordered by `(distance, index)` so nodes settle in exactly the
//! same order as the linear scan.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use wayfind_graph::{Cost, NodeId};

use crate::labels::Labels;
use crate::traits::Network;

/// Queue entry, ordered so `BinaryHeap` (a max-heap) pops the smallest
/// distance first and the lowest index among equals.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: NodeId,
    cost: Cost,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Heap counterpart of [`scan::search`](crate::scan::search), with the same
/// contract.
pub(crate) fn search<N: Network>(
    net: &N,
    labels: &mut Labels,
    start: NodeId,
    end: Option<NodeId>,
    limit: Cost,
) -> bool {
    let mut open = BinaryHeap::new();
    open.push(NodeRef { idx: start, cost: 0 });

    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Skip stale entries.
        if labels.settled[ci] || current.cost != labels.distance[ci] {
            continue;
        }
        if Some(ci) == end {
            return true;
        }

        labels.settled[ci] = true;
        labels.relax(net, ci, limit, |idx, cost| open.push(NodeRef { idx, cost }));
    }
    false
}
