//! Linear-scan selection: O(V) per settled node.

use wayfind_graph::{Cost, NodeId};

use crate::labels::Labels;
use crate::options::UNREACHABLE;
use crate::traits::Network;

/// Settle nodes in order of distance until `end` is selected or no unsettled
/// node has a finite distance. Returns `true` if `end` was reached.
///
/// With `end == None` the search runs to exhaustion.
pub(crate) fn search<N: Network>(
    net: &N,
    labels: &mut Labels,
    end: Option<NodeId>,
    limit: Cost,
) -> bool {
    loop {
        // Strict `<` keeps the first (lowest-index) minimum.
        let mut current = None;
        let mut min = UNREACHABLE;
        for (node, &d) in labels.distance.iter().enumerate() {
            if !labels.settled[node] && d < min {
                min = d;
                current = Some(node);
            }
        }

        let Some(current) = current else {
            return false;
        };
        if Some(current) == end {
            return true;
        }

        labels.settled[current] = true;
        labels.relax(net, current, limit, |_, _| {});
    }
}
