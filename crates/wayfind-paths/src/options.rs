use wayfind_graph::Cost;

/// Sentinel distance for nodes the search has not reached.
pub const UNREACHABLE: Cost = Cost::MAX;

/// Distance ceiling that never prunes anything.
pub const NO_LIMIT: Cost = Cost::MAX;

/// How the next node to settle is selected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Strategy {
    /// Scan every unsettled node for the minimum. O(V²), no allocation beyond
    /// the label arrays.
    #[default]
    LinearScan,
    /// Keep candidates in a binary heap ordered by `(distance, index)`.
    BinaryHeap,
}

/// Search configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchOptions {
    /// Inclusive ceiling on total path cost. Edges whose relaxed cost would
    /// exceed it are never followed. The start node itself always has cost 0.
    pub limit: Cost,
    pub strategy: Strategy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: NO_LIMIT,
            strategy: Strategy::LinearScan,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: Cost) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unbounded_linear_scan() {
        let opts = SearchOptions::default();
        assert_eq!(opts.limit, NO_LIMIT);
        assert_eq!(opts.strategy, Strategy::LinearScan);
    }

    #[test]
    fn builders() {
        let opts = SearchOptions::default()
            .with_limit(12)
            .with_strategy(Strategy::BinaryHeap);
        assert_eq!(opts.limit, 12);
        assert_eq!(opts.strategy, Strategy::BinaryHeap);
    }
}
