use proptest::prelude::*;
use wayfind_paths::{
    Cost, Graph, NO_LIMIT, NodeId, PathFinder, SearchOptions, Strategy as SearchStrategy,
    UNREACHABLE, path_cost,
};

/// Small random graphs: up to 8 nodes, weights 0..10. Self-loops in the raw
/// edge list are dropped by the lossy constructor.
fn small_graph() -> impl Strategy<Value = Graph> {
    (1usize..=8).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0 as Cost..10), 0..24)
            .prop_map(move |edges| Graph::from_edges_lossy(n, edges).0)
    })
}

fn graph_and_pair() -> impl Strategy<Value = (Graph, NodeId, NodeId)> {
    small_graph().prop_flat_map(|g| {
        let n = g.node_count();
        (Just(g), 0..n, 0..n)
    })
}

/// Cheapest simple path by exhaustive depth-first enumeration.
fn brute_force(g: &Graph, start: NodeId, end: NodeId, limit: Cost) -> Option<Cost> {
    fn walk(
        g: &Graph,
        node: NodeId,
        end: NodeId,
        cost: Cost,
        limit: Cost,
        seen: &mut Vec<bool>,
        best: &mut Option<Cost>,
    ) {
        if node == end {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for e in g.neighbors(node) {
            let next = cost + e.weight;
            if seen[e.to] || next > limit {
                continue;
            }
            seen[e.to] = true;
            walk(g, e.to, end, next, limit, seen, best);
            seen[e.to] = false;
        }
    }

    let mut seen = vec![false; g.node_count()];
    seen[start] = true;
    let mut best = None;
    walk(g, start, end, 0, limit, &mut seen, &mut best);
    best
}

proptest! {
    #[test]
    fn deterministic((g, a, b) in graph_and_pair()) {
        let pf = PathFinder::default();
        let first = pf.route(&g, a, b).unwrap();
        let second = pf.route(&g, a, b).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn optimal_against_brute_force(
        (g, a, b) in graph_and_pair(),
        limit in prop::option::of(0 as Cost..30),
    ) {
        let limit = limit.unwrap_or(NO_LIMIT);
        let found = PathFinder::with_limit(limit).find_path(&g, a, b).unwrap();
        let expected = brute_force(&g, a, b, limit);
        prop_assert_eq!(found.as_ref().map(|p| p.cost()), expected);
        if let Some(p) = found {
            prop_assert_eq!(p.start(), a);
            prop_assert_eq!(p.end(), b);
            prop_assert_eq!(path_cost(&g, p.nodes()), Some(p.cost()));
        }
    }

    #[test]
    fn reflexive(g in small_graph()) {
        let pf = PathFinder::default();
        for n in 0..g.node_count() {
            let p = pf.find_path(&g, n, n).unwrap().unwrap();
            prop_assert_eq!(p.nodes(), &[n][..]);
            prop_assert_eq!(p.cost(), 0);
        }
    }

    #[test]
    fn raising_the_limit_never_hurts(
        (g, a, b) in graph_and_pair(),
        l1 in 0 as Cost..30,
        extra in 0 as Cost..30,
    ) {
        let low = PathFinder::with_limit(l1).find_path(&g, a, b).unwrap();
        let high = PathFinder::with_limit(l1 + extra).find_path(&g, a, b).unwrap();
        if let Some(low) = low {
            let high = high.expect("a higher limit must still find a path");
            prop_assert!(high.cost() <= low.cost());
        }
    }

    #[test]
    fn strategies_agree((g, a, b) in graph_and_pair(), limit in 0 as Cost..30) {
        let scan = PathFinder::new(SearchOptions::default().with_limit(limit));
        let heap = PathFinder::new(
            SearchOptions::default()
                .with_limit(limit)
                .with_strategy(SearchStrategy::BinaryHeap),
        );
        prop_assert_eq!(scan.route(&g, a, b).unwrap(), heap.route(&g, a, b).unwrap());
        prop_assert_eq!(scan.distance_map(&g, a).unwrap(), heap.distance_map(&g, a).unwrap());
    }

    #[test]
    fn distance_map_agrees_with_find_path((g, a, b) in graph_and_pair()) {
        let pf = PathFinder::default();
        let dist = pf.distance_map(&g, a).unwrap();
        match pf.find_path(&g, a, b).unwrap() {
            Some(p) => prop_assert_eq!(p.cost(), dist[b]),
            None => prop_assert_eq!(dist[b], UNREACHABLE),
        }
    }
}
