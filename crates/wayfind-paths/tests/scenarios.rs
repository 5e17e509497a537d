use wayfind_paths::{Graph, NO_LIMIT, PathFinder, SearchOptions, Strategy, path_cost};

fn sample() -> Graph {
    Graph::from_edges(4, [(0, 1, 1), (1, 2, 1), (0, 2, 5), (2, 3, 1)]).unwrap()
}

#[test]
fn four_node_scenario() {
    let g = sample();
    let pf = PathFinder::default();

    let p = pf.find_path(&g, 0, 3).unwrap().unwrap();
    assert_eq!(p.nodes(), &[0, 1, 2, 3]);
    assert_eq!(p.cost(), 3);

    assert_eq!(PathFinder::with_limit(2).route(&g, 0, 3).unwrap(), Vec::<usize>::new());

    let p = pf.find_path(&g, 0, 2).unwrap().unwrap();
    assert_eq!(p.nodes(), &[0, 1, 2]);
    assert_eq!(p.cost(), 2);
}

#[test]
fn disconnected_components() {
    // {0, 1, 2} and {3, 4}, both bidirectional.
    let mut g = Graph::new(5);
    g.set_undirected(0, 1, 1).unwrap();
    g.set_undirected(1, 2, 1).unwrap();
    g.set_undirected(3, 4, 1).unwrap();

    for strategy in [Strategy::LinearScan, Strategy::BinaryHeap] {
        let pf = PathFinder::new(SearchOptions::default().with_strategy(strategy));
        assert!(pf.route(&g, 0, 4).unwrap().is_empty());
        assert!(pf.route(&g, 3, 2).unwrap().is_empty());
        assert_eq!(pf.route(&g, 2, 0).unwrap(), vec![2, 1, 0]);
    }
}

#[test]
fn no_path_is_distinct_from_trivial_path() {
    let g = Graph::new(2);
    let pf = PathFinder::default();
    assert_eq!(pf.route(&g, 0, 1).unwrap(), Vec::<usize>::new());
    assert_eq!(pf.route(&g, 1, 1).unwrap(), vec![1]);
}

#[test]
fn reweighting_changes_the_route() {
    let mut g = sample();
    let pf = PathFinder::default();
    g.set_edge(0, 2, 1).unwrap();

    let p = pf.find_path(&g, 0, 3).unwrap().unwrap();
    assert_eq!(p.nodes(), &[0, 2, 3]);
    assert_eq!(p.cost(), 2);
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn rejected_edges_do_not_change_results() {
    let mut g = sample();
    assert!(g.set_edge(3, 3, 3).is_err());
    assert!(g.set_edge(usize::MAX, 0, 3).is_err());
    assert!(g.set_edge(0, 3, -1).is_err());
    assert_eq!(g.edge_count(), 4);
    assert_eq!(PathFinder::default().route(&g, 0, 3).unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn grid_of_uniform_cost() {
    // 3x3 grid, 4-connected, bidirectional unit edges. Node = y * 3 + x.
    let mut g = Graph::new(9);
    for y in 0..3 {
        for x in 0..3 {
            let n = y * 3 + x;
            if x + 1 < 3 {
                g.set_undirected(n, n + 1, 1).unwrap();
            }
            if y + 1 < 3 {
                g.set_undirected(n, n + 3, 1).unwrap();
            }
        }
    }
    let p = PathFinder::default().find_path(&g, 0, 8).unwrap().unwrap();
    assert_eq!(p.cost(), 4);
    assert_eq!(p.hops(), 4);
    assert_eq!(path_cost(&g, p.nodes()), Some(4));
    // Lowest-index tie-break goes right along the top row first.
    assert_eq!(p.nodes(), &[0, 1, 2, 5, 8]);
}

#[test]
fn distance_map_matches_find_path() {
    let g = sample();
    let pf = PathFinder::new(SearchOptions::default().with_limit(NO_LIMIT));
    let dist = pf.distance_map(&g, 0).unwrap();
    for (node, &d) in dist.iter().enumerate() {
        let p = pf.find_path(&g, 0, node).unwrap().unwrap();
        assert_eq!(p.cost(), d);
    }
}
