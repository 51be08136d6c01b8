use dsa_lab::demos::dijkstra::WeightedGraph;
use dsa_lab::demos::graph_traversal::Graph;

fn grid_graph() -> Graph {
    let mut graph = Graph::new(6).unwrap();
    for (src, dest) in [(0, 1), (0, 3), (1, 2), (1, 4), (2, 5), (3, 4), (4, 5)] {
        graph.add_edge(src, dest).unwrap();
    }
    graph
}

fn weighted_demo_graph() -> WeightedGraph {
    let mut graph = WeightedGraph::new(6).unwrap();
    for (src, dest, weight) in [
        (0, 1, 4),
        (0, 3, 1),
        (1, 2, 2),
        (2, 3, 3),
        (3, 4, 2),
        (3, 5, 1),
        (4, 5, 1),
    ] {
        graph.add_edge(src, dest, weight).unwrap();
    }
    graph
}

#[cfg(test)]
mod traversal_tests {
    use super::*;

    #[test]
    fn test_bfs_orders() {
        let graph = grid_graph();
        assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 3, 2, 4, 5]);
        assert_eq!(graph.bfs(2).unwrap(), vec![2, 1, 5, 0, 4, 3]);
    }

    #[test]
    fn test_dfs_orders() {
        let graph = grid_graph();
        assert_eq!(graph.dfs_recursive(0).unwrap(), vec![0, 1, 2, 5, 4, 3]);
        assert_eq!(
            graph.dfs_iterative(0).unwrap(),
            graph.dfs_recursive(0).unwrap()
        );
    }

    #[test]
    fn test_connectivity() {
        assert!(grid_graph().is_connected());

        let mut split = Graph::new(5).unwrap();
        split.add_edge(0, 1).unwrap();
        split.add_edge(2, 3).unwrap();
        assert!(!split.is_connected());
    }

    #[test]
    fn test_matrix_rendering_has_headers() {
        let graph = grid_graph();
        let matrix = graph.render_matrix();
        assert!(matrix.starts_with("   "));
        assert!(matrix.contains(" 0: "));
        assert!(matrix.contains(" 5: "));
    }
}

#[cfg(test)]
mod shortest_path_tests {
    use super::*;

    #[test]
    fn test_distances_from_source_zero() {
        let paths = weighted_demo_graph().shortest_paths(0).unwrap();
        assert_eq!(
            paths.dist,
            vec![Some(0), Some(4), Some(4), Some(1), Some(3), Some(2)]
        );
    }

    #[test]
    fn test_path_reconstruction() {
        let paths = weighted_demo_graph().shortest_paths(0).unwrap();
        assert_eq!(paths.path_to(5), vec![0, 3, 5]);
        assert_eq!(paths.path_to(2), vec![0, 3, 2]);
    }

    #[test]
    fn test_second_source() {
        let paths = weighted_demo_graph().shortest_paths(2).unwrap();
        assert_eq!(paths.dist[2], Some(0));
        assert_eq!(paths.dist[0], Some(4)); // 2 -> 3 -> 0
        assert_eq!(paths.dist[5], Some(4)); // 2 -> 3 -> 5
    }

    #[test]
    fn test_unreachable_vertex() {
        let mut graph = WeightedGraph::new(3).unwrap();
        graph.add_edge(0, 1, 5).unwrap();
        let paths = graph.shortest_paths(0).unwrap();
        assert_eq!(paths.dist[2], None);
        assert!(paths.path_to(2).is_empty());
    }

    #[test]
    fn test_trace_is_ordered_by_distance() {
        let paths = weighted_demo_graph().shortest_paths(0).unwrap();
        let selected: Vec<u64> = paths.trace.iter().map(|s| s.distance).collect();
        assert!(selected.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_vertex_validation() {
        let graph = weighted_demo_graph();
        assert_eq!(graph.shortest_paths(6).unwrap_err().code(), "E004");
    }
}
