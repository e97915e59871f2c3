//! Property-based tests over randomized edge sets.
//!
//! These pin the representation-independent contracts: both stores agree on
//! reachability, no traversal hooks a vertex twice, and degree semantics
//! match each store's multiplicity rules.

use std::collections::HashSet;

use proptest::{collection::vec, prelude::*};

use graphrep_core::{
    AdjacencyListGraph, AdjacencyMatrixGraph, Edge, GraphStore, TraversalControl,
    TraversalOptions, Vertex,
};

const MAX_VERTICES: usize = 12;

fn identifier(index: usize) -> String {
    format!("v{index}")
}

/// Random graph shape: a vertex count and a list of (origin, destiny) index
/// pairs, each taken modulo the vertex count.
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=MAX_VERTICES).prop_flat_map(|n| {
        (
            Just(n),
            vec((0..n, 0..n), 0..=MAX_VERTICES * 2),
        )
    })
}

fn build_list(n: usize, edges: &[(usize, usize)]) -> AdjacencyListGraph {
    let mut graph = AdjacencyListGraph::with_capacity(n);
    for i in 0..n {
        graph.add_vertex(Vertex::new(&identifier(i))).unwrap();
    }
    for &(a, b) in edges {
        graph
            .add_edge(Edge::new(
                Vertex::new(&identifier(a)),
                Vertex::new(&identifier(b)),
            ))
            .unwrap();
    }
    graph
}

fn build_matrix(n: usize, edges: &[(usize, usize)]) -> AdjacencyMatrixGraph {
    let vertices = (0..n).map(|i| Vertex::new(&identifier(i))).collect();
    let mut graph = AdjacencyMatrixGraph::new(vertices);
    for &(a, b) in edges {
        graph
            .add_edge(Edge::new(
                Vertex::new(&identifier(a)),
                Vertex::new(&identifier(b)),
            ))
            .unwrap();
    }
    graph
}

fn visit_all<G, T>(graph: &G, start: &str, traverse: T) -> Vec<String>
where
    G: GraphStore,
    T: Fn(&G, &Vertex, &mut Vec<String>),
{
    let mut order = Vec::new();
    traverse(graph, &Vertex::new(start), &mut order);
    order
}

fn dfs_visits<G: GraphStore>(graph: &G, start: &str) -> Vec<String> {
    visit_all(graph, start, |g, s, order| {
        g.depth_first_traverse(
            s,
            |v| {
                order.push(v.identifier().to_string());
                TraversalControl::Continue
            },
            &TraversalOptions::default(),
        )
        .unwrap();
    })
}

fn bfs_visits<G: GraphStore>(graph: &G, start: &str) -> Vec<String> {
    visit_all(graph, start, |g, s, order| {
        g.breadth_first_traverse(
            s,
            |v| {
                order.push(v.identifier().to_string());
                TraversalControl::Continue
            },
            &TraversalOptions::default(),
        )
        .unwrap();
    })
}

fn dijkstra_visits<G: GraphStore>(graph: &G, start: &str) -> Vec<String> {
    visit_all(graph, start, |g, s, order| {
        g.shortest_path_traverse(
            s,
            |v| {
                order.push(v.identifier().to_string());
                TraversalControl::Continue
            },
            &TraversalOptions::default(),
        )
        .unwrap();
    })
}

proptest! {
    #[test]
    fn dfs_and_bfs_agree_on_reachable_set((n, edges) in graph_strategy()) {
        let graph = build_list(n, &edges);
        let dfs: HashSet<String> = dfs_visits(&graph, &identifier(0)).into_iter().collect();
        let bfs: HashSet<String> = bfs_visits(&graph, &identifier(0)).into_iter().collect();
        prop_assert_eq!(dfs, bfs);
    }

    #[test]
    fn no_traversal_hooks_a_vertex_twice((n, edges) in graph_strategy()) {
        let graph = build_list(n, &edges);
        for order in [
            dfs_visits(&graph, &identifier(0)),
            bfs_visits(&graph, &identifier(0)),
            dijkstra_visits(&graph, &identifier(0)),
        ] {
            let unique: HashSet<&String> = order.iter().collect();
            prop_assert_eq!(unique.len(), order.len());
        }
    }

    #[test]
    fn stores_agree_on_reachable_set((n, edges) in graph_strategy()) {
        let list = build_list(n, &edges);
        let matrix = build_matrix(n, &edges);
        let from_list: HashSet<String> = bfs_visits(&list, &identifier(0)).into_iter().collect();
        let from_matrix: HashSet<String> =
            bfs_visits(&matrix, &identifier(0)).into_iter().collect();
        prop_assert_eq!(from_list, from_matrix);
    }

    #[test]
    fn list_degree_counts_every_added_edge((n, edges) in graph_strategy()) {
        let graph = build_list(n, &edges);
        for i in 0..n {
            let expected = edges.iter().filter(|&&(a, _)| a == i).count();
            let degree = graph.outgoing_degree(&Vertex::new(&identifier(i))).unwrap();
            prop_assert_eq!(degree, expected);
        }
    }

    #[test]
    fn matrix_degree_counts_distinct_targets((n, edges) in graph_strategy()) {
        let graph = build_matrix(n, &edges);
        for i in 0..n {
            let expected = edges
                .iter()
                .filter(|&&(a, _)| a == i)
                .map(|&(_, b)| b)
                .collect::<HashSet<usize>>()
                .len();
            let degree = graph.outgoing_degree(&Vertex::new(&identifier(i))).unwrap();
            prop_assert_eq!(degree, expected);
        }
    }

    #[test]
    fn unit_weight_dijkstra_matches_bfs_order((n, edges) in graph_strategy()) {
        let graph = build_list(n, &edges);
        prop_assert_eq!(
            bfs_visits(&graph, &identifier(0)),
            dijkstra_visits(&graph, &identifier(0))
        );
    }
}
