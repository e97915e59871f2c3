//! Adjacency-list graph store.
//!
//! The simplest mutable representation: a vertex sequence and, per vertex, a
//! list of outgoing [`Neighbor`] entries. Vertices can be added at any time;
//! edge insertion resolves endpoints with a linear scan, so it costs O(V) per
//! call. Parallel duplicate edges are kept and each one counts toward the
//! origin's outgoing degree.

use crate::error::{Result, VertexRole};
use crate::store::{resolve_endpoints, resolve_index, GraphStore, Neighbor};
use crate::types::{Edge, Vertex};

/// Dynamic, resizable directed-graph store backed by adjacency lists.
///
/// # Example
///
/// ```rust
/// use graphrep_core::{AdjacencyListGraph, Edge, GraphStore, Vertex};
///
/// let mut graph = AdjacencyListGraph::new();
/// graph.add_vertex(Vertex::new("A"))?;
/// graph.add_vertex(Vertex::new("B"))?;
/// graph.add_edge(Edge::new(Vertex::new("A"), Vertex::new("B")))?;
///
/// assert_eq!(graph.outgoing_degree(&Vertex::new("A"))?, 1);
/// assert_eq!(graph.outgoing_degree(&Vertex::new("B"))?, 0);
/// # Ok::<(), graphrep_core::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct AdjacencyListGraph {
    /// Vertices in insertion order; the index basis for adjacency.
    vertices: Vec<Vertex>,
    /// Outgoing neighbor lists, parallel to `vertices`.
    adjacency: Vec<Vec<Neighbor>>,
}

impl AdjacencyListGraph {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated capacity for the vertex sequence.
    #[must_use]
    pub fn with_capacity(expected_vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(expected_vertices),
            adjacency: Vec::with_capacity(expected_vertices),
        }
    }

    /// Returns the number of stored vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl GraphStore for AdjacencyListGraph {
    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Appends the vertex with an empty neighbor list. No deduplication
    /// check; duplicate identifiers resolve first-match on lookup. O(1).
    fn add_vertex(&mut self, vertex: Vertex) -> Result<()> {
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Resolves both endpoints in one scan, then appends the destiny index to
    /// the origin's neighbor list. Re-adding an existing edge appends a
    /// duplicate entry and inflates the origin's degree.
    fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let (origin, destiny) = resolve_endpoints(&self.vertices, &edge)?;
        self.adjacency[origin].push(Neighbor {
            target: destiny,
            weight: edge.weight(),
        });
        Ok(())
    }

    fn outgoing_degree(&self, vertex: &Vertex) -> Result<usize> {
        let index = resolve_index(&self.vertices, vertex, VertexRole::Queried)?;
        Ok(self.adjacency[index].len())
    }

    fn neighbors(&self, index: usize) -> Vec<Neighbor> {
        self.adjacency.get(index).cloned().unwrap_or_default()
    }
}
