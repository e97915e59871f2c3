//! Adjacency-matrix graph store.
//!
//! A fixed-vertex-set representation: the full vertex sequence is supplied at
//! construction and a V×V matrix of 0/1 presence flags holds the edges. Edge
//! insertion and lookup are O(1) after endpoint resolution; degree is a row
//! sum, O(V). Because cells are presence flags, re-adding an edge is
//! idempotent (the list store, by contrast, keeps duplicates) and per-edge
//! weights are not retained.

use crate::error::{Error, Result, VertexRole};
use crate::store::{resolve_endpoints, resolve_index, GraphStore, Neighbor};
use crate::types::{Edge, Vertex, DEFAULT_EDGE_WEIGHT};

/// Fixed-size directed-graph store backed by a presence-flag matrix.
///
/// # Example
///
/// ```rust
/// use graphrep_core::{AdjacencyMatrixGraph, Edge, GraphStore, Vertex};
///
/// let mut graph = AdjacencyMatrixGraph::new(vec![Vertex::new("A"), Vertex::new("B")]);
/// graph.add_edge(Edge::new(Vertex::new("A"), Vertex::new("B")))?;
/// graph.add_edge(Edge::new(Vertex::new("A"), Vertex::new("B")))?;
///
/// // Idempotent: the duplicate add did not grow the degree.
/// assert_eq!(graph.outgoing_degree(&Vertex::new("A"))?, 1);
/// # Ok::<(), graphrep_core::Error>(())
/// ```
#[derive(Debug)]
pub struct AdjacencyMatrixGraph {
    /// Vertices in the order supplied at construction.
    vertices: Vec<Vertex>,
    /// Row-major V×V matrix; `matrix[i * V + j] == 1` means an edge i → j.
    matrix: Vec<u8>,
}

impl AdjacencyMatrixGraph {
    /// Creates a graph over the complete vertex set, with no edges.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>) -> Self {
        let size = vertices.len();
        Self {
            vertices,
            matrix: vec![0; size * size],
        }
    }

    /// Returns the number of stored vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn cell(&self, origin: usize, destiny: usize) -> u8 {
        self.matrix[origin * self.vertices.len() + destiny]
    }
}

impl GraphStore for AdjacencyMatrixGraph {
    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The vertex set is fixed at construction; adding afterward is a
    /// capability mismatch, not a silent no-op.
    fn add_vertex(&mut self, _vertex: Vertex) -> Result<()> {
        Err(Error::FixedVertexSet)
    }

    /// Sets the presence flag for origin → destiny. The edge's weight is
    /// discarded; matrix adjacency always reports weight 1.0.
    fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let (origin, destiny) = resolve_endpoints(&self.vertices, &edge)?;
        self.matrix[origin * self.vertices.len() + destiny] = 1;
        Ok(())
    }

    fn outgoing_degree(&self, vertex: &Vertex) -> Result<usize> {
        let index = resolve_index(&self.vertices, vertex, VertexRole::Queried)?;
        let row = &self.matrix[index * self.vertices.len()..(index + 1) * self.vertices.len()];
        Ok(row.iter().filter(|&&flag| flag == 1).count())
    }

    /// Ascending index order over the row's set flags.
    fn neighbors(&self, index: usize) -> Vec<Neighbor> {
        if index >= self.vertices.len() {
            return Vec::new();
        }
        (0..self.vertices.len())
            .filter(|&j| self.cell(index, j) == 1)
            .map(|j| Neighbor {
                target: j,
                weight: DEFAULT_EDGE_WEIGHT,
            })
            .collect()
    }
}
