//! The representation-polymorphic store interface.
//!
//! Both concrete stores ([`AdjacencyListGraph`](crate::AdjacencyListGraph) and
//! [`AdjacencyMatrixGraph`](crate::AdjacencyMatrixGraph)) implement
//! [`GraphStore`]; the traversal engine is written once against it. External
//! [`Vertex`] values are mapped to internal indices solely by identifier
//! equality against the stored vertex sequence, scanning in insertion order
//! and stopping at the first match.

use crate::error::{Error, Result, VertexRole};
use crate::traversal::{self, TraversalControl, TraversalOptions};
use crate::types::{Edge, Vertex};

/// One outgoing adjacency entry, in store index space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index of the neighboring vertex in the store's vertex sequence.
    pub target: usize,
    /// Stored weight of the connecting edge.
    ///
    /// The matrix store keeps presence flags only and always reports 1.0;
    /// weighted shortest path over a matrix store goes through
    /// [`TraversalOptions::with_weight_accessor`].
    pub weight: f64,
}

/// Capability interface implemented by every graph representation.
///
/// Storage operations are representation-specific; the traversal methods are
/// provided once, delegating to the [`traversal`](crate::traversal) engine.
pub trait GraphStore {
    /// The stored vertex sequence, in insertion order.
    ///
    /// This order is the index basis for [`Neighbor::target`] and for
    /// first-match identifier resolution.
    fn vertices(&self) -> &[Vertex];

    /// Adds a vertex to the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FixedVertexSet`] for stores whose vertex set is fixed
    /// at construction time (the adjacency-matrix store).
    fn add_vertex(&mut self, vertex: Vertex) -> Result<()>;

    /// Adds a directed edge, resolving both endpoints by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] naming the missing endpoint when
    /// either identifier is absent from the store.
    fn add_edge(&mut self, edge: Edge) -> Result<()>;

    /// Returns the number of edges leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the identifier is absent.
    fn outgoing_degree(&self, vertex: &Vertex) -> Result<usize>;

    /// The adjacency primitive: outgoing neighbors of the vertex at `index`,
    /// in the representation's natural order.
    fn neighbors(&self, index: usize) -> Vec<Neighbor>;

    /// Depth-first traversal from `start`. See [`traversal::depth_first`].
    fn depth_first_traverse<F>(
        &self,
        start: &Vertex,
        hook: F,
        options: &TraversalOptions,
    ) -> Result<()>
    where
        F: FnMut(&Vertex) -> TraversalControl,
        Self: Sized,
    {
        traversal::depth_first(self, start, hook, options)
    }

    /// Breadth-first traversal from `start`. See [`traversal::breadth_first`].
    fn breadth_first_traverse<F>(
        &self,
        start: &Vertex,
        hook: F,
        options: &TraversalOptions,
    ) -> Result<()>
    where
        F: FnMut(&Vertex) -> TraversalControl,
        Self: Sized,
    {
        traversal::breadth_first(self, start, hook, options)
    }

    /// Dijkstra shortest-path traversal from `start`.
    /// See [`traversal::shortest_path`].
    fn shortest_path_traverse<F>(
        &self,
        start: &Vertex,
        hook: F,
        options: &TraversalOptions,
    ) -> Result<()>
    where
        F: FnMut(&Vertex) -> TraversalControl,
        Self: Sized,
    {
        traversal::shortest_path(self, start, hook, options)
    }
}

/// Resolves a vertex to its index: first match by identifier, insertion order.
pub(crate) fn resolve_index(
    vertices: &[Vertex],
    vertex: &Vertex,
    role: VertexRole,
) -> Result<usize> {
    vertices
        .iter()
        .position(|stored| stored.same_identity(vertex))
        .ok_or_else(|| Error::vertex_not_found(role, vertex.identifier()))
}

/// Resolves both endpoints of an edge in a single scan.
///
/// The scan exits early once both indices are known. A missing origin is
/// reported before a missing destiny.
pub(crate) fn resolve_endpoints(vertices: &[Vertex], edge: &Edge) -> Result<(usize, usize)> {
    let mut origin_index = None;
    let mut destiny_index = None;

    for (i, stored) in vertices.iter().enumerate() {
        if origin_index.is_none() && stored.same_identity(edge.origin()) {
            origin_index = Some(i);
        }
        if destiny_index.is_none() && stored.same_identity(edge.destiny()) {
            destiny_index = Some(i);
        }
        if origin_index.is_some() && destiny_index.is_some() {
            break;
        }
    }

    let origin = origin_index
        .ok_or_else(|| Error::vertex_not_found(VertexRole::Origin, edge.origin().identifier()))?;
    let destiny = destiny_index
        .ok_or_else(|| Error::vertex_not_found(VertexRole::Destiny, edge.destiny().identifier()))?;
    Ok((origin, destiny))
}
