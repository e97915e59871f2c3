//! Graph value types: vertices and directed edges.
//!
//! Both types have immutable identity. A [`Vertex`] is identified by its
//! `identifier` alone; the payload is opaque to the engine and never
//! participates in lookups. An [`Edge`] is an ordered `origin → destiny`
//! pair plus a weight used only by shortest-path traversal.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default weight for edges that were not given one explicitly.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// A graph vertex: an opaque identifier plus an optional payload.
///
/// # Example
///
/// ```rust
/// use graphrep_core::Vertex;
/// use serde_json::json;
///
/// let v = Vertex::new("A").with_payload(json!({"kind": "city"}));
/// assert_eq!(v.identifier(), "A");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vertex {
    identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
}

impl Vertex {
    /// Creates a vertex with the given identifier and no payload.
    #[must_use]
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            payload: None,
        }
    }

    /// Attaches a payload to this vertex (builder pattern).
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Returns the vertex identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the optional payload.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Returns true if both vertices carry the same identifier.
    ///
    /// This is the identity used for all store lookups; payloads are ignored.
    #[must_use]
    pub fn same_identity(&self, other: &Vertex) -> bool {
        self.identifier == other.identifier
    }
}

/// A directed edge from `origin` to `destiny`.
///
/// Edges carry no identity beyond their endpoints; stores may permit parallel
/// duplicates (the adjacency-list store does, the matrix store does not).
///
/// # Example
///
/// ```rust
/// use graphrep_core::{Edge, Vertex};
///
/// let e = Edge::new(Vertex::new("A"), Vertex::new("B")).with_weight(2.5);
/// assert_eq!(e.origin().identifier(), "A");
/// assert_eq!(e.weight(), 2.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    origin: Vertex,
    destiny: Vertex,
    weight: f64,
}

impl Edge {
    /// Creates an edge with the default weight of 1.0.
    #[must_use]
    pub fn new(origin: Vertex, destiny: Vertex) -> Self {
        Self {
            origin,
            destiny,
            weight: DEFAULT_EDGE_WEIGHT,
        }
    }

    /// Sets the edge weight (builder pattern).
    ///
    /// Shortest-path traversal requires weights to be non-negative; the
    /// engine does not validate this.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Returns the origin vertex.
    #[must_use]
    pub fn origin(&self) -> &Vertex {
        &self.origin
    }

    /// Returns the destiny vertex.
    #[must_use]
    pub fn destiny(&self) -> &Vertex {
        &self.destiny
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}
