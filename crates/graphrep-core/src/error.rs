//! Error types for graphrep-core.

use std::fmt;

use thiserror::Error;

/// Which endpoint of an operation failed identifier resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    /// The origin endpoint of an edge.
    Origin,
    /// The destiny endpoint of an edge.
    Destiny,
    /// The starting vertex of a traversal.
    Start,
    /// The subject of a direct query, such as a degree lookup.
    Queried,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => write!(f, "origin"),
            Self::Destiny => write!(f, "destiny"),
            Self::Start => write!(f, "start"),
            Self::Queried => write!(f, "queried"),
        }
    }
}

/// Graph operation error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex referenced by identifier is absent from the store.
    #[error("{role} vertex '{identifier}' not found in graph")]
    VertexNotFound {
        /// The endpoint that failed to resolve.
        role: VertexRole,
        /// The identifier that was looked up.
        identifier: String,
    },

    /// The store's vertex set is fixed at construction time.
    #[error("cannot add a vertex to a fixed-size adjacency matrix graph")]
    FixedVertexSet,
}

impl Error {
    /// Builds a `VertexNotFound` error for the given role and identifier.
    #[must_use]
    pub fn vertex_not_found(role: VertexRole, identifier: &str) -> Self {
        Self::VertexNotFound {
            role,
            identifier: identifier.to_string(),
        }
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
