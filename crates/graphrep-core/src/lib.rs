//! # GraphRep Core
//!
//! A directed-graph engine with two interchangeable internal representations
//! and a shared traversal engine.
//!
//! ## Features
//!
//! - **Two stores, one interface**: [`AdjacencyListGraph`] (dynamic, O(1)
//!   vertex add) and [`AdjacencyMatrixGraph`] (fixed vertex set, O(1) edge
//!   add) both implement [`GraphStore`].
//! - **Traversals written once**: DFS, BFS, and Dijkstra shortest-path run
//!   against the trait, not per representation.
//! - **Hook-driven**: the caller's hook sees each vertex at its visitation
//!   moment and can stop the traversal early.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphrep_core::{
//!     AdjacencyListGraph, Edge, GraphStore, TraversalControl, TraversalOptions, Vertex,
//! };
//!
//! fn main() -> graphrep_core::Result<()> {
//!     let mut graph = AdjacencyListGraph::new();
//!     for id in ["A", "B", "C"] {
//!         graph.add_vertex(Vertex::new(id))?;
//!     }
//!     graph.add_edge(Edge::new(Vertex::new("A"), Vertex::new("B")))?;
//!     graph.add_edge(Edge::new(Vertex::new("B"), Vertex::new("C")))?;
//!
//!     let mut order = Vec::new();
//!     graph.depth_first_traverse(
//!         &Vertex::new("A"),
//!         |v| {
//!             order.push(v.identifier().to_string());
//!             TraversalControl::Continue
//!         },
//!         &TraversalOptions::default(),
//!     )?;
//!     assert_eq!(order, ["A", "B", "C"]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
mod list_store;
mod matrix_store;
mod store;
#[cfg(test)]
mod store_tests;
pub mod traversal;
mod types;

pub use error::{Error, Result, VertexRole};
pub use list_store::AdjacencyListGraph;
pub use matrix_store::AdjacencyMatrixGraph;
pub use store::{GraphStore, Neighbor};
pub use traversal::{TraversalControl, TraversalOptions};
pub use types::{Edge, Vertex, DEFAULT_EDGE_WEIGHT};
