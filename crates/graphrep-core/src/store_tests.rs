//! Tests for the shared identifier-resolution contract.

use super::error::{Error, VertexRole};
use super::store::{resolve_endpoints, resolve_index};
use super::types::{Edge, Vertex};

fn vertices(ids: &[&str]) -> Vec<Vertex> {
    ids.iter().map(|id| Vertex::new(id)).collect()
}

#[test]
fn test_resolve_index_insertion_order() {
    let vs = vertices(&["A", "B", "C"]);
    assert_eq!(resolve_index(&vs, &Vertex::new("A"), VertexRole::Start), Ok(0));
    assert_eq!(resolve_index(&vs, &Vertex::new("C"), VertexRole::Start), Ok(2));
}

#[test]
fn test_resolve_index_first_match_on_duplicate_identifier() {
    // Duplicate identifiers are not rejected; lookups take the first match.
    let vs = vertices(&["A", "B", "A"]);
    assert_eq!(resolve_index(&vs, &Vertex::new("A"), VertexRole::Start), Ok(0));
}

#[test]
fn test_resolve_index_missing() {
    let vs = vertices(&["A"]);
    let err = resolve_index(&vs, &Vertex::new("Z"), VertexRole::Start).unwrap_err();
    assert_eq!(err, Error::vertex_not_found(VertexRole::Start, "Z"));
}

#[test]
fn test_resolve_endpoints_both_found() {
    let vs = vertices(&["A", "B", "C"]);
    let edge = Edge::new(Vertex::new("C"), Vertex::new("A"));
    assert_eq!(resolve_endpoints(&vs, &edge), Ok((2, 0)));
}

#[test]
fn test_resolve_endpoints_self_loop() {
    let vs = vertices(&["A", "B"]);
    let edge = Edge::new(Vertex::new("B"), Vertex::new("B"));
    assert_eq!(resolve_endpoints(&vs, &edge), Ok((1, 1)));
}

#[test]
fn test_resolve_endpoints_missing_origin_reported_first() {
    let vs = vertices(&["A"]);
    let edge = Edge::new(Vertex::new("X"), Vertex::new("Y"));
    let err = resolve_endpoints(&vs, &edge).unwrap_err();
    assert_eq!(err, Error::vertex_not_found(VertexRole::Origin, "X"));
}

#[test]
fn test_resolve_endpoints_missing_destiny() {
    let vs = vertices(&["A"]);
    let edge = Edge::new(Vertex::new("A"), Vertex::new("Y"));
    let err = resolve_endpoints(&vs, &edge).unwrap_err();
    assert_eq!(err, Error::vertex_not_found(VertexRole::Destiny, "Y"));
}
