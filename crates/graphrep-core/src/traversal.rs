//! Graph traversal engine: DFS, BFS, and Dijkstra shortest-path.
//!
//! The algorithms are written once against [`GraphStore`] and work over
//! either representation. Each traversal resolves the starting vertex by
//! identifier, keeps its visited state local to the call, and invokes the
//! caller's hook once per vertex at the algorithm's visitation moment
//! (pre-order for DFS, dequeue for BFS, finalization for Dijkstra).
//! Traversals borrow the store read-only and are freely repeatable.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::fmt;

use crate::error::{Result, VertexRole};
use crate::store::{resolve_index, GraphStore, Neighbor};
use crate::types::{Edge, Vertex};

/// Value returned by a traversal hook to steer the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalControl {
    /// Keep traversing.
    Continue,
    /// Stop scheduling further visits and return successfully.
    Stop,
}

/// Per-call traversal configuration.
///
/// # Example
///
/// ```rust
/// use graphrep_core::TraversalOptions;
///
/// let options = TraversalOptions::default()
///     .with_weight_accessor(|edge| edge.weight() * 2.0);
/// ```
pub struct TraversalOptions {
    /// Whether a hook returning [`TraversalControl::Stop`] aborts the
    /// traversal. Enabled by default; when disabled the hook's control
    /// value is ignored.
    early_stop: bool,
    /// Overrides the stored edge weight during shortest-path relaxation.
    /// Results must be non-negative.
    weight_accessor: Option<Box<dyn Fn(&Edge) -> f64>>,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            early_stop: true,
            weight_accessor: None,
        }
    }
}

impl TraversalOptions {
    /// Creates the default options (early stop honored, stored weights).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignores hook control values instead of honoring `Stop` (builder pattern).
    #[must_use]
    pub fn without_early_stop(mut self) -> Self {
        self.early_stop = false;
        self
    }

    /// Sets a weight accessor for shortest-path traversal (builder pattern).
    ///
    /// The accessor receives each relaxed edge (endpoints plus the stored
    /// weight) and must return a non-negative weight.
    #[must_use]
    pub fn with_weight_accessor(mut self, accessor: impl Fn(&Edge) -> f64 + 'static) -> Self {
        self.weight_accessor = Some(Box::new(accessor));
        self
    }
}

impl fmt::Debug for TraversalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraversalOptions")
            .field("early_stop", &self.early_stop)
            .field(
                "weight_accessor",
                &self.weight_accessor.as_ref().map(|_| "<accessor>"),
            )
            .finish()
    }
}

/// Invokes the hook and reports whether an honored stop was requested.
fn hook_stopped<F>(hook: &mut F, vertex: &Vertex, options: &TraversalOptions) -> bool
where
    F: FnMut(&Vertex) -> TraversalControl,
{
    let control = hook(vertex);
    if options.early_stop && control == TraversalControl::Stop {
        tracing::debug!(vertex = %vertex.identifier(), "traversal stopped by hook");
        return true;
    }
    false
}

/// Depth-first traversal from `start`, hooking each vertex in recursive
/// pre-order over the representation's natural adjacency order.
///
/// Uses an explicit frame stack rather than recursion, so deep graphs cannot
/// overflow the call stack. Vertices unreachable from `start` are never
/// visited.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start`
/// is absent from the store.
pub fn depth_first<G, F>(
    graph: &G,
    start: &Vertex,
    mut hook: F,
    options: &TraversalOptions,
) -> Result<()>
where
    G: GraphStore + ?Sized,
    F: FnMut(&Vertex) -> TraversalControl,
{
    let vertices = graph.vertices();
    let start_index = resolve_index(vertices, start, VertexRole::Start)?;
    tracing::trace!(start = %start.identifier(), "depth-first traversal");

    let mut visited = HashSet::new();
    visited.insert(start_index);
    if hook_stopped(&mut hook, &vertices[start_index], options) {
        return Ok(());
    }

    // Each frame is a neighbor list plus a cursor into it; descending into a
    // neighbor pushes a frame, exhausting a cursor pops one. This replicates
    // the recursive order exactly: a vertex is marked and hooked at the
    // moment the traversal descends into it.
    let mut stack: Vec<(Vec<Neighbor>, usize)> = vec![(graph.neighbors(start_index), 0)];
    while !stack.is_empty() {
        let top = stack.len() - 1;
        let cursor = stack[top].1;
        if cursor == stack[top].0.len() {
            stack.pop();
            continue;
        }
        stack[top].1 += 1;
        let next = stack[top].0[cursor].target;
        if visited.insert(next) {
            if hook_stopped(&mut hook, &vertices[next], options) {
                return Ok(());
            }
            stack.push((graph.neighbors(next), 0));
        }
    }
    Ok(())
}

/// Breadth-first traversal from `start`, hooking each vertex when it is
/// dequeued. Visitation order is non-decreasing in hop distance.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start`
/// is absent from the store.
pub fn breadth_first<G, F>(
    graph: &G,
    start: &Vertex,
    mut hook: F,
    options: &TraversalOptions,
) -> Result<()>
where
    G: GraphStore + ?Sized,
    F: FnMut(&Vertex) -> TraversalControl,
{
    let vertices = graph.vertices();
    let start_index = resolve_index(vertices, start, VertexRole::Start)?;
    tracing::trace!(start = %start.identifier(), "breadth-first traversal");

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start_index);
    queue.push_back(start_index);

    // Marked on enqueue, hooked on dequeue; the start is simply the first
    // element dequeued.
    while let Some(index) = queue.pop_front() {
        if hook_stopped(&mut hook, &vertices[index], options) {
            return Ok(());
        }
        for neighbor in graph.neighbors(index) {
            if visited.insert(neighbor.target) {
                queue.push_back(neighbor.target);
            }
        }
    }
    Ok(())
}

/// Min-queue entry; reversed ordering so `BinaryHeap` pops the smallest
/// distance. Ties are broken by queue-insertion order, which keeps the
/// traversal deterministic and makes unit-weight finalization order equal
/// BFS discovery order.
struct QueueEntry {
    distance: f64,
    sequence: u64,
    index: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Distances are finite and non-negative here, so partial_cmp only
        // fails on NaN input, which the contract excludes.
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Weight of the edge `origin_index → neighbor` for one relaxation step.
fn relaxation_weight(
    vertices: &[Vertex],
    origin_index: usize,
    neighbor: &Neighbor,
    options: &TraversalOptions,
) -> f64 {
    match &options.weight_accessor {
        Some(accessor) => {
            let edge = Edge::new(
                vertices[origin_index].clone(),
                vertices[neighbor.target].clone(),
            )
            .with_weight(neighbor.weight);
            accessor(&edge)
        }
        None => neighbor.weight,
    }
}

/// Dijkstra shortest-path traversal from `start`, hooking each vertex at the
/// moment it is finalized (popped with its best distance confirmed).
///
/// Edge weights come from the store's adjacency entries, or from
/// [`TraversalOptions::with_weight_accessor`] when one is set; they must be
/// non-negative. With unit weights the finalization order equals BFS
/// discovery order. Unreachable vertices are never finalized or hooked.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start`
/// is absent from the store.
pub fn shortest_path<G, F>(
    graph: &G,
    start: &Vertex,
    mut hook: F,
    options: &TraversalOptions,
) -> Result<()>
where
    G: GraphStore + ?Sized,
    F: FnMut(&Vertex) -> TraversalControl,
{
    let vertices = graph.vertices();
    let start_index = resolve_index(vertices, start, VertexRole::Start)?;
    tracing::trace!(start = %start.identifier(), "shortest-path traversal");

    let mut best = vec![f64::INFINITY; vertices.len()];
    let mut finalized = HashSet::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;
    best[start_index] = 0.0;
    queue.push(QueueEntry {
        distance: 0.0,
        sequence,
        index: start_index,
    });

    while let Some(QueueEntry {
        distance, index, ..
    }) = queue.pop()
    {
        // A vertex can sit in the queue once per relaxation that improved
        // it; only the first pop finalizes, the rest are stale.
        if !finalized.insert(index) {
            continue;
        }
        if hook_stopped(&mut hook, &vertices[index], options) {
            return Ok(());
        }
        for neighbor in graph.neighbors(index) {
            if finalized.contains(&neighbor.target) {
                continue;
            }
            let candidate =
                distance + relaxation_weight(vertices, index, &neighbor, options);
            if candidate < best[neighbor.target] {
                best[neighbor.target] = candidate;
                sequence += 1;
                queue.push(QueueEntry {
                    distance: candidate,
                    sequence,
                    index: neighbor.target,
                });
            }
        }
    }
    Ok(())
}
