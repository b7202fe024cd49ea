use crate::edge::{Edge, VertexKey};

/// Caller-assigned vertex identifier.  Uniqueness is not enforced.
pub type VertexId = i64;

/// A vertex together with its outgoing adjacency list.
#[derive(Clone, Debug)]
pub struct Vertex<T> {
    key: VertexKey,
    id: VertexId,
    data: T,
    edges: Vec<Edge>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(key: VertexKey, id: VertexId, data: T) -> Self {
        Self {
            key,
            id,
            data,
            edges: Vec::new(),
        }
    }

    /// The storage key of this vertex in the graph that created it.
    pub fn key(&self) -> VertexKey {
        self.key
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn has_edge_to(&self, destination: VertexKey) -> bool {
        self.edges.iter().any(|e| e.destination() == destination)
    }

    /// Appends an edge to `destination`.  Parallel edges are allowed.
    pub fn add_edge(&mut self, destination: VertexKey, weight: f64) {
        self.edges.push(Edge::new(weight, destination));
    }

    /// Removes every edge pointing at `destination` and returns how many were
    /// removed.
    pub fn remove_edge(&mut self, destination: VertexKey) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| e.destination() != destination);
        before - self.edges.len()
    }

    pub fn remove_all_edges(&mut self) {
        self.edges = Vec::new();
    }

    /// Keeps only the edges for which `keep` returns true and returns how many
    /// were dropped.
    pub(crate) fn retain_edges(&mut self, keep: impl FnMut(&Edge) -> bool) -> usize {
        let before = self.edges.len();
        self.edges.retain(keep);
        before - self.edges.len()
    }
}
