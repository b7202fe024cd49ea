use std::fmt::Debug;

/// A key naming a slot in a graph's vertex storage.
///
/// Keys are issued in increasing order and never reused.  A key obtained from
/// a graph always refers either to the vertex it was issued for or to the
/// vacated slot left behind when that vertex was removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey(usize);

impl VertexKey {
    pub(crate) fn new(index: usize) -> Self {
        VertexKey(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// An outgoing edge stored in a vertex's adjacency list.
///
/// The destination is a key into the owning graph's storage; an edge never
/// owns its destination and does not keep it alive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    weight: f64,
    destination: VertexKey,
}

impl Edge {
    pub fn new(weight: f64, destination: VertexKey) -> Self {
        Self {
            weight,
            destination,
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn destination(&self) -> VertexKey {
        self.destination
    }
}
