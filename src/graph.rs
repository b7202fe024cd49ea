//! [`Graph`] is an adjacency-list graph whose vertices carry a caller-assigned
//! integer id and an arbitrary payload.  Every vertex keeps an ordered list of
//! outgoing [`Edge`]s; an undirected edge is stored as two mirrored entries, one
//! on each endpoint.
//!
//! Vertices live in an append-only arena of slots.  Removing a vertex vacates
//! its slot but never reuses it, so an [`Edge`] whose destination has been
//! removed resolves to nothing instead of to some other vertex.  Such dangling
//! edges are left in place by [`Graph::remove_vertex`]; use
//! [`Graph::purge_dangling_edges`] to drop them explicitly.
//!
//! Lookups by id are linear scans in insertion order, and the first vertex
//! with a matching id wins.  Ids are not checked for uniqueness.
use std::{
    fmt::{self, Debug, Display},
    marker::PhantomData,
};

use derivative::Derivative;

use crate::{
    debug::format_debug,
    directedness::{Directed, Directedness, Undirected},
    edge::{Edge, VertexKey},
    error::GraphError,
    search::{BfsIterator, DfsIterator},
    tracing_support::{debug, trace},
    vertex::{Vertex, VertexId},
};

/// A graph whose edges are stored once, on the source vertex only.
pub type DirectedGraph<T> = Graph<T, Directed>;

/// A graph whose edges are stored as mirrored pairs.
pub type UndirectedGraph<T> = Graph<T, Undirected>;

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Vertex<T>),
    /// Left behind by a removed vertex.  The id is kept so that dangling edges
    /// can still be printed.
    Vacant {
        id: VertexId,
    },
}

impl<T> Slot<T> {
    fn vertex(&self) -> Option<&Vertex<T>> {
        match self {
            Slot::Occupied(vertex) => Some(vertex),
            Slot::Vacant { .. } => None,
        }
    }

    fn vertex_mut(&mut self) -> Option<&mut Vertex<T>> {
        match self {
            Slot::Occupied(vertex) => Some(vertex),
            Slot::Vacant { .. } => None,
        }
    }

    fn id(&self) -> VertexId {
        match self {
            Slot::Occupied(vertex) => vertex.id(),
            Slot::Vacant { id } => *id,
        }
    }
}

/// An adjacency-list graph.
///
/// # Type Parameters
/// * `T` - The type of data stored in vertices
/// * `D` - The directedness ([`Undirected`] by default, or [`Directed`])
#[derive(Derivative)]
#[derivative(Clone(bound = "T: Clone"), Default(bound = ""))]
pub struct Graph<T, D: Directedness = Undirected> {
    slots: Vec<Slot<T>>,
    len: usize,
    directedness: PhantomData<D>,
}

impl<T, D: Directedness> Graph<T, D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            len: 0,
            directedness: PhantomData,
        }
    }

    pub fn is_directed(&self) -> bool {
        D::is_directed()
    }

    /// Gets the number of vertices currently in the graph.
    pub fn num_vertices(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the number of stored edge entries.  An undirected edge is stored
    /// on both endpoints and so counts twice.
    pub fn num_edges(&self) -> usize {
        self.vertices().map(|vertex| vertex.edges().len()).sum()
    }

    /// Gets an iterator over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.slots.iter().filter_map(Slot::vertex)
    }

    fn vertices_mut(&mut self) -> impl Iterator<Item = &mut Vertex<T>> {
        self.slots.iter_mut().filter_map(Slot::vertex_mut)
    }

    /// Gets the vertex stored under `key`, or `None` if it has been removed.
    pub fn vertex(&self, key: VertexKey) -> Option<&Vertex<T>> {
        self.slots.get(key.index()).and_then(Slot::vertex)
    }

    pub fn vertex_mut(&mut self, key: VertexKey) -> Option<&mut Vertex<T>> {
        self.slots.get_mut(key.index()).and_then(Slot::vertex_mut)
    }

    /// Gets the id last stored under `key`, including for removed vertices.
    pub(crate) fn id_of(&self, key: VertexKey) -> Option<VertexId> {
        self.slots.get(key.index()).map(Slot::id)
    }

    /// Appends a vertex.  No check is made for an existing vertex with the
    /// same id.
    pub fn add_vertex(&mut self, id: VertexId, data: T) -> VertexKey {
        let key = VertexKey::new(self.slots.len());
        self.slots.push(Slot::Occupied(Vertex::new(key, id, data)));
        self.len += 1;
        debug!(id, ?key, "added vertex");
        key
    }

    /// Finds the first vertex, in insertion order, with the given id.
    pub fn find_vertex(&self, id: VertexId) -> Result<&Vertex<T>, GraphError> {
        let found = self.vertices().find(|vertex| vertex.id() == id);
        trace!(id, found = found.is_some(), "find_vertex");
        found.ok_or(GraphError::NotFound(id))
    }

    pub fn find_vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex<T>, GraphError> {
        self.vertices_mut()
            .find(|vertex| vertex.id() == id)
            .ok_or(GraphError::NotFound(id))
    }

    /// Finds the key of the first vertex with the given id.
    pub fn find_key(&self, id: VertexId) -> Result<VertexKey, GraphError> {
        self.find_vertex(id).map(Vertex::key)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices().any(|vertex| vertex.id() == id)
    }

    /// Removes the first vertex with the given id and returns it, or returns
    /// `None` if there is no such vertex.
    ///
    /// Edges in other vertices that point at the removed vertex are left in
    /// place and become dangling.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex<T>> {
        let Some(index) = self
            .slots
            .iter()
            .position(|slot| matches!(slot, Slot::Occupied(vertex) if vertex.id() == id))
        else {
            trace!(id, "remove_vertex: no such vertex");
            return None;
        };
        let Slot::Occupied(vertex) = std::mem::replace(&mut self.slots[index], Slot::Vacant { id })
        else {
            return None;
        };
        self.len -= 1;
        debug!(id, edges = vertex.edges().len(), "removed vertex");
        Some(vertex)
    }

    fn link(&mut self, from: VertexKey, to: VertexKey, weight: f64) {
        if let Some(vertex) = self.vertex_mut(from) {
            vertex.add_edge(to, weight);
        }
    }

    fn unlink(&mut self, from: VertexKey, to: VertexKey) -> usize {
        self.vertex_mut(from)
            .map_or(0, |vertex| vertex.remove_edge(to))
    }

    /// Adds an edge between the vertices with ids `from` and `to`.
    ///
    /// For an undirected graph a mirrored pair is stored, one entry on each
    /// endpoint, and `from == to` is rejected with [`GraphError::SelfLoop`]
    /// before either id is resolved.  A directed graph stores a single entry
    /// on `from` and accepts self-loops.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: f64,
    ) -> Result<(), GraphError> {
        if !D::is_directed() && from == to {
            debug!(from, "rejected self-loop");
            return Err(GraphError::SelfLoop(from));
        }
        let from_key = self.find_key(from)?;
        let to_key = self.find_key(to)?;
        if !D::is_directed() {
            self.link(to_key, from_key, weight);
        }
        self.link(from_key, to_key, weight);
        debug!(from, to, weight, directed = D::is_directed(), "added edge");
        Ok(())
    }

    /// Adds an edge with weight zero.
    pub fn add_edge_unweighted(&mut self, from: VertexId, to: VertexId) -> Result<(), GraphError> {
        self.add_edge(from, to, 0.0)
    }

    /// Removes every edge from `from` to `to` and every edge from `to` to
    /// `from`, regardless of directedness.  Returns the number of edge entries
    /// removed.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<usize, GraphError> {
        let from_key = self.find_key(from)?;
        let to_key = self.find_key(to)?;
        let removed = self.unlink(to_key, from_key) + self.unlink(from_key, to_key);
        debug!(from, to, removed, "removed edges between");
        Ok(removed)
    }

    /// Removes every edge pointing at the vertex with the given id, then
    /// clears that vertex's own outgoing edges.  Returns the number of edge
    /// entries removed.
    pub fn remove_edges(&mut self, id: VertexId) -> Result<usize, GraphError> {
        let key = self.find_key(id)?;
        let mut removed = 0;
        for vertex in self.vertices_mut() {
            removed += vertex.remove_edge(key);
        }
        if let Some(vertex) = self.vertex_mut(key) {
            removed += vertex.edges().len();
            vertex.remove_all_edges();
        }
        debug!(id, removed, "removed all edges of vertex");
        Ok(removed)
    }

    /// Resolves the destination of an edge.
    pub fn destination(&self, edge: &Edge) -> Result<&Vertex<T>, GraphError> {
        self.vertex(edge.destination())
            .ok_or(GraphError::DanglingEdge(edge.destination()))
    }

    /// Removes every edge whose destination is no longer in the graph and
    /// returns how many were removed.
    pub fn purge_dangling_edges(&mut self) -> usize {
        let live: Vec<bool> = self
            .slots
            .iter()
            .map(|slot| slot.vertex().is_some())
            .collect();
        let mut removed = 0;
        for vertex in self.vertices_mut() {
            removed += vertex.retain_edges(|edge| {
                live.get(edge.destination().index())
                    .copied()
                    .unwrap_or(false)
            });
        }
        debug!(removed, "purged dangling edges");
        removed
    }

    /// Starts a breadth-first traversal at `start`.  See [`BfsIterator`].
    ///
    /// Edges whose destination has been removed are skipped, as is `start`
    /// itself if its vertex is gone.
    pub fn bfs(&self, start: VertexKey) -> BfsIterator<'_, T, D> {
        BfsIterator::new(self, start)
    }

    /// Starts a breadth-first traversal at the vertex with the given id.
    pub fn bfs_from(&self, id: VertexId) -> Result<BfsIterator<'_, T, D>, GraphError> {
        Ok(self.bfs(self.find_key(id)?))
    }

    /// Starts a depth-first traversal at `start`.  See [`DfsIterator`].
    ///
    /// Edges whose destination has been removed are skipped, as is `start`
    /// itself if its vertex is gone.
    pub fn dfs(&self, start: VertexKey) -> DfsIterator<'_, T, D> {
        DfsIterator::new(self, start)
    }

    /// Starts a depth-first traversal at the vertex with the given id.
    pub fn dfs_from(&self, id: VertexId) -> Result<DfsIterator<'_, T, D>, GraphError> {
        Ok(self.dfs(self.find_key(id)?))
    }

    /// Prints the adjacency lists to stdout in the format produced by
    /// [`Display`].
    pub fn print_graph(&self) {
        print!("{self}");
    }
}

/// One line per vertex in insertion order: the vertex id, then each outgoing
/// edge as `destination[weight]` with the weight to two decimal places.
impl<T, D: Directedness> Display for Graph<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            write!(f, "{}:", vertex.id())?;
            for edge in vertex.edges() {
                match self.id_of(edge.destination()) {
                    Some(id) => write!(f, " {}[{}]", id, Weight(edge.weight()))?,
                    None => write!(f, " ?[{}]", Weight(edge.weight()))?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Displays a weight with two decimal places.  Rounding is half-up on the
/// shortest decimal form of the value, so `0.125` prints as `0.13` and `1.005`
/// as `1.01`.  Non-finite weights print as `Infinity`, `-Infinity` or `NaN`.
struct Weight(f64);

impl Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = self.0;
        if weight.is_nan() {
            return f.write_str("NaN");
        }
        let sign = if weight.is_sign_negative() { "-" } else { "" };
        if weight.is_infinite() {
            return write!(f, "{sign}Infinity");
        }
        // `Display` for f64 never uses an exponent.
        let shortest = weight.abs().to_string();
        let (whole, frac) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
        let mut digits: Vec<u8> = whole
            .bytes()
            .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(2))
            .map(|b| b - b'0')
            .collect();
        if frac.as_bytes().get(2).is_some_and(|&b| b >= b'5') {
            let mut carry = true;
            for digit in digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                digits.insert(0, 1);
            }
        }
        let point = digits.len() - 2;
        let mut text = String::with_capacity(digits.len() + 2);
        text.push_str(sign);
        for (i, digit) in digits.into_iter().enumerate() {
            if i == point {
                text.push('.');
            }
            text.push(char::from(b'0' + digit));
        }
        f.write_str(&text)
    }
}

impl<T: Debug, D: Directedness> Debug for Graph<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_debug(self, f)
    }
}
