use crate::{edge::VertexKey, vertex::VertexId};

/// Errors returned by graph operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// No vertex with the given id exists in the graph.
    #[error("vertex {0} does not exist")]
    NotFound(VertexId),
    /// An undirected edge was requested between a vertex and itself.
    #[error("cannot add an edge from vertex {0} to itself")]
    SelfLoop(VertexId),
    /// An edge's destination vertex has been removed from the graph.
    #[error("edge destination {0:?} no longer exists")]
    DanglingEdge(VertexKey),
}
