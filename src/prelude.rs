pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::edge::{Edge, VertexKey};
pub use crate::error::GraphError;
pub use crate::graph::{DirectedGraph, Graph, UndirectedGraph};
pub use crate::search::{BfsIterator, DfsIterator};
pub use crate::vertex::{Vertex, VertexId};
