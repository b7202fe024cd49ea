//! An adjacency-list graph with directed and undirected variants and lazy
//! breadth-first and depth-first traversals.
//!
//! ```
//! use adjgraph::prelude::*;
//!
//! let mut graph = UndirectedGraph::new();
//! graph.add_vertex(1, "a");
//! graph.add_vertex(2, "b");
//! graph.add_vertex(3, "c");
//! graph.add_edge(1, 2, 1.5)?;
//! graph.add_edge(1, 3, 2.0)?;
//! assert_eq!(graph.to_string(), "1: 2[1.50] 3[2.00]\n2: 1[1.50]\n3: 1[2.00]\n");
//!
//! let order: Vec<_> = graph.bfs_from(1)?.take(4).map(|v| v.id()).collect();
//! assert_eq!(order, vec![1, 2, 3, 1]);
//! # Ok::<(), GraphError>(())
//! ```
pub mod directedness;
pub mod edge;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod tracing_support;
pub mod vertex;

mod debug;
mod util;

pub use directedness::{Directed, Directedness, Undirected};
pub use edge::{Edge, VertexKey};
pub use error::GraphError;
pub use graph::{DirectedGraph, Graph, UndirectedGraph};
pub use vertex::{Vertex, VertexId};
