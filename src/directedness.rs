use std::fmt::Debug;

/// Marker type representing directed graph edges.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Directed;

/// Marker type representing undirected graph edges.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Undirected;

/// Trait defining the directedness behavior of graph edges.
///
/// This trait is implemented by [`Directed`] and [`Undirected`] marker types
/// to select, at construction time, how [`Graph::add_edge`](crate::Graph::add_edge)
/// stores an edge: a single entry on the source vertex, or a mirrored pair with
/// one entry on each endpoint.
pub trait Directedness: Copy + Default + Debug + 'static {
    fn is_directed() -> bool;

    /// Name used when debug-formatting a graph of this directedness.
    fn graph_name() -> &'static str;
}

impl Directedness for Directed {
    fn is_directed() -> bool {
        true
    }

    fn graph_name() -> &'static str {
        "DirectedGraph"
    }
}

impl Directedness for Undirected {
    fn is_directed() -> bool {
        false
    }

    fn graph_name() -> &'static str {
        "Graph"
    }
}
