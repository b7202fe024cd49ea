use adjgraph::prelude::*;
use quickcheck::{Arbitrary, Gen};

/// A random graph whose vertex ids are `0..ids.len()`, each used once.
#[derive(Clone, Debug)]
pub struct ArbGraph<D: Directedness> {
    pub graph: Graph<u8, D>,
    pub ids: Vec<VertexId>,
}

impl<D: Directedness> ArbGraph<D> {
    /// Maps an arbitrary index onto an id present in the graph.
    pub fn pick(&self, i: usize) -> VertexId {
        self.ids[i % self.ids.len()]
    }
}

/// Turns an arbitrary integer into a weight that compares exactly.
pub fn weight(w: i16) -> f64 {
    f64::from(w) / 4.0
}

impl<D: Directedness> Arbitrary for ArbGraph<D> {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 12 + 2; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 30;

        let ids: Vec<VertexId> = (0..num_vertices as VertexId).collect();
        let mut graph = Graph::with_capacity(num_vertices);
        for &id in &ids {
            graph.add_vertex(id, u8::arbitrary(g));
        }

        for _ in 0..num_edges {
            let from = ids[usize::arbitrary(g) % ids.len()];
            let into = ids[usize::arbitrary(g) % ids.len()];
            // Undirected graphs reject self-loops; skipping them is fine here.
            let _ = graph.add_edge(from, into, weight(i16::arbitrary(g)));
        }

        ArbGraph { graph, ids }
    }
}

/// Counts the edges stored on `from` that point at `into`.
pub fn count_edges<D: Directedness>(graph: &Graph<u8, D>, from: VertexId, into: VertexId) -> usize {
    let into_key = graph.find_key(into).unwrap();
    graph
        .find_vertex(from)
        .unwrap()
        .edges()
        .iter()
        .filter(|e| e.destination() == into_key)
        .count()
}

/// Counts the edges stored on `from` that point at `into` with the given
/// weight.
pub fn count_weighted<D: Directedness>(
    graph: &Graph<u8, D>,
    from: VertexId,
    into: VertexId,
    weight: f64,
) -> usize {
    let into_key = graph.find_key(into).unwrap();
    graph
        .find_vertex(from)
        .unwrap()
        .edges()
        .iter()
        .filter(|e| e.destination() == into_key && e.weight() == weight)
        .count()
}
