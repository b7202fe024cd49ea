//! Breadth-first and depth-first traversal iterators.
//!
//! Neither iterator keeps a visited set.  Every time a vertex is yielded, all
//! of its current outgoing edges' destinations are added to the frontier, so a
//! vertex reachable along several paths is yielded once per path and a cycle
//! produces an endless sequence.  Callers bound the traversal themselves, e.g.
//! with [`Iterator::take`].
//!
//! Frontier entries whose vertex has been removed from the graph are skipped.
use std::{collections::VecDeque, iter::FusedIterator};

use crate::{
    Graph,
    directedness::Directedness,
    edge::{Edge, VertexKey},
    tracing_support::trace,
    vertex::Vertex,
};

pub struct BfsIterator<'g, T, D: Directedness> {
    graph: &'g Graph<T, D>,
    queue: VecDeque<VertexKey>,
}

impl<'g, T, D> BfsIterator<'g, T, D>
where
    D: Directedness,
{
    pub fn new(graph: &'g Graph<T, D>, start: VertexKey) -> Self {
        Self {
            graph,
            queue: VecDeque::from([start]),
        }
    }

    /// Number of vertex keys waiting in the queue.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl<'g, T, D> Iterator for BfsIterator<'g, T, D>
where
    D: Directedness,
{
    type Item = &'g Vertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(key) = self.queue.pop_front() {
            let Some(vertex) = self.graph.vertex(key) else {
                trace!(?key, "bfs: skipping removed vertex");
                continue;
            };
            self.queue
                .extend(vertex.edges().iter().map(Edge::destination));
            trace!(id = vertex.id(), pending = self.queue.len(), "bfs visit");
            return Some(vertex);
        }
        None
    }
}

impl<'g, T, D: Directedness> FusedIterator for BfsIterator<'g, T, D> {}

pub struct DfsIterator<'g, T, D: Directedness> {
    graph: &'g Graph<T, D>,
    stack: Vec<VertexKey>,
}

impl<'g, T, D> DfsIterator<'g, T, D>
where
    D: Directedness,
{
    pub fn new(graph: &'g Graph<T, D>, start: VertexKey) -> Self {
        Self {
            graph,
            stack: vec![start],
        }
    }

    /// Number of vertex keys waiting on the stack.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }
}

impl<'g, T, D> Iterator for DfsIterator<'g, T, D>
where
    D: Directedness,
{
    type Item = &'g Vertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(key) = self.stack.pop() {
            let Some(vertex) = self.graph.vertex(key) else {
                trace!(?key, "dfs: skipping removed vertex");
                continue;
            };
            // Pushed in edge order, so the last neighbor is popped first.
            self.stack
                .extend(vertex.edges().iter().map(Edge::destination));
            trace!(id = vertex.id(), pending = self.stack.len(), "dfs visit");
            return Some(vertex);
        }
        None
    }
}

impl<'g, T, D: Directedness> FusedIterator for DfsIterator<'g, T, D> {}
