use std::fmt::{Debug, Formatter};

use crate::{
    Graph,
    directedness::Directedness,
    util::{FormatDebugAs, FormatDebugWith},
};

/// Formats a graph for debug output.
///
/// Vertices are listed by id with their data, and every stored edge entry is
/// listed as `from -> to` with its weight, both in insertion order.  An
/// undirected edge therefore shows up once per endpoint.  A destination that
/// has been removed keeps the id it had when it was removed.
pub fn format_debug<T, D>(graph: &Graph<T, D>, fmt: &mut Formatter<'_>) -> std::fmt::Result
where
    T: Debug,
    D: Directedness,
{
    fmt.debug_struct(D::graph_name())
        .field(
            "vertices",
            &FormatDebugWith(|f: &mut Formatter<'_>| {
                f.debug_map()
                    .entries(graph.vertices().map(|v| (v.id(), v.data())))
                    .finish()
            }),
        )
        .field(
            "edges",
            &FormatDebugWith(|f: &mut Formatter<'_>| {
                f.debug_map().entries(edge_entries(graph)).finish()
            }),
        )
        .finish()
}

/// Every stored edge entry as a `from -> to` label paired with its weight.
fn edge_entries<T, D: Directedness>(
    graph: &Graph<T, D>,
) -> impl Iterator<Item = (FormatDebugAs, f64)> {
    graph.vertices().flat_map(move |vertex| {
        vertex.edges().iter().map(move |edge| {
            let target = graph
                .id_of(edge.destination())
                .map_or_else(|| "?".to_string(), |id| id.to_string());
            let tag = FormatDebugAs(format!("{} -> {}", vertex.id(), target));
            (tag, edge.weight())
        })
    })
}
