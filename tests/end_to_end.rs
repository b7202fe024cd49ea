use adjgraph::{prelude::*, tracing_support::init_tracing};

fn ids<'g, T: 'g>(iter: impl Iterator<Item = &'g Vertex<T>>) -> Vec<VertexId> {
    iter.map(Vertex::id).collect()
}

#[test]
fn test_build_and_print_undirected() {
    init_tracing();
    let mut graph = UndirectedGraph::new();
    graph.add_vertex(1, "one".to_string());
    graph.add_vertex(2, "two".to_string());
    graph.add_vertex(3, "three".to_string());
    graph.add_edge(1, 2, 1.5).unwrap();
    graph.add_edge(1, 3, 2.0).unwrap();

    assert_eq!(
        graph.to_string(),
        "1: 2[1.50] 3[2.00]\n2: 1[1.50]\n3: 1[2.00]\n"
    );
    graph.print_graph();
}

#[test]
fn test_build_and_print_directed() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex(1, ());
    graph.add_vertex(2, ());
    graph.add_vertex(3, ());
    graph.add_edge(1, 2, 1.5).unwrap();
    graph.add_edge(1, 3, 2.0).unwrap();
    graph.add_edge(3, 3, 0.0).unwrap();

    assert_eq!(graph.to_string(), "1: 2[1.50] 3[2.00]\n2:\n3: 3[0.00]\n");
}

#[test]
fn test_traversals_on_example_graph() {
    let mut graph = UndirectedGraph::new();
    for id in 1..=4 {
        graph.add_vertex(id, id * 10);
    }
    graph.add_edge(1, 2, 0.0).unwrap();
    graph.add_edge(1, 3, 0.0).unwrap();
    graph.add_edge(2, 4, 0.0).unwrap();

    assert_eq!(
        ids(graph.bfs_from(1).unwrap().take(7)),
        vec![1, 2, 3, 1, 4, 1, 2]
    );
    assert_eq!(ids(graph.dfs_from(1).unwrap().take(4)), vec![1, 3, 1, 3]);

    let data: Vec<_> = graph
        .bfs_from(4)
        .unwrap()
        .take(3)
        .map(|v| *v.data())
        .collect();
    assert_eq!(data, vec![40, 20, 10]);
}

#[test]
fn test_edit_cycle() {
    let mut graph = UndirectedGraph::new();
    for id in 1..=4 {
        graph.add_vertex(id, ());
    }
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(2, 3, 1.0).unwrap();
    graph.add_edge(3, 4, 1.0).unwrap();
    graph.add_edge(4, 1, 1.0).unwrap();
    assert_eq!(graph.num_edges(), 8);

    assert_eq!(graph.remove_edge(2, 3), Ok(2));
    assert_eq!(graph.remove_edges(4), Ok(4));
    assert_eq!(graph.to_string(), "1: 2[1.00]\n2: 1[1.00]\n3:\n4:\n");

    assert_eq!(graph.add_edge(2, 2, 1.0), Err(GraphError::SelfLoop(2)));
    assert_eq!(graph.remove_edge(2, 5), Err(GraphError::NotFound(5)));

    let removed = graph.remove_vertex(1).unwrap();
    assert_eq!(removed.edges().len(), 1);
    assert_eq!(graph.to_string(), "2: 1[1.00]\n3:\n4:\n");
    assert_eq!(graph.purge_dangling_edges(), 1);
    assert_eq!(graph.to_string(), "2:\n3:\n4:\n");
    assert!(graph.remove_vertex(1).is_none());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GraphError::NotFound(3).to_string(),
        "vertex 3 does not exist"
    );
    assert_eq!(
        GraphError::SelfLoop(7).to_string(),
        "cannot add an edge from vertex 7 to itself"
    );
}
