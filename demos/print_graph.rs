//! Example that builds a graph from the command line, prints its adjacency
//! lists, and prints the first few vertices of a BFS and a DFS.
//!
//! Usage:
//!   cargo run --example print_graph -- -v 1 -v 2 -v 3 -e 1:2:1.5 -e 1:3:2
//!   cargo run --example print_graph -- --directed -v 1 -v 2 -e 1:2 --start 1

use std::process;

use adjgraph::{prelude::*, tracing_support::init_tracing};
use clap::Parser;

/// Build an adjacency-list graph and print it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vertex id to add (repeatable)
    #[arg(short = 'v', long = "vertex")]
    vertices: Vec<VertexId>,

    /// Edge as FROM:TO or FROM:TO:WEIGHT (repeatable)
    #[arg(short = 'e', long = "edge", value_parser = parse_edge)]
    edges: Vec<(VertexId, VertexId, f64)>,

    /// Store each edge once instead of as a mirrored pair
    #[arg(long)]
    directed: bool,

    /// Vertex id to start the traversals from
    #[arg(long)]
    start: Option<VertexId>,

    /// Max number of vertices to print for each traversal
    #[arg(long, default_value_t = 10)]
    limit: usize,
}

fn parse_edge(s: &str) -> Result<(VertexId, VertexId, f64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    let (from, to, weight) = match parts.as_slice() {
        [from, to] => (*from, *to, "0"),
        [from, to, weight] => (*from, *to, *weight),
        _ => return Err(format!("expected FROM:TO[:WEIGHT], got '{s}'")),
    };
    let from = from
        .parse::<VertexId>()
        .map_err(|err| format!("bad source '{from}': {err}"))?;
    let to = to
        .parse::<VertexId>()
        .map_err(|err| format!("bad target '{to}': {err}"))?;
    let weight = weight
        .parse::<f64>()
        .map_err(|err| format!("bad weight '{weight}': {err}"))?;
    Ok((from, to, weight))
}

fn build<D: Directedness>(args: &Args) -> Result<Graph<(), D>, GraphError> {
    let mut graph = Graph::with_capacity(args.vertices.len());
    for &id in &args.vertices {
        graph.add_vertex(id, ());
    }
    for &(from, to, weight) in &args.edges {
        graph.add_edge(from, to, weight)?;
    }
    Ok(graph)
}

fn report<D: Directedness>(graph: &Graph<(), D>, args: &Args) -> Result<(), GraphError> {
    graph.print_graph();
    let first = graph.vertices().next().map(Vertex::id);
    let Some(start) = args.start.or(first) else {
        return Ok(());
    };
    let bfs: Vec<_> = graph
        .bfs_from(start)?
        .take(args.limit)
        .map(Vertex::id)
        .collect();
    let dfs: Vec<_> = graph
        .dfs_from(start)?
        .take(args.limit)
        .map(Vertex::id)
        .collect();
    println!("bfs from {start}: {bfs:?}");
    println!("dfs from {start}: {dfs:?}");
    Ok(())
}

fn run(args: &Args) -> Result<(), GraphError> {
    if args.directed {
        report(&build::<Directed>(args)?, args)
    } else {
        report(&build::<Undirected>(args)?, args)
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
