//! Simple example demonstrating sparse-graph usage
//!
//! Run with: `RUST_LOG=info cargo run --example simple_graph [edges.txt] [--undirected]`
//!
//! Without a path, a small SNAP-style edge list is written to a temp file first.

use sparse_graph::{induced_edges, GraphBackend, LoadConfig, NodeId, SparseGraph};
use tracing_subscriber::EnvFilter;

const SAMPLE_EDGES: &str = "\
# Directed graph: sample
# FromNodeId\tToNodeId
0\t1
0\t2
0\t3
1\t2
3\t4
4\t5
5\t0
";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let directed = !args.iter().any(|a| a == "--undirected");
    let path = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => std::path::PathBuf::from(path),
        None => {
            let path = std::env::temp_dir().join("sparse_graph_sample.txt");
            tokio::fs::write(&path, SAMPLE_EDGES).await?;
            path
        }
    };

    // 1. Load
    println!("📊 Loading {} ...", path.display());
    let mut graph = SparseGraph::new();
    let config = LoadConfig::default().with_directed(directed);
    let stats = graph.load_from_path(&path, &config).await?;
    println!(
        "  ✅ {} nodes, {} arcs in {:.3}s (~{:.3} MB)\n",
        stats.num_nodes,
        stats.num_edges,
        stats.seconds(),
        stats.mem_megabytes()
    );

    // 2. Degree
    let hub = graph.highest_degree_node(true, true);
    println!("🔍 Highest degree node: {} (degree {})", hub.node.0, hub.degree);
    println!("  neighbors: {:?}\n", graph.neighbors(hub.node));

    // 3. Bounded BFS from node 0
    for visit in graph.bfs_with_depth(NodeId(0), 2) {
        println!("  depth {} → node {}", visit.depth, visit.node);
    }

    if let Some(csr) = graph.csr() {
        let reached = graph.bfs(NodeId(0), 2);
        println!("\n  subgraph arcs: {:?}", induced_edges(csr, &reached));
    }

    println!("\n✨ Example complete!");
    Ok(())
}
