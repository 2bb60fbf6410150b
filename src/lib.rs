//! sparse-graph: memory-compact immutable graphs from edge lists
//!
//! # Overview
//!
//! sparse-graph turns a raw `u v` edge list into a CSR (Compressed Sparse Row)
//! adjacency structure sized for graphs with billions of nodes, then answers
//! read-only queries against it: neighbor lookup, highest-degree node and
//! depth-bounded BFS.
//!
//! # Quick Start
//!
//! ```no_run
//! use sparse_graph::{GraphBackend, LoadConfig, NodeId, SparseGraph};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = SparseGraph::new();
//! let stats = graph
//!     .load_from_path("web-Google.txt", &LoadConfig::default().with_directed(true))
//!     .await?;
//! println!("{} nodes, {} arcs, ~{:.1} MB", stats.num_nodes, stats.num_edges, stats.mem_megabytes());
//!
//! let hub = graph.highest_degree_node(true, true);
//! let reached = graph.bfs(hub.node, 2);
//! println!("{} nodes within 2 hops of {}", reached.len(), hub.node.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Storage**: two-phase CSR builder (degree count, prefix-sum offsets, cursor insertion)
//! - **Algorithms**: degree ranking and bounded BFS over the immutable structure
//! - **I/O**: edge-list reader feeding the builder once
//! - **Backends**: [`GraphBackend`] trait so alternate representations can be swapped in

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod stats;
pub mod storage;

// Re-export core types
pub use algorithms::{
    bounded_bfs, bounded_bfs_with_depth, degree_score, highest_degree_node, induced_edges,
    BfsVisit, DegreeResult,
};
pub use config::LoadConfig;
pub use error::GraphError;
pub use graph::{GraphBackend, SparseGraph};
pub use io::{load_edge_list, parse_edge_list, EdgeList};
pub use stats::{estimate_memory_bytes, LoadStats};
pub use storage::{CsrBuilder, CsrGraph, NodeId, MAX_NODE_ID};

// Error type
pub use anyhow::{Error, Result};
