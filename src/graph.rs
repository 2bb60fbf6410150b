//! Graph backends behind a common capability trait
//!
//! [`SparseGraph`] is the CSR-backed implementation. It starts Empty, becomes
//! Built after one successful [`GraphBackend::load`], and stays Built: loading
//! again is rejected and leaves the existing structure untouched.

use crate::algorithms::{bounded_bfs, bounded_bfs_with_depth, highest_degree_node};
use crate::algorithms::{BfsVisit, DegreeResult};
use crate::config::LoadConfig;
use crate::error::GraphError;
use crate::io::{load_edge_list, EdgeList};
use crate::stats::{estimate_memory_bytes, LoadStats};
use crate::storage::{CsrGraph, NodeId};
use anyhow::Result;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Capabilities every graph representation provides
///
/// Query methods are total: an unloaded backend or an unknown node yields an
/// empty or degenerate answer.
pub trait GraphBackend {
    /// Build from a parsed edge list (once per instance)
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::AlreadyBuilt`] on a second load, or a build error.
    fn load(&mut self, input: &EdgeList, directed: bool) -> Result<LoadStats>;

    /// Node with the highest combined degree (ties to the lowest index)
    fn highest_degree_node(&self, consider_in: bool, consider_out: bool) -> DegreeResult;

    /// Nodes within `max_depth` hops of `start`, in discovery order
    fn bfs(&self, start: NodeId, max_depth: u32) -> Vec<u32>;

    /// Outgoing neighbors of `node`
    fn neighbors(&self, node: NodeId) -> &[u32];

    /// Number of nodes
    fn num_nodes(&self) -> usize;

    /// Number of input edges (an undirected edge counts once)
    fn num_edges(&self) -> u64;
}

/// CSR-backed graph with an explicit Empty/Built lifecycle
///
/// # Example
///
/// ```
/// use sparse_graph::{parse_edge_list, GraphBackend, LoadConfig, NodeId, SparseGraph};
///
/// let list = parse_edge_list("0 1\n1 2\n0 2\n2 3\n".as_bytes(), &LoadConfig::default()).unwrap();
///
/// let mut graph = SparseGraph::new();
/// assert!(graph.bfs(NodeId(0), 3).is_empty());
///
/// let stats = graph.load(&list, false).unwrap();
/// assert_eq!(stats.num_nodes, 4);
/// assert_eq!(stats.num_edges, 8);
/// assert_eq!(graph.num_edges(), 4);
/// assert_eq!(graph.bfs(NodeId(0), 1), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SparseGraph {
    csr: Option<CsrGraph>,
}

impl SparseGraph {
    /// Create an Empty (unbuilt) graph
    #[must_use]
    pub const fn new() -> Self {
        Self { csr: None }
    }

    /// Whether construction has completed
    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.csr.is_some()
    }

    /// Built CSR structure, if any
    #[must_use]
    pub const fn csr(&self) -> Option<&CsrGraph> {
        self.csr.as_ref()
    }

    /// BFS with per-node hop depth; empty when unbuilt
    #[must_use]
    pub fn bfs_with_depth(&self, start: NodeId, max_depth: u32) -> Vec<BfsVisit> {
        self.csr
            .as_ref()
            .map(|csr| bounded_bfs_with_depth(csr, start, max_depth))
            .unwrap_or_default()
    }

    /// Read an edge-list file and build, timing from the start of reading
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::AlreadyBuilt`] before touching the file if this
    /// instance is Built; otherwise propagates read and build errors.
    pub async fn load_from_path<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: &LoadConfig,
    ) -> Result<LoadStats> {
        self.ensure_empty()?;
        let started = Instant::now();

        let input = load_edge_list(path, config).await?;
        let csr = input.build(config.directed)?;

        Ok(self.install(csr, started))
    }

    fn ensure_empty(&self) -> Result<(), GraphError> {
        if self.is_built() {
            return Err(GraphError::AlreadyBuilt);
        }
        Ok(())
    }

    fn install(&mut self, csr: CsrGraph, started: Instant) -> LoadStats {
        let num_nodes = csr.num_nodes() as u64;
        let num_arcs = csr.num_arcs() as u64;
        let stats = LoadStats {
            num_nodes,
            num_edges: num_arcs,
            duration: started.elapsed(),
            mem_bytes_estimate: estimate_memory_bytes(num_nodes, num_arcs),
        };

        info!(
            nodes = stats.num_nodes,
            edges = csr.num_edges(),
            arcs = stats.num_edges,
            directed = csr.is_directed(),
            seconds = stats.seconds(),
            mem_mb = stats.mem_megabytes(),
            "Graph loaded"
        );

        self.csr = Some(csr);
        stats
    }
}

impl From<CsrGraph> for SparseGraph {
    fn from(csr: CsrGraph) -> Self {
        Self { csr: Some(csr) }
    }
}

impl GraphBackend for SparseGraph {
    fn load(&mut self, input: &EdgeList, directed: bool) -> Result<LoadStats> {
        self.ensure_empty()?;
        let started = Instant::now();
        let csr = input.build(directed)?;
        Ok(self.install(csr, started))
    }

    fn highest_degree_node(&self, consider_in: bool, consider_out: bool) -> DegreeResult {
        match &self.csr {
            Some(csr) => highest_degree_node(csr, consider_in, consider_out),
            None => DegreeResult {
                node: NodeId(0),
                degree: 0,
            },
        }
    }

    fn bfs(&self, start: NodeId, max_depth: u32) -> Vec<u32> {
        self.csr
            .as_ref()
            .map(|csr| bounded_bfs(csr, start, max_depth))
            .unwrap_or_default()
    }

    fn neighbors(&self, node: NodeId) -> &[u32] {
        match &self.csr {
            Some(csr) => csr.neighbors(node),
            None => &[],
        }
    }

    fn num_nodes(&self) -> usize {
        self.csr.as_ref().map_or(0, CsrGraph::num_nodes)
    }

    fn num_edges(&self) -> u64 {
        self.csr.as_ref().map_or(0, |csr| csr.num_edges() as u64)
    }
}
