//! CSR (Compressed Sparse Row) graph representation
//!
//! # CSR Format
//!
//! ```text
//! Graph (directed): 0 → 1, 1 → 2, 0 → 2, 2 → 3
//!
//! CSR:
//!   offsets:    [0, 2, 3, 4, 4]  // Node 0: arcs [0..2), Node 1: [2..3), Node 2: [3..4), Node 3: [4..4)
//!   neighbors:  [1, 2, 2, 3]     // Block order = input order of matching edges
//!   out_degree: [2, 1, 1, 0]
//!   in_degree:  [0, 1, 2, 1]
//! ```
//!
//! Offsets and degree counters are 64-bit so edge counts beyond 4B stay exact;
//! neighbor entries are 32-bit node indices.
//!
//! An undirected input edge is stored as two arcs, so [`CsrGraph::num_arcs`]
//! (`offsets[n]`) and [`CsrGraph::num_edges`] (input edges) differ by 2x.

use super::builder::CsrBuilder;
use crate::error::GraphError;

/// Largest supported node id; keeps `n = max + 1` within the 32-bit index width
pub const MAX_NODE_ID: u32 = u32::MAX - 1;

/// Node identifier (zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Immutable CSR graph
///
/// Built once from an edge list via [`CsrGraph::from_edge_list`] or
/// [`CsrGraph::from_edges`]; there is no API to add or remove edges afterwards.
///
/// # Example
///
/// ```
/// use sparse_graph::{CsrGraph, NodeId};
///
/// let edges = vec![(NodeId(0), NodeId(1)), (NodeId(0), NodeId(2))];
/// let graph = CsrGraph::from_edges(&edges, true).unwrap();
///
/// assert_eq!(graph.neighbors(NodeId(0)), &[1, 2]);
/// assert!(graph.neighbors(NodeId(99)).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    /// node i's arcs start at `offsets[i]`
    /// Length: `num_nodes` + 1
    offsets: Vec<u64>,

    /// Arc targets, grouped by source
    /// Length: `offsets[num_nodes]`
    neighbors: Vec<u32>,

    /// Length: `num_nodes`
    out_degree: Vec<u64>,

    /// Length: `num_nodes`
    in_degree: Vec<u64>,

    /// Edges in the input sequence (arcs / 2 when undirected)
    input_edges: usize,

    directed: bool,
}

impl CsrGraph {
    /// Graph with no nodes (`offsets = [0]`)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            offsets: vec![0],
            neighbors: Vec::new(),
            out_degree: Vec::new(),
            in_degree: Vec::new(),
            input_edges: 0,
            directed: true,
        }
    }

    /// Build from an edge list with a known highest node id
    ///
    /// Every index in `0..=max_node` becomes a node, isolated or not.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeIdOverflow`] if `max_node` exceeds [`MAX_NODE_ID`],
    /// [`GraphError::NodeOutOfRange`] if an endpoint exceeds `max_node`, and
    /// [`GraphError::EdgeCountOverflow`] if the arc count cannot be addressed.
    pub fn from_edge_list(
        max_node: NodeId,
        edges: &[(NodeId, NodeId)],
        directed: bool,
    ) -> Result<Self, GraphError> {
        CsrBuilder::with_max_node(max_node, directed)?.build(edges)
    }

    /// Build from an edge list, deriving the highest node id from the edges
    ///
    /// An empty edge list yields the empty graph.
    ///
    /// # Errors
    ///
    /// Same as [`CsrGraph::from_edge_list`].
    pub fn from_edges(edges: &[(NodeId, NodeId)], directed: bool) -> Result<Self, GraphError> {
        let builder = match edges.iter().flat_map(|(u, v)| [*u, *v]).max() {
            Some(max_node) => CsrBuilder::with_max_node(max_node, directed)?,
            None => CsrBuilder::without_nodes(directed),
        };
        builder.build(edges)
    }

    /// Assemble from completed builder output
    pub(crate) fn from_parts(
        offsets: Vec<u64>,
        neighbors: Vec<u32>,
        out_degree: Vec<u64>,
        in_degree: Vec<u64>,
        input_edges: usize,
        directed: bool,
    ) -> Self {
        debug_assert_eq!(offsets.len(), out_degree.len() + 1);
        debug_assert_eq!(out_degree.len(), in_degree.len());
        Self {
            offsets,
            neighbors,
            out_degree,
            in_degree,
            input_edges,
            directed,
        }
    }

    /// Outgoing neighbors of a node, in input order
    ///
    /// Nodes outside `0..num_nodes` have no neighbors.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // offsets[n] fits usize, checked at build
    pub fn neighbors(&self, node: NodeId) -> &[u32] {
        let idx = node.0 as usize;
        if idx >= self.num_nodes() {
            return &[];
        }

        let start = self.offsets[idx] as usize;
        let end = self.offsets[idx + 1] as usize;
        &self.neighbors[start..end]
    }

    /// Out-degree (0 for unknown nodes)
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> u64 {
        self.out_degree.get(node.0 as usize).copied().unwrap_or(0)
    }

    /// In-degree (0 for unknown nodes)
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> u64 {
        self.in_degree.get(node.0 as usize).copied().unwrap_or(0)
    }

    /// Get number of nodes
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.out_degree.len()
    }

    /// Get number of edges in the input sequence
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.input_edges
    }

    /// Get number of stored arcs (2x input edges when undirected)
    #[must_use]
    pub fn num_arcs(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether input edges were stored as single arcs
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Get CSR components `(offsets, neighbors)`
    #[must_use]
    pub fn csr_components(&self) -> (&[u64], &[u32]) {
        (&self.offsets, &self.neighbors)
    }

    /// Get degree arrays `(out_degree, in_degree)`
    #[must_use]
    pub fn degrees(&self) -> (&[u64], &[u64]) {
        (&self.out_degree, &self.in_degree)
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(u32, u32)]) -> Vec<(NodeId, NodeId)> {
        pairs.iter().map(|&(u, v)| (NodeId(u), NodeId(v))).collect()
    }

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::empty();
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.num_arcs(), 0);
        assert_eq!(graph.csr_components().0, &[0]);
    }

    #[test]
    fn test_from_edges_empty_is_empty_graph() {
        let graph = CsrGraph::from_edges(&[], true).unwrap();
        assert_eq!(graph, CsrGraph::empty());
    }

    #[test]
    fn test_from_edge_list_no_edges_max_zero() {
        let graph = CsrGraph::from_edge_list(NodeId(0), &[], true).unwrap();
        assert_eq!(graph.num_nodes(), 1);
        assert_eq!(graph.csr_components().0, &[0, 0]);
        assert!(graph.neighbors(NodeId(0)).is_empty());
    }

    #[test]
    fn test_directed_structure() {
        let graph =
            CsrGraph::from_edges(&edges(&[(0, 1), (1, 2), (0, 2), (2, 3)]), true).unwrap();

        let (offsets, neighbors) = graph.csr_components();
        assert_eq!(offsets, &[0, 2, 3, 4, 4]);
        assert_eq!(neighbors, &[1, 2, 2, 3]);

        let (out_degree, in_degree) = graph.degrees();
        assert_eq!(out_degree, &[2, 1, 1, 0]);
        assert_eq!(in_degree, &[0, 1, 2, 1]);
    }

    #[test]
    fn test_undirected_structure() {
        let graph =
            CsrGraph::from_edges(&edges(&[(0, 1), (1, 2), (0, 2), (2, 3)]), false).unwrap();

        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.num_arcs(), 8);
        let (out_degree, in_degree) = graph.degrees();
        assert_eq!(out_degree, &[2, 2, 3, 1]);
        assert_eq!(in_degree, &[2, 2, 3, 1]);

        // Block order follows input order of matching edges
        assert_eq!(graph.neighbors(NodeId(0)), &[1, 2]);
        assert_eq!(graph.neighbors(NodeId(1)), &[0, 2]);
        assert_eq!(graph.neighbors(NodeId(2)), &[1, 0, 3]);
        assert_eq!(graph.neighbors(NodeId(3)), &[2]);
    }

    #[test]
    fn test_isolated_nodes_below_max_are_kept() {
        let graph = CsrGraph::from_edges(&edges(&[(5, 2)]), true).unwrap();
        assert_eq!(graph.num_nodes(), 6);
        for node in [0, 1, 3, 4] {
            assert!(graph.neighbors(NodeId(node)).is_empty());
            assert_eq!(graph.out_degree(NodeId(node)), 0);
        }
    }

    #[test]
    fn test_out_of_range_queries() {
        let graph = CsrGraph::from_edges(&edges(&[(0, 1)]), true).unwrap();
        assert!(graph.neighbors(NodeId(2)).is_empty());
        assert!(graph.neighbors(NodeId(u32::MAX)).is_empty());
        assert_eq!(graph.out_degree(NodeId(7)), 0);
        assert_eq!(graph.in_degree(NodeId(7)), 0);
    }

    #[test]
    fn test_self_loops() {
        let directed = CsrGraph::from_edges(&edges(&[(1, 1)]), true).unwrap();
        assert_eq!(directed.neighbors(NodeId(1)), &[1]);

        let undirected = CsrGraph::from_edges(&edges(&[(1, 1)]), false).unwrap();
        assert_eq!(undirected.neighbors(NodeId(1)), &[1, 1]);
        assert_eq!(undirected.num_edges(), 1);
        assert_eq!(undirected.num_arcs(), 2);
        assert_eq!(undirected.out_degree(NodeId(1)), 2);
        assert_eq!(undirected.in_degree(NodeId(1)), 2);
    }

    #[test]
    fn test_duplicate_edges_preserved() {
        let graph = CsrGraph::from_edges(&edges(&[(0, 1), (0, 1), (0, 1)]), true).unwrap();
        assert_eq!(graph.neighbors(NodeId(0)), &[1, 1, 1]);
        assert_eq!(graph.in_degree(NodeId(1)), 3);
    }

    #[test]
    fn test_node_id_overflow_rejected() {
        let result = CsrGraph::from_edges(&edges(&[(0, u32::MAX)]), true);
        assert!(matches!(
            result,
            Err(GraphError::NodeIdOverflow { id, .. }) if id == u64::from(u32::MAX)
        ));
    }

    #[test]
    fn test_endpoint_beyond_declared_max_rejected() {
        let result = CsrGraph::from_edge_list(NodeId(2), &edges(&[(0, 3)]), true);
        assert!(matches!(
            result,
            Err(GraphError::NodeOutOfRange { node: 3, num_nodes: 3 })
        ));
    }
}
