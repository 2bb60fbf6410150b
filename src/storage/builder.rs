//! Two-phase CSR construction
//!
//! 1. Counting pass: per-node out/in degrees (undirected edges count as two arcs).
//! 2. Offset pass: prefix sum over out-degrees, so `neighbors` is allocated once
//!    at its exact size.
//! 3. Insertion pass: a per-build cursor array, seeded from the offsets, places
//!    each arc at the next free slot of its source block.
//!
//! Nothing is exposed until all three passes finish, so a failed build never
//! leaves a partially filled structure behind.

use super::csr::{CsrGraph, NodeId, MAX_NODE_ID};
use crate::error::GraphError;
use tracing::debug;

/// Builds a [`CsrGraph`] from an ordered edge sequence
///
/// # Example
///
/// ```
/// use sparse_graph::{CsrBuilder, NodeId};
///
/// let builder = CsrBuilder::with_max_node(NodeId(3), false).unwrap();
/// let graph = builder.build(&[(NodeId(0), NodeId(3))]).unwrap();
///
/// assert_eq!(graph.num_nodes(), 4);
/// assert_eq!(graph.neighbors(NodeId(3)), &[0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CsrBuilder {
    num_nodes: usize,
    directed: bool,
}

impl CsrBuilder {
    /// Builder for nodes `0..=max_node`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeIdOverflow`] if `max_node` exceeds [`MAX_NODE_ID`].
    pub fn with_max_node(max_node: NodeId, directed: bool) -> Result<Self, GraphError> {
        if max_node.0 > MAX_NODE_ID {
            return Err(GraphError::NodeIdOverflow {
                id: u64::from(max_node.0),
                max: MAX_NODE_ID,
            });
        }

        Ok(Self {
            num_nodes: max_node.0 as usize + 1,
            directed,
        })
    }

    /// Builder for a graph with no nodes; only an empty edge list is accepted
    #[must_use]
    pub const fn without_nodes(directed: bool) -> Self {
        Self {
            num_nodes: 0,
            directed,
        }
    }

    /// Number of nodes the built graph will have
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Run all three passes and return the finished graph
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeOutOfRange`] for endpoints outside `0..num_nodes`
    /// and [`GraphError::EdgeCountOverflow`] if the arc count cannot be addressed.
    #[allow(clippy::cast_possible_truncation)] // total arcs checked to fit usize
    pub fn build(&self, edges: &[(NodeId, NodeId)]) -> Result<CsrGraph, GraphError> {
        let total_arcs = self.total_arcs(edges.len())?;
        self.check_endpoints(edges)?;

        let n = self.num_nodes;
        let (out_degree, in_degree) = self.count_degrees(edges);
        let offsets = prefix_offsets(&out_degree);
        debug_assert_eq!(offsets[n], total_arcs as u64);

        let neighbors = self.insert_arcs(edges, &offsets, total_arcs);

        debug!(
            nodes = n,
            edges = edges.len(),
            arcs = total_arcs,
            directed = self.directed,
            "CSR construction complete"
        );

        Ok(CsrGraph::from_parts(
            offsets,
            neighbors,
            out_degree,
            in_degree,
            edges.len(),
            self.directed,
        ))
    }

    /// Arc count as an addressable length (`m` or `2m`)
    fn total_arcs(&self, num_edges: usize) -> Result<usize, GraphError> {
        let arcs = if self.directed {
            Some(num_edges)
        } else {
            num_edges.checked_mul(2)
        };

        arcs.filter(|&arcs| u64::try_from(arcs).is_ok())
            .ok_or(GraphError::EdgeCountOverflow { edges: num_edges })
    }

    fn check_endpoints(&self, edges: &[(NodeId, NodeId)]) -> Result<(), GraphError> {
        let out_of_range = edges
            .iter()
            .flat_map(|(u, v)| [u.0, v.0])
            .find(|&node| node as usize >= self.num_nodes);

        match out_of_range {
            Some(node) => Err(GraphError::NodeOutOfRange {
                node,
                num_nodes: self.num_nodes,
            }),
            None => Ok(()),
        }
    }

    fn count_degrees(&self, edges: &[(NodeId, NodeId)]) -> (Vec<u64>, Vec<u64>) {
        let mut out_degree = vec![0_u64; self.num_nodes];
        let mut in_degree = vec![0_u64; self.num_nodes];

        for &(u, v) in edges {
            let (u, v) = (u.0 as usize, v.0 as usize);
            out_degree[u] += 1;
            in_degree[v] += 1;
            if !self.directed {
                out_degree[v] += 1;
                in_degree[u] += 1;
            }
        }

        (out_degree, in_degree)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn insert_arcs(
        &self,
        edges: &[(NodeId, NodeId)],
        offsets: &[u64],
        total_arcs: usize,
    ) -> Vec<u32> {
        let mut neighbors = vec![0_u32; total_arcs];

        // Scratch: next free slot per node, dropped with this frame
        let mut cursor = offsets[..self.num_nodes].to_vec();

        for &(u, v) in edges {
            let slot = &mut cursor[u.0 as usize];
            neighbors[*slot as usize] = v.0;
            *slot += 1;

            if !self.directed {
                let slot = &mut cursor[v.0 as usize];
                neighbors[*slot as usize] = u.0;
                *slot += 1;
            }
        }

        debug_assert!(cursor.iter().zip(&offsets[1..]).all(|(c, end)| c == end));
        neighbors
    }
}

/// `offsets[0] = 0`, `offsets[i] = offsets[i-1] + out_degree[i-1]`
fn prefix_offsets(out_degree: &[u64]) -> Vec<u64> {
    let mut offsets = Vec::with_capacity(out_degree.len() + 1);
    let mut running = 0_u64;
    offsets.push(running);

    for &degree in out_degree {
        running += degree;
        offsets.push(running);
    }

    offsets
}
