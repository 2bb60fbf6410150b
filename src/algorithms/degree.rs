//! Degree-ranked node selection
//!
//! Scores come from the degree arrays filled during the counting pass, so a
//! scan is a single linear sweep with no neighbor access.

use crate::storage::{CsrGraph, NodeId};
use tracing::info;

/// Node with the highest score and that score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeResult {
    /// Winning node (lowest index among ties)
    pub node: NodeId,
    /// Its combined degree
    pub degree: u64,
}

/// Score of a single node: `out_degree` and/or `in_degree`, summed
///
/// Unknown nodes score 0.
#[must_use]
pub fn degree_score(
    graph: &CsrGraph,
    node: NodeId,
    consider_in: bool,
    consider_out: bool,
) -> u64 {
    combined(
        graph.out_degree(node),
        graph.in_degree(node),
        consider_in,
        consider_out,
    )
}

fn combined(out: u64, inc: u64, consider_in: bool, consider_out: bool) -> u64 {
    let out = if consider_out { out } else { 0 };
    let inc = if consider_in { inc } else { 0 };
    out + inc
}

/// Find the node with the strictly highest degree score
///
/// Nodes are scanned in increasing index order and only a strictly greater
/// score replaces the current best, so ties go to the lowest index. An empty
/// graph (or one where every score is 0) reports node 0 with degree 0.
///
/// # Example
///
/// ```
/// use sparse_graph::{highest_degree_node, CsrGraph, NodeId};
///
/// let edges = vec![
///     (NodeId(0), NodeId(1)),
///     (NodeId(1), NodeId(2)),
///     (NodeId(0), NodeId(2)),
///     (NodeId(2), NodeId(3)),
/// ];
/// let graph = CsrGraph::from_edges(&edges, true).unwrap();
///
/// let best = highest_degree_node(&graph, true, true);
/// assert_eq!(best.node, NodeId(2));
/// assert_eq!(best.degree, 3);
/// ```
#[must_use]
pub fn highest_degree_node(
    graph: &CsrGraph,
    consider_in: bool,
    consider_out: bool,
) -> DegreeResult {
    let (out_degree, in_degree) = graph.degrees();

    let mut best = DegreeResult {
        node: NodeId(0),
        degree: 0,
    };

    for (idx, (&out, &inc)) in out_degree.iter().zip(in_degree).enumerate() {
        let degree = combined(out, inc, consider_in, consider_out);
        if degree > best.degree {
            // idx < num_nodes <= u32::MAX
            #[allow(clippy::cast_possible_truncation)]
            let node = NodeId(idx as u32);
            best = DegreeResult { node, degree };
        }
    }

    info!(node = best.node.0, degree = best.degree, "Highest degree node");
    best
}
