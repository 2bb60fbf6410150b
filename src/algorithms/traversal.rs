//! Depth-bounded breadth-first traversal
//!
//! Level-order BFS over outgoing arcs. A node is recorded the first time it is
//! discovered, so recorded depths are shortest hop counts. Nodes discovered at
//! exactly `max_depth` are reported but never expanded.
//!
//! All scratch state (depth array, queue) is allocated per call; a shared
//! `&CsrGraph` can be traversed from many threads at once.

use crate::storage::{CsrGraph, NodeId};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Depth marker for nodes not yet discovered
const UNVISITED: u32 = u32::MAX;

/// A node reached by [`bounded_bfs_with_depth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsVisit {
    /// Node index
    pub node: u32,
    /// Hop distance from the start node
    pub depth: u32,
}

/// Bounded BFS returning nodes in discovery order
///
/// Start node comes first (depth 0). Returns an empty vector if `start` is not
/// a node of the graph.
///
/// # Example
///
/// ```
/// use sparse_graph::{bounded_bfs, CsrGraph, NodeId};
///
/// let edges = vec![
///     (NodeId(0), NodeId(1)),
///     (NodeId(1), NodeId(2)),
///     (NodeId(0), NodeId(2)),
///     (NodeId(2), NodeId(3)),
/// ];
/// let graph = CsrGraph::from_edges(&edges, false).unwrap();
///
/// assert_eq!(bounded_bfs(&graph, NodeId(0), 1), vec![0, 1, 2]);
/// assert_eq!(bounded_bfs(&graph, NodeId(0), 2), vec![0, 1, 2, 3]);
/// ```
#[must_use]
pub fn bounded_bfs(graph: &CsrGraph, start: NodeId, max_depth: u32) -> Vec<u32> {
    bounded_bfs_with_depth(graph, start, max_depth)
        .into_iter()
        .map(|visit| visit.node)
        .collect()
}

/// Bounded BFS returning each discovered node with its hop depth
///
/// Same order and membership as [`bounded_bfs`]; depths are non-decreasing.
#[must_use]
pub fn bounded_bfs_with_depth(graph: &CsrGraph, start: NodeId, max_depth: u32) -> Vec<BfsVisit> {
    let n = graph.num_nodes();
    let source = start.0 as usize;
    if source >= n {
        return Vec::new();
    }

    let mut depth_of = vec![UNVISITED; n];
    let mut queue = VecDeque::new();
    let mut visited = Vec::new();

    depth_of[source] = 0;
    queue.push_back(start.0);
    visited.push(BfsVisit {
        node: start.0,
        depth: 0,
    });

    while let Some(current) = queue.pop_front() {
        let depth = depth_of[current as usize];
        if depth >= max_depth {
            continue;
        }

        for &neighbor in graph.neighbors(NodeId(current)) {
            let slot = &mut depth_of[neighbor as usize];
            if *slot == UNVISITED {
                *slot = depth + 1;
                visited.push(BfsVisit {
                    node: neighbor,
                    depth: depth + 1,
                });
                queue.push_back(neighbor);
            }
        }
    }

    debug!(
        start = start.0,
        max_depth,
        found = visited.len(),
        "Bounded BFS complete"
    );
    visited
}

/// Arcs of the graph whose endpoints both lie in `nodes`
///
/// Arcs are listed per source in the order sources appear in `nodes`, each
/// block in CSR order. Undirected graphs report both directions of an edge.
///
/// # Example
///
/// ```
/// use sparse_graph::{bounded_bfs, induced_edges, CsrGraph, NodeId};
///
/// let edges = vec![(NodeId(0), NodeId(1)), (NodeId(1), NodeId(2)), (NodeId(2), NodeId(3))];
/// let graph = CsrGraph::from_edges(&edges, true).unwrap();
///
/// let reached = bounded_bfs(&graph, NodeId(0), 1);
/// assert_eq!(induced_edges(&graph, &reached), vec![(0, 1)]);
/// ```
#[must_use]
pub fn induced_edges(graph: &CsrGraph, nodes: &[u32]) -> Vec<(u32, u32)> {
    let members: HashSet<u32> = nodes.iter().copied().collect();
    let mut seen = HashSet::with_capacity(members.len());
    let mut edges = Vec::new();

    for &source in nodes {
        if !seen.insert(source) {
            continue;
        }
        for &target in graph.neighbors(NodeId(source)) {
            if members.contains(&target) {
                edges.push((source, target));
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(directed: bool) -> CsrGraph {
        let edges = vec![
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(2)),
            (NodeId(0), NodeId(2)),
            (NodeId(2), NodeId(3)),
        ];
        CsrGraph::from_edges(&edges, directed).unwrap()
    }

    #[test]
    fn test_bfs_depth_one_undirected() {
        assert_eq!(bounded_bfs(&sample(false), NodeId(0), 1), vec![0, 1, 2]);
    }

    #[test]
    fn test_bfs_depth_zero_is_start_only() {
        assert_eq!(bounded_bfs(&sample(false), NodeId(2), 0), vec![2]);
    }

    #[test]
    fn test_bfs_directed_follows_out_arcs_only() {
        let graph = sample(true);
        assert_eq!(bounded_bfs(&graph, NodeId(3), 10), vec![3]);
        assert_eq!(bounded_bfs(&graph, NodeId(1), 10), vec![1, 2, 3]);
    }

    #[test]
    fn test_bfs_depths_are_shortest_hops() {
        let visits = bounded_bfs_with_depth(&sample(true), NodeId(0), 5);
        assert_eq!(
            visits,
            vec![
                BfsVisit { node: 0, depth: 0 },
                BfsVisit { node: 1, depth: 1 },
                BfsVisit { node: 2, depth: 1 },
                BfsVisit { node: 3, depth: 2 },
            ]
        );
    }

    #[test]
    fn test_bfs_out_of_range_start() {
        assert!(bounded_bfs(&sample(true), NodeId(4), 3).is_empty());
        assert!(bounded_bfs(&CsrGraph::empty(), NodeId(0), 3).is_empty());
    }

    #[test]
    fn test_bfs_handles_cycles_and_self_loops() {
        let edges = vec![
            (NodeId(0), NodeId(0)),
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(0)),
        ];
        let graph = CsrGraph::from_edges(&edges, true).unwrap();
        assert_eq!(bounded_bfs(&graph, NodeId(0), u32::MAX), vec![0, 1]);
    }

    #[test]
    fn test_bfs_is_deterministic() {
        let graph = sample(false);
        let first = bounded_bfs(&graph, NodeId(1), 2);
        let second = bounded_bfs(&graph, NodeId(1), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_induced_edges_undirected_reports_both_arcs() {
        let graph = sample(false);
        let edges = induced_edges(&graph, &[0, 1]);
        assert_eq!(edges, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_induced_edges_ignores_unknown_and_duplicate_nodes() {
        let graph = sample(true);
        let edges = induced_edges(&graph, &[2, 3, 2, 42]);
        assert_eq!(edges, vec![(2, 3)]);
    }
}
