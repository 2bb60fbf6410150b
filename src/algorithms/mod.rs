//! Read-only graph queries (degree ranking, bounded BFS)
//!
//! Every query is total: unknown nodes and empty graphs produce empty or
//! degenerate results rather than errors.

pub mod degree;
pub mod traversal;

pub use degree::{degree_score, highest_degree_node, DegreeResult};
pub use traversal::{bounded_bfs, bounded_bfs_with_depth, induced_edges, BfsVisit};
