//! Construction-time error taxonomy
//!
//! Queries never fail: out-of-range nodes and unbuilt graphs yield empty results.
//! Only building (and reading the edge list that feeds it) can go wrong.

use thiserror::Error;

/// Errors raised while building a CSR graph or reading an edge list
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node id does not fit the 32-bit index width
    #[error("node id {id} exceeds maximum supported id {max}")]
    NodeIdOverflow {
        /// Offending id as read
        id: u64,
        /// Largest accepted id
        max: u32,
    },

    /// An edge endpoint lies outside the declared node range
    #[error("edge endpoint {node} outside node range 0..{num_nodes}")]
    NodeOutOfRange {
        /// Offending endpoint
        node: u32,
        /// Declared node count
        num_nodes: usize,
    },

    /// Directed edge count does not fit the neighbor-count accumulator
    #[error("edge count overflow: {edges} input edges cannot be addressed")]
    EdgeCountOverflow {
        /// Number of input edges
        edges: usize,
    },

    /// The graph was already built; build a new instance instead
    #[error("graph is already built; construct a new instance to reload")]
    AlreadyBuilt,

    /// I/O error while reading an edge list
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
