//! Graph storage layer
//!
//! Provides the immutable CSR (Compressed Sparse Row) representation and its builder.

pub mod builder;
pub mod csr;

pub use builder::CsrBuilder;
pub use csr::{CsrGraph, NodeId, MAX_NODE_ID};
