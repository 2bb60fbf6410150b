//! Edge-list ingestion
//!
//! Thin text front end that turns `u v` lines into the ordered edge sequence
//! the CSR builder consumes. It never builds anything itself.

pub mod edge_list;

pub use edge_list::{load_edge_list, parse_edge_list, EdgeList};
