//! Load statistics handed to the reporting layer
//!
//! The memory figure is a static formula over the CSR array sizes, not a
//! measurement of the process.

use std::mem::size_of;
use std::time::Duration;

/// Result record of a completed load
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadStats {
    /// Final node count `n`
    pub num_nodes: u64,

    /// Total directed edges stored (`offsets[n]`)
    pub num_edges: u64,

    /// Wall time from start of reading to completed construction
    pub duration: Duration,

    /// Formula-based footprint of the CSR arrays
    pub mem_bytes_estimate: u64,
}

impl LoadStats {
    /// Construction duration in seconds
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    /// Memory estimate in mebibytes
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mem_megabytes(&self) -> f64 {
        self.mem_bytes_estimate as f64 / (1024.0 * 1024.0)
    }
}

/// Estimate CSR footprint: `(n+1)` offsets, `m` neighbor indices, `2n` degree counters
///
/// # Example
///
/// ```
/// use sparse_graph::estimate_memory_bytes;
///
/// // 4 nodes, 4 arcs: 5*8 + 4*4 + 8*8
/// assert_eq!(estimate_memory_bytes(4, 4), 120);
/// ```
#[must_use]
pub fn estimate_memory_bytes(num_nodes: u64, num_edges: u64) -> u64 {
    let offset = size_of::<u64>() as u64;
    let index = size_of::<u32>() as u64;
    let degree = size_of::<u64>() as u64;

    num_nodes
        .saturating_add(1)
        .saturating_mul(offset)
        .saturating_add(num_edges.saturating_mul(index))
        .saturating_add(num_nodes.saturating_mul(2).saturating_mul(degree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_empty() {
        assert_eq!(estimate_memory_bytes(0, 0), 8);
    }

    #[test]
    fn test_estimate_saturates() {
        assert_eq!(estimate_memory_bytes(u64::MAX, u64::MAX), u64::MAX);
    }

    #[test]
    fn test_megabytes() {
        let stats = LoadStats {
            num_nodes: 0,
            num_edges: 0,
            duration: Duration::from_millis(1500),
            mem_bytes_estimate: 2 * 1024 * 1024,
        };
        assert!((stats.mem_megabytes() - 2.0).abs() < f64::EPSILON);
        assert!((stats.seconds() - 1.5).abs() < 1e-9);
    }
}
