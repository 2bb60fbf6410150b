//! Load configuration for edge-list ingestion

/// Default comment marker (SNAP datasets prefix headers with `#`)
pub const DEFAULT_COMMENT_PREFIX: char = '#';

/// Default initial edge reservation (1M edges)
pub const DEFAULT_RESERVE_EDGES: usize = 1_000_000;

/// Options controlling how an edge list is read and built
///
/// # Example
///
/// ```
/// use sparse_graph::LoadConfig;
///
/// let config = LoadConfig::default().with_directed(false).with_comment_prefix('%');
/// assert!(!config.directed);
/// assert_eq!(config.comment_prefix, '%');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    /// Treat each input edge as a single arc (`true`) or as two arcs (`false`)
    pub directed: bool,

    /// Lines starting with this character are skipped
    pub comment_prefix: char,

    /// Initial capacity of the edge buffer
    pub reserve_edges: usize,
}

impl LoadConfig {
    /// Set directedness
    #[must_use]
    pub const fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Set comment marker
    #[must_use]
    pub const fn with_comment_prefix(mut self, prefix: char) -> Self {
        self.comment_prefix = prefix;
        self
    }

    /// Set initial edge reservation
    #[must_use]
    pub const fn with_reserve_edges(mut self, reserve: usize) -> Self {
        self.reserve_edges = reserve;
        self
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            directed: true,
            comment_prefix: DEFAULT_COMMENT_PREFIX,
            reserve_edges: DEFAULT_RESERVE_EDGES,
        }
    }
}
