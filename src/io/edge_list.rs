//! Plain-text edge-list reader
//!
//! # Format
//!
//! ```text
//! # SNAP-style header comment
//! 0 1
//! 1 2     trailing tokens are ignored
//!
//! 2 3
//! ```
//!
//! One `u v` pair per line. Blank lines and comment lines are skipped; the
//! comment prefix is matched after leading whitespace. Integer tokens are
//! parsed strictly: a token must be entirely decimal digits, so `1 2abc` is a
//! malformed line rather than the edge `(1, 2)`. Malformed lines are skipped
//! and counted. An id that parses but exceeds [`MAX_NODE_ID`] aborts the read.

use crate::config::LoadConfig;
use crate::error::GraphError;
use crate::storage::{CsrBuilder, CsrGraph, NodeId, MAX_NODE_ID};
use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;
use tokio::io::AsyncBufReadExt;
use tracing::{debug, warn};

/// Parsed edge list, ready for a single build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    /// Edges in file order
    pub edges: Vec<(NodeId, NodeId)>,

    /// Highest id seen on any side of any edge (`None` when no edges)
    pub max_node: Option<NodeId>,

    /// Non-blank, non-comment lines that did not hold a valid pair
    pub skipped_lines: usize,
}

impl EdgeList {
    /// Build the CSR graph for this edge list
    ///
    /// # Errors
    ///
    /// Propagates builder errors (edge count overflow).
    pub fn build(&self, directed: bool) -> Result<CsrGraph, GraphError> {
        let builder = match self.max_node {
            Some(max_node) => CsrBuilder::with_max_node(max_node, directed)?,
            None => CsrBuilder::without_nodes(directed),
        };
        builder.build(&self.edges)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            max_node: None,
            skipped_lines: 0,
        }
    }

    fn push(&mut self, u: NodeId, v: NodeId) {
        self.edges.push((u, v));
        let top = u.max(v);
        if self.max_node.map_or(true, |max| top > max) {
            self.max_node = Some(top);
        }
    }

    fn accept_line(&mut self, line: &str, line_no: usize, config: &LoadConfig) -> Result<()> {
        match parse_line(line, config.comment_prefix)
            .with_context(|| format!("edge list line {line_no}"))?
        {
            Line::Edge(u, v) => self.push(u, v),
            Line::Ignored => {}
            Line::Malformed => self.skipped_lines += 1,
        }
        Ok(())
    }

    fn finish(self) -> Self {
        if self.skipped_lines > 0 {
            warn!(skipped = self.skipped_lines, "Skipped malformed edge-list lines");
        }
        debug!(
            edges = self.edges.len(),
            max_node = ?self.max_node.map(|n| n.0),
            "Edge list parsed"
        );
        self
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Line {
    Edge(NodeId, NodeId),
    Ignored,
    Malformed,
}

fn parse_line(line: &str, comment_prefix: char) -> Result<Line, GraphError> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with(comment_prefix) {
        return Ok(Line::Ignored);
    }

    let mut tokens = line.split_whitespace();
    let (Some(u), Some(v)) = (tokens.next(), tokens.next()) else {
        return Ok(Line::Malformed);
    };
    let (Ok(u), Ok(v)) = (u.parse::<u64>(), v.parse::<u64>()) else {
        return Ok(Line::Malformed);
    };

    Ok(Line::Edge(node_id(u)?, node_id(v)?))
}

fn node_id(raw: u64) -> Result<NodeId, GraphError> {
    u32::try_from(raw)
        .ok()
        .filter(|&id| id <= MAX_NODE_ID)
        .map(NodeId)
        .ok_or(GraphError::NodeIdOverflow {
            id: raw,
            max: MAX_NODE_ID,
        })
}

/// Parse an edge list from any buffered reader
///
/// # Errors
///
/// Returns an error on read failure or when an id exceeds [`MAX_NODE_ID`].
///
/// # Example
///
/// ```
/// use sparse_graph::{parse_edge_list, LoadConfig, NodeId};
///
/// let text = "# header\n0 1\nbad line\n\n3 2\n";
/// let list = parse_edge_list(text.as_bytes(), &LoadConfig::default()).unwrap();
///
/// assert_eq!(list.edges, vec![(NodeId(0), NodeId(1)), (NodeId(3), NodeId(2))]);
/// assert_eq!(list.max_node, Some(NodeId(3)));
/// assert_eq!(list.skipped_lines, 1);
/// ```
pub fn parse_edge_list<R: BufRead>(reader: R, config: &LoadConfig) -> Result<EdgeList> {
    let mut list = EdgeList::with_capacity(config.reserve_edges);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read edge list")?;
        list.accept_line(&line, idx + 1, config)?;
    }

    Ok(list.finish())
}

/// Read an edge-list file asynchronously
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or when an id
/// exceeds [`MAX_NODE_ID`].
pub async fn load_edge_list<P: AsRef<Path>>(path: P, config: &LoadConfig) -> Result<EdgeList> {
    let path = path.as_ref();
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open edge list {}", path.display()))?;

    let mut lines = tokio::io::BufReader::new(file).lines();
    let mut list = EdgeList::with_capacity(config.reserve_edges);
    let mut line_no = 0;

    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("Failed to read edge list {}", path.display()))?
    {
        line_no += 1;
        list.accept_line(&line, line_no, config)?;
    }

    Ok(list.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_line_variants() {
        assert_eq!(parse_line("0 1", '#').unwrap(), Line::Edge(NodeId(0), NodeId(1)));
        assert_eq!(parse_line("  7\t9 extra", '#').unwrap(), Line::Edge(NodeId(7), NodeId(9)));
        assert_eq!(parse_line("", '#').unwrap(), Line::Ignored);
        assert_eq!(parse_line("   ", '#').unwrap(), Line::Ignored);
        assert_eq!(parse_line("# FromNodeId ToNodeId", '#').unwrap(), Line::Ignored);
        assert_eq!(parse_line("% matrix market", '%').unwrap(), Line::Ignored);
        assert_eq!(parse_line("5", '#').unwrap(), Line::Malformed);
        assert_eq!(parse_line("a b", '#').unwrap(), Line::Malformed);
        assert_eq!(parse_line("-1 2", '#').unwrap(), Line::Malformed);
    }

    #[test]
    fn test_parse_line_tokens_are_strict() {
        assert_eq!(parse_line("1 2abc", '#').unwrap(), Line::Malformed);
        assert_eq!(parse_line("1x 2", '#').unwrap(), Line::Malformed);
        assert_eq!(parse_line("1 2 abc", '#').unwrap(), Line::Edge(NodeId(1), NodeId(2)));
        assert_eq!(parse_line("  # indented comment", '#').unwrap(), Line::Ignored);

        let list = parse_edge_list("1 2abc
0 1
".as_bytes(), &LoadConfig::default()).unwrap();
        assert_eq!(list.edges, vec![(NodeId(0), NodeId(1))]);
        assert_eq!(list.skipped_lines, 1);
    }

    #[test]
    fn test_parse_line_overflow() {
        let err = parse_line("0 4294967295", '#').unwrap_err();
        assert!(matches!(err, GraphError::NodeIdOverflow { id: 4_294_967_295, .. }));

        let err = parse_line("99999999999 0", '#').unwrap_err();
        assert!(matches!(err, GraphError::NodeIdOverflow { id: 99_999_999_999, .. }));
    }

    #[test]
    fn test_parse_edge_list_tracks_max() {
        let text = "2 9\n4 1\n";
        let list = parse_edge_list(text.as_bytes(), &LoadConfig::default()).unwrap();
        assert_eq!(list.max_node, Some(NodeId(9)));
        assert_eq!(list.skipped_lines, 0);
    }

    #[test]
    fn test_parse_edge_list_empty() {
        let text = "# only comments\n\n";
        let list = parse_edge_list(text.as_bytes(), &LoadConfig::default()).unwrap();
        assert_eq!(list, EdgeList::default());

        let graph = list.build(true).unwrap();
        assert_eq!(graph.num_nodes(), 0);
    }

    #[test]
    fn test_parse_edge_list_overflow_reports_line() {
        let text = "0 1\n1 5000000000\n";
        let err = parse_edge_list(text.as_bytes(), &LoadConfig::default()).unwrap_err();

        assert!(format!("{err:#}").contains("line 2"));
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::NodeIdOverflow { .. })
        ));
    }

    #[test]
    fn test_edge_list_build() {
        let text = "0 1\n1 2\n0 2\n2 3\n";
        let list = parse_edge_list(text.as_bytes(), &LoadConfig::default()).unwrap();
        let graph = list.build(false).unwrap();
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.num_arcs(), 8);
    }

    #[tokio::test]
    async fn test_load_edge_list_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# Directed graph").unwrap();
        writeln!(file, "0 1").unwrap();
        writeln!(file, "garbage").unwrap();
        writeln!(file, "1 2").unwrap();
        file.flush().unwrap();

        let list = load_edge_list(file.path(), &LoadConfig::default())
            .await
            .unwrap();
        assert_eq!(list.edges, vec![(NodeId(0), NodeId(1)), (NodeId(1), NodeId(2))]);
        assert_eq!(list.skipped_lines, 1);
    }

    #[tokio::test]
    async fn test_load_edge_list_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = load_edge_list(&missing, &LoadConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open edge list"));
    }
}
