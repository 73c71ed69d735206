//! Weighted edge lists with a node-count header.
//!
//! ```text
//! 4
//! 1 2 7
//! 2 3 1
//! ```
//!
//! Vertices are numbered `1..=node_count`, and the count may not exceed
//! [`MAX_NODE_COUNT`].

use std::io::{self, BufRead};

use tally_core::{Edge, VertexId, Weight};
use thiserror::Error;
use tracing::debug;

/// Largest node count a header may declare.
///
/// Every vertex becomes a cluster up front, so the header alone decides how
/// much memory a clustering run needs.
pub const MAX_NODE_COUNT: u64 = 1 << 24;

/// Errors raised while reading an [`EdgeList`].
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Reading from the underlying source failed.
    #[error("failed to read edge list: {0}")]
    Io(#[from] io::Error),
    /// The source contained no non-blank lines.
    #[error("edge list is missing its node-count header")]
    MissingHeader,
    /// The header was not a positive integer.
    #[error("line {line}: `{value}` is not a positive node count")]
    InvalidNodeCount {
        /// 1-based line number.
        line: usize,
        /// Trimmed line content.
        value: String,
    },
    /// The header declared more than [`MAX_NODE_COUNT`] vertices.
    #[error("line {line}: node count {value} exceeds the limit of {max}")]
    NodeCountTooLarge {
        /// 1-based line number.
        line: usize,
        /// Declared node count.
        value: u64,
        /// Largest accepted node count.
        max: u64,
    },
    /// An edge line did not have the `source target cost` shape.
    #[error("line {line}: expected `source target cost`, found `{content}`")]
    MalformedEdge {
        /// 1-based line number.
        line: usize,
        /// Trimmed line content.
        content: String,
    },
    /// An edge endpoint fell outside `1..=node_count`.
    #[error("line {line}: vertex {vertex} is outside 1..={node_count}")]
    VertexOutOfRange {
        /// 1-based line number.
        line: usize,
        /// The offending endpoint.
        vertex: u64,
        /// Declared node count.
        node_count: u64,
    },
}

/// Named graph read from text.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use tally_core::Edge;
/// use tally_providers_text::EdgeList;
///
/// let list = EdgeList::try_from_reader("demo", Cursor::new("3\n1 2 5\n2 3 -1\n"))?;
/// assert_eq!(list.node_count(), 3);
/// assert_eq!(list.edges(), &[Edge::from((1, 2, 5)), Edge::from((2, 3, -1))]);
/// # Ok::<(), tally_providers_text::EdgeListError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeList {
    name: String,
    node_count: u64,
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Parses a header line followed by one edge per line. Blank lines are
    /// skipped.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] when reading fails, the header is missing,
    /// invalid or above [`MAX_NODE_COUNT`], or an edge line is malformed or
    /// names an unknown vertex.
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        let mut header = None;
        let mut edges = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let text = line?;
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            let number = index + 1;
            match header {
                None => header = Some(parse_node_count(trimmed, number)?),
                Some(node_count) => edges.push(parse_edge(trimmed, number, node_count)?),
            }
        }

        let node_count = header.ok_or(EdgeListError::MissingHeader)?;
        let list = Self {
            name: name.into(),
            node_count,
            edges,
        };
        debug!(
            name = %list.name,
            node_count = list.node_count,
            edges = list.edges.len(),
            "read edge list"
        );
        Ok(list)
    }

    /// Returns the source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared number of vertices.
    #[must_use]
    pub fn node_count(&self) -> u64 {
        self.node_count
    }

    /// Returns every vertex id, `1..=node_count`.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + use<> {
        (1..=self.node_count).map(VertexId::new)
    }

    /// Returns the edges in file order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

fn parse_node_count(text: &str, line: usize) -> Result<u64, EdgeListError> {
    let count = text
        .parse::<u64>()
        .ok()
        .filter(|&count| count > 0)
        .ok_or_else(|| EdgeListError::InvalidNodeCount {
            line,
            value: text.to_owned(),
        })?;
    if count > MAX_NODE_COUNT {
        return Err(EdgeListError::NodeCountTooLarge {
            line,
            value: count,
            max: MAX_NODE_COUNT,
        });
    }
    Ok(count)
}

fn parse_edge(text: &str, line: usize, node_count: u64) -> Result<Edge, EdgeListError> {
    let malformed = || EdgeListError::MalformedEdge {
        line,
        content: text.to_owned(),
    };
    let mut fields = text.split_whitespace();
    let (Some(raw_source), Some(raw_target), Some(raw_cost), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };
    let source = raw_source.parse::<u64>().map_err(|_| malformed())?;
    let target = raw_target.parse::<u64>().map_err(|_| malformed())?;
    let cost = raw_cost.parse::<Weight>().map_err(|_| malformed())?;

    for vertex in [source, target] {
        if !(1..=node_count).contains(&vertex) {
            return Err(EdgeListError::VertexOutOfRange {
                line,
                vertex,
                node_count,
            });
        }
    }
    Ok(Edge::from((source, target, cost)))
}
