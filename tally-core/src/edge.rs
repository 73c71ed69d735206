//! Weighted undirected edges fed to the union-find.

use std::cmp::Ordering;

use crate::ids::VertexId;

/// Edge cost. The union-find ignores it; drivers use it for ordering.
pub type Weight = i64;

/// A weighted edge between two vertices.
///
/// Edges order by `(weight, source, target)` so a sorted edge list is
/// deterministic even when costs tie.
///
/// # Examples
/// ```
/// use tally_core::{Edge, VertexId};
///
/// let edge = Edge::new(VertexId::new(1), VertexId::new(2), 7);
/// assert_eq!(edge.source(), VertexId::new(1));
/// assert_eq!(edge.target(), VertexId::new(2));
/// assert_eq!(edge.weight(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: Weight,
}

impl Edge {
    /// Creates an edge from its endpoints and cost.
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge cost.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(u64, u64, Weight)> for Edge {
    fn from((source, target, weight): (u64, u64, Weight)) -> Self {
        Self::new(VertexId::new(source), VertexId::new(target), weight)
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
