//! Identifier types for vertices and clusters.
//!
//! A cluster is named after its leader vertex, so both identifiers share the
//! same numeric space. Keeping them as distinct types stops a raw vertex from
//! being handed to [`crate::UnionFind::union`] by accident.

use std::fmt;

/// Identifier of a graph vertex.
///
/// # Examples
/// ```
/// use tally_core::VertexId;
///
/// let id = VertexId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new vertex identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a cluster, equal to the id of its leader vertex.
///
/// # Examples
/// ```
/// use tally_core::{ClusterId, VertexId};
///
/// let id = ClusterId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.leader(), VertexId::new(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    ///
    /// Constructing an identifier does not register a cluster; operations
    /// that require a live leader validate it.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }

    /// Returns the vertex that leads this cluster.
    #[rustfmt::skip]
    #[must_use]
    pub const fn leader(self) -> VertexId { VertexId(self.0) }

    pub(crate) const fn led_by(vertex: VertexId) -> Self {
        Self(vertex.0)
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
