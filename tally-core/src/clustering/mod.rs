//! Max-spacing k-clustering on top of [`UnionFind`].
//!
//! Every vertex starts in its own cluster. Edges are fed to the union-find in
//! ascending cost order until only `k` clusters remain; the spacing is the
//! cost of the cheapest remaining edge whose endpoints still sit in different
//! clusters. This is Kruskal's algorithm stopped early, i.e. single-link
//! clustering.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    edge::{Edge, Weight},
    error::{ClusteringError, Result},
    ids::VertexId,
    union_find::UnionFind,
};

/// Configured single-link clustering run.
///
/// # Examples
/// ```
/// use tally_core::{Edge, MaxSpacingClustering, VertexId};
///
/// let vertices = (1..=4).map(VertexId::new);
/// let edges = [
///     Edge::from((1, 2, 1)),
///     Edge::from((3, 4, 2)),
///     Edge::from((2, 3, 10)),
/// ];
/// let outcome = MaxSpacingClustering::new(2)?.run(vertices, &edges)?;
/// assert_eq!(outcome.cluster_count(), 2);
/// assert_eq!(outcome.spacing(), Some(10));
/// # Ok::<(), tally_core::ClusteringError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxSpacingClustering {
    target: NonZeroUsize,
}

impl MaxSpacingClustering {
    /// Creates a run that stops at `target_clusters` clusters.
    ///
    /// # Errors
    /// Returns [`ClusteringError::InvalidTargetClusters`] when
    /// `target_clusters` is zero.
    pub fn new(target_clusters: usize) -> Result<Self> {
        NonZeroUsize::new(target_clusters)
            .map(|target| Self { target })
            .ok_or(ClusteringError::InvalidTargetClusters {
                got: target_clusters,
            })
    }

    /// Returns the configured number of clusters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target_clusters(&self) -> NonZeroUsize { self.target }

    /// Clusters `vertices` using `edges`, which may arrive in any order.
    ///
    /// Duplicate vertices are registered once. If the graph has more than
    /// `k` connected components the run ends with more than `k` clusters and
    /// no spacing.
    ///
    /// # Errors
    /// Returns [`ClusteringError::InsufficientVertices`] when there are fewer
    /// distinct vertices than requested clusters, and
    /// [`ClusteringError::UnknownVertex`] when an edge names a vertex outside
    /// `vertices`.
    #[instrument(
        name = "clustering.max_spacing",
        skip_all,
        fields(target = self.target.get(), edges = edges.len()),
    )]
    pub fn run<I>(&self, vertices: I, edges: &[Edge]) -> Result<ClusteringOutcome>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let target = self.target.get();
        let mut union_find = UnionFind::new();
        for vertex in vertices {
            union_find.insert_vertex(vertex);
        }
        if union_find.len() < target {
            return Err(ClusteringError::InsufficientVertices {
                vertices: union_find.len(),
                target,
            });
        }
        ensure_known_endpoints(&union_find, edges)?;

        let mut sorted = edges.to_vec();
        sorted.sort_unstable();

        let mut merges = 0_usize;
        let mut spacing = None;
        for edge in &sorted {
            if union_find.len() > target {
                if union_find.put(edge).is_merge() {
                    merges += 1;
                }
            } else if !union_find.connected(edge.source(), edge.target()) {
                spacing = Some(edge.weight());
                break;
            }
        }

        info!(
            clusters = union_find.len(),
            merges,
            ?spacing,
            "clustering finished"
        );
        Ok(ClusteringOutcome {
            union_find,
            spacing,
            merges,
        })
    }
}

fn ensure_known_endpoints(union_find: &UnionFind, edges: &[Edge]) -> Result<()> {
    edges
        .iter()
        .flat_map(|edge| [edge.source(), edge.target()])
        .find(|vertex| union_find.find(*vertex).is_none())
        .map_or(Ok(()), |vertex| {
            Err(ClusteringError::UnknownVertex { vertex })
        })
}

/// Result of a [`MaxSpacingClustering::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusteringOutcome {
    union_find: UnionFind,
    spacing: Option<Weight>,
    merges: usize,
}

impl ClusteringOutcome {
    /// Cost of the cheapest edge joining two different final clusters, or
    /// `None` when no such edge exists.
    #[must_use]
    #[rustfmt::skip]
    pub const fn spacing(&self) -> Option<Weight> { self.spacing }

    /// Number of clusters at the end of the run.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.union_find.len()
    }

    /// Number of edges that merged two clusters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn merges(&self) -> usize { self.merges }

    /// Final cluster membership.
    #[must_use]
    #[rustfmt::skip]
    pub const fn union_find(&self) -> &UnionFind { &self.union_find }

    /// Consumes the outcome, returning the final union-find.
    #[must_use]
    pub fn into_union_find(self) -> UnionFind {
        self.union_find
    }
}
