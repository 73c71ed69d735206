//! Leader-based union-find built incrementally from weighted edges.
//!
//! Every known vertex maps directly to the [`ClusterId`] of its cluster, and
//! every cluster keeps the list of its members. Lookups are therefore `O(1)`
//! without path compression; merging relabels each member of the absorbed
//! cluster, and the larger cluster always absorbs the smaller one so each
//! vertex is relabelled at most `O(log n)` times.
//!
//! A cluster's leader is stored in its own member list, so member-list
//! lengths are true cluster sizes.

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::{
    edge::Edge,
    error::UnionFindError,
    ids::{ClusterId, VertexId},
};

/// Effect of a single [`UnionFind::put`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PutOutcome {
    /// Neither endpoint was known; a new cluster led by the edge source was
    /// created.
    Created {
        /// The new cluster.
        cluster: ClusterId,
    },
    /// One endpoint was unknown and joined the other endpoint's cluster.
    Attached {
        /// The newly registered vertex.
        vertex: VertexId,
        /// The cluster it joined.
        cluster: ClusterId,
    },
    /// The endpoints belonged to different clusters, which were merged.
    Merged {
        /// The surviving cluster.
        kept: ClusterId,
        /// The cluster whose leader entry was removed.
        absorbed: ClusterId,
    },
    /// Both endpoints were already in the same cluster.
    Unchanged {
        /// The cluster containing both endpoints.
        cluster: ClusterId,
    },
}

impl PutOutcome {
    /// Returns `true` when the call reduced the number of clusters.
    #[must_use]
    pub const fn is_merge(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }
}

/// Disjoint-set structure mapping vertices to cluster leaders.
///
/// # Examples
/// ```
/// use tally_core::{Edge, UnionFind, VertexId};
///
/// let mut uf = UnionFind::new();
/// uf.put(&Edge::from((1, 2, 5)));
/// uf.put(&Edge::from((3, 4, 1)));
/// assert_eq!(uf.len(), 2);
///
/// uf.put(&Edge::from((2, 3, 9)));
/// assert_eq!(uf.len(), 1);
/// assert_eq!(uf.find(VertexId::new(1)), uf.find(VertexId::new(4)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnionFind {
    leader: HashMap<VertexId, ClusterId>,
    clusters: HashMap<ClusterId, Vec<VertexId>>,
}

impl UnionFind {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cluster containing `vertex`, or `None` when the vertex has
    /// not been seen yet.
    #[must_use]
    pub fn find(&self, vertex: VertexId) -> Option<ClusterId> {
        self.leader.get(&vertex).copied()
    }

    /// Returns `true` when both vertices are known and share a cluster.
    #[must_use]
    pub fn connected(&self, left: VertexId, right: VertexId) -> bool {
        match (self.find(left), self.find(right)) {
            (Some(l), Some(r)) => l == r,
            _ => false,
        }
    }

    /// Ingests one edge, growing or merging clusters as needed.
    ///
    /// The edge weight is ignored; callers choose the order in which edges
    /// arrive. A self-loop on an unseen vertex creates a singleton cluster.
    ///
    /// # Examples
    /// ```
    /// use tally_core::{Edge, PutOutcome, UnionFind};
    ///
    /// let mut uf = UnionFind::new();
    /// assert!(matches!(uf.put(&Edge::from((1, 2, 0))), PutOutcome::Created { .. }));
    /// assert!(matches!(uf.put(&Edge::from((2, 3, 0))), PutOutcome::Attached { .. }));
    /// assert!(matches!(uf.put(&Edge::from((1, 3, 0))), PutOutcome::Unchanged { .. }));
    /// ```
    pub fn put(&mut self, edge: &Edge) -> PutOutcome {
        let source = edge.source();
        let target = edge.target();

        let outcome = match (self.find(source), self.find(target)) {
            (Some(left), Some(right)) if left == right => PutOutcome::Unchanged { cluster: left },
            (Some(left), Some(right)) => {
                let (kept, absorbed) = self.absorb_smaller(left, right);
                PutOutcome::Merged { kept, absorbed }
            }
            (Some(cluster), None) => {
                self.attach(target, cluster);
                PutOutcome::Attached {
                    vertex: target,
                    cluster,
                }
            }
            (None, Some(cluster)) => {
                self.attach(source, cluster);
                PutOutcome::Attached {
                    vertex: source,
                    cluster,
                }
            }
            (None, None) => {
                let cluster = self.insert_singleton(source);
                if target != source {
                    self.attach(target, cluster);
                }
                PutOutcome::Created { cluster }
            }
        };

        trace!(
            source = source.get(),
            target = target.get(),
            weight = edge.weight(),
            ?outcome,
            "ingested edge"
        );
        outcome
    }

    /// Registers `vertex` as its own cluster unless it is already known.
    ///
    /// Returns the cluster that contains the vertex afterwards.
    ///
    /// # Examples
    /// ```
    /// use tally_core::{UnionFind, VertexId};
    ///
    /// let mut uf = UnionFind::new();
    /// let cluster = uf.insert_vertex(VertexId::new(3));
    /// assert_eq!(cluster.leader(), VertexId::new(3));
    /// assert_eq!(uf.insert_vertex(VertexId::new(3)), cluster);
    /// assert_eq!(uf.len(), 1);
    /// ```
    pub fn insert_vertex(&mut self, vertex: VertexId) -> ClusterId {
        match self.find(vertex) {
            Some(cluster) => cluster,
            None => self.insert_singleton(vertex),
        }
    }

    /// Merges two clusters, keeping whichever has more members.
    ///
    /// On equal sizes `left` is kept. Merging a cluster with itself returns
    /// it unchanged.
    ///
    /// # Errors
    /// Returns [`UnionFindError::InvalidLeader`] when either identifier does
    /// not name a registered cluster.
    ///
    /// # Examples
    /// ```
    /// use tally_core::{ClusterId, Edge, UnionFind, UnionFindError, VertexId};
    ///
    /// let mut uf = UnionFind::new();
    /// uf.put(&Edge::from((1, 2, 0)));
    /// uf.put(&Edge::from((3, 4, 0)));
    /// uf.put(&Edge::from((3, 5, 0)));
    /// let small = uf.find(VertexId::new(1)).expect("vertex 1 is known");
    /// let large = uf.find(VertexId::new(5)).expect("vertex 5 is known");
    ///
    /// assert_eq!(uf.union(small, large), Ok(large));
    /// assert_eq!(
    ///     uf.union(ClusterId::new(2), large),
    ///     Err(UnionFindError::InvalidLeader { cluster: ClusterId::new(2) }),
    /// );
    /// ```
    pub fn union(
        &mut self,
        left: ClusterId,
        right: ClusterId,
    ) -> Result<ClusterId, UnionFindError> {
        self.ensure_leader(left)?;
        self.ensure_leader(right)?;
        if left == right {
            return Ok(left);
        }
        let (kept, _) = self.absorb_smaller(left, right);
        Ok(kept)
    }

    /// Returns the number of clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns `true` when no vertex has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Returns the number of known vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.leader.len()
    }

    /// Returns the members of `cluster`, leader included, in join order.
    #[must_use]
    pub fn members(&self, cluster: ClusterId) -> Option<&[VertexId]> {
        self.clusters.get(&cluster).map(Vec::as_slice)
    }

    /// Returns a read-only view of every cluster and its members.
    #[must_use]
    pub fn clusters(&self) -> &HashMap<ClusterId, Vec<VertexId>> {
        &self.clusters
    }

    fn ensure_leader(&self, cluster: ClusterId) -> Result<(), UnionFindError> {
        if self.clusters.contains_key(&cluster) {
            Ok(())
        } else {
            Err(UnionFindError::InvalidLeader { cluster })
        }
    }

    fn insert_singleton(&mut self, vertex: VertexId) -> ClusterId {
        let cluster = ClusterId::led_by(vertex);
        self.leader.insert(vertex, cluster);
        self.clusters.insert(cluster, vec![vertex]);
        cluster
    }

    fn attach(&mut self, vertex: VertexId, cluster: ClusterId) {
        self.leader.insert(vertex, cluster);
        self.clusters.entry(cluster).or_default().push(vertex);
    }

    /// Returns `(kept, absorbed)`.
    fn absorb_smaller(&mut self, left: ClusterId, right: ClusterId) -> (ClusterId, ClusterId) {
        let size = |cluster| self.clusters.get(&cluster).map_or(0, Vec::len);
        let (kept, absorbed) = if size(left) >= size(right) {
            (left, right)
        } else {
            (right, left)
        };
        self.merge(kept, absorbed);
        (kept, absorbed)
    }

    fn merge(&mut self, keep: ClusterId, drop: ClusterId) {
        let Some(moved) = self.clusters.remove(&drop) else {
            return;
        };
        for vertex in &moved {
            self.leader.insert(*vertex, keep);
        }
        self.clusters.entry(keep).or_default().extend(moved);
    }
}

impl fmt::Display for UnionFind {
    /// Renders clusters ordered by id, members in join order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ordered: Vec<_> = self.clusters.iter().collect();
        ordered.sort_unstable_by_key(|(cluster, _)| **cluster);
        f.debug_map()
            .entries(ordered.into_iter().map(|(cluster, members)| {
                let ids: Vec<u64> = members.iter().map(|vertex| vertex.get()).collect();
                (cluster.get(), ids)
            }))
            .finish()
    }
}
