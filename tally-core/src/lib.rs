//! Tally core library.
//!
//! Hosts two independent algorithms: merge-based inversion counting and a
//! leader-based union-find used for max-spacing clustering of weighted
//! edges. Neither performs I/O; see the `tally-providers-text` crate for
//! readers.

mod clustering;
mod edge;
mod error;
mod ids;
mod inversion;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    clustering::{ClusteringOutcome, MaxSpacingClustering},
    edge::{Edge, Weight},
    error::{ClusteringError, ClusteringErrorCode, Result, UnionFindError, UnionFindErrorCode},
    ids::{ClusterId, VertexId},
    inversion::{Inversions, count_inversions, sort_and_count},
    union_find::{PutOutcome, UnionFind},
};
