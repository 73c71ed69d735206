//! Error types for the tally core library.
//!
//! Defines the error enums exposed by the union-find and clustering APIs and
//! the stable machine-readable codes attached to each variant.

use std::fmt;

use thiserror::Error;

use crate::ids::{ClusterId, VertexId};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::UnionFind`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// A cluster identifier passed to [`crate::UnionFind::union`] does not
    /// name a live cluster leader.
    #[error("cluster {cluster} is not a registered leader")]
    InvalidLeader {
        /// The identifier that failed validation.
        cluster: ClusterId,
    },
}

define_error_codes! {
    /// Stable codes describing [`UnionFindError`] variants.
    enum UnionFindErrorCode for UnionFindError {
        /// A cluster identifier did not name a live leader.
        InvalidLeader => InvalidLeader { .. } => "UNION_FIND_INVALID_LEADER",
    }
}

/// Error type produced when configuring or running
/// [`crate::MaxSpacingClustering`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ClusteringError {
    /// The requested number of clusters must be at least one.
    #[error("target cluster count must be at least 1 (got {got})")]
    InvalidTargetClusters {
        /// The invalid target supplied by the caller.
        got: usize,
    },
    /// There are fewer vertices than requested clusters.
    #[error("{vertices} vertices cannot form {target} clusters")]
    InsufficientVertices {
        /// Number of vertices supplied.
        vertices: usize,
        /// Requested number of clusters.
        target: usize,
    },
    /// An edge referenced a vertex outside the supplied vertex set.
    #[error("edge references unknown vertex {vertex}")]
    UnknownVertex {
        /// The vertex that was not registered.
        vertex: VertexId,
    },
}

define_error_codes! {
    /// Stable codes describing [`ClusteringError`] variants.
    enum ClusteringErrorCode for ClusteringError {
        /// The requested number of clusters must be at least one.
        InvalidTargetClusters => InvalidTargetClusters { .. } => "CLUSTERING_INVALID_TARGET",
        /// There are fewer vertices than requested clusters.
        InsufficientVertices => InsufficientVertices { .. } => "CLUSTERING_INSUFFICIENT_VERTICES",
        /// An edge referenced a vertex outside the supplied vertex set.
        UnknownVertex => UnknownVertex { .. } => "CLUSTERING_UNKNOWN_VERTEX",
    }
}

/// Convenient alias for results returned by the clustering API.
pub type Result<T> = core::result::Result<T, ClusteringError>;
