//! Stable error codes exposed by the core API.

use rstest::rstest;
use tally_core::{
    ClusterId, ClusteringError, ClusteringErrorCode, UnionFindError, UnionFindErrorCode, VertexId,
};

#[rstest]
#[case(
    UnionFindError::InvalidLeader { cluster: ClusterId::new(3) },
    UnionFindErrorCode::InvalidLeader,
    "UNION_FIND_INVALID_LEADER",
)]
fn returns_expected_union_find_code(
    #[case] error: UnionFindError,
    #[case] expected: UnionFindErrorCode,
    #[case] raw: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), raw);
    assert_eq!(expected.to_string(), raw);
}

#[rstest]
#[case(
    ClusteringError::InvalidTargetClusters { got: 0 },
    ClusteringErrorCode::InvalidTargetClusters,
    "CLUSTERING_INVALID_TARGET",
)]
#[case(
    ClusteringError::InsufficientVertices { vertices: 2, target: 3 },
    ClusteringErrorCode::InsufficientVertices,
    "CLUSTERING_INSUFFICIENT_VERTICES",
)]
#[case(
    ClusteringError::UnknownVertex { vertex: VertexId::new(9) },
    ClusteringErrorCode::UnknownVertex,
    "CLUSTERING_UNKNOWN_VERTEX",
)]
fn returns_expected_clustering_code(
    #[case] error: ClusteringError,
    #[case] expected: ClusteringErrorCode,
    #[case] raw: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), raw);
}

#[test]
fn messages_name_the_offending_value() {
    let err = UnionFindError::InvalidLeader {
        cluster: ClusterId::new(12),
    };
    assert_eq!(err.to_string(), "cluster 12 is not a registered leader");

    let err = ClusteringError::UnknownVertex {
        vertex: VertexId::new(4),
    };
    assert_eq!(err.to_string(), "edge references unknown vertex 4");
}
