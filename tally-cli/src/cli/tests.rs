//! Unit tests for the CLI commands and input helpers.

use super::commands::{derive_data_source_name, run_cluster};
use super::test_helpers::{create_text_file, run_cli_expecting_error, temp_dir};
use super::{
    Cli, CliError, ClusterArgs, Command, ExecutionSummary, InversionsArgs, Outcome, render_summary,
    run_cli,
};

use std::path::Path;

use clap::Parser;
use rstest::rstest;
use tally_core::ClusteringError;
use tally_providers_text::{EdgeListError, IntegerArrayError};
use tracing_subscriber::layer::SubscriberExt;

use tally_test_support::tracing::RecordingLayer;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const PATH_GRAPH: &str = "4\n1 2 1\n3 4 2\n2 3 10\n";

fn cluster_cli(path: &Path, clusters: usize) -> Cli {
    Cli {
        command: Command::Cluster(ClusterArgs {
            path: path.to_path_buf(),
            clusters,
            name: None,
        }),
    }
}

#[rstest]
#[case::override_name("/tmp/numbers.txt", Some("override"), "override")]
#[case::stem_with_extension("/tmp/numbers.txt", None, "numbers")]
#[case::stem_without_extension("/tmp/numbers", None, "numbers")]
#[case::missing_stem("", None, "data_source")]
fn derive_data_source_name_selects_expected_name(
    #[case] raw_path: &str,
    #[case] override_name: Option<&'static str>,
    #[case] expected: &str,
) {
    let name = derive_data_source_name(Path::new(raw_path), override_name);
    assert_eq!(name, expected);
}

#[rstest]
#[case::worked_example("2\n3\n8\n6\n1\n", 5, 5)]
#[case::sorted("1\n2\n3\n", 3, 0)]
#[case::reversed("4\n3\n2\n1\n", 4, 6)]
#[case::empty("", 0, 0)]
fn inversions_counts_file(
    #[case] contents: &str,
    #[case] items: usize,
    #[case] inversions: u64,
) -> TestResult {
    let dir = temp_dir();
    let path = create_text_file(&dir, "numbers.txt", contents)?;
    let cli = Cli {
        command: Command::Inversions(InversionsArgs { path, name: None }),
    };

    let summary = run_cli(cli)?;
    assert_eq!(summary.data_source, "numbers");
    assert_eq!(summary.outcome, Outcome::Inversions { items, inversions });
    Ok(())
}

#[rstest]
#[case::two_clusters(2, 2, Some(10))]
#[case::singletons(4, 4, Some(1))]
#[case::single_cluster(1, 1, None)]
fn cluster_reports_spacing(
    #[case] target: usize,
    #[case] clusters: usize,
    #[case] spacing: Option<i64>,
) -> TestResult {
    let dir = temp_dir();
    let path = create_text_file(&dir, "graph.txt", PATH_GRAPH)?;

    let summary = run_cli(cluster_cli(&path, target))?;
    assert_eq!(summary.data_source, "graph");
    assert_eq!(summary.outcome, Outcome::Clustering { clusters, spacing });
    Ok(())
}

#[rstest]
fn cluster_uses_override_name() -> TestResult {
    let dir = temp_dir();
    let path = create_text_file(&dir, "graph.txt", PATH_GRAPH)?;
    let summary = run_cluster(ClusterArgs {
        path,
        clusters: 2,
        name: Some("custom".to_owned()),
    })?;
    assert_eq!(summary.data_source, "custom");
    Ok(())
}

#[rstest]
#[case::zero_target(0, "CLUSTERING_INVALID_TARGET")]
#[case::too_many_clusters(5, "CLUSTERING_INSUFFICIENT_VERTICES")]
fn cluster_surfaces_core_error_codes(#[case] target: usize, #[case] code: &str) -> TestResult {
    let dir = temp_dir();
    let path = create_text_file(&dir, "graph.txt", PATH_GRAPH)?;

    let err = run_cli_expecting_error(cluster_cli(&path, target), "invalid target must fail");
    assert!(matches!(err, CliError::Clustering(_)));
    assert_eq!(err.code(), Some(code));
    Ok(())
}

#[rstest]
fn zero_target_is_rejected_before_reading() {
    let dir = temp_dir();
    let missing = dir.path().join("missing.txt");
    let err = run_cli_expecting_error(cluster_cli(&missing, 0), "zero target must fail");
    assert!(matches!(
        err,
        CliError::Clustering(ClusteringError::InvalidTargetClusters { got: 0 })
    ));
}

#[rstest]
fn inversions_reports_invalid_integer() -> TestResult {
    let dir = temp_dir();
    let path = create_text_file(&dir, "numbers.txt", "1\nseven\n")?;
    let cli = Cli {
        command: Command::Inversions(InversionsArgs { path, name: None }),
    };

    let err = run_cli_expecting_error(cli, "invalid integer must fail");
    assert!(matches!(
        err,
        CliError::Integers(IntegerArrayError::InvalidInteger { line: 2, .. })
    ));
    assert_eq!(err.code(), None);
    Ok(())
}

#[rstest]
fn cluster_reports_malformed_edges() -> TestResult {
    let dir = temp_dir();
    let path = create_text_file(&dir, "graph.txt", "3\n1 2\n")?;

    let err = run_cli_expecting_error(cluster_cli(&path, 2), "malformed edge must fail");
    assert!(matches!(
        err,
        CliError::Edges(EdgeListError::MalformedEdge { line: 2, .. })
    ));
    Ok(())
}

#[rstest]
fn cluster_rejects_huge_node_count_before_clustering() -> TestResult {
    let dir = temp_dir();
    let path = create_text_file(&dir, "big.txt", "1000000000000\n")?;

    let err = run_cli_expecting_error(cluster_cli(&path, 4), "huge header must fail");
    assert!(matches!(
        err,
        CliError::Edges(EdgeListError::NodeCountTooLarge {
            line: 1,
            value: 1_000_000_000_000,
            ..
        })
    ));
    Ok(())
}

#[rstest]
fn missing_file_reports_path() {
    let dir = temp_dir();
    let missing = dir.path().join("missing.txt");
    let cli = Cli {
        command: Command::Inversions(InversionsArgs {
            path: missing.clone(),
            name: None,
        }),
    };

    match run_cli_expecting_error(cli, "missing file must fail") {
        CliError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn run_cli_records_command_spans() -> TestResult {
    let dir = temp_dir();
    let path = create_text_file(&dir, "graph.txt", PATH_GRAPH)?;
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let summary = tracing::subscriber::with_default(subscriber, || run_cli(cluster_cli(&path, 2)))?;
    assert_eq!(summary.data_source, "graph");

    let run = layer.span_named("cli.run").expect("cli.run span must exist");
    assert_eq!(run.fields.get("command"), Some(&"cluster".to_owned()));

    let cluster = layer
        .span_named("cli.cluster")
        .expect("cli.cluster span must exist");
    assert_eq!(cluster.fields.get("clusters"), Some(&"2".to_owned()));
    assert!(
        cluster
            .fields
            .get("path")
            .is_some_and(|value| value.ends_with("graph.txt"))
    );
    assert_eq!(
        cluster.fields.get("override_name"),
        Some(&"<derived>".to_owned())
    );
    assert!(layer.span_named("clustering.max_spacing").is_some());

    let completed = layer
        .event_with_message("command completed")
        .expect("completion event must be emitted");
    assert_eq!(
        completed.fields.get("data_source"),
        Some(&"graph".to_owned())
    );
    Ok(())
}

#[rstest]
fn open_text_reader_records_path_on_error() {
    let dir = temp_dir();
    let missing = dir.path().join("missing.txt");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let result =
        tracing::subscriber::with_default(subscriber, || run_cli(cluster_cli(&missing, 2)));
    assert!(matches!(result, Err(CliError::Io { .. })));

    let reader = layer
        .span_named("cli.open_text_reader")
        .expect("reader span must exist");
    assert!(
        reader
            .fields
            .get("path")
            .is_some_and(|value| value.ends_with("missing.txt"))
    );
}

#[rstest]
#[case::inversions(Outcome::Inversions { items: 5, inversions: 5 }, "5\n")]
#[case::spacing(Outcome::Clustering { clusters: 4, spacing: Some(-3) }, "-3\n")]
#[case::no_spacing(Outcome::Clustering { clusters: 1, spacing: None }, "none\n")]
fn render_summary_prints_single_value(
    #[case] outcome: Outcome,
    #[case] expected: &str,
) -> TestResult {
    let summary = ExecutionSummary {
        data_source: "demo".to_owned(),
        outcome,
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert_eq!(String::from_utf8(buffer)?, expected);
    Ok(())
}

#[rstest]
#[case::inversions(&["tally", "inversions", "data.txt"], None)]
#[case::cluster_default(&["tally", "cluster", "graph.txt"], Some(4))]
#[case::cluster_short(&["tally", "cluster", "graph.txt", "-k", "3"], Some(3))]
#[case::cluster_long(&["tally", "cluster", "graph.txt", "--clusters", "7", "--name", "g"], Some(7))]
fn cli_parses_arguments(#[case] argv: &[&str], #[case] clusters: Option<usize>) -> TestResult {
    let cli = Cli::try_parse_from(argv)?;
    match (cli.command, clusters) {
        (Command::Inversions(args), None) => assert_eq!(args.path, Path::new("data.txt")),
        (Command::Cluster(args), Some(expected)) => assert_eq!(args.clusters, expected),
        (other, _) => panic!("unexpected command: {other:?}"),
    }
    Ok(())
}

#[rstest]
#[case::negative_target(&["tally", "cluster", "graph.txt", "-k", "-1"])]
#[case::missing_path(&["tally", "inversions"])]
#[case::unknown_command(&["tally", "sort", "data.txt"])]
fn cli_rejects_invalid_arguments(#[case] argv: &[&str]) {
    assert!(Cli::try_parse_from(argv).is_err());
}
