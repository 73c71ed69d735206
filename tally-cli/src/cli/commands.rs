//! Command implementations and argument parsing for the `tally` CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tally_core::{ClusteringError, MaxSpacingClustering, Weight, count_inversions};
use tally_providers_text::{EdgeList, EdgeListError, IntegerArray, IntegerArrayError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_TARGET_CLUSTERS: usize = 4;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tally",
    about = "Count inversions and build max-spacing clusterings."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Count the inversions in a file holding one integer per line.
    Inversions(InversionsArgs),
    /// Merge a weighted graph down to `k` clusters and report the spacing.
    Cluster(ClusterArgs),
}

/// Arguments accepted by the `inversions` command.
#[derive(Debug, Args, Clone)]
pub struct InversionsArgs {
    /// Path to a text file with one integer per line.
    pub path: PathBuf,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments accepted by the `cluster` command.
#[derive(Debug, Args, Clone)]
pub struct ClusterArgs {
    /// Path to an edge list: a node count line, then `source target cost` lines.
    pub path: PathBuf,

    /// Number of clusters to stop at.
    #[arg(
        short = 'k',
        long = "clusters",
        default_value_t = DEFAULT_TARGET_CLUSTERS,
        value_parser = clap::value_parser!(usize),
    )]
    pub clusters: usize,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Integer array ingestion failed.
    #[error(transparent)]
    Integers(#[from] IntegerArrayError),
    /// Edge list ingestion failed.
    #[error(transparent)]
    Edges(#[from] EdgeListError),
    /// Clustering rejected its configuration or input.
    #[error(transparent)]
    Clustering(#[from] ClusteringError),
}

impl CliError {
    /// Stable error code when the failure originated in `tally-core`.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Clustering(err) => Some(err.code().as_str()),
            _ => None,
        }
    }
}

/// Value computed by a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Result of the `inversions` command.
    Inversions {
        /// Number of values read.
        items: usize,
        /// Number of inverted pairs.
        inversions: u64,
    },
    /// Result of the `cluster` command.
    Clustering {
        /// Number of clusters left.
        clusters: usize,
        /// Maximum spacing, if any edge crosses two clusters.
        spacing: Option<Weight>,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Name of the input the command ran against.
    pub data_source: String,
    /// The computed value.
    pub outcome: Outcome,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading the input or running the command fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tally_cli::cli::{Cli, Command, InversionsArgs, Outcome, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "2\n3\n8\n6\n1\n")?;
/// let cli = Cli {
///     command: Command::Inversions(InversionsArgs {
///         path: file.path().to_path_buf(),
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.outcome, Outcome::Inversions { items: 5, inversions: 5 });
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let summary = match cli.command {
        Command::Inversions(args) => {
            Span::current().record("command", field::display("inversions"));
            run_inversions(args)?
        }
        Command::Cluster(args) => {
            Span::current().record("command", field::display("cluster"));
            run_cluster(args)?
        }
    };
    info!(
        data_source = summary.data_source.as_str(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.inversions",
    err,
    skip(args),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_inversions(args: InversionsArgs) -> Result<ExecutionSummary, CliError> {
    let InversionsArgs { path, name } = args;
    record_input(&path, name.as_deref());
    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let array = IntegerArray::try_from_reader(chosen_name, open_text_reader(&path)?)?;
    let inversions = count_inversions(array.values());
    info!(
        data_source = array.name(),
        items = array.len(),
        inversions,
        "inversion count completed"
    );
    Ok(ExecutionSummary {
        data_source: array.name().to_owned(),
        outcome: Outcome::Inversions {
            items: array.len(),
            inversions,
        },
    })
}

#[instrument(
    name = "cli.cluster",
    err,
    skip(args),
    fields(path = field::Empty, clusters = args.clusters, override_name = field::Empty),
)]
pub(super) fn run_cluster(args: ClusterArgs) -> Result<ExecutionSummary, CliError> {
    let ClusterArgs {
        path,
        clusters,
        name,
    } = args;
    let clustering = MaxSpacingClustering::new(clusters)?;
    record_input(&path, name.as_deref());
    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let graph = EdgeList::try_from_reader(chosen_name, open_text_reader(&path)?)?;
    let outcome = clustering.run(graph.vertices(), graph.edges())?;
    Ok(ExecutionSummary {
        data_source: graph.name().to_owned(),
        outcome: Outcome::Clustering {
            clusters: outcome.cluster_count(),
            spacing: outcome.spacing(),
        },
    })
}

fn record_input(path: &Path, override_name: Option<&str>) {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(override_name.unwrap_or("<derived>")),
    );
}

#[instrument(name = "cli.open_text_reader", err, fields(path = field::Empty))]
pub(super) fn open_text_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "data_source".to_owned(), ToOwned::to_owned)
}

/// Writes the single value a command produced: the inversion count, or the
/// spacing (`none` when no edge crosses two clusters).
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tally_cli::cli::{ExecutionSummary, Outcome, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     outcome: Outcome::Clustering { clusters: 4, spacing: Some(106) },
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(buffer, b"106\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.outcome {
        Outcome::Inversions { inversions, .. } => writeln!(writer, "{inversions}"),
        Outcome::Clustering {
            spacing: Some(spacing),
            ..
        } => writeln!(writer, "{spacing}"),
        Outcome::Clustering { spacing: None, .. } => writeln!(writer, "none"),
    }
}
