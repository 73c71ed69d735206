//! Command-line interface orchestration for `tally`.
//!
//! `inversions` counts inverted pairs in an integer file; `cluster` merges a
//! weighted graph down to a target cluster count and reports the spacing.

mod commands;

pub use commands::{
    Cli, CliError, ClusterArgs, Command, ExecutionSummary, InversionsArgs, Outcome, render_summary,
    run_cli,
};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
