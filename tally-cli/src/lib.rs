//! Support library for the `tally` binary.
//!
//! Exposes the command pipeline and logging setup so doctests and
//! integration tests can drive commands without spawning a subprocess.

pub mod cli;
pub mod logging;
