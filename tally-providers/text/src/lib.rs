//! Line-based text readers for the tally exercises.
//!
//! [`IntegerArray`] reads one decimal integer per line for inversion
//! counting. [`EdgeList`] reads a node-count header followed by
//! `source target cost` lines for clustering.

mod edge_list;
mod integers;

pub use crate::{
    edge_list::{EdgeList, EdgeListError, MAX_NODE_COUNT},
    integers::{IntegerArray, IntegerArrayError},
};
