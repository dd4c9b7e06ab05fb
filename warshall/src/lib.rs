//! # Warshall
//!
//! All-pairs shortest paths on directed graphs with possibly negative edge
//! weights, based on the Floyd-Warshall algorithm.
//!
//! ```
//! use warshall::{DiGraph, PathMode, ShortestPaths};
//!
//! let mut graph = DiGraph::new();
//! graph.add_edge("A", "B", 1).unwrap();
//! graph.add_edge("B", "C", 2).unwrap();
//! graph.add_edge("A", "C", 10).unwrap();
//!
//! let paths = ShortestPaths::solve(&graph, PathMode::WithPaths).unwrap();
//! assert_eq!(paths.cost(0, 2), Some(3));
//! assert_eq!(paths.path(0, 2).unwrap().collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```
#![deny(missing_docs)]

#[cfg(target_pointer_width = "16")]
compile_error!("`target_pointer_width` must be larger than or equal to 32");

pub mod common;
pub mod errors;
#[cfg(feature = "generator")]
pub mod generator;
pub mod graph;
pub mod shortest_paths;
pub mod solution;
mod utils;

#[cfg(test)]
mod tests;

pub use common::{PathMode, INFINITE_COST, NO_SUCCESSOR};
pub use errors::{Result, WarshallError};
pub use graph::{DiGraph, Graph};
pub use shortest_paths::ShortestPaths;
pub use solution::Solution;
