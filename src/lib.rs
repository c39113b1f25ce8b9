//! # `graph-connectivity`
//!
//! Decides whether a graph, given as a dense adjacency matrix in a text file,
//! is connected.
//!
//! ## Pipeline
//!
//! 1. [`loader::load`] reads the file. The order `n` is the number of integer
//!    tokens on the first line; the file must then hold `n * n` tokens,
//!    row-major. Nonzero tokens are edges.
//! 2. [`is_connected`] runs an iterative depth-first search from vertex 0 with
//!    an explicit stack and reports whether every vertex was reached.
//!
//! All state is owned by the caller: the loader returns an
//! [`AdjacencyMatrix`], and each check allocates its own visited set and
//! stack, so any number of matrices can be checked in one process.
//!
//! ## Undirected vs. directed input
//!
//! Entry `(i, j)` is followed as an edge `i -> j`. For a symmetric matrix that
//! is exactly undirected connectivity. Asymmetric input is accepted by default
//! and can be rejected with [`loader::Symmetry::Require`].
//!
//! ## Example
//!
//! ```rust
//! use graph_connectivity::loader::{parse, LoaderConfig};
//! use graph_connectivity::is_connected;
//!
//! let matrix = parse("0 1 0\n1 0 1\n0 1 0\n", &LoaderConfig::default()).unwrap();
//! assert_eq!(matrix.order(), 3);
//! assert!(is_connected(&matrix));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;
pub mod loader;
pub mod matrix;
pub mod report;

pub use graph::{check, is_connected, reachable_count, Dfs, Traversal};
pub use loader::{load, parse, LoadError, LoaderConfig};
pub use matrix::{AdjacencyMatrix, MatrixStatistics};
pub use report::ConnectivityReport;
