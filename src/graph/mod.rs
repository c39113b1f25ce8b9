//! Connectivity checking over dense adjacency matrices.
//!
//! - `connectivity`: iterative DFS, reachability counts and the connected verdict
//! - `access`: per-traversal scratch state (visited flags, bounded stack)

pub mod connectivity;
pub(crate) mod access;

pub use connectivity::{check, is_connected, reachable_count, Dfs, Traversal};
