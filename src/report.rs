//! User-facing result of a connectivity run.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::Traversal;
use crate::matrix::{AdjacencyMatrix, MatrixStatistics};

/// Summary of one checked matrix, printable as text or serializable as JSON.
///
/// The text form is only the verdict line; JSON carries the degree
/// statistics as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityReport {
    /// Input file.
    pub path: String,
    /// Matrix order.
    pub vertices: usize,
    /// Vertices reached from vertex 0.
    pub visited: usize,
    /// The verdict.
    pub connected: bool,
    /// Edge count, degrees and symmetry of the matrix.
    pub statistics: MatrixStatistics,
}

impl ConnectivityReport {
    /// Builds a report from a loaded matrix and its traversal.
    pub fn new(path: &Path, matrix: &AdjacencyMatrix, traversal: &Traversal) -> Self {
        Self {
            path: path.display().to_string(),
            vertices: matrix.order(),
            visited: traversal.visited,
            connected: traversal.connected,
            statistics: matrix.statistics(),
        }
    }
}

impl fmt::Display for ConnectivityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.connected {
            f.write_str("Result: the graph is CONNECTED.")
        } else {
            write!(
                f,
                "Result: the graph is NOT connected ({} of {} vertices reachable from vertex 0).",
                self.visited, self.vertices
            )
        }
    }
}
