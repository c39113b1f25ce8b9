use serde::{Deserialize, Serialize};

use super::AdjacencyMatrix;

/// Degree statistics of an adjacency matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of `true` entries (directed edges).
    pub edge_count: usize,
    /// Minimum out-degree over all vertices.
    pub min_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_degree: usize,
    /// Median out-degree; the lower mean of the two middle values for even counts.
    pub median_degree: usize,
    /// Average out-degree \(= m/n\).
    pub average_degree: f64,
    /// Whether the matrix equals its transpose.
    pub symmetric: bool,
}

impl MatrixStatistics {
    pub(crate) fn compute(matrix: &AdjacencyMatrix) -> Self {
        let vertex_count = matrix.order();
        let mut degrees: Vec<usize> = (0..vertex_count).map(|v| matrix.out_degree(v)).collect();
        degrees.sort_unstable();
        let edge_count: usize = degrees.iter().sum();

        let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (0, 0),
        };
        let mid = degrees.len() / 2;
        let median_degree = match degrees.len() {
            0 => 0,
            len if len % 2 == 0 => (degrees[mid - 1] + degrees[mid]) / 2,
            _ => degrees[mid],
        };

        #[allow(clippy::cast_precision_loss)]
        let average_degree = edge_count as f64 / vertex_count as f64;

        Self {
            vertex_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree,
            symmetric: matrix.is_symmetric(),
        }
    }
}
