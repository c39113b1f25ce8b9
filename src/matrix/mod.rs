//! `AdjacencyMatrix` — a dense, square boolean adjacency table.
//!
//! Storage is a single row-major `Vec<bool>`, so row scans during traversal are
//! contiguous. Entry `(i, j)` is a directed edge `i -> j`; undirected graphs are
//! expected to be symmetric, but nothing here enforces it (see
//! [`AdjacencyMatrix::first_asymmetry`]).
//!
//! A matrix is built once and never mutated afterwards. The only ways to obtain
//! one are the constructors below and the loader.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `has_edge` | \(O(1)\) | Index arithmetic |
//! | `out_neighbors` | \(O(n)\) | Scans one row |
//! | `edge_count` | \(O(n^2)\) | Full scan |
//! | `first_asymmetry` | \(O(n^2)\) | Upper-triangle scan |

mod statistics;

pub use statistics::MatrixStatistics;

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// A square adjacency matrix of order `n`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AdjacencyMatrix {
    cells: Vec<bool>,
    order: usize,
}

impl AdjacencyMatrix {
    /// Creates an edgeless matrix with `order` vertices.
    ///
    /// # Panics
    /// Panics if `order == 0`.
    pub fn new(order: usize) -> Self {
        assert!(order > 0, "adjacency matrix must have at least one vertex");
        Self {
            cells: vec![false; order * order],
            order,
        }
    }

    /// Creates a matrix from a row-major cell vector.
    ///
    /// # Panics
    /// Panics if `order == 0` or `cells.len() != order * order`.
    pub fn from_vec(cells: Vec<bool>, order: usize) -> Self {
        assert!(order > 0, "adjacency matrix must have at least one vertex");
        assert_eq!(
            cells.len(),
            order * order,
            "cell count must match an {order} x {order} matrix"
        );
        Self { cells, order }
    }

    /// Creates a matrix from explicit rows.
    ///
    /// # Panics
    /// Panics if `rows` is empty or not square.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let order = rows.len();
        let mut cells = Vec::with_capacity(order * order);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), order, "row {i} has {} columns, expected {order}", row.len());
            cells.extend_from_slice(row);
        }
        Self::from_vec(cells, order)
    }

    /// Creates a symmetric matrix with an edge in both directions for every pair.
    ///
    /// # Panics
    /// Panics if `order == 0` or an endpoint is out of bounds.
    pub fn from_edges(order: usize, edges: &[(usize, usize)]) -> Self {
        let mut cells = vec![false; order * order];
        for &(u, v) in edges {
            assert!(u < order && v < order, "edge {u}-{v} out of bounds for n={order}");
            cells[u * order + v] = true;
            cells[v * order + u] = true;
        }
        Self::from_vec(cells, order)
    }

    /// Creates a matrix with one directed entry `u -> v` per pair.
    ///
    /// # Panics
    /// Panics if `order == 0` or an endpoint is out of bounds.
    pub fn from_directed_edges(order: usize, edges: &[(usize, usize)]) -> Self {
        let mut cells = vec![false; order * order];
        for &(u, v) in edges {
            assert!(u < order && v < order, "edge {u}->{v} out of bounds for n={order}");
            cells[u * order + v] = true;
        }
        Self::from_vec(cells, order)
    }

    /// Returns the number of vertices (rows, and columns).
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the entry at `(row, col)`, or `None` when out of bounds.
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.order && col < self.order {
            Some(self.cells[row * self.order + col])
        } else {
            None
        }
    }

    /// Returns `true` if the directed edge `from -> to` is present.
    ///
    /// # Panics
    /// Panics if `from` or `to` are out of bounds.
    #[inline(always)]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        assert!(from < self.order, "from vertex {from} out of bounds");
        assert!(to < self.order, "to vertex {to} out of bounds");
        self.cells[from * self.order + to]
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row < self.order {
            let start = row * self.order;
            Some(&self.cells[start..start + self.order])
        } else {
            None
        }
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.order)
    }

    /// Returns the out-neighbors of `vertex` in ascending index order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn out_neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        assert!(vertex < self.order, "vertex {vertex} out of bounds");
        let start = vertex * self.order;
        self.cells[start..start + self.order]
            .iter()
            .enumerate()
            .filter_map(|(u, &edge)| edge.then_some(u))
    }

    /// Returns the number of out-neighbors of `vertex`.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.out_neighbors(vertex).count()
    }

    /// Returns the number of `true` entries, i.e. directed edges.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&edge| edge).count()
    }

    /// Returns the first `(row, col)` with `row < col` where the matrix
    /// disagrees with its transpose, scanning row-major.
    pub fn first_asymmetry(&self) -> Option<(usize, usize)> {
        let n = self.order;
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .find(|&(i, j)| self.cells[i * n + j] != self.cells[j * n + i])
    }

    /// Returns `true` if `matrix[i][j] == matrix[j][i]` for all pairs.
    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetry().is_none()
    }

    /// Computes degree statistics.
    pub fn statistics(&self) -> MatrixStatistics {
        MatrixStatistics::compute(self)
    }

    /// Writes the matrix to `path` in the loader's text format.
    ///
    /// # Errors
    /// Returns any I/O error from creating or writing the file.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

/// Text form: one row per line, `0`/`1` separated by single spaces.
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, &edge) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if edge { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyMatrix")
            .field("order", &self.order)
            .field("edges", &self.edge_count())
            .finish()
    }
}
