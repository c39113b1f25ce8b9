use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why an adjacency matrix could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The input file could not be opened or read.
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The first line holds no integer token.
    EmptyOrMalformed,
    /// The first line declares more vertices than allowed.
    CapacityExceeded {
        /// Configured limit.
        max: usize,
    },
    /// The configured vertex limit is zero or above the supported ceiling.
    InvalidLimit {
        /// Requested limit.
        max_vertices: usize,
        /// Largest accepted limit.
        ceiling: usize,
    },
    /// Fewer than `order * order` integer tokens were found.
    TruncatedMatrix {
        /// Row of the first missing or unparsable token (0-indexed).
        row: usize,
        /// Column of the first missing or unparsable token (0-indexed).
        col: usize,
        /// Order inferred from the first line.
        order: usize,
    },
    /// A token other than `0`/`1` under [`EdgeValues::Binary`](super::EdgeValues::Binary).
    InvalidEntry {
        /// Row of the offending token.
        row: usize,
        /// Column of the offending token.
        col: usize,
        /// The value read.
        value: i64,
    },
    /// `matrix[row][col] != matrix[col][row]` under [`Symmetry::Require`](super::Symmetry::Require).
    Asymmetric {
        /// Row of the first mismatch (`row < col`).
        row: usize,
        /// Column of the first mismatch.
        col: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path, .. } => {
                write!(f, "file '{}' could not be opened", path.display())
            }
            Self::EmptyOrMalformed => {
                f.write_str("empty file or invalid format (no number found on the first line)")
            }
            Self::CapacityExceeded { max } => {
                write!(f, "first line exceeds the limit of {max} columns")
            }
            Self::InvalidLimit {
                max_vertices,
                ceiling,
            } => write!(
                f,
                "vertex limit {max_vertices} is outside the supported range 1..={ceiling}"
            ),
            Self::TruncatedMatrix { row, col, order } => write!(
                f,
                "failed to read value at position [{row}][{col}], expected {order} x {order}"
            ),
            Self::InvalidEntry { row, col, value } => write!(
                f,
                "value {value} at position [{row}][{col}] is not 0 or 1"
            ),
            Self::Asymmetric { row, col } => write!(
                f,
                "matrix is not symmetric: [{row}][{col}] differs from [{col}][{row}]"
            ),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FileNotFound { source, .. } => Some(source),
            _ => None,
        }
    }
}
