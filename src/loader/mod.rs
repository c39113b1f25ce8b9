//! Reading adjacency matrices from text.
//!
//! The format has no header: the number of integer tokens on the first line
//! is the order `n`, and the text as a whole must then hold `n * n`
//! whitespace-separated integer tokens in row-major order. Anything after the
//! first `n * n` tokens is ignored.
//!
//! ```text
//! 0 1 0
//! 1 0 1
//! 0 1 0
//! ```
//!
//! The file is read once; dimension inference and the full-matrix pass both
//! run over the same buffer.

mod config;
mod error;

pub use config::{EdgeValues, LoaderConfig, Symmetry, DEFAULT_MAX_VERTICES, VERTEX_LIMIT_CEILING};
pub use error::LoadError;

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::matrix::AdjacencyMatrix;

/// Loads an adjacency matrix from `path`.
///
/// # Errors
/// - [`LoadError::FileNotFound`] if the file cannot be read.
/// - Any error of [`parse`].
pub fn load(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<AdjacencyMatrix, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading adjacency matrix");

    let bytes = fs::read(path).map_err(|source| LoadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    // Invalid UTF-8 becomes U+FFFD, which never parses as an integer.
    let text = String::from_utf8_lossy(&bytes);

    let matrix = parse(&text, config)?;
    info!(
        path = %path.display(),
        order = matrix.order(),
        edges = matrix.edge_count(),
        "adjacency matrix loaded"
    );
    Ok(matrix)
}

/// Parses an adjacency matrix from in-memory text.
///
/// # Errors
/// - [`LoadError::InvalidLimit`] if `config` fails [`LoaderConfig::validate`].
/// - [`LoadError::EmptyOrMalformed`] if the first line starts with no integer token.
/// - [`LoadError::CapacityExceeded`] if the first line has more than
///   `config.max_vertices` integer tokens.
/// - [`LoadError::TruncatedMatrix`] at the first missing or non-integer token.
/// - [`LoadError::InvalidEntry`] for non-0/1 tokens under [`EdgeValues::Binary`].
/// - [`LoadError::Asymmetric`] for asymmetric input under [`Symmetry::Require`].
pub fn parse(text: &str, config: &LoaderConfig) -> Result<AdjacencyMatrix, LoadError> {
    config.validate()?;
    let order = infer_order(text, config.max_vertices)?;
    debug!(order, "inferred matrix order from first line");

    let cells = read_cells(text, order, config.edge_values)?;
    let matrix = AdjacencyMatrix::from_vec(cells, order);

    if let Some((row, col)) = matrix.first_asymmetry() {
        match config.symmetry {
            Symmetry::Require => return Err(LoadError::Asymmetric { row, col }),
            Symmetry::Directed => warn!(
                row,
                col,
                "adjacency matrix is not symmetric; edges are followed as directed"
            ),
        }
    }

    Ok(matrix)
}

#[inline]
fn parse_token(token: &str) -> Option<i64> {
    token.parse().ok()
}

/// Counts the leading integer tokens of the first line, stopping as soon as
/// the count passes `max_vertices`.
fn infer_order(text: &str, max_vertices: usize) -> Result<usize, LoadError> {
    let first_line = text.lines().next().unwrap_or_default();
    let found = first_line
        .split_ascii_whitespace()
        .take_while(|token| parse_token(token).is_some())
        .take(max_vertices + 1)
        .count();

    if found == 0 {
        return Err(LoadError::EmptyOrMalformed);
    }
    if found > max_vertices {
        return Err(LoadError::CapacityExceeded { max: max_vertices });
    }
    Ok(found)
}

/// Reads exactly `order * order` tokens, row-major.
fn read_cells(text: &str, order: usize, policy: EdgeValues) -> Result<Vec<bool>, LoadError> {
    let total = order * order;
    let mut tokens = text.split_ascii_whitespace();
    // Every token takes at least two bytes with its separator, except the last.
    let mut cells = Vec::with_capacity(total.min(text.len() / 2 + 1));

    for index in 0..total {
        let (row, col) = (index / order, index % order);
        let value = tokens
            .next()
            .and_then(parse_token)
            .ok_or(LoadError::TruncatedMatrix { row, col, order })?;
        let edge = policy
            .classify(value)
            .ok_or(LoadError::InvalidEntry { row, col, value })?;
        cells.push(edge);
    }

    Ok(cells)
}
