//! Iterative depth-first reachability over an [`AdjacencyMatrix`].
//!
//! The traversal never recurses: pending vertices live on an explicit stack
//! bounded by the vertex count. Neighbors are scanned in ascending index
//! order, so visit order is deterministic.

use tracing::debug;

use super::access::{stack::TraversalStack, visited::VisitedSet};
use crate::matrix::AdjacencyMatrix;

/// An iterator for Depth-First Search (DFS) over a dense matrix.
///
/// Yields vertex indices in pop order. A vertex is marked visited when it is
/// pushed, so each vertex is pushed and yielded at most once.
///
/// ```
/// use graph_connectivity::{AdjacencyMatrix, Dfs};
///
/// let m = AdjacencyMatrix::from_edges(4, &[(0, 1), (0, 2), (1, 3)]);
/// // 0 pushes 1,2; 2 is popped first; then 1, which pushes 3.
/// assert_eq!(Dfs::new(&m, 0).collect::<Vec<_>>(), vec![0, 2, 1, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Dfs<'a> {
    matrix: &'a AdjacencyMatrix,
    visited: VisitedSet,
    stack: TraversalStack,
}

impl<'a> Dfs<'a> {
    /// Creates a DFS iterator starting from `start`.
    ///
    /// # Panics
    /// Panics if `start` is out of bounds.
    pub fn new(matrix: &'a AdjacencyMatrix, start: usize) -> Self {
        let n = matrix.order();
        assert!(start < n, "start vertex {start} out of bounds");

        let mut visited = VisitedSet::new(n);
        let mut stack = TraversalStack::with_capacity(n);
        visited.try_visit(start);
        stack.push(start);

        Self {
            matrix,
            visited,
            stack,
        }
    }

    /// Number of vertices marked visited so far (yielded or still pending).
    pub fn visited_count(&self) -> usize {
        self.visited.count()
    }

    /// Returns `true` once `vertex` has been discovered.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited.is_visited(vertex)
    }

    /// Number of discovered vertices not yet yielded.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` when the traversal is exhausted.
    pub fn is_finished(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns `true` if every vertex has been discovered.
    pub fn all_visited(&self) -> bool {
        self.visited.all_visited()
    }
}

impl Iterator for Dfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        for u in self.matrix.out_neighbors(v) {
            if self.visited.try_visit(u) {
                self.stack.push(u);
            }
        }

        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.stack.len();
        (pending, Some(pending + self.visited.len() - self.visited.count()))
    }
}

/// Outcome of a connectivity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Whether every vertex was reached from vertex 0.
    pub connected: bool,
    /// Number of vertices reached from vertex 0, including itself.
    pub visited: usize,
    /// Vertices in the order they were popped.
    pub order: Vec<usize>,
}

/// Runs an iterative DFS from vertex 0 and records what it reached.
pub fn check(matrix: &AdjacencyMatrix) -> Traversal {
    let mut dfs = Dfs::new(matrix, 0);
    let order: Vec<usize> = dfs.by_ref().collect();
    let connected = dfs.all_visited();

    debug!(
        vertices = matrix.order(),
        visited = dfs.visited_count(),
        connected,
        "depth-first traversal finished"
    );

    Traversal {
        connected,
        visited: dfs.visited_count(),
        order,
    }
}

/// Returns `true` if every vertex is reachable from vertex 0.
///
/// Edges are followed `row -> col`; for a symmetric matrix this is exactly
/// undirected connectivity.
///
/// ```
/// use graph_connectivity::{is_connected, AdjacencyMatrix};
///
/// assert!(is_connected(&AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 2)])));
/// assert!(!is_connected(&AdjacencyMatrix::new(2)));
/// ```
pub fn is_connected(matrix: &AdjacencyMatrix) -> bool {
    check(matrix).connected
}

/// Counts the vertices reachable from `start`, including `start`.
///
/// # Panics
/// Panics if `start` is out of bounds.
pub fn reachable_count(matrix: &AdjacencyMatrix, start: usize) -> usize {
    let mut dfs = Dfs::new(matrix, start);
    dfs.by_ref().for_each(drop);
    dfs.visited_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dfs_visits_in_stack_order() {
        // 0 - 1, 0 - 2, 1 - 3 ; 4 isolated
        let m = AdjacencyMatrix::from_edges(5, &[(0, 1), (0, 2), (1, 3)]);
        let mut dfs = Dfs::new(&m, 0);
        assert_eq!(dfs.pending(), 1);
        assert_eq!(dfs.next(), Some(0));
        assert_eq!(dfs.pending(), 2);
        assert!(dfs.is_visited(2));
        assert!(!dfs.is_visited(3));

        let rest: Vec<_> = dfs.by_ref().collect();
        assert_eq!(rest, vec![2, 1, 3]);
        assert!(dfs.is_finished());
        assert_eq!(dfs.visited_count(), 4);
        assert!(!dfs.all_visited());
    }

    #[test]
    fn check_reports_visited_count() {
        let m = AdjacencyMatrix::from_edges(5, &[(0, 1), (0, 2), (1, 3)]);
        let t = check(&m);
        assert!(!t.connected);
        assert_eq!(t.visited, 4);
        assert_eq!(t.order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn directed_entries_are_followed_one_way() {
        // 1 -> 0 only: 1 is not reachable from 0.
        let m = AdjacencyMatrix::from_directed_edges(2, &[(1, 0)]);
        assert!(!is_connected(&m));
        assert_eq!(reachable_count(&m, 1), 2);
        assert_eq!(reachable_count(&m, 0), 1);
    }

    #[test]
    fn self_loops_are_harmless() {
        let m = AdjacencyMatrix::from_directed_edges(2, &[(0, 0), (0, 1), (1, 1)]);
        assert!(is_connected(&m));
        assert_eq!(check(&m).order, vec![0, 1]);
    }

    #[test]
    fn size_hint_bounds_remaining() {
        let m = AdjacencyMatrix::from_edges(3, &[(0, 1)]);
        let dfs = Dfs::new(&m, 0);
        assert_eq!(dfs.size_hint(), (1, Some(3)));
    }

    #[test]
    #[should_panic(expected = "start vertex 3 out of bounds")]
    fn dfs_rejects_out_of_bounds_start() {
        let m = AdjacencyMatrix::new(3);
        let _ = Dfs::new(&m, 3);
    }
}
