//! A bounded LIFO of vertex indices.
//!
//! Capacity is the vertex count. The visited set guarantees each vertex is
//! pushed at most once per traversal, so the bound is never reached by a
//! correct caller; crossing it is a logic error and panics.

/// Explicit DFS stack with a fixed capacity.
#[derive(Debug, Clone)]
pub(crate) struct TraversalStack {
    items: Vec<usize>,
    capacity: usize,
}

impl TraversalStack {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes `vertex`.
    ///
    /// # Panics
    /// Panics if the stack already holds `capacity` items.
    #[inline]
    pub(crate) fn push(&mut self, vertex: usize) {
        assert!(
            self.items.len() < self.capacity,
            "traversal stack overflow (capacity {})",
            self.capacity
        );
        self.items.push(vertex);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.items.pop()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
