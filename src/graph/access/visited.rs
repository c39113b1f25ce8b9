//! Dense visited flags for a fixed vertex count.

/// Per-vertex "seen" flags plus a running count of set flags.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    flags: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// All-false set over `len` vertices.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            count: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` iff `node` was not yet visited, and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        let flag = &mut self.flags[node];
        if *flag {
            false
        } else {
            *flag = true;
            self.count += 1;
            true
        }
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        self.flags[node]
    }

    /// Number of visited vertices.
    #[inline(always)]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Scans every flag.
    pub(crate) fn all_visited(&self) -> bool {
        self.flags.iter().all(|&seen| seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visited_set_marks_once() {
        let mut visited = VisitedSet::new(3);
        assert_eq!(visited.len(), 3);
        assert!(visited.try_visit(1));
        assert!(!visited.try_visit(1));
        assert!(visited.is_visited(1));
        assert!(!visited.is_visited(0));
        assert_eq!(visited.count(), 1);
        assert!(!visited.all_visited());

        visited.try_visit(0);
        visited.try_visit(2);
        assert!(visited.all_visited());
        assert_eq!(visited.count(), 3);
    }
}
