//! Traversal scratch state.
//!
//! Both structures are created per check and dropped with it, so no state
//! survives between traversals.

pub(crate) mod stack;
pub(crate) mod visited;
