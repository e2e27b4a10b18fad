//! Derived views over store snapshots.
//!
//! Pure functions only: every view takes the task slice (and, where needed,
//! the section list) as input and holds no state of its own, so a view
//! always reflects the most recently completed mutation.

pub mod board;
pub mod weekly;
