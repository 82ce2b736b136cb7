//! Tree comparison
//!
//! - `tree_diff`: Tree-level diffing restricted by a path filter, either
//!   collecting every changed path or stopping at the first one
//!
//! Only which files changed is computed; line-level content diffs are out of
//! scope.

pub mod tree_diff;
