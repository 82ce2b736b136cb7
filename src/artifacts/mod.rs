//! Git data structures and algorithms
//!
//! - `database`: Tree entry types
//! - `diff`: Path-restricted tree diffing
//! - `log`: Commit history traversal and simplification
//! - `objects`: Git object types (blob, tree, commit)

pub mod database;
pub mod diff;
pub mod log;
pub mod objects;
