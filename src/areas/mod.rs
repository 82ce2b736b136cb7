//! Object access
//!
//! - `object_store`: The store trait and the commit/tree collaborators built on it
//! - `database`: Loose object directory reader
//! - `memory_store`: Objects kept in a map
//! - `commit_graph`: Memoizing commit accessor shared by walks

pub mod commit_graph;
pub mod database;
pub mod memory_store;
pub mod object_store;
