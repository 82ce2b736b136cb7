//! Commit history traversal for git log
//!
//! This module implements path-limited history queries:
//!
//! - `rev_list`: Lazy revision walk ordered by commit time
//! - `path_filter`: Path filtering using a trie of path components
//! - `relevance`: Whether a commit touches the filtered paths, per parent
//! - `history_simplifier`: Effective parents of merges in a path-limited walk
//! - `walk_options`: Start points, exclusions, paths and limits of one walk
//!
//! ## Algorithm
//!
//! The walk uses a priority queue ordered by commit timestamp, supporting:
//! - Several start points and excluded revisions (`^commit`, `a..b`)
//! - Path filtering (show only commits affecting specific files)
//! - Merge simplification that drops a parent edge only once its history is
//!   proven reachable through a kept parent
//! - First-parent walks and a maximum commit count

pub mod frontier;
pub mod history_simplifier;
pub mod path_filter;
pub mod relevance;
pub mod rev_list;
pub mod walk_options;
