//! Path-limited revision history over a git commit graph
//!
//! Given start commits and an optional set of paths, the walk yields, newest
//! first, the commits that change those paths. Merge commits are simplified:
//! a parent edge is only dropped once its history is proven reachable through
//! another kept parent, so no commit is ever lost to simplification.
//!
//! - `areas`: Object stores (loose objects, in-memory) and the memoizing commit graph
//! - `artifacts`: Git objects, tree diffing and the history walk itself
//! - `errors`: Errors surfaced by loading and walking
//!
//! ```rust,ignore
//! let graph = CommitGraph::new(Database::open(".git"));
//! let options = RevListOptions::new(vec![head]).with_paths(vec!["src".into()]);
//!
//! for commit in RevList::new(&graph, options).into_iter()? {
//!     println!("{}", commit?.oid());
//! }
//! ```

pub mod areas;
pub mod artifacts;
pub mod errors;
