//! Path relevance of commits
//!
//! A commit is relevant to a path set when its snapshot differs from a
//! parent's snapshot inside those paths. Merges are classified against every
//! parent separately; the history simplifier works from those per-parent
//! answers.

use crate::areas::commit_graph::CommitGraph;
use crate::areas::object_store::{CommitLoader, TreeDiffer};
use crate::artifacts::log::path_filter::PathFilter;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RevWalkResult;
use derive_new::new;

/// Relevance of a commit against each parent it was compared to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRelevance {
    parents: Vec<(ObjectId, bool)>,
    relevant: bool,
}

impl ParentRelevance {
    /// Each compared parent with its answer, in real-parent order
    pub fn parents(&self) -> &[(ObjectId, bool)] {
        &self.parents
    }

    pub fn is_relevant(&self) -> bool {
        self.relevant
    }

    pub fn is_relevant_to(&self, parent: &ObjectId) -> Option<bool> {
        self.parents
            .iter()
            .find(|(oid, _)| oid == parent)
            .map(|(_, relevant)| *relevant)
    }

    pub fn relevant_parents(&self) -> impl Iterator<Item = &ObjectId> {
        self.parents
            .iter()
            .filter(|(_, relevant)| *relevant)
            .map(|(oid, _)| oid)
    }
}

#[derive(Debug, Clone, new)]
pub struct PathRelevance {
    path_filter: PathFilter,
}

impl PathRelevance {
    pub fn from_paths(paths: Vec<std::path::PathBuf>) -> Self {
        PathRelevance::new(PathFilter::new(paths))
    }

    /// No paths configured, every commit is relevant
    pub fn is_pass_through(&self) -> bool {
        self.path_filter.is_pass_through()
    }

    pub fn path_filter(&self) -> &PathFilter {
        &self.path_filter
    }

    /// Whether `commit` changes a filtered path relative to `parent`
    ///
    /// A missing parent compares against the empty tree.
    pub fn is_relevant<S: TreeDiffer + ?Sized>(
        &self,
        store: &S,
        commit: &Commit,
        parent: Option<&Commit>,
    ) -> RevWalkResult<bool> {
        if self.is_pass_through() {
            return Ok(true);
        }

        let old_tree = parent.map(Commit::tree_oid);
        if old_tree == Some(commit.tree_oid()) {
            return Ok(false);
        }

        store.touches_paths(old_tree, commit.tree_oid(), &self.path_filter)
    }

    /// Classify `commit` against each of `parents`
    pub fn classify<S: CommitLoader + TreeDiffer>(
        &self,
        graph: &CommitGraph<S>,
        commit: &Commit,
        parents: &[ObjectId],
    ) -> RevWalkResult<ParentRelevance> {
        if self.is_pass_through() {
            return Ok(ParentRelevance {
                parents: parents.iter().map(|oid| (oid.clone(), true)).collect(),
                relevant: true,
            });
        }

        if parents.is_empty() {
            return Ok(ParentRelevance {
                parents: Vec::new(),
                relevant: self.is_relevant(graph.store(), commit, None)?,
            });
        }

        let mut classified = Vec::with_capacity(parents.len());
        for parent_oid in parents {
            let parent = graph.get(parent_oid)?;
            let relevant = self.is_relevant(graph.store(), commit, Some(&*parent))?;
            classified.push((parent_oid.clone(), relevant));
        }

        let relevant = classified.iter().any(|(_, relevant)| *relevant);
        Ok(ParentRelevance {
            parents: classified,
            relevant,
        })
    }
}
