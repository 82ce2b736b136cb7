//! History simplification for path-limited walks
//!
//! For each visited commit the simplifier decides which parent edges the walk
//! follows and reports. The rule for merges:
//!
//! - no parent relevant: every parent stays, the merge is what joins the
//!   relevant history on either side
//! - some parents relevant: they all stay, and a non-relevant parent is dropped
//!   only once an ancestry search proves it is an ancestor of a kept relevant
//!   parent
//!
//! An edge is never dropped on assumption. When the ancestry search cannot
//! decide within its step limit, the edge is kept; walking a redundant edge
//! costs time, losing one loses commits.
//!
//! The real parent list of a commit is never modified.

use crate::areas::commit_graph::CommitGraph;
use crate::areas::object_store::{CommitLoader, TreeDiffer};
use crate::artifacts::log::frontier::FrontierEntry;
use crate::artifacts::log::relevance::{ParentRelevance, PathRelevance};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RevWalkResult;
use derive_new::new;
use std::collections::{BinaryHeap, HashSet};
use tracing::debug;

/// Parents the walk follows for one commit, with the relevance they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simplification {
    effective_parents: Vec<ObjectId>,
    relevance: ParentRelevance,
}

impl Simplification {
    /// Subset of the real parents, in real-parent order
    pub fn effective_parents(&self) -> &[ObjectId] {
        &self.effective_parents
    }

    pub fn relevance(&self) -> &ParentRelevance {
        &self.relevance
    }

    pub fn is_relevant(&self) -> bool {
        self.relevance.is_relevant()
    }

    /// An irrelevant commit that still joins several lines of history
    pub fn is_structural(&self) -> bool {
        !self.is_relevant() && self.effective_parents.len() > 1
    }
}

/// Outcome of a bounded ancestry search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AncestryCheck {
    Subsumed,
    NotSubsumed,
    /// Step limit hit before the search finished
    AmbiguousBound,
}

#[derive(Debug, Clone, Copy, new)]
pub struct HistorySimplifier {
    ancestry_step_limit: usize,
}

impl HistorySimplifier {
    /// Compute the effective parents of `commit` among `parents`
    ///
    /// `parents` is the real parent list, or its first entry in first-parent
    /// walks.
    pub fn simplify<S: CommitLoader + TreeDiffer>(
        &self,
        graph: &CommitGraph<S>,
        relevance: &PathRelevance,
        commit: &Commit,
        parents: &[ObjectId],
    ) -> RevWalkResult<Simplification> {
        let classified = relevance.classify(graph, commit, parents)?;

        if relevance.is_pass_through()
            || parents.len() <= 1
            || classified.relevant_parents().next().is_none()
        {
            return Ok(Simplification {
                effective_parents: Self::dedup(parents.iter()),
                relevance: classified,
            });
        }

        let relevant_parents = classified.relevant_parents().collect::<Vec<_>>();
        let mut kept = Vec::with_capacity(parents.len());

        for (parent, relevant) in classified.parents() {
            if *relevant || !self.is_subsumed(graph, commit, parent, &relevant_parents)? {
                kept.push(parent);
            }
        }

        Ok(Simplification {
            effective_parents: Self::dedup(kept.into_iter()),
            relevance: classified,
        })
    }

    fn is_subsumed<S: CommitLoader>(
        &self,
        graph: &CommitGraph<S>,
        commit: &Commit,
        parent: &ObjectId,
        relevant_parents: &[&ObjectId],
    ) -> RevWalkResult<bool> {
        for relevant_parent in relevant_parents {
            match self.check_ancestry(graph, parent, relevant_parent)? {
                AncestryCheck::Subsumed => {
                    debug!(
                        commit = %commit.oid(),
                        parent = %parent,
                        through = %relevant_parent,
                        "dropping merge edge reachable through a relevant parent"
                    );
                    return Ok(true);
                }
                AncestryCheck::AmbiguousBound => {
                    debug!(
                        commit = %commit.oid(),
                        parent = %parent,
                        through = %relevant_parent,
                        step_limit = self.ancestry_step_limit,
                        "ancestry check exceeded its step limit, keeping merge edge"
                    );
                }
                AncestryCheck::NotSubsumed => {}
            }
        }

        debug!(commit = %commit.oid(), parent = %parent, "keeping merge edge");
        Ok(false)
    }

    /// Search the real parents of `descendant` for `ancestor`
    ///
    /// Commits older than `ancestor` are not expanded, under monotonic commit
    /// times none of them can lead back to it.
    fn check_ancestry<S: CommitLoader>(
        &self,
        graph: &CommitGraph<S>,
        ancestor: &ObjectId,
        descendant: &ObjectId,
    ) -> RevWalkResult<AncestryCheck> {
        if ancestor == descendant {
            return Ok(AncestryCheck::Subsumed);
        }

        let ancestor_time = graph.get(ancestor)?.commit_time();
        let descendant_commit = graph.get(descendant)?;

        let mut visited = HashSet::from([descendant.clone()]);
        let mut priority_queue = BinaryHeap::from([FrontierEntry::new(
            descendant_commit.commit_time(),
            descendant.clone(),
        )]);
        let mut steps = 0;

        while let Some(entry) = priority_queue.pop() {
            if steps >= self.ancestry_step_limit {
                return Ok(AncestryCheck::AmbiguousBound);
            }
            steps += 1;

            let current_commit = graph.get(&entry.oid)?;
            for parent_oid in current_commit.parents() {
                if parent_oid == ancestor {
                    return Ok(AncestryCheck::Subsumed);
                }
                if !visited.insert(parent_oid.clone()) {
                    continue;
                }

                let parent_time = graph.get(parent_oid)?.commit_time();
                if parent_time >= ancestor_time {
                    priority_queue.push(FrontierEntry::new(parent_time, parent_oid.clone()));
                }
            }
        }

        Ok(AncestryCheck::NotSubsumed)
    }

    fn dedup<'p>(parents: impl Iterator<Item = &'p ObjectId>) -> Vec<ObjectId> {
        let mut seen = HashSet::new();
        parents
            .filter(|parent| seen.insert(*parent))
            .cloned()
            .collect()
    }
}
