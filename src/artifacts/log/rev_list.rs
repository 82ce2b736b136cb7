use crate::areas::commit_graph::CommitGraph;
use crate::areas::object_store::{CommitLoader, TreeDiffer};
use crate::artifacts::log::frontier::FrontierEntry;
use crate::artifacts::log::history_simplifier::{HistorySimplifier, Simplification};
use crate::artifacts::log::relevance::PathRelevance;
use crate::artifacts::log::walk_options::RevListOptions;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RevWalkError, RevWalkResult};
use bitflags::bitflags;
use derive_new::new;
use std::collections::{BinaryHeap, HashMap};
use std::iter::FusedIterator;
use std::sync::Arc;
use tracing::{debug, trace};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct VisitFlags: u8 {
        /// Pushed onto the frontier, never pushed again
        const ADDED = 0b0001;
        /// Expanded, its parents are on the frontier
        const SEEN = 0b0010;
        /// Reachable from an excluded revision
        const UNINTERESTING = 0b0100;
        const EMITTED = 0b1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    Initial,
    Walking,
    Exhausted,
}

#[derive(new)]
pub struct RevList<'g, S> {
    graph: &'g CommitGraph<S>,
    options: RevListOptions,
}

impl<'g, S: CommitLoader + TreeDiffer> RevList<'g, S> {
    pub fn into_iter(self) -> RevWalkResult<RevListIntoIter<'g, S>> {
        if self.options.start_points.is_empty() {
            return Err(RevWalkError::NoStartPoint);
        }

        Ok(RevListIntoIter {
            graph: self.graph,
            relevance: PathRelevance::from_paths(self.options.paths.clone()),
            simplifier: HistorySimplifier::new(self.options.ancestry_step_limit),
            remaining: self.options.max_count,
            options: self.options,
            state: WalkState::Initial,
            frontier: BinaryHeap::new(),
            interesting_pending: 0,
            flags: HashMap::new(),
            simplified: HashMap::new(),
        })
    }
}

/// Lazy commit-time ordered walk over the history of the start points
///
/// Yields the commits relevant to the configured paths, newest first. Each
/// commit is expanded at most once and parents are only loaded when the commit
/// referencing them is expanded. The first error ends the walk.
pub struct RevListIntoIter<'g, S> {
    graph: &'g CommitGraph<S>,
    options: RevListOptions,
    relevance: PathRelevance,
    simplifier: HistorySimplifier,
    remaining: Option<usize>,
    state: WalkState,
    frontier: BinaryHeap<FrontierEntry>,
    /// Frontier entries not marked uninteresting
    interesting_pending: usize,
    flags: HashMap<ObjectId, VisitFlags>,
    simplified: HashMap<ObjectId, Simplification>,
}

impl<S: CommitLoader + TreeDiffer> RevListIntoIter<'_, S> {
    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Parents the walk followed from an emitted commit
    pub fn effective_parents(&self, commit_id: &ObjectId) -> Option<&[ObjectId]> {
        self.simplification(commit_id)
            .map(Simplification::effective_parents)
    }

    pub fn simplification(&self, commit_id: &ObjectId) -> Option<&Simplification> {
        if !self.flags_of(commit_id).contains(VisitFlags::EMITTED) {
            return None;
        }

        self.simplified.get(commit_id)
    }

    /// Emitted only because it joins several relevant lines of history
    pub fn is_structural(&self, commit_id: &ObjectId) -> bool {
        self.simplification(commit_id)
            .is_some_and(Simplification::is_structural)
    }

    fn advance(&mut self) -> RevWalkResult<Option<Arc<Commit>>> {
        loop {
            match self.state {
                WalkState::Exhausted => return Ok(None),
                WalkState::Initial => {
                    self.state = WalkState::Walking;
                    self.seed()?;
                }
                WalkState::Walking => {}
            }

            if self.remaining == Some(0) || self.interesting_pending == 0 {
                return Ok(None);
            }

            let Some(FrontierEntry { timestamp, oid }) = self.frontier.pop() else {
                return Ok(None);
            };
            trace!(commit = %oid, timestamp, "popped from frontier");

            let flags = self.flags_of(&oid);
            if flags.contains(VisitFlags::SEEN) {
                continue;
            }
            self.flags_mut(&oid).insert(VisitFlags::SEEN);
            if !flags.contains(VisitFlags::UNINTERESTING) {
                self.interesting_pending -= 1;
            }

            let commit = self.graph.get(&oid)?;

            if flags.contains(VisitFlags::UNINTERESTING) {
                for parent in self.walk_parents(&commit) {
                    self.mark_uninteresting(parent)?;
                    self.enqueue(parent)?;
                }
                continue;
            }

            let simplification = self.simplifier.simplify(
                self.graph,
                &self.relevance,
                &commit,
                self.walk_parents(&commit),
            )?;
            for parent in simplification.effective_parents() {
                self.enqueue(parent)?;
            }

            let emit = simplification.is_relevant()
                || (simplification.is_structural() && self.options.show_structural_merges);
            self.simplified.insert(oid.clone(), simplification);

            if emit {
                self.flags_mut(&oid).insert(VisitFlags::EMITTED);
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Ok(Some(commit));
            }
        }
    }

    fn seed(&mut self) -> RevWalkResult<()> {
        debug!(
            start_points = self.options.start_points.len(),
            excluded = self.options.excluded.len(),
            paths = ?self.options.paths,
            max_count = ?self.options.max_count,
            first_parent = self.options.first_parent,
            "starting revision walk"
        );

        let excluded = self.options.excluded.clone();
        for oid in &excluded {
            self.mark_uninteresting(oid)?;
            self.enqueue(oid)?;
        }

        let start_points = self.options.start_points.clone();
        for oid in &start_points {
            self.enqueue(oid)?;
        }

        Ok(())
    }

    fn enqueue(&mut self, oid: &ObjectId) -> RevWalkResult<()> {
        if self.flags_of(oid).contains(VisitFlags::ADDED) {
            return Ok(());
        }

        let commit = self.graph.get(oid)?;
        let flags = self.flags_mut(oid);
        flags.insert(VisitFlags::ADDED);
        if !flags.contains(VisitFlags::UNINTERESTING) {
            self.interesting_pending += 1;
        }
        self.frontier
            .push(FrontierEntry::new(commit.commit_time(), oid.clone()));

        Ok(())
    }

    /// Hide `oid` and every ancestor already expanded through it
    fn mark_uninteresting(&mut self, oid: &ObjectId) -> RevWalkResult<()> {
        let mut pending = vec![oid.clone()];

        while let Some(oid) = pending.pop() {
            let flags = self.flags_mut(&oid);
            if flags.contains(VisitFlags::UNINTERESTING) {
                continue;
            }
            flags.insert(VisitFlags::UNINTERESTING);
            let flags = *flags;

            if flags.contains(VisitFlags::SEEN) {
                let commit = self.graph.get(&oid)?;
                pending.extend(commit.parents().iter().cloned());
            } else if flags.contains(VisitFlags::ADDED) {
                // still on the frontier, passes the mark on when popped
                self.interesting_pending -= 1;
            }
        }

        Ok(())
    }

    fn walk_parents<'c>(&self, commit: &'c Commit) -> &'c [ObjectId] {
        let parents = commit.parents();
        if self.options.first_parent {
            &parents[..parents.len().min(1)]
        } else {
            parents
        }
    }

    fn flags_of(&self, oid: &ObjectId) -> VisitFlags {
        self.flags.get(oid).copied().unwrap_or_default()
    }

    fn flags_mut(&mut self, oid: &ObjectId) -> &mut VisitFlags {
        self.flags.entry(oid.clone()).or_default()
    }

    fn finish(&mut self) {
        self.state = WalkState::Exhausted;
        self.frontier.clear();
        self.interesting_pending = 0;
    }
}

impl<S: CommitLoader + TreeDiffer> Iterator for RevListIntoIter<'_, S> {
    type Item = RevWalkResult<Arc<Commit>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(Some(commit)) => Some(Ok(commit)),
            Ok(None) => {
                self.finish();
                None
            }
            Err(err) => {
                debug!(error = %err, "revision walk aborted");
                self.finish();
                Some(Err(err))
            }
        }
    }
}

impl<S: CommitLoader + TreeDiffer> FusedIterator for RevListIntoIter<'_, S> {}
