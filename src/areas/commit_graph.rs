use crate::areas::object_store::CommitLoader;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RevWalkResult;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Memoizing accessor over a commit loader
///
/// Every commit is decoded at most once for the lifetime of the graph; later
/// lookups hand out the same shared `Arc`. Concurrent walks may read through
/// one graph, population takes the write lock briefly.
#[derive(Debug)]
pub struct CommitGraph<S> {
    store: S,
    commits: RwLock<HashMap<ObjectId, Arc<Commit>>>,
}

impl<S: CommitLoader> CommitGraph<S> {
    pub fn new(store: S) -> Self {
        CommitGraph {
            store,
            commits: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, commit_id: &ObjectId) -> RevWalkResult<Arc<Commit>> {
        if let Some(commit) = self
            .commits
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(commit_id)
        {
            return Ok(Arc::clone(commit));
        }

        let commit = Arc::new(self.store.load_commit(commit_id)?);

        let mut commits = self
            .commits
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // another reader may have raced us here, keep the first copy
        let commit = commits.entry(commit_id.clone()).or_insert(commit);

        Ok(Arc::clone(commit))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of commits decoded so far
    pub fn len(&self) -> usize {
        self.commits
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
