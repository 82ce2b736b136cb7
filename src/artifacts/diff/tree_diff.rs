use crate::areas::object_store::ObjectStore;
use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::log::path_filter::PathFilter;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RevWalkResult;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum TreeChangeType {
    Added(DatabaseEntry),
    Deleted(DatabaseEntry),
    Modified {
        old: DatabaseEntry,
        new: DatabaseEntry,
    },
}

impl TreeChangeType {
    pub fn from_entries(old: Option<DatabaseEntry>, new: Option<DatabaseEntry>) -> Option<Self> {
        match (old, new) {
            (None, Some(new)) => Some(TreeChangeType::Added(new)),
            (Some(old), None) => Some(TreeChangeType::Deleted(old)),
            (Some(old), Some(new)) if old != new => Some(TreeChangeType::Modified { old, new }),
            _ => None, // No change or both are None
        }
    }
}

pub type ChangeSet = BTreeMap<PathBuf, TreeChangeType>;
pub type TreeEntryMap = BTreeMap<String, DatabaseEntry>;

/// Changed file paths between two trees, restricted by a [`PathFilter`]
///
/// Subtrees whose ids agree are never opened, nor are directories the filter
/// rules out.
#[derive(Debug)]
pub struct TreeDiff<'s, S: ObjectStore + ?Sized> {
    store: &'s S,
    change_set: ChangeSet,
    stop_at_first: bool,
}

impl<'s, S: ObjectStore + ?Sized> TreeDiff<'s, S> {
    pub fn new(store: &'s S) -> Self {
        TreeDiff {
            store,
            change_set: BTreeMap::new(),
            stop_at_first: false,
        }
    }

    /// A diff that stops descending as soon as one change is recorded
    pub fn first_change(store: &'s S) -> Self {
        TreeDiff {
            stop_at_first: true,
            ..TreeDiff::new(store)
        }
    }

    pub fn changes(&self) -> &ChangeSet {
        &self.change_set
    }

    /// Whether `new` differs from `old` in at least one filtered path
    pub fn touches_paths(
        mut self,
        old: Option<&ObjectId>,
        new: &ObjectId,
        path_filter: &PathFilter,
    ) -> RevWalkResult<bool> {
        self.compare_oids(old, Some(new), path_filter)?;
        Ok(!self.change_set.is_empty())
    }

    /// Compare two trees (or the trees of two commits); `None` is the empty tree
    pub fn compare_oids(
        &mut self,
        old: Option<&ObjectId>,
        new: Option<&ObjectId>,
        path_filter: &PathFilter,
    ) -> RevWalkResult<()> {
        if old == new || self.is_done() {
            return Ok(());
        }

        let old_tree_entries = self.inflate_oid_to_tree_entries(old)?;
        let new_tree_entries = self.inflate_oid_to_tree_entries(new)?;

        self.detect_deletions(&old_tree_entries, &new_tree_entries, path_filter)?;
        self.detect_additions(&old_tree_entries, &new_tree_entries, path_filter)?;

        Ok(())
    }

    fn is_done(&self) -> bool {
        self.stop_at_first && !self.change_set.is_empty()
    }

    fn inflate_oid_to_tree_entries(&self, oid: Option<&ObjectId>) -> RevWalkResult<TreeEntryMap> {
        match oid {
            None => Ok(BTreeMap::new()),
            Some(oid) => Ok(self
                .store
                .parse_object_as_tree(oid)?
                .into_entries()
                .collect::<BTreeMap<_, _>>()),
        }
    }

    fn detect_deletions(
        &mut self,
        old: &TreeEntryMap,
        new: &TreeEntryMap,
        path_filter: &PathFilter,
    ) -> RevWalkResult<()> {
        for (name, entry) in path_filter.filter_matching_entries(old.iter()) {
            if self.is_done() {
                break;
            }

            let other = new.get(name);
            if let Some(other) = other
                && other == entry
            {
                continue;
            }

            let tree_a_oid = if entry.is_tree() {
                Some(&entry.oid)
            } else {
                None
            };
            let tree_b_oid = if let Some(other) = other
                && other.is_tree()
            {
                Some(&other.oid)
            } else {
                None
            };

            if tree_a_oid.is_some() || tree_b_oid.is_some() {
                self.compare_oids(tree_a_oid, tree_b_oid, &path_filter.subpath_filter(name))?;
            }

            if !path_filter.matches_name(name) {
                continue;
            }

            let blob_a = if entry.is_tree() {
                None
            } else {
                Some(entry.clone())
            };
            let blob_b = match other {
                Some(other) if !other.is_tree() => Some(other.clone()),
                _ => None,
            };

            // Determine change type based on old and new entries
            if let Some(change_type) = TreeChangeType::from_entries(blob_a, blob_b) {
                self.change_set
                    .insert(path_filter.path().join(name), change_type);
            }
        }

        Ok(())
    }

    fn detect_additions(
        &mut self,
        old: &TreeEntryMap,
        new: &TreeEntryMap,
        path_filter: &PathFilter,
    ) -> RevWalkResult<()> {
        for (name, entry) in path_filter.filter_matching_entries(new.iter()) {
            if self.is_done() {
                break;
            }

            if old.contains_key(name) {
                continue;
            }

            if entry.is_tree() {
                self.compare_oids(None, Some(&entry.oid), &path_filter.subpath_filter(name))?;
            } else if path_filter.matches_name(name) {
                // This is a newly added blob file
                self.change_set.insert(
                    path_filter.path().join(name),
                    TreeChangeType::Added(entry.clone()),
                );
            }
        }

        Ok(())
    }
}
