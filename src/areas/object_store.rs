//! Read access to encoded git objects
//!
//! [`ObjectStore`] is the single seam every backend implements: hand back the
//! raw `<type> <size>\0<content>` bytes of an object. Decoding, commit loading
//! and path-restricted tree diffing are layered on top, so any store doubles
//! as the [`CommitLoader`] and [`TreeDiffer`] the history walk consumes.

use crate::artifacts::diff::tree_diff::TreeDiff;
use crate::artifacts::log::path_filter::PathFilter;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{RevWalkError, RevWalkResult};
use bytes::Bytes;
use std::io::Cursor;

pub trait ObjectStore {
    /// Load the full encoding of an object, header included
    ///
    /// Fails with [`RevWalkError::ObjectNotFound`] when the id is unknown.
    fn load(&self, object_id: &ObjectId) -> RevWalkResult<Bytes>;

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> RevWalkResult<(ObjectType, Cursor<Bytes>)> {
        let mut object_reader = Cursor::new(self.load(object_id)?);
        let object_type = ObjectType::parse_object_type(&mut object_reader)
            .map_err(|err| RevWalkError::invalid_object(object_id, err))?;

        Ok((object_type, object_reader))
    }

    fn parse_object_as_commit(&self, object_id: &ObjectId) -> RevWalkResult<Commit> {
        match self.parse_object_as_bytes(object_id)? {
            (ObjectType::Commit, object_reader) => Commit::parse(object_id.clone(), object_reader)
                .map_err(|err| RevWalkError::invalid_object(object_id, err)),
            _ => Err(RevWalkError::UnexpectedObjectType {
                oid: object_id.clone(),
                expected: ObjectType::Commit,
            }),
        }
    }

    /// Load a tree, peeling a commit id to the tree it records
    fn parse_object_as_tree(&self, object_id: &ObjectId) -> RevWalkResult<Tree> {
        match self.parse_object_as_bytes(object_id)? {
            (ObjectType::Tree, object_reader) => Tree::deserialize(object_reader)
                .map_err(|err| RevWalkError::invalid_object(object_id, err)),
            (ObjectType::Commit, object_reader) => {
                let commit = Commit::parse(object_id.clone(), object_reader)
                    .map_err(|err| RevWalkError::invalid_object(object_id, err))?;
                self.parse_object_as_tree(commit.tree_oid())
            }
            _ => Err(RevWalkError::UnexpectedObjectType {
                oid: object_id.clone(),
                expected: ObjectType::Tree,
            }),
        }
    }
}

impl<T: ObjectStore + ?Sized> ObjectStore for &T {
    fn load(&self, object_id: &ObjectId) -> RevWalkResult<Bytes> {
        (**self).load(object_id)
    }
}

/// Resolves commit ids to decoded commits
pub trait CommitLoader {
    fn load_commit(&self, commit_id: &ObjectId) -> RevWalkResult<Commit>;
}

/// Answers whether two tree snapshots differ inside a set of paths
pub trait TreeDiffer {
    /// `old_tree` is `None` for a root commit, compared against the empty tree
    fn touches_paths(
        &self,
        old_tree: Option<&ObjectId>,
        new_tree: &ObjectId,
        path_filter: &PathFilter,
    ) -> RevWalkResult<bool>;
}

impl<S: ObjectStore + ?Sized> CommitLoader for S {
    fn load_commit(&self, commit_id: &ObjectId) -> RevWalkResult<Commit> {
        self.parse_object_as_commit(commit_id)
    }
}

impl<S: ObjectStore + ?Sized> TreeDiffer for S {
    fn touches_paths(
        &self,
        old_tree: Option<&ObjectId>,
        new_tree: &ObjectId,
        path_filter: &PathFilter,
    ) -> RevWalkResult<bool> {
        TreeDiff::first_change(self).touches_paths(old_tree, new_tree, path_filter)
    }
}
