//! Errors surfaced by commit loading, tree diffing and revision walking
//!
//! Object parsing internally works with `anyhow`; everything that crosses the
//! store boundary is converted into [`RevWalkError`] so callers can tell a
//! missing object apart from a corrupt one.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;

#[derive(Debug, thiserror::Error)]
pub enum RevWalkError {
    /// A referenced commit or tree id cannot be loaded
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// Not a loose object, and the repository keeps objects in packfiles this
    /// crate does not read
    #[error("object {0} is not a loose object; packed objects are not supported")]
    PackedObjectsUnsupported(ObjectId),

    /// `into_iter` was called without any start revision
    #[error("no start point given for the revision walk")]
    NoStartPoint,

    #[error("object {oid} is not a {expected}")]
    UnexpectedObjectType { oid: ObjectId, expected: ObjectType },

    #[error("invalid object {oid}: {reason}")]
    InvalidObject { oid: ObjectId, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RevWalkError {
    pub fn invalid_object(oid: &ObjectId, source: anyhow::Error) -> Self {
        RevWalkError::InvalidObject {
            oid: oid.clone(),
            reason: format!("{source:#}"),
        }
    }
}

pub type RevWalkResult<T> = Result<T, RevWalkError>;
