use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// Priority queue entry of a commit waiting to be expanded
///
/// Ordered by commit time, then by id, so a max-heap pops the newest commit
/// first and breaks timestamp ties towards the larger id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct FrontierEntry {
    pub timestamp: i64,
    pub oid: ObjectId,
}
