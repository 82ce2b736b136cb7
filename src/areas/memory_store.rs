use crate::areas::object_store::ObjectStore;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RevWalkError, RevWalkResult};
use bytes::Bytes;
use std::collections::HashMap;

/// Object store kept entirely in memory
///
/// Holds the same encodings a loose object directory would, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    objects: HashMap<ObjectId, Bytes>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Encode `object` and keep it under its id
    pub fn insert(&mut self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        self.objects
            .entry(object_id.clone())
            .or_insert(object.serialize()?);

        Ok(object_id)
    }

    pub fn remove(&mut self, object_id: &ObjectId) -> Option<Bytes> {
        self.objects.remove(object_id)
    }
}

impl ObjectStore for MemoryStore {
    fn load(&self, object_id: &ObjectId) -> RevWalkResult<Bytes> {
        self.objects
            .get(object_id)
            .cloned()
            .ok_or_else(|| RevWalkError::ObjectNotFound(object_id.clone()))
    }
}
