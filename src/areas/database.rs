use crate::areas::object_store::ObjectStore;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RevWalkError, RevWalkResult};
use anyhow::Context;
use bytes::Bytes;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Loose object directory of a repository, usually `.git/objects`
///
/// Read-only: objects are located by id, inflated and handed back with their
/// header. Packfiles are not read, so a repository that has been repacked (for
/// instance by `git gc`) only answers for objects written since. A missing id
/// in a repository holding packfiles fails with
/// [`RevWalkError::PackedObjectsUnsupported`] rather than `ObjectNotFound`.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    /// Open the object directory of the repository whose git dir is `git_path`
    pub fn open(git_path: impl AsRef<Path>) -> Self {
        Database::new(git_path.as_ref().join("objects").into_boxed_path())
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> RevWalkResult<Bytes> {
        let object_content = match std::fs::read(&object_path) {
            Ok(object_content) => object_content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(if self.has_packfiles() {
                    RevWalkError::PackedObjectsUnsupported(object_id.clone())
                } else {
                    RevWalkError::ObjectNotFound(object_id.clone())
                });
            }
            Err(err) => return Err(err.into()),
        };

        Self::decompress(object_content.into())
            .map_err(|err| RevWalkError::invalid_object(object_id, err))
    }

    fn has_packfiles(&self) -> bool {
        std::fs::read_dir(self.path.join("pack")).is_ok_and(|entries| {
            entries
                .flatten()
                .any(|entry| entry.path().extension().is_some_and(|ext| ext == "pack"))
        })
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }
}

impl ObjectStore for Database {
    fn load(&self, object_id: &ObjectId) -> RevWalkResult<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        self.read_object(object_id, object_path)
    }
}
