use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

/// Encodes an object in the git object format, `<type> <size>\0<content>`
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

/// Decodes an object from its content, the header already consumed
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        let mut hasher = Sha1::new();
        hasher.update(&content);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}"))
    }
}

/// Prefix `content` with the object header
pub(crate) fn with_header(object_type: ObjectType, content: &[u8]) -> Bytes {
    let mut object_bytes = format!("{} {}\0", object_type.as_str(), content.len()).into_bytes();
    object_bytes.extend_from_slice(content);
    Bytes::from(object_bytes)
}
