//! Two-level map from (container id, entity id) to display name, plus its
//! binary encoding.
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! u32 container_count
//! repeat container_count:
//!     [u8; 4] container_id
//!     u32 entry_count
//!     repeat entry_count:
//!         [u8; 4] entity_id
//!         u32 name_len
//!         [u8; name_len] utf-8 name
//! ```

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{self, Cursor, Read};

use scriptgraph_core::ShortId;

use crate::error::{NamesError, NamesResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameTable {
    containers: BTreeMap<ShortId, BTreeMap<ShortId, String>>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, container_id: ShortId, entity_id: ShortId) -> Option<&str> {
        self.containers
            .get(&container_id)
            .and_then(|entries| entries.get(&entity_id))
            .map(String::as_str)
    }

    /// Insert or replace a name. Returns the previous name, if any.
    pub fn insert(&mut self, container_id: ShortId, entity_id: ShortId, name: impl Into<String>) -> Option<String> {
        self.containers
            .entry(container_id)
            .or_default()
            .insert(entity_id, name.into())
    }

    pub fn remove(&mut self, container_id: ShortId, entity_id: ShortId) -> Option<String> {
        self.containers.get_mut(&container_id)?.remove(&entity_id)
    }

    pub fn contains(&self, container_id: ShortId, entity_id: ShortId) -> bool {
        self.get(container_id, entity_id).is_some()
    }

    /// Total number of names across all containers.
    pub fn len(&self) -> usize {
        self.containers.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn container_ids(&self) -> impl Iterator<Item = ShortId> + '_ {
        self.containers.keys().copied()
    }

    pub fn entries(&self, container_id: ShortId) -> impl Iterator<Item = (ShortId, &str)> + '_ {
        self.containers
            .get(&container_id)
            .into_iter()
            .flat_map(|entries| entries.iter().map(|(id, name)| (*id, name.as_str())))
    }

    pub fn encode(&self) -> NamesResult<Vec<u8>> {
        let mut out = Vec::new();
        out.write_u32::<LittleEndian>(count(self.containers.len())?)?;
        for (container_id, entries) in &self.containers {
            out.extend_from_slice(container_id.as_bytes());
            out.write_u32::<LittleEndian>(count(entries.len())?)?;
            for (entity_id, name) in entries {
                out.extend_from_slice(entity_id.as_bytes());
                out.write_u32::<LittleEndian>(count(name.len())?)?;
                out.extend_from_slice(name.as_bytes());
            }
        }
        Ok(out)
    }

    pub fn decode(bytes: &[u8]) -> NamesResult<Self> {
        let mut reader = Cursor::new(bytes);
        let mut table = NameTable::new();

        let container_count = read_u32(&mut reader, "container count")?;
        for _ in 0..container_count {
            let container_id = read_id(&mut reader, "container id")?;
            let entry_count = read_u32(&mut reader, "entry count")?;
            let entries = table.containers.entry(container_id).or_default();
            for _ in 0..entry_count {
                let entity_id = read_id(&mut reader, "entity id")?;
                let len = read_u32(&mut reader, "name length")? as usize;
                let remaining = bytes.len().saturating_sub(reader.position() as usize);
                if len > remaining {
                    return Err(NamesError::Truncated(format!(
                        "name of {} bytes with {} remaining",
                        len, remaining
                    )));
                }
                let mut raw = vec![0u8; len];
                reader.read_exact(&mut raw)?;
                entries.insert(entity_id, String::from_utf8(raw)?);
            }
        }
        Ok(table)
    }
}

fn count(n: usize) -> NamesResult<u32> {
    u32::try_from(n).map_err(|_| {
        NamesError::Io(io::Error::new(io::ErrorKind::InvalidInput, format!("{} exceeds u32", n)))
    })
}

fn truncated(err: io::Error, what: &str) -> NamesError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        NamesError::Truncated(format!("missing {}", what))
    } else {
        NamesError::Io(err)
    }
}

fn read_u32(reader: &mut Cursor<&[u8]>, what: &str) -> NamesResult<u32> {
    reader.read_u32::<LittleEndian>().map_err(|e| truncated(e, what))
}

fn read_id(reader: &mut Cursor<&[u8]>, what: &str) -> NamesResult<ShortId> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes).map_err(|e| truncated(e, what))?;
    Ok(ShortId::from_bytes(bytes))
}
