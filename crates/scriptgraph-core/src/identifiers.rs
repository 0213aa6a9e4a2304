//! Short identifiers used for entities, composites and kinds.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha1::{Digest, Sha1};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A four byte identifier. Compared and hashed by value.
///
/// The canonical string form is the raw bytes as upper-case hex pairs joined
/// by dashes, e.g. `01-AB-00-FF`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ShortId([u8; 4]);

impl ShortId {
    /// The all-zero id.
    pub const INVALID: ShortId = ShortId([0; 4]);

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        ShortId(bytes)
    }

    /// Derive an id from a name: the first four bytes of its SHA-1 digest.
    pub fn from_name(name: &str) -> Self {
        let digest = Sha1::digest(name.as_bytes());
        ShortId([digest[0], digest[1], digest[2], digest[3]])
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    pub fn is_invalid(&self) -> bool {
        *self == Self::INVALID
    }

    /// Canonical rendering of the raw bytes.
    pub fn to_byte_string(&self) -> String {
        self.0
            .iter()
            .map(|b| hex::encode_upper([*b]))
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_byte_string())
    }
}

impl fmt::Debug for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShortId({})", self.to_byte_string())
    }
}

impl From<[u8; 4]> for ShortId {
    fn from(bytes: [u8; 4]) -> Self {
        ShortId(bytes)
    }
}

impl FromStr for ShortId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 4 {
            return Err(CoreError::InvalidShortId(s.to_string()));
        }

        let mut bytes = [0u8; 4];
        for (slot, part) in bytes.iter_mut().zip(parts) {
            let decoded = hex::decode(part).map_err(|_| CoreError::InvalidShortId(s.to_string()))?;
            match decoded.as_slice() {
                [b] => *slot = *b,
                _ => return Err(CoreError::InvalidShortId(s.to_string())),
            }
        }
        Ok(ShortId(bytes))
    }
}

// Serialized as the canonical string so ids can key JSON/YAML maps.
impl Serialize for ShortId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_byte_string())
    }
}

impl<'de> Deserialize<'de> for ShortId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
