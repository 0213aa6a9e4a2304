//! Side-channel storage for auxiliary tables attached to a host file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::NamesResult;

/// Tag under which the custom name overlay is stored.
pub const CUSTOM_NAMES_TAG: &str = "ENTITY_NAMES";

/// Reads and writes tagged tables associated with a host file path
pub trait AuxiliaryStore {
    /// `Ok(None)` when no table with this tag exists for `path`.
    fn read_table(&self, path: &Path, tag: &str) -> NamesResult<Option<Vec<u8>>>;

    fn write_table(&self, path: &Path, tag: &str, bytes: &[u8]) -> NamesResult<()>;
}

/// Stores each tagged table in a sidecar file `<path>.<tag>`.
#[derive(Debug, Clone, Default)]
pub struct SidecarStore;

impl SidecarStore {
    pub fn new() -> Self {
        SidecarStore
    }

    pub fn sidecar_path(path: &Path, tag: &str) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(tag);
        PathBuf::from(name)
    }
}

impl AuxiliaryStore for SidecarStore {
    fn read_table(&self, path: &Path, tag: &str) -> NamesResult<Option<Vec<u8>>> {
        let sidecar = Self::sidecar_path(path, tag);
        match fs::read(&sidecar) {
            Ok(bytes) => {
                debug!(path = %sidecar.display(), len = bytes.len(), "Read auxiliary table");
                Ok(Some(bytes))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_table(&self, path: &Path, tag: &str, bytes: &[u8]) -> NamesResult<()> {
        let sidecar = Self::sidecar_path(path, tag);
        fs::write(&sidecar, bytes)?;
        debug!(path = %sidecar.display(), len = bytes.len(), "Wrote auxiliary table");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_path() {
        assert_eq!(
            SidecarStore::sidecar_path(Path::new("levels/bsp_torrens/commands.pak"), CUSTOM_NAMES_TAG),
            PathBuf::from("levels/bsp_torrens/commands.pak.ENTITY_NAMES")
        );
    }

    #[test]
    fn test_read_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SidecarStore::new();
        let result = store.read_table(&dir.path().join("commands.pak"), CUSTOM_NAMES_TAG).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let host_file = dir.path().join("commands.pak");
        let store = SidecarStore::new();

        store.write_table(&host_file, CUSTOM_NAMES_TAG, &[1, 2, 3]).unwrap();
        assert_eq!(store.read_table(&host_file, CUSTOM_NAMES_TAG).unwrap(), Some(vec![1, 2, 3]));
        assert!(store.read_table(&host_file, "OTHER").unwrap().is_none());
    }
}
