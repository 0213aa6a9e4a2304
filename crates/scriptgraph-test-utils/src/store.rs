//! In-memory auxiliary table store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use scriptgraph_names::{AuxiliaryStore, NamesError, NamesResult};

/// Keeps tagged tables in a map and counts every access.
#[derive(Debug, Default)]
pub struct InMemoryAuxStore {
    tables: RefCell<HashMap<(PathBuf, String), Vec<u8>>>,
    reads: Cell<usize>,
    writes: Cell<usize>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl InMemoryAuxStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_table(&self, path: impl Into<PathBuf>, tag: &str, bytes: Vec<u8>) {
        self.tables.borrow_mut().insert((path.into(), tag.to_string()), bytes);
    }

    pub fn table(&self, path: impl AsRef<Path>, tag: &str) -> Option<Vec<u8>> {
        self.tables
            .borrow()
            .get(&(path.as_ref().to_path_buf(), tag.to_string()))
            .cloned()
    }

    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl AuxiliaryStore for InMemoryAuxStore {
    fn read_table(&self, path: &Path, tag: &str) -> NamesResult<Option<Vec<u8>>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_reads.get() {
            return Err(NamesError::Io(io::Error::new(io::ErrorKind::Other, "read failure injected")));
        }
        Ok(self.table(path, tag))
    }

    fn write_table(&self, path: &Path, tag: &str, bytes: &[u8]) -> NamesResult<()> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes.get() {
            return Err(NamesError::Io(io::Error::new(io::ErrorKind::Other, "write failure injected")));
        }
        self.insert_table(path, tag, bytes.to_vec());
        Ok(())
    }
}
