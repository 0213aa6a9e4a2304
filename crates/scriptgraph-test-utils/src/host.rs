//! In-memory host container.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use scriptgraph_core::{Composite, CompositeRegistry, HostContainer, HostEvent, HostEvents};

/// Host container whose load and save are driven by the test.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    file_path: RefCell<PathBuf>,
    composites: Vec<Composite>,
    events: HostEvents,
}

impl InMemoryHost {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: RefCell::new(file_path.into()),
            composites: Vec::new(),
            events: HostEvents::new(),
        }
    }

    pub fn with_composite(mut self, composite: Composite) -> Self {
        self.composites.push(composite);
        self
    }

    pub fn set_file_path(&self, path: impl Into<PathBuf>) {
        *self.file_path.borrow_mut() = path.into();
    }

    /// Record `path` as the current file and raise a load success event.
    /// Returns the number of listeners notified.
    pub fn simulate_load(&self, path: impl AsRef<Path>) -> usize {
        self.set_file_path(path.as_ref());
        self.events.emit(HostEvent::LoadSuccess, path.as_ref())
    }

    /// Record `path` as the current file and raise a save success event.
    pub fn simulate_save(&self, path: impl AsRef<Path>) -> usize {
        self.set_file_path(path.as_ref());
        self.events.emit(HostEvent::SaveSuccess, path.as_ref())
    }

    pub fn listener_count(&self) -> usize {
        self.events.subscriber_count(HostEvent::LoadSuccess) + self.events.subscriber_count(HostEvent::SaveSuccess)
    }
}

impl HostContainer for InMemoryHost {
    fn file_path(&self) -> PathBuf {
        self.file_path.borrow().clone()
    }

    fn composites(&self) -> &dyn CompositeRegistry {
        &self.composites
    }

    fn events(&self) -> &HostEvents {
        &self.events
    }
}
