use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use scriptgraph_core::{HostContainer, HostEvent, ShortId, SubscriptionId};
use tracing::{debug, info, warn};

use crate::config::OverlayConfig;
use crate::error::NamesResult;
use crate::store::{AuxiliaryStore, CUSTOM_NAMES_TAG};
use crate::table::NameTable;

struct HostLink {
    host: Rc<dyn HostContainer>,
    on_load: SubscriptionId,
    on_save: SubscriptionId,
}

/// Display names for entities: a read-only vanilla table with a custom
/// table layered on top.
///
/// The custom table follows the linked host container: it is reloaded when
/// the host loads and written out when the host saves. The overlay is
/// single-threaded; it is neither `Send` nor `Sync`.
pub struct NameOverlay {
    vanilla: NameTable,
    custom: Rc<RefCell<NameTable>>,
    store: Rc<dyn AuxiliaryStore>,
    tag: Rc<str>,
    link: Option<HostLink>,
}

impl NameOverlay {
    pub fn new(vanilla: NameTable, store: Rc<dyn AuxiliaryStore>) -> Self {
        Self {
            vanilla,
            custom: Rc::new(RefCell::new(NameTable::new())),
            store,
            tag: Rc::from(CUSTOM_NAMES_TAG),
            link: None,
        }
    }

    /// Use a different side-channel tag for the custom table. A linked
    /// overlay is relinked so host events use the new tag, and the custom
    /// table is reloaded under it.
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Rc::from(tag);
        if let Some(host) = self.linked_host().cloned() {
            self.link(Some(host));
        }
        self
    }

    /// Build from configuration, reading the bundled vanilla table if a path
    /// is configured.
    pub fn from_config(config: &OverlayConfig, store: Rc<dyn AuxiliaryStore>) -> NamesResult<Self> {
        let vanilla = match &config.vanilla_names_path {
            Some(path) => {
                let table = NameTable::decode(&fs::read(path)?)?;
                info!(path = %path.display(), names = table.len(), "Loaded vanilla entity names");
                table
            }
            None => NameTable::new(),
        };
        Ok(Self::new(vanilla, store).with_tag(&config.custom_table_tag))
    }

    pub fn vanilla(&self) -> &NameTable {
        &self.vanilla
    }

    /// Snapshot of the custom table.
    pub fn custom(&self) -> NameTable {
        self.custom.borrow().clone()
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Custom name, else vanilla name, else the entity id's byte string.
    pub fn get_name(&self, container_id: ShortId, entity_id: ShortId) -> String {
        if let Some(name) = self.custom.borrow().get(container_id, entity_id) {
            return name.to_string();
        }
        match self.vanilla.get(container_id, entity_id) {
            Some(name) => name.to_string(),
            None => entity_id.to_byte_string(),
        }
    }

    pub fn set_name(&mut self, container_id: ShortId, entity_id: ShortId, name: impl Into<String>) {
        self.custom.borrow_mut().insert(container_id, entity_id, name);
    }

    pub fn clear_name(&mut self, container_id: ShortId, entity_id: ShortId) {
        self.custom.borrow_mut().remove(container_id, entity_id);
    }

    pub fn is_linked(&self) -> bool {
        self.link.is_some()
    }

    pub fn linked_host(&self) -> Option<&Rc<dyn HostContainer>> {
        self.link.as_ref().map(|link| &link.host)
    }

    /// Attach to `host`, detaching from any previously linked host first.
    /// A new host triggers an immediate reload from its current file path;
    /// `None` only detaches.
    pub fn link(&mut self, host: Option<Rc<dyn HostContainer>>) {
        self.detach();

        let Some(host) = host else {
            return;
        };

        let on_load = {
            let custom = Rc::clone(&self.custom);
            let store = Rc::clone(&self.store);
            let tag = Rc::clone(&self.tag);
            host.events().subscribe(HostEvent::LoadSuccess, move |path| {
                let table = read_custom_table(store.as_ref(), path, &tag);
                match custom.try_borrow_mut() {
                    Ok(mut current) => *current = table,
                    Err(_) => warn!(path = %path.display(), "Custom entity names busy; load event ignored"),
                }
            })
        };

        let on_save = {
            let custom = Rc::clone(&self.custom);
            let store = Rc::clone(&self.store);
            let tag = Rc::clone(&self.tag);
            host.events().subscribe(HostEvent::SaveSuccess, move |path| {
                let Ok(table) = custom.try_borrow() else {
                    warn!(path = %path.display(), "Custom entity names busy; save event ignored");
                    return;
                };
                // Already logged; a save event has no caller to report to.
                let _ = write_custom_table(store.as_ref(), path, &tag, &table);
            })
        };

        let path = host.file_path();
        info!(path = %path.display(), "Linked name overlay to host container");
        self.link = Some(HostLink { host, on_load, on_save });
        self.reload_custom_table(&path);
    }

    /// Replace the custom table with the one stored for `path`. Any failure
    /// leaves an empty custom table.
    pub fn reload_custom_table(&mut self, path: &Path) {
        let table = read_custom_table(self.store.as_ref(), path, &self.tag);
        *self.custom.borrow_mut() = table;
    }

    pub fn persist_custom_table(&self, path: &Path) -> NamesResult<()> {
        write_custom_table(self.store.as_ref(), path, &self.tag, &self.custom.borrow())
    }

    fn detach(&mut self) {
        if let Some(link) = self.link.take() {
            let events = link.host.events();
            events.unsubscribe(link.on_load);
            events.unsubscribe(link.on_save);
            debug!(path = %link.host.file_path().display(), "Detached name overlay from host container");
        }
    }
}

impl Drop for NameOverlay {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for NameOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameOverlay")
            .field("vanilla_names", &self.vanilla.len())
            .field("custom_names", &self.custom.borrow().len())
            .field("tag", &self.tag)
            .field("linked", &self.is_linked())
            .finish()
    }
}

fn read_custom_table(store: &dyn AuxiliaryStore, path: &Path, tag: &str) -> NameTable {
    match store.read_table(path, tag) {
        Ok(Some(bytes)) => match NameTable::decode(&bytes) {
            Ok(table) => {
                debug!(path = %path.display(), names = table.len(), "Loaded custom entity names");
                table
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Custom entity names unreadable; starting empty");
                NameTable::new()
            }
        },
        Ok(None) => {
            debug!(path = %path.display(), "No custom entity names stored");
            NameTable::new()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Failed to read custom entity names; starting empty");
            NameTable::new()
        }
    }
}

fn write_custom_table(store: &dyn AuxiliaryStore, path: &Path, tag: &str, table: &NameTable) -> NamesResult<()> {
    let result = table.encode().and_then(|bytes| store.write_table(path, tag, &bytes));
    match &result {
        Ok(()) => debug!(path = %path.display(), names = table.len(), "Saved custom entity names"),
        Err(err) => warn!(path = %path.display(), error = %err, "Failed to save custom entity names"),
    }
    result
}
