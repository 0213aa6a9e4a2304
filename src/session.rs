//! One editing session over a host container.

use anyhow::Context;
use std::rc::Rc;
use tracing::info;

use scriptgraph_catalog::{Catalog, CatalogError};
use scriptgraph_core::{Entity, HostContainer, ShortId};
use scriptgraph_names::{AuxiliaryStore, NameOverlay};
use scriptgraph_resolver::DefaultResolver;

use crate::config::ScriptgraphConfig;

/// Owns the kind catalog and the name overlay, and follows one host
/// container at a time.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    names: NameOverlay,
}

impl Session {
    /// Verify the bundled catalog and build the overlay from `config.names`.
    pub fn new(config: &ScriptgraphConfig, store: Rc<dyn AuxiliaryStore>) -> anyhow::Result<Self> {
        let catalog = Catalog::bundled();
        catalog.verify().context("Bundled kind catalog is inconsistent")?;

        let names = NameOverlay::from_config(&config.names, store).context("Failed to build name overlay")?;
        info!(kinds = scriptgraph_catalog::Kind::COUNT, "Session ready");
        Ok(Self { catalog, names })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn names(&self) -> &NameOverlay {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut NameOverlay {
        &mut self.names
    }

    pub fn host(&self) -> Option<&Rc<dyn HostContainer>> {
        self.names.linked_host()
    }

    /// Follow `host`, or nothing with `None`.
    pub fn link_host(&mut self, host: Option<Rc<dyn HostContainer>>) {
        self.names.link(host);
    }

    /// Resolver using the linked host's composites, if any.
    pub fn resolver(&self) -> DefaultResolver<'_> {
        let resolver = DefaultResolver::new(&self.catalog);
        match self.names.linked_host() {
            Some(host) => resolver.with_registry(host.composites()),
            None => resolver,
        }
    }

    pub fn apply_defaults(&self, entity: &mut Entity, include_inherited: bool) -> Result<(), CatalogError> {
        self.resolver().apply_defaults(entity, include_inherited)
    }

    pub fn display_name(&self, container_id: ShortId, entity_id: ShortId) -> String {
        self.names.get_name(container_id, entity_id)
    }
}
